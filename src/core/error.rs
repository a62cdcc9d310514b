use thiserror::Error;

/// Errors returned by the calculation engine.
///
/// Only two inputs are ever rejected: a frequency of zero, and a goal whose
/// growth factor is exactly one. Everything else (negative principal, zero
/// years, negative rates) produces a well-defined number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid argument: {name} must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: u32 },

    #[error("division by zero: growth factor is {growth_factor} over {periods} periods at rate {rate_per_period}")]
    DivisionByZero {
        growth_factor: f64,
        periods: f64,
        rate_per_period: f64,
    },
}

impl EngineError {
    /// Reject a zero frequency parameter.
    pub(crate) fn require_positive(name: &'static str, value: u32) -> Result<u32, EngineError> {
        if value == 0 {
            log::warn!("rejecting {} = 0", name);
            return Err(EngineError::InvalidArgument { name, value });
        }
        Ok(value)
    }
}
