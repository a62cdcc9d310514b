use crate::core::error::EngineError;
use crate::core::inputs::GoalInput;
use crate::core::results::GoalResult;

/// Solve for the periodic contribution that grows to `target_amount`.
///
/// Uses the closed-form ordinary-annuity payment, compounding at the
/// contribution frequency:
///
/// ```text
/// i   = r / n
/// N   = n × t
/// g   = (1 + i)^N
/// PMT = (target − initial × g) × i / (g − 1)
/// ```
///
/// This is independent of [`compound_interest`](super::compound::compound_interest):
/// feeding the payment back into that simulation lands near the target but
/// not on it, unless the simulation also compounds at the contribution
/// frequency.
///
/// A negative contribution is returned when the initial investment alone
/// already exceeds the target.
///
/// # Errors
///
/// - [`EngineError::InvalidArgument`] if `contributions_per_year` is zero.
/// - [`EngineError::DivisionByZero`] if the growth factor is 1 (zero rate or
///   zero years).
///
/// # Examples
///
/// ```
/// use interest_engine::engine::goal::required_contribution;
///
/// let goal = required_contribution(1_000_000.0, 100_000.0, 5.0, 6.0, 12).unwrap();
/// assert!(goal.required_contribution > 0.0);
/// ```
pub fn required_contribution(
    target_amount: f64,
    initial_investment: f64,
    years: f64,
    rate_percent: f64,
    contributions_per_year: u32,
) -> Result<GoalResult, EngineError> {
    let n = EngineError::require_positive("contributions_per_year", contributions_per_year)? as f64;

    let rate_per_period = (rate_percent / 100.0) / n;
    let periods = n * years;
    let growth_factor = (1.0 + rate_per_period).powf(periods);

    if (growth_factor - 1.0).abs() <= f64::EPSILON {
        log::warn!(
            "goal cannot be solved: growth factor {} over {} periods",
            growth_factor,
            periods
        );
        return Err(EngineError::DivisionByZero {
            growth_factor,
            periods,
            rate_per_period,
        });
    }

    let future_value_of_principal = initial_investment * growth_factor;
    let remaining_to_target = target_amount - future_value_of_principal;
    let required_contribution = (remaining_to_target * rate_per_period) / (growth_factor - 1.0);
    let total_contributions = required_contribution * periods;

    Ok(GoalResult {
        initial_investment,
        required_contribution,
        total_contributions,
        future_value_of_principal,
        total_interest: target_amount - initial_investment - total_contributions,
    })
}

impl GoalInput {
    pub fn calculate(&self) -> Result<GoalResult, EngineError> {
        let result = required_contribution(
            self.target_amount,
            self.initial_investment,
            self.years,
            self.rate_percent,
            self.contribution_frequency.periods_per_year(),
        )?;
        log::debug!(
            "goal: target={} initial={} years={} rate={}% frequency={} -> contribution {}",
            self.target_amount,
            self.initial_investment,
            self.years,
            self.rate_percent,
            self.contribution_frequency,
            result.required_contribution
        );
        Ok(result)
    }
}
