use crate::core::inputs::SimpleInterestInput;
use crate::core::results::CalculationResult;

/// Interest earned without compounding: `principal × rate × years`.
///
/// Accepts any finite inputs; zero or negative values give the algebraically
/// consistent (zero or negative) result.
///
/// # Examples
///
/// ```
/// use interest_engine::engine::simple::simple_interest;
///
/// let interest = simple_interest(100_000.0, 6.0, 5.0);
/// assert!((interest - 30_000.0).abs() < 1e-9);
/// ```
pub fn simple_interest(principal: f64, rate_percent: f64, years: f64) -> f64 {
    principal * (rate_percent / 100.0) * years
}

impl SimpleInterestInput {
    pub fn calculate(&self) -> CalculationResult {
        let interest = simple_interest(self.principal, self.rate_percent, self.years);
        log::debug!(
            "simple interest: principal={} rate={}% years={} -> {}",
            self.principal,
            self.rate_percent,
            self.years,
            interest
        );
        CalculationResult::new(self.principal, interest, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_interest_defaults() {
        let result = SimpleInterestInput::default().calculate();
        assert_relative_eq!(result.interest, 30_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.total_amount, 130_000.0, max_relative = 1e-12);
        assert_eq!(result.total_contributions, 0.0);
    }

    #[test]
    fn test_fractional_years() {
        assert_relative_eq!(simple_interest(1_000.0, 5.0, 0.5), 25.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_and_negative_inputs_are_accepted() {
        assert_eq!(simple_interest(0.0, 6.0, 5.0), 0.0);
        assert_eq!(simple_interest(1_000.0, 6.0, 0.0), 0.0);
        assert_relative_eq!(simple_interest(-1_000.0, 6.0, 2.0), -120.0, max_relative = 1e-12);
        assert_relative_eq!(simple_interest(1_000.0, -3.0, 2.0), -60.0, max_relative = 1e-12);
    }
}
