use crate::core::error::EngineError;
use crate::core::inputs::CompoundInterestInput;
use crate::core::results::CalculationResult;

/// Compound interest earned with optional periodic contributions.
///
/// Returns interest only: the final balance minus the principal and minus
/// every contribution paid in.
///
/// # Algorithm
///
/// The balance is rolled forward one whole year at a time:
///
/// 1. Grow the running balance by `(1 + r/n)^n`.
/// 2. Add each of the year's `f` contributions, evenly spaced. Payment `p`
///    (0-indexed) earns interest only for the rest of that year,
///    `n × (f − 1 − p) / f` periods, which may be fractional.
///
/// From the following year on a contribution is part of the balance and
/// grows with it. This is a modeling choice, not an annuity formula, and it
/// does not agree exactly with the goal solver.
/// With `contribution_amount = 0` the result is exactly
/// `P × (1 + r/n)^(n×t) − P`.
///
/// # Errors
///
/// [`EngineError::InvalidArgument`] if either frequency is zero.
///
/// # Examples
///
/// ```
/// use interest_engine::engine::compound::compound_interest;
///
/// let interest = compound_interest(100_000.0, 6.0, 5, 1, 0.0, 12).unwrap();
/// assert!((interest - 33_822.56).abs() < 0.01);
/// ```
pub fn compound_interest(
    principal: f64,
    rate_percent: f64,
    years: u32,
    compounds_per_year: u32,
    contribution_amount: f64,
    contributions_per_year: u32,
) -> Result<f64, EngineError> {
    let amount = final_balance(
        principal,
        rate_percent,
        years,
        compounds_per_year,
        contribution_amount,
        contributions_per_year,
    )?;
    let total_contributions = total_contributions(contribution_amount, contributions_per_year, years);
    Ok(amount - principal - total_contributions)
}

/// Balance after `years` of compounding and contributions.
fn final_balance(
    principal: f64,
    rate_percent: f64,
    years: u32,
    compounds_per_year: u32,
    contribution_amount: f64,
    contributions_per_year: u32,
) -> Result<f64, EngineError> {
    let n = EngineError::require_positive("compounds_per_year", compounds_per_year)? as f64;
    let f = EngineError::require_positive("contributions_per_year", contributions_per_year)?;

    let growth = 1.0 + (rate_percent / 100.0) / n;
    let yearly_growth = growth.powf(n);

    let mut amount = principal;
    for _ in 0..years {
        amount *= yearly_growth;
        for payment in 0..f {
            let periods_remaining = n * ((f - 1 - payment) as f64 / f as f64);
            amount += contribution_amount * growth.powf(periods_remaining);
        }
    }
    Ok(amount)
}

fn total_contributions(contribution_amount: f64, contributions_per_year: u32, years: u32) -> f64 {
    contribution_amount * contributions_per_year as f64 * years as f64
}

impl CompoundInterestInput {
    pub fn calculate(&self) -> Result<CalculationResult, EngineError> {
        let contributions_per_year = self.contribution_frequency.periods_per_year();
        let interest = compound_interest(
            self.principal,
            self.rate_percent,
            self.years,
            self.compounding.periods_per_year(),
            self.contribution_amount,
            contributions_per_year,
        )?;
        log::debug!(
            "compound interest: principal={} rate={}% years={} compounding={} contribution={} x {} -> {}",
            self.principal,
            self.rate_percent,
            self.years,
            self.compounding,
            self.contribution_amount,
            self.contribution_frequency,
            interest
        );
        Ok(CalculationResult::new(
            self.principal,
            interest,
            total_contributions(self.contribution_amount, contributions_per_year, self.years),
        ))
    }
}
