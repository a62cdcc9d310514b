use crate::core::frequency::Frequency;
use crate::core::money::{format_amount, format_whole_up};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a simple or compound interest calculation.
///
/// `total_amount` is always `principal + interest + total_contributions`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub principal: f64,
    /// May be negative for negative rates or principal.
    pub interest: f64,
    pub total_contributions: f64,
    pub total_amount: f64,
}

impl CalculationResult {
    pub fn new(principal: f64, interest: f64, total_contributions: f64) -> Self {
        Self {
            principal,
            interest,
            total_contributions,
            total_amount: principal + interest + total_contributions,
        }
    }

    /// Everything the saver paid in: principal plus contributions.
    pub fn total_invested(&self) -> f64 {
        self.principal + self.total_contributions
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Principal:      {}", format_amount(self.principal))?;
        if self.total_contributions != 0.0 {
            writeln!(f, "Contributions:  {}", format_amount(self.total_contributions))?;
        }
        writeln!(f, "Interest:       {}", format_amount(self.interest))?;
        write!(f, "Total Amount:   {}", format_amount(self.total_amount))
    }
}

/// Outcome of the goal solver.
///
/// A negative `required_contribution` means the initial investment alone
/// already grows past the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    /// The starting amount the goal was solved from.
    pub initial_investment: f64,
    /// Payment needed at each contribution period.
    pub required_contribution: f64,
    pub total_contributions: f64,
    pub future_value_of_principal: f64,
    pub total_interest: f64,
}

impl GoalResult {
    pub fn is_target_met_without_contributions(&self) -> bool {
        self.required_contribution <= 0.0
    }

    /// The goal figures rounded up to whole units, so that paying what is
    /// shown always reaches the target. The payment line is left out once
    /// the initial investment covers the goal on its own.
    pub fn rounded_summary(&self, frequency: Frequency) -> String {
        let mut lines = Vec::with_capacity(3);
        if !self.is_target_met_without_contributions() {
            lines.push(format!(
                "Pay {} {} to reach the goal.",
                format_whole_up(self.required_contribution),
                frequency
            ));
        }
        lines.push(format!(
            "Total contributions (rounded up):  {}",
            format_whole_up(self.total_contributions)
        ));
        lines.push(format!(
            "Expected interest (rounded up):    {}",
            format_whole_up(self.total_interest)
        ));
        lines.join("\n")
    }
}

impl fmt::Display for GoalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Required Contribution:  {}",
            format_amount(self.required_contribution)
        )?;
        writeln!(
            f,
            "Total Contributions:    {}",
            format_amount(self.total_contributions)
        )?;
        writeln!(
            f,
            "Principal Grows To:     {}",
            format_amount(self.future_value_of_principal)
        )?;
        write!(f, "Expected Interest:      {}", format_amount(self.total_interest))?;
        if self.is_target_met_without_contributions() {
            write!(f, "\nNo further contribution needed.")?;
        }
        Ok(())
    }
}

/// One year of the simple vs compound comparison.
///
/// All four series are interest earned (not balances), so year 0 is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub year: u32,
    pub simple_interest: f64,
    pub compound_interest: f64,
    /// Compound interest at a fixed 6%.
    pub conservative: f64,
    /// Compound interest at a fixed 15%.
    pub aggressive: f64,
}
