//! Input ranges offered by the calculator controls.
//!
//! The engine never clamps on its own. Callers that take free-form input (the
//! CLI with `--clamp`) pin values into these ranges before calculating.

use crate::core::frequency::Frequency;
use crate::core::inputs::{ComparisonInput, CompoundInterestInput, GoalInput, SimpleInterestInput};
use serde::{Deserialize, Serialize};

/// An inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Pin `value` into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn clamp_years(&self, years: u32) -> u32 {
        self.clamp(years as f64) as u32
    }
}

/// Allowed ranges for every calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    pub principal: Range,
    pub rate_percent: Range,
    pub years: Range,
    pub contribution_amount: Range,
    pub goal_target: Range,
    pub goal_years: Range,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            principal: Range::new(1_000.0, 1_000_000.0),
            rate_percent: Range::new(1.0, 20.0),
            years: Range::new(1.0, 30.0),
            contribution_amount: Range::new(0.0, 100_000.0),
            goal_target: Range::new(100_000.0, 10_000_000.0),
            goal_years: Range::new(1.0, 30.0),
        }
    }
}

impl InputLimits {
    pub fn clamp_simple(&self, input: SimpleInterestInput) -> SimpleInterestInput {
        SimpleInterestInput {
            principal: self.principal.clamp(input.principal),
            rate_percent: self.rate_percent.clamp(input.rate_percent),
            years: self.years.clamp(input.years),
        }
    }

    pub fn clamp_compound(&self, input: CompoundInterestInput) -> CompoundInterestInput {
        CompoundInterestInput {
            principal: self.principal.clamp(input.principal),
            rate_percent: self.rate_percent.clamp(input.rate_percent),
            years: self.years.clamp_years(input.years),
            contribution_amount: self.contribution_amount.clamp(input.contribution_amount),
            ..input
        }
    }

    /// Clamp a goal. The initial investment is capped at the (clamped)
    /// target, and a Daily contribution frequency becomes Monthly.
    pub fn clamp_goal(&self, input: GoalInput) -> GoalInput {
        let target_amount = self.goal_target.clamp(input.target_amount);
        let contribution_frequency = if Frequency::goal_choices().contains(&input.contribution_frequency) {
            input.contribution_frequency
        } else {
            Frequency::Monthly
        };

        GoalInput {
            target_amount,
            initial_investment: Range::new(0.0, target_amount).clamp(input.initial_investment),
            years: self.goal_years.clamp(input.years),
            rate_percent: self.rate_percent.clamp(input.rate_percent),
            contribution_frequency,
        }
    }

    pub fn clamp_comparison(&self, input: ComparisonInput) -> ComparisonInput {
        ComparisonInput {
            principal: self.principal.clamp(input.principal),
            rate_percent: self.rate_percent.clamp(input.rate_percent),
            years: self.years.clamp_years(input.years),
            ..input
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_clamp() {
        let range = Range::new(1.0, 20.0);
        assert_eq!(range.clamp(0.5), 1.0);
        assert_eq!(range.clamp(6.0), 6.0);
        assert_eq!(range.clamp(25.0), 20.0);
        assert_eq!(range.clamp(f64::NAN), 1.0);
        assert!(range.contains(20.0));
        assert!(!range.contains(20.1));
    }

    #[test]
    fn test_clamp_compound() {
        let limits = InputLimits::default();
        let input = CompoundInterestInput::default()
            .with_principal(50.0)
            .with_rate_percent(45.0)
            .with_years(0)
            .with_contribution(250_000.0, Frequency::Daily);

        let clamped = limits.clamp_compound(input);
        assert_eq!(clamped.principal, 1_000.0);
        assert_eq!(clamped.rate_percent, 20.0);
        assert_eq!(clamped.years, 1);
        assert_eq!(clamped.contribution_amount, 100_000.0);
        // Frequencies are already constrained by the enum.
        assert_eq!(clamped.contribution_frequency, Frequency::Daily);
    }

    #[test]
    fn test_clamp_goal_caps_initial_at_target() {
        let limits = InputLimits::default();
        let input = GoalInput::default()
            .with_target_amount(500_000.0)
            .with_initial_investment(750_000.0)
            .with_contribution_frequency(Frequency::Daily);

        let clamped = limits.clamp_goal(input);
        assert_eq!(clamped.target_amount, 500_000.0);
        assert_eq!(clamped.initial_investment, 500_000.0);
        assert_eq!(clamped.contribution_frequency, Frequency::Monthly);
    }

    #[test]
    fn test_clamp_leaves_in_range_values_alone() {
        let limits = InputLimits::default();
        let input = SimpleInterestInput::default();
        assert_eq!(limits.clamp_simple(input), input);

        let comparison = ComparisonInput::default();
        assert_eq!(limits.clamp_comparison(comparison), comparison);
    }
}
