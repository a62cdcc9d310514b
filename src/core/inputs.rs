use crate::core::frequency::Frequency;
use serde::{Deserialize, Serialize};

/// Parameters for a simple-interest calculation.
///
/// Every input record defaults to the values the calculator opens with, and
/// missing JSON fields fall back to those defaults.
///
/// # Examples
///
/// ```
/// use interest_engine::core::inputs::SimpleInterestInput;
///
/// let input = SimpleInterestInput::default().with_years(10.0);
/// assert_eq!(input.principal, 100_000.0);
/// assert_eq!(input.years, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleInterestInput {
    pub principal: f64,
    /// Annual rate in percent (6.0 means 6%).
    pub rate_percent: f64,
    pub years: f64,
}

impl SimpleInterestInput {
    pub fn new(principal: f64, rate_percent: f64, years: f64) -> Self {
        Self {
            principal,
            rate_percent,
            years,
        }
    }

    pub fn with_principal(mut self, principal: f64) -> Self {
        self.principal = principal;
        self
    }

    pub fn with_rate_percent(mut self, rate_percent: f64) -> Self {
        self.rate_percent = rate_percent;
        self
    }

    pub fn with_years(mut self, years: f64) -> Self {
        self.years = years;
        self
    }
}

impl Default for SimpleInterestInput {
    fn default() -> Self {
        Self::new(100_000.0, 6.0, 5.0)
    }
}

/// Parameters for compound interest with optional periodic contributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundInterestInput {
    pub principal: f64,
    pub rate_percent: f64,
    /// Whole years; the balance is rolled forward one year at a time.
    pub years: u32,
    pub compounding: Frequency,
    /// Amount paid in at each contribution.
    pub contribution_amount: f64,
    pub contribution_frequency: Frequency,
}

impl CompoundInterestInput {
    pub fn new(principal: f64, rate_percent: f64, years: u32, compounding: Frequency) -> Self {
        Self {
            principal,
            rate_percent,
            years,
            compounding,
            ..Default::default()
        }
    }

    pub fn with_principal(mut self, principal: f64) -> Self {
        self.principal = principal;
        self
    }

    pub fn with_rate_percent(mut self, rate_percent: f64) -> Self {
        self.rate_percent = rate_percent;
        self
    }

    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    pub fn with_compounding(mut self, compounding: Frequency) -> Self {
        self.compounding = compounding;
        self
    }

    /// Add a recurring contribution of `amount` paid `frequency` times a year.
    pub fn with_contribution(mut self, amount: f64, frequency: Frequency) -> Self {
        self.contribution_amount = amount;
        self.contribution_frequency = frequency;
        self
    }
}

impl Default for CompoundInterestInput {
    fn default() -> Self {
        Self {
            principal: 100_000.0,
            rate_percent: 6.0,
            years: 5,
            compounding: Frequency::Yearly,
            contribution_amount: 0.0,
            contribution_frequency: Frequency::Monthly,
        }
    }
}

/// Parameters for solving the contribution needed to reach a target amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalInput {
    pub target_amount: f64,
    pub initial_investment: f64,
    pub years: f64,
    pub rate_percent: f64,
    /// Contributions are compounded at the same frequency they are paid.
    pub contribution_frequency: Frequency,
}

impl GoalInput {
    pub fn new(
        target_amount: f64,
        initial_investment: f64,
        years: f64,
        rate_percent: f64,
        contribution_frequency: Frequency,
    ) -> Self {
        Self {
            target_amount,
            initial_investment,
            years,
            rate_percent,
            contribution_frequency,
        }
    }

    pub fn with_target_amount(mut self, target_amount: f64) -> Self {
        self.target_amount = target_amount;
        self
    }

    pub fn with_initial_investment(mut self, initial_investment: f64) -> Self {
        self.initial_investment = initial_investment;
        self
    }

    pub fn with_years(mut self, years: f64) -> Self {
        self.years = years;
        self
    }

    pub fn with_rate_percent(mut self, rate_percent: f64) -> Self {
        self.rate_percent = rate_percent;
        self
    }

    pub fn with_contribution_frequency(mut self, frequency: Frequency) -> Self {
        self.contribution_frequency = frequency;
        self
    }
}

impl Default for GoalInput {
    fn default() -> Self {
        Self::new(1_000_000.0, 100_000.0, 5.0, 6.0, Frequency::Monthly)
    }
}

/// Parameters for the simple vs compound comparison projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonInput {
    pub principal: f64,
    pub rate_percent: f64,
    pub years: u32,
    /// Yearly reproduces the plain `(1 + rate)^year` projection.
    pub compounding: Frequency,
}

impl ComparisonInput {
    pub fn new(principal: f64, rate_percent: f64, years: u32) -> Self {
        Self {
            principal,
            rate_percent,
            years,
            compounding: Frequency::Yearly,
        }
    }

    pub fn with_compounding(mut self, compounding: Frequency) -> Self {
        self.compounding = compounding;
        self
    }
}

impl Default for ComparisonInput {
    fn default() -> Self {
        Self::new(100_000.0, 6.0, 10)
    }
}
