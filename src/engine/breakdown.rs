//! Composition of a result into its parts, for pie-style charts.

use crate::core::results::{CalculationResult, GoalResult};
use serde::Serialize;

/// One labelled component of a result and its share of the whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    /// `value / total`, or zero when the total is zero.
    pub share: f64,
}

fn slices(parts: [(&'static str, f64); 3]) -> Vec<Slice> {
    let total: f64 = parts.iter().map(|(_, v)| v).sum();
    parts
        .into_iter()
        .map(|(label, value)| Slice {
            label,
            value,
            share: if total == 0.0 { 0.0 } else { value / total },
        })
        .collect()
}

impl CalculationResult {
    /// Principal, contributions and interest as parts of the total amount.
    pub fn breakdown(&self) -> Vec<Slice> {
        slices([
            ("Principal", self.principal),
            ("Contributions", self.total_contributions),
            ("Interest", self.interest),
        ])
    }
}

impl GoalResult {
    /// Initial investment, required contributions and expected interest as
    /// parts of the target.
    pub fn breakdown(&self) -> Vec<Slice> {
        slices([
            ("Initial Investment", self.initial_investment),
            ("Required Contributions", self.total_contributions),
            ("Expected Interest", self.total_interest),
        ])
    }
}
