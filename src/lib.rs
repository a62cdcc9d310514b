//! # interest-engine
//!
//! Simple, compound and goal-based interest calculations.
//!
//! Given a principal, an annual rate, a time horizon, a compounding
//! frequency and optional periodic contributions, this engine computes the
//! interest earned, the contribution needed to reach a savings goal, and a
//! year-by-year comparison of simple against compound growth.
//!
//! ## Architecture
//!
//! - **core** — Input records, frequencies, results, errors, display helpers
//! - **engine** — The four calculations plus result composition
//! - **simulation** — Random scenario generation within the input limits

pub mod core;
pub mod engine;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::error::EngineError;
    pub use crate::core::frequency::Frequency;
    pub use crate::core::inputs::{
        ComparisonInput, CompoundInterestInput, GoalInput, SimpleInterestInput,
    };
    pub use crate::core::limits::InputLimits;
    pub use crate::core::results::{CalculationResult, ComparisonPoint, GoalResult};
    pub use crate::engine::comparison::ComparisonSeries;
    pub use crate::engine::{
        comparison_series, compound_interest, required_contribution, simple_interest,
    };
}
