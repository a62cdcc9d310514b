//! The calculation engine: pure functions over the input records in
//! [`crate::core::inputs`].
//!
//! Every function is deterministic and allocation-light; callers recompute
//! from scratch whenever an input changes.

pub mod breakdown;
pub mod comparison;
pub mod compound;
pub mod goal;
pub mod simple;

pub use comparison::comparison_series;
pub use compound::compound_interest;
pub use goal::required_contribution;
pub use simple::simple_interest;
