//! Value types shared by every calculation.

pub mod error;
pub mod frequency;
pub mod inputs;
pub mod limits;
pub mod money;
pub mod results;
