//! Scenario generation on top of the engine.

pub mod scenarios;
