//! Random input generation for benchmarks, property checks and demos.
//!
//! Draws uniformly inside [`InputLimits`] so every generated scenario is one
//! the calculator controls could produce.

use crate::core::frequency::Frequency;
use crate::core::inputs::{CompoundInterestInput, GoalInput};
use crate::core::limits::{InputLimits, Range};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for generating random calculator inputs.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Number of inputs to generate.
    pub count: usize,
    /// Ranges to draw from.
    pub limits: InputLimits,
    /// Fraction of scenarios that carry a periodic contribution.
    pub contribution_ratio: f64,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            count: 100,
            limits: InputLimits::default(),
            contribution_ratio: 0.5,
            seed: None,
        }
    }
}

fn rng_for(config: &ScenarioConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn draw(rng: &mut StdRng, range: Range) -> f64 {
    if range.max <= range.min {
        return range.min;
    }
    rng.gen_range(range.min..=range.max)
}

/// Round to a step, the way the input sliders move.
fn snap(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

fn pick(rng: &mut StdRng, choices: &[Frequency]) -> Frequency {
    choices[rng.gen_range(0..choices.len())]
}

/// Generate random compound-interest inputs.
pub fn generate_random_inputs(config: &ScenarioConfig) -> Vec<CompoundInterestInput> {
    let mut rng = rng_for(config);
    let limits = &config.limits;

    (0..config.count)
        .map(|_| {
            let principal = snap(draw(&mut rng, limits.principal), 1_000.0);
            let rate_percent = snap(draw(&mut rng, limits.rate_percent), 0.1);
            let years = draw(&mut rng, limits.years).round() as u32;
            let compounding = pick(&mut rng, &Frequency::ALL);

            let input = CompoundInterestInput::new(principal, rate_percent, years, compounding);
            if rng.gen_bool(config.contribution_ratio.clamp(0.0, 1.0)) {
                let amount = snap(draw(&mut rng, limits.contribution_amount), 1_000.0);
                input.with_contribution(amount, pick(&mut rng, &Frequency::ALL))
            } else {
                input
            }
        })
        .collect()
}

/// Generate random goals with the initial investment below the target.
pub fn generate_random_goals(config: &ScenarioConfig) -> Vec<GoalInput> {
    let mut rng = rng_for(config);
    let limits = &config.limits;

    (0..config.count)
        .map(|_| {
            let target = snap(draw(&mut rng, limits.goal_target), 100_000.0);
            let initial = snap(draw(&mut rng, Range::new(0.0, target)), 10_000.0).min(target);
            GoalInput::new(
                target,
                initial,
                draw(&mut rng, limits.goal_years).round(),
                snap(draw(&mut rng, limits.rate_percent), 0.1),
                pick(&mut rng, Frequency::goal_choices()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_inputs_stay_in_limits() {
        let config = ScenarioConfig {
            count: 200,
            seed: Some(7),
            ..Default::default()
        };
        let limits = config.limits;

        let inputs = generate_random_inputs(&config);
        assert_eq!(inputs.len(), 200);
        for input in &inputs {
            assert!(limits.principal.contains(input.principal));
            assert!(limits.rate_percent.contains(input.rate_percent));
            assert!(limits.years.contains(input.years as f64));
            assert!(limits.contribution_amount.contains(input.contribution_amount));
            assert!(input.calculate().is_ok());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = ScenarioConfig {
            count: 20,
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(generate_random_inputs(&config), generate_random_inputs(&config));
    }

    #[test]
    fn test_generated_goals_are_solvable() {
        let config = ScenarioConfig {
            count: 50,
            seed: Some(3),
            ..Default::default()
        };
        for goal in generate_random_goals(&config) {
            assert!(goal.initial_investment <= goal.target_amount);
            assert_ne!(goal.contribution_frequency, Frequency::Daily);
            assert!(goal.calculate().is_ok());
        }
    }

    #[test]
    fn test_no_contributions_when_ratio_is_zero() {
        let config = ScenarioConfig {
            count: 30,
            contribution_ratio: 0.0,
            seed: Some(1),
            ..Default::default()
        };
        assert!(generate_random_inputs(&config)
            .iter()
            .all(|i| i.contribution_amount == 0.0));
    }
}
