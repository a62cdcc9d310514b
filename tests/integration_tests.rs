use approx::{assert_abs_diff_eq, assert_relative_eq};
use interest_engine::core::error::EngineError;
use interest_engine::core::frequency::Frequency;
use interest_engine::core::inputs::{
    ComparisonInput, CompoundInterestInput, GoalInput, SimpleInterestInput,
};
use interest_engine::core::limits::InputLimits;
use interest_engine::core::money::{ceil_whole, round_currency};
use interest_engine::engine::{
    comparison_series, compound_interest, required_contribution, simple_interest,
};
use rust_decimal_macros::dec;

/// Full pipeline: every calculation with the calculator's opening values.
#[test]
fn calculator_defaults_end_to_end() {
    let simple = SimpleInterestInput::default().calculate();
    assert_relative_eq!(simple.interest, 30_000.0, max_relative = 1e-12);

    let compound = CompoundInterestInput::default().calculate().unwrap();
    assert_eq!(round_currency(compound.interest), Some(dec!(33822.56)));
    assert_eq!(compound.total_contributions, 0.0);
    assert_eq!(round_currency(compound.total_amount), Some(dec!(133822.56)));

    // Compounding beats simple interest over the same horizon.
    assert!(compound.interest > simple.interest);

    let goal = GoalInput::default().calculate().unwrap();
    assert!(goal.required_contribution > 0.0);
    assert_relative_eq!(
        100_000.0 + goal.total_contributions + goal.total_interest,
        1_000_000.0,
        max_relative = 1e-12
    );

    let series: Vec<_> = ComparisonInput::default().series().collect();
    assert_eq!(series.len(), 11);
    assert_eq!(series[0].year, 0);
    assert_eq!(series[10].year, 10);
}

/// The goal payment fed back into the year-by-year simulation lands near the
/// target but, by construction, not on it.
#[test]
fn goal_contribution_round_trips_approximately() {
    let goal = required_contribution(1_000_000.0, 100_000.0, 5.0, 6.0, 12).unwrap();
    assert!(goal.required_contribution > 0.0);

    // Yearly compounding, as the compound calculator opens with.
    let interest = compound_interest(
        100_000.0,
        6.0,
        5,
        1,
        goal.required_contribution,
        12,
    )
    .unwrap();
    let simulated_total = 100_000.0 + interest + goal.required_contribution * 60.0;

    // Within one percent of the target...
    assert_relative_eq!(simulated_total, 1_000_000.0, max_relative = 0.01);
    // ...and the two models genuinely differ.
    assert!((simulated_total - 1_000_000.0).abs() > 1.0);

    // When compounding matches the contribution frequency the simulation
    // reduces to the same ordinary annuity.
    let interest = compound_interest(100_000.0, 6.0, 5, 12, goal.required_contribution, 12).unwrap();
    let simulated_total = 100_000.0 + interest + goal.required_contribution * 60.0;
    assert_relative_eq!(simulated_total, 1_000_000.0, max_relative = 1e-9);
}

#[test]
fn compound_with_contributions_exceeds_contributions_alone() {
    let input = CompoundInterestInput::new(50_000.0, 8.0, 10, Frequency::Quarterly)
        .with_contribution(1_000.0, Frequency::Monthly);
    let result = input.calculate().unwrap();

    assert_eq!(result.total_contributions, 120_000.0);
    assert!(result.interest > 0.0);
    assert_relative_eq!(
        result.total_amount,
        50_000.0 + result.interest + 120_000.0,
        max_relative = 1e-12
    );
}

#[test]
fn comparison_reference_scenarios_use_fixed_rates() {
    let series = comparison_series(100_000.0, 6.0, 5);
    let first = series.first().unwrap();
    assert_eq!(
        (first.simple_interest, first.compound_interest, first.conservative, first.aggressive),
        (0.0, 0.0, 0.0, 0.0)
    );

    let last = series.last().unwrap();
    assert_abs_diff_eq!(last.conservative, 33_822.56, epsilon = 0.01);
    // User rate equals the conservative rate here.
    assert_eq!(last.compound_interest, last.conservative);
    assert_relative_eq!(
        last.aggressive,
        100_000.0 * (1.15_f64.powf(5.0) - 1.0),
        max_relative = 1e-12
    );
}

#[test]
fn errors_are_reported_not_hidden() {
    let err = compound_interest(1_000.0, 5.0, 3, 12, 100.0, 0).unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument { .. }));

    let zero_rate = GoalInput::default().with_rate_percent(0.0);
    let err = zero_rate.calculate().unwrap_err();
    assert!(matches!(err, EngineError::DivisionByZero { .. }));
    assert!(err.to_string().contains("division by zero"));
}

#[test]
fn clamping_then_calculating() {
    let limits = InputLimits::default();
    let input = limits.clamp_goal(
        GoalInput::default()
            .with_rate_percent(0.0)
            .with_years(0.0)
            .with_target_amount(50.0),
    );

    // Clamped into range, the zero-rate goal becomes solvable.
    assert_eq!(input.rate_percent, 1.0);
    assert_eq!(input.years, 1.0);
    assert_eq!(input.target_amount, 100_000.0);
    assert_eq!(input.initial_investment, 100_000.0);
    let result = input.calculate().unwrap();
    assert!(result.is_target_met_without_contributions());
}

#[test]
fn goal_amounts_display_rounded_up() {
    let goal = GoalInput::default().calculate().unwrap();
    let shown = ceil_whole(goal.required_contribution).unwrap();
    assert!(shown >= round_currency(goal.required_contribution).unwrap());
    assert_eq!(shown.fract(), dec!(0));
}

#[test]
fn simple_interest_is_linear_in_years() {
    let one = simple_interest(20_000.0, 4.0, 1.0);
    let ten = simple_interest(20_000.0, 4.0, 10.0);
    assert_relative_eq!(ten, one * 10.0, max_relative = 1e-12);
}

/// Inputs and results serialize for the JSON front end.
#[test]
fn results_serialize_to_json() {
    let input = CompoundInterestInput::default().with_contribution(500.0, Frequency::Quarterly);
    let json = serde_json::to_string(&input).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["compounding"], "Yearly");
    assert_eq!(value["contribution_frequency"], "Quarterly");

    let result = input.calculate().unwrap();
    let value = serde_json::to_value(result).unwrap();
    assert!(value.get("interest").is_some());
    assert!(value.get("total_amount").is_some());

    let goal = GoalInput::default().calculate().unwrap();
    let value = serde_json::to_value(goal).unwrap();
    assert!(value.get("required_contribution").is_some());
    assert!(value.get("future_value_of_principal").is_some());
}

/// A goal result carries its initial investment, so its composition needs
/// nothing but the result.
#[test]
fn goal_breakdown_adds_up_to_target() {
    let goal = GoalInput::default().calculate().unwrap();
    assert_eq!(goal.initial_investment, 100_000.0);

    let parts = goal.breakdown();
    assert_eq!(parts[0].label, "Initial Investment");
    assert_eq!(parts[0].value, 100_000.0);
    let total: f64 = parts.iter().map(|s| s.value).sum();
    assert_relative_eq!(total, 1_000_000.0, max_relative = 1e-12);
}
