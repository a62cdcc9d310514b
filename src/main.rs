//! interest-engine CLI
//!
//! Run interest calculations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Compound interest with monthly contributions
//! interest-engine compound --principal 100000 --rate 6 --years 5 \
//!     --contribution 2000 --contribution-frequency Monthly
//!
//! # Contribution needed to reach a goal, as JSON
//! interest-engine goal --target 1000000 --initial 100000 --years 5 --format json
//!
//! # Run every scenario in a file
//! interest-engine batch --input scenarios.json
//! ```

use interest_engine::core::error::EngineError;
use interest_engine::core::frequency::Frequency;
use interest_engine::core::inputs::{
    ComparisonInput, CompoundInterestInput, GoalInput, SimpleInterestInput,
};
use interest_engine::core::limits::InputLimits;
use interest_engine::core::money::format_amount;
use interest_engine::core::results::{CalculationResult, ComparisonPoint, GoalResult};
use interest_engine::engine::breakdown::Slice;
use interest_engine::simulation::scenarios::{generate_random_inputs, ScenarioConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"interest-engine — simple, compound and goal-based interest calculations

USAGE:
    interest-engine <COMMAND> [OPTIONS]

COMMANDS:
    simple      Simple interest on a principal
    compound    Compound interest with optional periodic contributions
    goal        Contribution needed to reach a target amount
    compare     Year-by-year simple vs compound comparison
    batch       Run every scenario in a JSON file
    generate    Generate random compound scenarios (for testing)
    help        Show this message

OPTIONS (simple, compound, compare):
    --principal <AMOUNT>    Initial amount (default: 100000)
    --rate <PERCENT>        Annual rate in percent (default: 6)
    --years <N>             Time horizon in years (default: 5, compare: 10)

OPTIONS (compound, compare):
    --compounding <FREQ>    Yearly, Semi-Annually, Quarterly, Monthly, Daily

OPTIONS (compound):
    --contribution <AMOUNT>           Amount paid in each period (default: 0)
    --contribution-frequency <FREQ>   How often it is paid (default: Monthly)

OPTIONS (goal):
    --target <AMOUNT>       Target amount (default: 1000000)
    --initial <AMOUNT>      Initial investment (default: 100000)
    --years <N>             Years to reach the goal (default: 5)
    --rate <PERCENT>        Expected annual return (default: 6)
    --frequency <FREQ>      Contribution frequency (default: Monthly)

OPTIONS (all calculations):
    --format <FORMAT>       Output format: text (default) or json
    --clamp                 Pin inputs into the calculator's ranges first

OPTIONS (batch):
    --input <FILE>          JSON file with "simple", "compound", "goal", "compare" lists
    --format <FORMAT>       Output format: text (default) or json

OPTIONS (generate):
    --count <N>             Number of scenarios (default: 10)
    --seed <N>              Seed for reproducible output
    --output <FILE>         Write to file instead of stdout

Set RUST_LOG=debug to log every calculation.

EXAMPLES:
    interest-engine simple --principal 50000 --rate 7.5 --years 3
    interest-engine compound --compounding Quarterly --contribution 1000
    interest-engine goal --target 2500000 --frequency Quarterly
    interest-engine compare --years 20 --format json
    interest-engine generate --count 5 --seed 42 --output scenarios.json"#
    );
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn value_for<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    args.get(i)
        .map(String::as_str)
        .unwrap_or_else(|| fail(format!("{} requires a value", flag)))
}

/// Parse a numeric flag value. NaN and infinities are rejected.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn number_for(args: &[String], i: usize, flag: &str) -> f64 {
    let raw = value_for(args, i, flag);
    parse_finite(raw)
        .unwrap_or_else(|| fail(format!("{} expects a finite number, got '{}'", flag, raw)))
}

fn years_for(args: &[String], i: usize, flag: &str) -> u32 {
    let raw = value_for(args, i, flag);
    raw.parse()
        .unwrap_or_else(|_| fail(format!("{} expects a whole number of years, got '{}'", flag, raw)))
}

fn frequency_for(args: &[String], i: usize, flag: &str) -> Frequency {
    value_for(args, i, flag)
        .parse()
        .unwrap_or_else(|e| fail(format!("{}: {}", flag, e)))
}

fn check_engine<T>(result: Result<T, EngineError>) -> T {
    result.unwrap_or_else(|e| fail(e))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(format!("serializing output: {}", e)),
    }
}

/// Options every calculation command accepts.
#[derive(Default)]
struct Common {
    json: bool,
    clamp: bool,
}

impl Common {
    /// Consume a shared flag at `args[*i]`. Returns false if it is not one.
    fn accept(&mut self, args: &[String], i: &mut usize) -> bool {
        match args[*i].as_str() {
            "--format" => {
                *i += 1;
                self.json = match value_for(args, *i, "--format") {
                    "json" => true,
                    "text" => false,
                    other => fail(format!("--format requires 'text' or 'json', got '{}'", other)),
                };
                true
            }
            "--clamp" => {
                self.clamp = true;
                true
            }
            _ => false,
        }
    }
}

fn unknown_option(option: &str) -> ! {
    fail(format!("unknown option: {}", option))
}

#[derive(serde::Serialize)]
struct CalculationOutput<'a, I: serde::Serialize> {
    input: &'a I,
    result: &'a CalculationResult,
    breakdown: Vec<Slice>,
}

#[derive(serde::Serialize)]
struct GoalOutput<'a> {
    input: &'a GoalInput,
    result: &'a GoalResult,
    breakdown: Vec<Slice>,
}

fn print_breakdown(parts: &[Slice]) {
    for slice in parts {
        println!(
            "  {:<24} {:>18}  {:>5.1}%",
            slice.label,
            format_amount(slice.value),
            slice.share * 100.0
        );
    }
}

fn report_simple(input: &SimpleInterestInput, json: bool) {
    let result = input.calculate();
    if json {
        print_json(&CalculationOutput {
            input,
            result: &result,
            breakdown: result.breakdown(),
        });
    } else {
        println!(
            "=== Simple Interest: {} at {}% for {} years ===",
            format_amount(input.principal),
            input.rate_percent,
            input.years
        );
        println!("{}", result);
    }
}

fn report_compound(input: &CompoundInterestInput, json: bool) {
    let result = check_engine(input.calculate());
    if json {
        print_json(&CalculationOutput {
            input,
            result: &result,
            breakdown: result.breakdown(),
        });
    } else {
        println!(
            "=== Compound Interest: {} at {}% for {} years, compounded {} ===",
            format_amount(input.principal),
            input.rate_percent,
            input.years,
            input.compounding
        );
        if input.contribution_amount != 0.0 {
            println!(
                "Contributing {} {}",
                format_amount(input.contribution_amount),
                input.contribution_frequency
            );
        }
        println!("{}", result);
        println!("\nComposition:");
        print_breakdown(&result.breakdown());
    }
}

fn report_goal(input: &GoalInput, json: bool) {
    let result = check_engine(input.calculate());
    if json {
        print_json(&GoalOutput {
            input,
            result: &result,
            breakdown: result.breakdown(),
        });
    } else {
        println!(
            "=== Goal: {} in {} years at {}%, starting from {} ===",
            format_amount(input.target_amount),
            input.years,
            input.rate_percent,
            format_amount(input.initial_investment)
        );
        println!("{}", result);
        println!("\n{}", result.rounded_summary(input.contribution_frequency));
    }
}

fn report_comparison(input: &ComparisonInput, json: bool) {
    let points: Vec<ComparisonPoint> = input.series().collect();
    if json {
        print_json(&points);
    } else {
        println!(
            "=== Simple vs Compound: {} at {}%, compounded {} ===",
            format_amount(input.principal),
            input.rate_percent,
            input.compounding
        );
        println!(
            "{:>4} {:>16} {:>16} {:>16} {:>16}",
            "Year", "Simple", "Compound", "Conservative", "Aggressive"
        );
        for p in &points {
            println!(
                "{:>4} {:>16} {:>16} {:>16} {:>16}",
                p.year,
                format_amount(p.simple_interest),
                format_amount(p.compound_interest),
                format_amount(p.conservative),
                format_amount(p.aggressive)
            );
        }
    }
}

fn cmd_simple(args: &[String]) {
    let mut input = SimpleInterestInput::default();
    let mut common = Common::default();
    let mut i = 0;
    while i < args.len() {
        if !common.accept(args, &mut i) {
            match args[i].as_str() {
                "--principal" => {
                    i += 1;
                    input.principal = number_for(args, i, "--principal");
                }
                "--rate" => {
                    i += 1;
                    input.rate_percent = number_for(args, i, "--rate");
                }
                "--years" => {
                    i += 1;
                    input.years = number_for(args, i, "--years");
                }
                other => unknown_option(other),
            }
        }
        i += 1;
    }

    if common.clamp {
        input = InputLimits::default().clamp_simple(input);
    }
    report_simple(&input, common.json);
}

fn cmd_compound(args: &[String]) {
    let mut input = CompoundInterestInput::default();
    let mut common = Common::default();
    let mut i = 0;
    while i < args.len() {
        if !common.accept(args, &mut i) {
            match args[i].as_str() {
                "--principal" => {
                    i += 1;
                    input.principal = number_for(args, i, "--principal");
                }
                "--rate" => {
                    i += 1;
                    input.rate_percent = number_for(args, i, "--rate");
                }
                "--years" => {
                    i += 1;
                    input.years = years_for(args, i, "--years");
                }
                "--compounding" => {
                    i += 1;
                    input.compounding = frequency_for(args, i, "--compounding");
                }
                "--contribution" => {
                    i += 1;
                    input.contribution_amount = number_for(args, i, "--contribution");
                }
                "--contribution-frequency" => {
                    i += 1;
                    input.contribution_frequency =
                        frequency_for(args, i, "--contribution-frequency");
                }
                other => unknown_option(other),
            }
        }
        i += 1;
    }

    if common.clamp {
        input = InputLimits::default().clamp_compound(input);
    }
    report_compound(&input, common.json);
}

fn cmd_goal(args: &[String]) {
    let mut input = GoalInput::default();
    let mut common = Common::default();
    let mut i = 0;
    while i < args.len() {
        if !common.accept(args, &mut i) {
            match args[i].as_str() {
                "--target" => {
                    i += 1;
                    input.target_amount = number_for(args, i, "--target");
                }
                "--initial" => {
                    i += 1;
                    input.initial_investment = number_for(args, i, "--initial");
                }
                "--years" => {
                    i += 1;
                    input.years = number_for(args, i, "--years");
                }
                "--rate" => {
                    i += 1;
                    input.rate_percent = number_for(args, i, "--rate");
                }
                "--frequency" => {
                    i += 1;
                    input.contribution_frequency = frequency_for(args, i, "--frequency");
                }
                other => unknown_option(other),
            }
        }
        i += 1;
    }

    if common.clamp {
        input = InputLimits::default().clamp_goal(input);
    }
    report_goal(&input, common.json);
}

fn cmd_compare(args: &[String]) {
    let mut input = ComparisonInput::default();
    let mut common = Common::default();
    let mut i = 0;
    while i < args.len() {
        if !common.accept(args, &mut i) {
            match args[i].as_str() {
                "--principal" => {
                    i += 1;
                    input.principal = number_for(args, i, "--principal");
                }
                "--rate" => {
                    i += 1;
                    input.rate_percent = number_for(args, i, "--rate");
                }
                "--years" => {
                    i += 1;
                    input.years = years_for(args, i, "--years");
                }
                "--compounding" => {
                    i += 1;
                    input.compounding = frequency_for(args, i, "--compounding");
                }
                other => unknown_option(other),
            }
        }
        i += 1;
    }

    if common.clamp {
        input = InputLimits::default().clamp_comparison(input);
    }
    report_comparison(&input, common.json);
}

/// JSON schema for batch input. Every list is optional.
#[derive(serde::Deserialize, Default)]
#[serde(default)]
struct BatchFile {
    simple: Vec<SimpleInterestInput>,
    compound: Vec<CompoundInterestInput>,
    goal: Vec<GoalInput>,
    compare: Vec<ComparisonInput>,
}

fn load_batch(path: &str) -> BatchFile {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("reading file '{}': {}", path, e)));

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "compound": [
    {{ "principal": 100000, "rate_percent": 6, "years": 5, "compounding": "Monthly",
       "contribution_amount": 2000, "contribution_frequency": "Monthly" }}
  ],
  "goal": [ {{ "target_amount": 1000000, "initial_investment": 100000 }} ]
}}"#
        );
        process::exit(1);
    })
}

fn cmd_batch(args: &[String]) {
    let mut input_path = None;
    let mut common = Common::default();
    let mut i = 0;
    while i < args.len() {
        if !common.accept(args, &mut i) {
            match args[i].as_str() {
                "--input" => {
                    i += 1;
                    input_path = Some(value_for(args, i, "--input").to_string());
                }
                other => unknown_option(other),
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| fail("--input <FILE> is required"));
    let batch = load_batch(&path);
    let limits = InputLimits::default();
    log::info!(
        "batch '{}': {} simple, {} compound, {} goal, {} compare",
        path,
        batch.simple.len(),
        batch.compound.len(),
        batch.goal.len(),
        batch.compare.len()
    );

    if common.json {
        #[derive(serde::Serialize)]
        struct BatchOutput {
            simple: Vec<CalculationResult>,
            compound: Vec<Result<CalculationResult, String>>,
            goal: Vec<Result<GoalResult, String>>,
            compare: Vec<Vec<ComparisonPoint>>,
        }

        let output = BatchOutput {
            simple: batch
                .simple
                .iter()
                .map(|s| {
                    let s = if common.clamp { limits.clamp_simple(*s) } else { *s };
                    s.calculate()
                })
                .collect(),
            compound: batch
                .compound
                .iter()
                .map(|c| {
                    let c = if common.clamp { limits.clamp_compound(*c) } else { *c };
                    c.calculate().map_err(|e| e.to_string())
                })
                .collect(),
            goal: batch
                .goal
                .iter()
                .map(|g| {
                    let g = if common.clamp { limits.clamp_goal(*g) } else { *g };
                    g.calculate().map_err(|e| e.to_string())
                })
                .collect(),
            compare: batch
                .compare
                .iter()
                .map(|c| {
                    let c = if common.clamp { limits.clamp_comparison(*c) } else { *c };
                    c.series().collect()
                })
                .collect(),
        };
        print_json(&output);
        return;
    }

    let mut failures = 0;
    for input in &batch.simple {
        let input = if common.clamp { limits.clamp_simple(*input) } else { *input };
        report_simple(&input, false);
        println!();
    }
    for input in &batch.compound {
        let input = if common.clamp { limits.clamp_compound(*input) } else { *input };
        if let Err(e) = input.calculate() {
            eprintln!("Skipping compound scenario: {}", e);
            failures += 1;
            continue;
        }
        report_compound(&input, false);
        println!();
    }
    for input in &batch.goal {
        let input = if common.clamp { limits.clamp_goal(*input) } else { *input };
        if let Err(e) = input.calculate() {
            eprintln!("Skipping goal scenario: {}", e);
            failures += 1;
            continue;
        }
        report_goal(&input, false);
        println!();
    }
    for input in &batch.compare {
        let input = if common.clamp { limits.clamp_comparison(*input) } else { *input };
        report_comparison(&input, false);
        println!();
    }

    if failures > 0 {
        eprintln!("{} scenario(s) could not be calculated", failures);
        process::exit(1);
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = ScenarioConfig {
        count: 10,
        ..Default::default()
    };
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                config.count = value_for(args, i, "--count")
                    .parse()
                    .unwrap_or_else(|_| fail("--count requires a number"));
            }
            "--seed" => {
                i += 1;
                config.seed = Some(
                    value_for(args, i, "--seed")
                        .parse()
                        .unwrap_or_else(|_| fail("--seed requires a number")),
                );
            }
            "--output" => {
                i += 1;
                output_path = Some(value_for(args, i, "--output").to_string());
            }
            other => unknown_option(other),
        }
        i += 1;
    }

    let inputs = generate_random_inputs(&config);

    #[derive(serde::Serialize)]
    struct OutputFile<'a> {
        compound: &'a [CompoundInterestInput],
    }

    let json = serde_json::to_string_pretty(&OutputFile { compound: &inputs })
        .unwrap_or_else(|e| fail(format!("serializing scenarios: {}", e)));

    if let Some(path) = output_path {
        fs::write(&path, &json)
            .unwrap_or_else(|e| fail(format!("writing to '{}': {}", path, e)));
        eprintln!("Generated {} compound scenarios → {}", inputs.len(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "simple" => cmd_simple(rest),
        "compound" => cmd_compound(rest),
        "goal" => cmd_goal(rest),
        "compare" => cmd_compare(rest),
        "batch" => cmd_batch(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
