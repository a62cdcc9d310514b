//! Savings plan example.
//!
//! Projects a lump sum with monthly top-ups, then works backwards from a
//! savings goal to the contribution that reaches it.

use interest_engine::core::frequency::Frequency;
use interest_engine::core::inputs::{CompoundInterestInput, GoalInput, SimpleInterestInput};
use interest_engine::core::money::{ceil_whole, format_amount};

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  interest-engine: Savings Plan Example   ║");
    println!("╚══════════════════════════════════════════╝\n");

    // --- Scenario 1: Simple against compound ---
    println!("━━━ Scenario 1: Simple vs Compound (100,000 at 6% for 5 years) ━━━\n");

    let simple = SimpleInterestInput::default().calculate();
    let compound = match CompoundInterestInput::default().calculate() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("compound calculation failed: {}", e);
            return;
        }
    };

    println!("Simple interest:    {}", format_amount(simple.interest));
    println!("Compound interest:  {}", format_amount(compound.interest));
    println!(
        "Compounding adds:   {}",
        format_amount(compound.interest - simple.interest)
    );
    println!();

    // --- Scenario 2: Monthly contributions ---
    println!("━━━ Scenario 2: 25,000 plus 500/month at 7% (monthly) for 20 years ━━━\n");

    let plan = CompoundInterestInput::new(25_000.0, 7.0, 20, Frequency::Monthly)
        .with_contribution(500.0, Frequency::Monthly);
    let result = match plan.calculate() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("compound calculation failed: {}", e);
            return;
        }
    };

    println!("{}", result);
    for slice in result.breakdown() {
        println!("  {:<14} {:>5.1}%", slice.label, slice.share * 100.0);
    }
    println!();

    // --- Scenario 3: Goal planning ---
    println!("━━━ Scenario 3: Reaching 1,000,000 from 100,000 in 10 years at 8% ━━━\n");

    for &frequency in Frequency::goal_choices() {
        let goal = GoalInput::new(1_000_000.0, 100_000.0, 10.0, 8.0, frequency);
        match goal.calculate() {
            Ok(result) => {
                let shown = ceil_whole(result.required_contribution)
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "n/a".to_string());
                println!(
                    "  {:<13} {:>10} per payment, {:>14} in total",
                    frequency.label(),
                    shown,
                    format_amount(result.total_contributions)
                );
            }
            Err(e) => println!("  {:<13} error: {}", frequency.label(), e),
        }
    }
}
