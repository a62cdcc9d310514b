//! Year-by-year comparison of simple and compound growth.
//!
//! Prints the comparison table alongside the fixed conservative (6%) and
//! aggressive (15%) reference scenarios, then shows how compounding
//! frequency changes the same deposit.

use interest_engine::core::frequency::Frequency;
use interest_engine::core::inputs::{ComparisonInput, CompoundInterestInput};
use interest_engine::core::money::format_amount;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  interest-engine: Rate Comparison        ║");
    println!("╚══════════════════════════════════════════╝\n");

    let input = ComparisonInput::new(100_000.0, 9.0, 15);

    println!("━━━ 100,000 at 9% over 15 years ━━━\n");
    println!(
        "{:>4}  {:>14}  {:>14}  {:>14}  {:>14}",
        "Year", "Simple", "Compound", "Conservative", "Aggressive"
    );
    for point in input.series() {
        println!(
            "{:>4}  {:>14}  {:>14}  {:>14}  {:>14}",
            point.year,
            format_amount(point.simple_interest),
            format_amount(point.compound_interest),
            format_amount(point.conservative),
            format_amount(point.aggressive),
        );
    }
    println!();

    println!("━━━ Compounding frequency on 100,000 at 9% for 15 years ━━━\n");
    for frequency in Frequency::ALL {
        let result = CompoundInterestInput::new(100_000.0, 9.0, 15, frequency).calculate();
        match result {
            Ok(result) => println!(
                "  {:<13} {:>14}",
                frequency.label(),
                format_amount(result.interest)
            ),
            Err(e) => println!("  {:<13} error: {}", frequency.label(), e),
        }
    }
}
