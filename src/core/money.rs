//! Display helpers for monetary results.
//!
//! Engine results are `f64`; these convert to `Decimal` at the edge so that
//! rounding for display is exact and printed amounts never show binary noise.

use rust_decimal::prelude::*;

/// Round an amount to cents, half away from zero.
///
/// Returns `None` for NaN or infinite values.
///
/// ```
/// use interest_engine::core::money::round_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_currency(33822.557748), Some(dec!(33822.56)));
/// assert_eq!(round_currency(f64::NAN), None);
/// ```
pub fn round_currency(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Round an amount up to the next whole unit.
///
/// Goal amounts are shown this way so that paying the displayed figure is
/// always enough.
pub fn ceil_whole(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|d| d.ceil())
}

/// Format an amount rounded up to a whole unit, with comma thousands
/// separators.
///
/// ```
/// use interest_engine::core::money::format_whole_up;
///
/// assert_eq!(format_whole_up(12_399.52), "12,400");
/// assert_eq!(format_whole_up(-2_432.7), "-2,432");
/// ```
pub fn format_whole_up(value: f64) -> String {
    match ceil_whole(value) {
        Some(d) => group_thousands(&format!("{:.0}", d)),
        None => value.to_string(),
    }
}

/// Format an amount with two decimals and comma thousands separators.
///
/// Non-finite values are printed as-is.
pub fn format_amount(value: f64) -> String {
    match round_currency(value) {
        Some(d) => group_thousands(&format!("{:.2}", d)),
        None => value.to_string(),
    }
}

fn group_thousands(plain: &str) -> String {
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(2.5), Some(dec!(2.5)));
        assert_eq!(round_currency(0.125), Some(dec!(0.13)));
        assert_eq!(round_currency(-0.125), Some(dec!(-0.13)));
        assert_eq!(round_currency(f64::INFINITY), None);
    }

    #[test]
    fn test_ceil_whole() {
        assert_eq!(ceil_whole(10_884.01), Some(dec!(10885)));
        assert_eq!(ceil_whole(-12.7), Some(dec!(-12)));
        assert_eq!(ceil_whole(500.0), Some(dec!(500)));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(33_822.557_748), "33,822.56");
        assert_eq!(format_amount(1_234_567.8), "1,234,567.80");
        assert_eq!(format_amount(-45_000.0), "-45,000.00");
    }

    #[test]
    fn test_format_whole_up() {
        assert_eq!(format_whole_up(743_971.2), "743,972");
        assert_eq!(format_whole_up(1_000_000.0), "1,000,000");
        assert_eq!(format_whole_up(0.01), "1");
        assert_eq!(format_whole_up(f64::INFINITY), "inf");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_amount(f64::NAN), "NaN");
    }
}
