use crate::core::inputs::ComparisonInput;
use crate::core::results::ComparisonPoint;

/// Fixed annual rate of the conservative reference scenario.
pub const CONSERVATIVE_RATE_PERCENT: f64 = 6.0;
/// Fixed annual rate of the aggressive reference scenario.
pub const AGGRESSIVE_RATE_PERCENT: f64 = 15.0;

/// Year-by-year interest for simple and compound growth, plus two fixed-rate
/// reference scenarios, for years `0..=years`.
///
/// # Examples
///
/// ```
/// use interest_engine::engine::comparison::comparison_series;
///
/// let series = comparison_series(100_000.0, 6.0, 5);
/// assert_eq!(series.len(), 6);
/// assert_eq!(series[0].compound_interest, 0.0);
/// ```
pub fn comparison_series(principal: f64, rate_percent: f64, years: u32) -> Vec<ComparisonPoint> {
    ComparisonSeries::new(&ComparisonInput::new(principal, rate_percent, years)).collect()
}

/// Lazy iterator over a comparison projection.
///
/// Holds no state beyond the next year to produce; call
/// [`ComparisonInput::series`] again to start over.
#[derive(Debug, Clone)]
pub struct ComparisonSeries {
    principal: f64,
    rate: f64,
    periods_per_year: f64,
    next_year: u64,
    last_year: u64,
}

impl ComparisonSeries {
    pub fn new(input: &ComparisonInput) -> Self {
        Self {
            principal: input.principal,
            rate: input.rate_percent / 100.0,
            periods_per_year: input.compounding.periods_per_year() as f64,
            next_year: 0,
            last_year: input.years as u64,
        }
    }

    fn compound(&self, rate: f64, year: u32) -> f64 {
        let n = self.periods_per_year;
        self.principal * ((1.0 + rate / n).powf(n * year as f64) - 1.0)
    }

    fn point(&self, year: u32) -> ComparisonPoint {
        ComparisonPoint {
            year,
            simple_interest: self.principal * self.rate * year as f64,
            compound_interest: self.compound(self.rate, year),
            conservative: self.compound(CONSERVATIVE_RATE_PERCENT / 100.0, year),
            aggressive: self.compound(AGGRESSIVE_RATE_PERCENT / 100.0, year),
        }
    }
}

impl Iterator for ComparisonSeries {
    type Item = ComparisonPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_year > self.last_year {
            return None;
        }
        let point = self.point(self.next_year as u32);
        self.next_year += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_year + 1).saturating_sub(self.next_year) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ComparisonSeries {}

impl std::iter::FusedIterator for ComparisonSeries {}

impl ComparisonInput {
    pub fn series(&self) -> ComparisonSeries {
        log::debug!(
            "comparison: principal={} rate={}% years={} compounding={}",
            self.principal,
            self.rate_percent,
            self.years,
            self.compounding
        );
        ComparisonSeries::new(self)
    }
}
