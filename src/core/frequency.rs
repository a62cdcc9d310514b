use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How many times per year interest is compounded or a contribution is paid.
///
/// The calculator only ever offers these five choices. Engine functions take
/// the raw `periods_per_year()` count so other values can still be computed,
/// but inputs built from user-facing labels go through this enum.
///
/// # Examples
///
/// ```
/// use interest_engine::core::frequency::Frequency;
///
/// let monthly: Frequency = "Monthly".parse().unwrap();
/// assert_eq!(monthly.periods_per_year(), 12);
/// assert_eq!(Frequency::SemiAnnually.to_string(), "Semi-Annually");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    Yearly,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
}

impl Frequency {
    /// Every frequency, in ascending order of periods per year.
    pub const ALL: [Frequency; 5] = [
        Frequency::Yearly,
        Frequency::SemiAnnually,
        Frequency::Quarterly,
        Frequency::Monthly,
        Frequency::Daily,
    ];

    pub const fn periods_per_year(self) -> u32 {
        match self {
            Frequency::Yearly => 1,
            Frequency::SemiAnnually => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
            Frequency::Daily => 365,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Frequency::Yearly => "Yearly",
            Frequency::SemiAnnually => "Semi-Annually",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
            Frequency::Daily => "Daily",
        }
    }

    /// Contribution frequencies offered when planning for a goal (no Daily).
    pub fn goal_choices() -> &'static [Frequency] {
        &Self::ALL[..4]
    }

    /// Look up the frequency with exactly `periods` periods per year.
    pub fn from_periods(periods: u32) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.periods_per_year() == periods)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A frequency label that matches none of the known choices.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown frequency '{0}' (expected Yearly, Semi-Annually, Quarterly, Monthly or Daily)")]
pub struct UnknownFrequency(pub String);

impl FromStr for Frequency {
    type Err = UnknownFrequency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "yearly" | "annually" | "annual" | "1" => Ok(Frequency::Yearly),
            "semiannually" | "halfyearly" | "2" => Ok(Frequency::SemiAnnually),
            "quarterly" | "4" => Ok(Frequency::Quarterly),
            "monthly" | "12" => Ok(Frequency::Monthly),
            "daily" | "365" => Ok(Frequency::Daily),
            _ => Err(UnknownFrequency(s.to_string())),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = UnknownFrequency;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Frequency> for String {
    fn from(f: Frequency) -> Self {
        f.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        let periods: Vec<u32> = Frequency::ALL.iter().map(|f| f.periods_per_year()).collect();
        assert_eq!(periods, vec![1, 2, 4, 12, 365]);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("Yearly".parse::<Frequency>().unwrap(), Frequency::Yearly);
        assert_eq!(
            "Semi-Annually".parse::<Frequency>().unwrap(),
            Frequency::SemiAnnually
        );
        assert_eq!(
            "Half-Yearly".parse::<Frequency>().unwrap(),
            Frequency::SemiAnnually
        );
        assert_eq!("quarterly".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!(" MONTHLY ".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("365".parse::<Frequency>().unwrap(), Frequency::Daily);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Fortnightly".parse::<Frequency>().unwrap_err();
        assert_eq!(err, UnknownFrequency("Fortnightly".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for f in Frequency::ALL {
            assert_eq!(f.to_string().parse::<Frequency>().unwrap(), f);
        }
    }

    #[test]
    fn test_goal_choices_exclude_daily() {
        assert!(!Frequency::goal_choices().contains(&Frequency::Daily));
        assert_eq!(Frequency::goal_choices().len(), 4);
    }

    #[test]
    fn test_from_periods() {
        assert_eq!(Frequency::from_periods(4), Some(Frequency::Quarterly));
        assert_eq!(Frequency::from_periods(5), None);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Frequency::SemiAnnually).unwrap();
        assert_eq!(json, "\"Semi-Annually\"");
        let back: Frequency = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(back, Frequency::Monthly);
    }
}
