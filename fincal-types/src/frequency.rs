use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Reporting frequency governing period boundaries and stepping.
///
/// The set is closed: every consumer handles all seven variants with an
/// exhaustive `match`, and unknown tokens are rejected once, at the parsing
/// boundary. Two parallel token vocabularies are accepted when parsing —
/// short codes (`"D"`, `"W"`, `"M"`, `"Q"`, `"HY"`, `"Y"`, `"C"`) and long
/// words (`"daily"`, `"weekly"`, `"monthly"`, `"quarterly"`, `"half-year"`,
/// `"yearly"`, `"custom"`). Serialization always emits the short code.
///
/// ```
/// use fincal_types::Frequency;
///
/// let short: Frequency = "HY".parse().unwrap();
/// let long: Frequency = "half-year".parse().unwrap();
/// assert_eq!(short, long);
/// assert_eq!(short.to_string(), "HY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// One calendar day.
    Daily,
    /// Monday-through-Sunday calendar week.
    Weekly,
    /// Calendar month.
    Monthly,
    /// Calendar quarter; quarters start in January, April, July, and October.
    Quarterly,
    /// January–June or July–December half of a calendar year.
    HalfYearly,
    /// Calendar year.
    Yearly,
    /// Opaque span equal to the caller's own interval. Carries no canonical
    /// boundaries or step; operations pass the input endpoints through.
    Custom,
}

impl Frequency {
    /// Every variant, shortest period first, `Custom` last.
    pub const ALL: [Self; 7] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::HalfYearly,
        Self::Yearly,
        Self::Custom,
    ];

    /// Short token from the compact vocabulary.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::Daily => "D",
            Self::Weekly => "W",
            Self::Monthly => "M",
            Self::Quarterly => "Q",
            Self::HalfYearly => "HY",
            Self::Yearly => "Y",
            Self::Custom => "C",
        }
    }

    /// Long token from the verbose vocabulary.
    #[must_use]
    pub const fn as_name(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::HalfYearly => "half-year",
            Self::Yearly => "yearly",
            Self::Custom => "custom",
        }
    }

    /// Whether this frequency has canonical calendar boundaries.
    ///
    /// `Custom` is the only variant without them; callers special-case it
    /// before asking for a floor, ceiling, or step.
    #[must_use]
    pub const fn is_calendar(self) -> bool {
        !matches!(self, Self::Custom)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Error returned when a frequency token matches neither vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized frequency token: {token:?}")]
pub struct ParseFrequencyError {
    /// The rejected token, verbatim.
    pub token: String,
}

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" | "daily" => Ok(Self::Daily),
            "W" | "weekly" => Ok(Self::Weekly),
            "M" | "monthly" => Ok(Self::Monthly),
            "Q" | "quarterly" => Ok(Self::Quarterly),
            "HY" | "half-year" => Ok(Self::HalfYearly),
            "Y" | "yearly" => Ok(Self::Yearly),
            "C" | "custom" => Ok(Self::Custom),
            _ => Err(ParseFrequencyError {
                token: s.to_owned(),
            }),
        }
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
