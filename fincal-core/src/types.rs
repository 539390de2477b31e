//! Boundary argument types.
//!
//! Every public entry point accepts dates and frequencies either pre-parsed
//! or as text, and resolves them to the internal representation exactly once.
//! Past this boundary the engine only sees `chrono::NaiveDate` and
//! [`Frequency`]; unknown tokens and malformed dates never travel further.

use chrono::NaiveDate;

use crate::error::FincalError;

// Consolidated re-exports so downstream crates can depend on `fincal-core` only.
pub use fincal_types::{Frequency, ParseFrequencyError, PeriodEdge, PeriodPair};

/// ISO-8601 calendar-date format used for all input parsing and output
/// formatting.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date in the boundary encoding.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A date argument: an already-parsed calendar date or an ISO-8601
/// `YYYY-MM-DD` string.
///
/// ```
/// use chrono::NaiveDate;
/// use fincal_core::DateArg;
///
/// let parsed = DateArg::from(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
/// let text = DateArg::from("2024-06-15");
/// assert_eq!(parsed.resolve().unwrap(), text.resolve().unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub enum DateArg<'a> {
    /// An already-parsed calendar date.
    Date(NaiveDate),
    /// An ISO-8601 `YYYY-MM-DD` string, parsed at the boundary.
    Text(&'a str),
}

impl DateArg<'_> {
    /// Resolves the argument to a calendar date, parsing text exactly once.
    ///
    /// # Errors
    /// Returns [`FincalError::InvalidDateFormat`] when the text form is not a
    /// valid `YYYY-MM-DD` date.
    pub fn resolve(self) -> Result<NaiveDate, FincalError> {
        match self {
            Self::Date(date) => Ok(date),
            Self::Text(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map_err(|_| FincalError::invalid_date(text)),
        }
    }
}

impl From<NaiveDate> for DateArg<'_> {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl<'a> From<&'a str> for DateArg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for DateArg<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

/// A frequency argument: an already-parsed [`Frequency`] or a token from
/// either vocabulary (short code or long word).
#[derive(Debug, Clone, Copy)]
pub enum FrequencyArg<'a> {
    /// An already-parsed frequency.
    Parsed(Frequency),
    /// A token from either vocabulary, parsed at the boundary.
    Token(&'a str),
}

impl FrequencyArg<'_> {
    /// Resolves the argument to a frequency.
    ///
    /// # Errors
    /// Returns [`FincalError::InvalidFrequency`] when the token form matches
    /// neither vocabulary.
    pub fn resolve(self) -> Result<Frequency, FincalError> {
        match self {
            Self::Parsed(frequency) => Ok(frequency),
            Self::Token(token) => token.parse::<Frequency>().map_err(FincalError::from),
        }
    }
}

impl From<Frequency> for FrequencyArg<'_> {
    fn from(frequency: Frequency) -> Self {
        Self::Parsed(frequency)
    }
}

impl<'a> From<&'a str> for FrequencyArg<'a> {
    fn from(token: &'a str) -> Self {
        Self::Token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_dates_resolve_once_at_the_boundary() {
        let date = DateArg::from("2024-02-29").resolve().unwrap();
        assert_eq!(format_date(date), "2024-02-29");
        assert!(DateArg::from("2023-02-29").resolve().is_err());
        assert!(DateArg::from("13-01-2024").resolve().is_err());
        assert!(DateArg::from("2024-01-02T00:00:00").resolve().is_err());
    }

    #[test]
    fn frequency_tokens_resolve_from_both_vocabularies() {
        assert_eq!(
            FrequencyArg::from("HY").resolve().unwrap(),
            Frequency::HalfYearly
        );
        assert_eq!(
            FrequencyArg::from("half-year").resolve().unwrap(),
            Frequency::HalfYearly
        );
        assert!(matches!(
            FrequencyArg::from("Z").resolve(),
            Err(FincalError::InvalidFrequency { .. })
        ));
    }
}
