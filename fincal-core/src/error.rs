//! Unified error type for the fincal workspace.

use chrono::NaiveDate;
use fincal_types::{Frequency, ParseFrequencyError};
use thiserror::Error;

/// Unified error type for the fincal workspace.
///
/// Every failure is typed and returned to the immediate caller; computations
/// are deterministic, so there is no retry or local recovery path. The
/// reporting layer decides whether a given variant is user-facing validation
/// or a programming error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FincalError {
    /// Input string was not a calendar date in `YYYY-MM-DD` form.
    #[error("invalid date format: {input:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The rejected input, verbatim.
        input: String,
    },

    /// Frequency token matched neither the short-code nor the long-word
    /// vocabulary.
    #[error("invalid frequency token: {token:?}")]
    InvalidFrequency {
        /// The rejected token, verbatim.
        token: String,
    },

    /// A required interval endpoint was not supplied.
    #[error("missing required date: {which}")]
    MissingDate {
        /// Name of the absent endpoint (e.g. "date_from").
        which: &'static str,
    },

    /// The interval endpoints are inverted.
    #[error("date_from ({from}) must be on or before date_to ({to})")]
    RangeOrder {
        /// Requested interval start.
        from: NaiveDate,
        /// Requested interval end.
        to: NaiveDate,
    },

    /// A single-day interval was requested with a period type spanning more
    /// than one day.
    #[error("single-day range cannot represent a full {frequency} period")]
    DegenerateRange {
        /// The offending period type.
        frequency: Frequency,
    },

    /// Business-day adjustment left no dates inside the interval.
    #[error("range {from}..={to} contains no business days")]
    FullyWeekend {
        /// Requested interval start, before adjustment.
        from: NaiveDate,
        /// Requested interval end, before adjustment.
        to: NaiveDate,
    },
}

impl FincalError {
    /// Helper: build an `InvalidDateFormat` for a rejected input string.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            input: input.into(),
        }
    }

    /// Helper: build a `MissingDate` for the named endpoint.
    #[must_use]
    pub const fn missing_date(which: &'static str) -> Self {
        Self::MissingDate { which }
    }

    /// Helper: build a `RangeOrder` error for an inverted interval.
    #[must_use]
    pub const fn range_order(from: NaiveDate, to: NaiveDate) -> Self {
        Self::RangeOrder { from, to }
    }
}

impl From<ParseFrequencyError> for FincalError {
    fn from(err: ParseFrequencyError) -> Self {
        Self::InvalidFrequency { token: err.token }
    }
}
