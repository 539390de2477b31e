use serde::{Deserialize, Serialize};

/// Which boundary of a period an operation should produce.
///
/// `Start` selects floors (the canonical first date of a period), `End`
/// selects ceilings. Business-day adjustment follows the edge: starts shift
/// forward onto the next business day, ends shift backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodEdge {
    /// The canonical first date of the period.
    Start,
    /// The canonical last date of the period.
    End,
}

/// One sub-period emitted by the range splitter.
///
/// Both dates are ISO-8601 `YYYY-MM-DD`, inclusive, with `start <= end`.
/// The pair may be clipped to the caller's interval or shifted onto business
/// days depending on the split flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPair {
    /// First date of the period.
    pub start: String,
    /// Last date of the period.
    pub end: String,
}

impl PeriodPair {
    /// Builds a pair from pre-formatted ISO dates.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}
