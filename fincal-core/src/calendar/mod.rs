//! Calendar period engine.
//!
//! Modules include:
//! - `boundary`: canonical period floors, ceilings, and stepping per frequency
//! - `bday`: business-day predicate and adjustment
//! - `locate`: resolve one reference date plus a period shift into a boundary
//! - `split`: decompose an interval into ordered sub-period pairs
//! - `pick`: decompose an interval into ordered boundary anchor dates
//! - `series`: date-list helpers for report bucket labels
/// Business-day predicate and adjustment helpers.
pub mod bday;
/// Canonical period boundaries and stepping.
pub mod boundary;
/// Period boundary location from a reference date and shift.
pub mod locate;
/// Interval decomposition into boundary anchor dates.
pub mod pick;
/// Date-series helpers for report bucket labels.
pub mod series;
/// Interval decomposition into ordered sub-period pairs.
pub mod split;
