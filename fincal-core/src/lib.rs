//! fincal-core
//!
//! Calendar period arithmetic and range splitting for financial reporting.
//!
//! - `calendar`: period boundaries, business-day adjustment, boundary
//!   location, range splitting, anchor picking, and date-series helpers.
//! - `types`: boundary argument types (`DateArg`, `FrequencyArg`) and
//!   re-exported vocabulary from `fincal-types`.
//! - `error`: the unified [`FincalError`] taxonomy.
//!
//! Everything here is a pure function of its arguments: no I/O, no shared
//! or persisted state, no async. Inputs are ISO-8601 `YYYY-MM-DD` strings or
//! pre-parsed `chrono::NaiveDate` values, parsed exactly once at the
//! boundary; outputs are ISO date strings owned by the caller. Concurrent
//! callers need no synchronization.
//!
//! Business days are Monday through Friday; no holiday calendar or timezone
//! handling is modeled.
#![warn(missing_docs)]

/// Calendar period engine: boundaries, adjustment, and decomposition.
pub mod calendar;
mod error;
pub mod types;

pub use calendar::bday::{
    Direction, edge_direction, is_business_day, last_business_day_of_month,
    last_business_day_of_previous_month, last_business_day_of_previous_quarter,
    last_business_day_of_previous_year, previous_business_day, shift_to_business_day,
};
pub use calendar::boundary::{advance, boundary, last_day_of_month, period_end, period_start};
pub use calendar::locate::locate_period_boundary;
pub use calendar::pick::pick_period_anchors;
pub use calendar::series::{
    business_days_between, dates_between, month_end_business_days_between, month_starts_between,
};
pub use calendar::split::split_into_periods;
pub use error::FincalError;
pub use types::*;
