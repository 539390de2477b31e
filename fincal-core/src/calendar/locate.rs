//! Period boundary location.
//!
//! One reference date, a frequency, and a signed period shift resolve to a
//! single boundary date, optionally adjusted onto a business day.

use chrono::NaiveDate;
use fincal_types::{Frequency, PeriodEdge};

use crate::calendar::bday;
use crate::calendar::boundary;
use crate::error::FincalError;
use crate::types::{DateArg, FrequencyArg, format_date};

/// Resolves the start or end date of a period, shifted by `shift` whole
/// periods from the one containing `reference`.
///
/// With `shift == 0` the result is the boundary of the period containing the
/// reference date. With a non-zero shift the reference is stepped `shift`
/// periods (negative steps go backward) and the boundary of the landing
/// period is returned. `Custom` returns the reference date unchanged,
/// whatever the other arguments. When `only_business_day` is set, a weekend
/// result is shifted forward for `Start` boundaries and backward for `End`
/// boundaries.
///
/// ```
/// use fincal_core::{PeriodEdge, locate_period_boundary};
///
/// let start = locate_period_boundary("2024-09-07", "M", 0, false, PeriodEdge::Start).unwrap();
/// assert_eq!(start, "2024-09-01");
///
/// // Quarter end, two quarters back, clamped onto a business day.
/// let end = locate_period_boundary("2024-09-07", "quarterly", -2, true, PeriodEdge::End).unwrap();
/// assert_eq!(end, "2024-03-29");
/// ```
///
/// # Errors
/// Returns [`FincalError::InvalidDateFormat`] for an unparsable reference
/// date and [`FincalError::InvalidFrequency`] for an unknown token. There is
/// no shift range limit.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "fincal::calendar", skip(reference, frequency))
)]
pub fn locate_period_boundary<'a>(
    reference: impl Into<DateArg<'a>>,
    frequency: impl Into<FrequencyArg<'a>>,
    shift: i32,
    only_business_day: bool,
    edge: PeriodEdge,
) -> Result<String, FincalError> {
    let date = reference.into().resolve()?;
    let freq = frequency.into().resolve()?;
    Ok(format_date(locate(date, freq, shift, only_business_day, edge)))
}

fn locate(
    date: NaiveDate,
    freq: Frequency,
    shift: i32,
    only_business_day: bool,
    edge: PeriodEdge,
) -> NaiveDate {
    if freq == Frequency::Custom {
        return date;
    }

    let mut day = if shift == 0 {
        boundary::boundary(freq, edge, date)
    } else {
        // Weekly snaps the reference to its own boundary before stepping;
        // every other frequency steps from the raw reference date. Kept
        // as-is under fixture coverage.
        let base = if freq == Frequency::Weekly {
            boundary::boundary(freq, edge, date)
        } else {
            date
        };
        boundary::boundary(freq, edge, boundary::advance(freq, base, shift))
    };

    if only_business_day && !bday::is_business_day(day) {
        day = bday::shift_to_business_day(day, bday::edge_direction(edge));
    }
    day
}
