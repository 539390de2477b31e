//! Anchor picking.
//!
//! Decomposes an inclusive date interval into the ordered boundary dates of
//! the periods it covers, used to label report buckets.

use chrono::{Days, NaiveDate};
use fincal_types::{Frequency, PeriodEdge};

use crate::calendar::bday;
use crate::calendar::boundary;
use crate::error::FincalError;
use crate::types::{DateArg, FrequencyArg, format_date};

/// Picks the ordered, de-duplicated boundary dates of every period inside
/// `[date_from, date_to]`.
///
/// `edge` selects period starts or ends. Partial periods at the interval
/// edges surface the requested endpoint rather than an out-of-range calendar
/// boundary. `Custom` returns exactly the two endpoints, ignoring the other
/// flags. With `only_business_day`, daily anchors falling on a weekend are
/// dropped entirely while coarser anchors are shifted forward (`Start`) or
/// backward (`End`) onto a business day.
///
/// ```
/// use fincal_core::{PeriodEdge, pick_period_anchors};
///
/// let anchors =
///     pick_period_anchors("2024-01-01", "2024-12-31", "HY", false, PeriodEdge::Start).unwrap();
/// assert_eq!(anchors, ["2024-01-01", "2024-07-01"]);
/// ```
///
/// # Errors
/// [`FincalError::InvalidDateFormat`] / [`FincalError::InvalidFrequency`] for
/// unparsable inputs; [`FincalError::RangeOrder`] when `date_from` is after
/// `date_to`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "fincal::calendar", skip(date_from, date_to, frequency))
)]
pub fn pick_period_anchors<'a>(
    date_from: impl Into<DateArg<'a>>,
    date_to: impl Into<DateArg<'a>>,
    frequency: impl Into<FrequencyArg<'a>>,
    only_business_day: bool,
    edge: PeriodEdge,
) -> Result<Vec<String>, FincalError> {
    let from = date_from.into().resolve()?;
    let to = date_to.into().resolve()?;
    let freq = frequency.into().resolve()?;

    if freq == Frequency::Custom {
        // Opaque pass-through of the caller's own endpoints.
        return Ok(vec![format_date(from), format_date(to)]);
    }
    if from > to {
        return Err(FincalError::range_order(from, to));
    }

    let candidates = match freq {
        Frequency::Daily => stepped_grid(from, to, 1),
        Frequency::Weekly => {
            // Weekly anchors come from the 7-day grid anchored at the
            // interval start, not from the canonical Monday grid.
            let mut grid = stepped_grid(from, to, 7);
            if edge == PeriodEdge::End && grid.last() != Some(&to) {
                grid.push(to);
            }
            grid
        }
        _ => {
            let mut grid = canonical_grid(freq, edge, from, to);
            if grid.is_empty() {
                return Ok(Vec::new());
            }
            // Partial edge periods surface the requested endpoint.
            match edge {
                PeriodEdge::Start if grid[0] != from => grid.insert(0, from),
                PeriodEdge::End if grid.last() != Some(&to) => grid.push(to),
                _ => {}
            }
            grid
        }
    };

    let mut anchors: Vec<String> = Vec::new();
    for candidate in candidates {
        let mut day = candidate;
        if freq == Frequency::Weekly {
            day = snap_to_week_boundary(day, from, to, edge);
        }
        if only_business_day {
            if freq == Frequency::Daily {
                if !bday::is_business_day(day) {
                    continue;
                }
            } else if !bday::is_business_day(day) {
                day = bday::shift_to_business_day(day, bday::edge_direction(edge));
            }
        }
        let text = format_date(day);
        if !anchors.contains(&text) {
            anchors.push(text);
        }
    }
    Ok(anchors)
}

/// Dates `from, from + step, …` up to and including `to`.
fn stepped_grid(from: NaiveDate, to: NaiveDate, step_days: u64) -> Vec<NaiveDate> {
    let mut grid = Vec::new();
    let mut day = from;
    while day <= to {
        grid.push(day);
        let Some(next) = day.checked_add_days(Days::new(step_days)) else {
            break;
        };
        day = next;
    }
    grid
}

/// Canonical `edge` boundaries of every period lying wholly inside the
/// interval's reach: starts/ends between `from` and `to` inclusive.
fn canonical_grid(
    freq: Frequency,
    edge: PeriodEdge,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<NaiveDate> {
    let mut grid = Vec::new();
    let mut cursor = boundary::period_start(freq, from);
    while cursor <= to {
        let end = boundary::period_end(freq, cursor);
        let anchor = match edge {
            PeriodEdge::Start => cursor,
            PeriodEdge::End => end,
        };
        if anchor > to {
            break;
        }
        if anchor >= from {
            grid.push(anchor);
        }
        let Some(next) = end.checked_add_days(Days::new(1)) else {
            break;
        };
        cursor = next;
    }
    grid
}

/// Snaps a weekly anchor candidate to its canonical week boundary, but only
/// when the snapped date stays inside `[from, to]`; otherwise the requested
/// endpoint stands in for the partial week. Candidates sitting on the
/// relevant endpoint are never moved.
fn snap_to_week_boundary(
    date: NaiveDate,
    from: NaiveDate,
    to: NaiveDate,
    edge: PeriodEdge,
) -> NaiveDate {
    match edge {
        PeriodEdge::Start => {
            if date <= from {
                return date;
            }
            let monday = boundary::week_start(date);
            if monday >= from { monday } else { from }
        }
        PeriodEdge::End => {
            if date >= to {
                return date;
            }
            let sunday = boundary::week_end(date);
            if sunday <= to { sunday } else { to }
        }
    }
}
