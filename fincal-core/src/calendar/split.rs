//! Range splitting.
//!
//! Decomposes an inclusive date interval into ordered, non-overlapping
//! sub-periods of one reporting frequency, with optional clipping to the
//! requested interval and business-day adjustment.

use chrono::Days;
use fincal_types::{Frequency, PeriodPair};

use crate::calendar::bday::{self, Direction};
use crate::calendar::boundary;
use crate::error::FincalError;
use crate::types::{DateArg, FrequencyArg, format_date};

/// Splits `[date_from, date_to]` into consecutive periods of `frequency`.
///
/// Interior periods are always full calendar periods; the first and last may
/// extend past the requested interval unless `adjust_to_user_range` clips
/// them back to it. With `only_business_day` the interval endpoints are
/// first pulled onto business days (start forward, end backward), every
/// emitted period start/end is shifted the same way, and weekend days are
/// excluded outright at daily frequency. `Custom` yields the single pair of
/// (possibly adjusted) endpoints.
///
/// Output pairs are chronological, non-overlapping, and formatted as
/// `YYYY-MM-DD`.
///
/// ```
/// use fincal_core::split_into_periods;
///
/// let pairs = split_into_periods(
///     Some("2024-08-10".into()),
///     Some("2024-10-29".into()),
///     "M",
///     false,
///     false,
/// )
/// .unwrap();
/// let rendered: Vec<(&str, &str)> = pairs
///     .iter()
///     .map(|p| (p.start.as_str(), p.end.as_str()))
///     .collect();
/// assert_eq!(
///     rendered,
///     [
///         ("2024-08-01", "2024-08-31"),
///         ("2024-09-01", "2024-09-30"),
///         ("2024-10-01", "2024-10-31"),
///     ]
/// );
/// ```
///
/// # Errors
/// [`FincalError::MissingDate`] when an endpoint is absent,
/// [`FincalError::InvalidDateFormat`] / [`FincalError::InvalidFrequency`] for
/// unparsable inputs, [`FincalError::FullyWeekend`] when business-day
/// adjustment empties the range, [`FincalError::RangeOrder`] for inverted
/// endpoints, and [`FincalError::DegenerateRange`] when a single-day range is
/// requested with a period type spanning more than one day.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "fincal::calendar", skip(date_from, date_to, frequency))
)]
pub fn split_into_periods<'a>(
    date_from: Option<DateArg<'a>>,
    date_to: Option<DateArg<'a>>,
    frequency: impl Into<FrequencyArg<'a>>,
    adjust_to_user_range: bool,
    only_business_day: bool,
) -> Result<Vec<PeriodPair>, FincalError> {
    let mut from = date_from
        .ok_or(FincalError::missing_date("date_from"))?
        .resolve()?;
    let mut to = date_to
        .ok_or(FincalError::missing_date("date_to"))?
        .resolve()?;
    let freq = frequency.into().resolve()?;

    if only_business_day {
        let adjusted_from = bday::shift_to_business_day(from, Direction::Forward);
        let adjusted_to = bday::shift_to_business_day(to, Direction::Backward);
        if adjusted_from > adjusted_to {
            return Err(FincalError::FullyWeekend { from, to });
        }
        from = adjusted_from;
        to = adjusted_to;
    }
    if from > to {
        return Err(FincalError::range_order(from, to));
    }
    if from == to && !matches!(freq, Frequency::Daily | Frequency::Custom) {
        return Err(FincalError::DegenerateRange { frequency: freq });
    }
    if from == to || freq == Frequency::Custom {
        return Ok(vec![PeriodPair::new(format_date(from), format_date(to))]);
    }

    let mut pairs = Vec::new();
    let mut current = from;
    while current <= to {
        // The unadjusted ceiling drives the loop; the emitted end may be
        // clipped or shifted independently below.
        let period_end_raw = boundary::period_end(freq, current);

        // Weekend days are excluded outright at daily frequency, not shifted.
        let excluded =
            freq == Frequency::Daily && only_business_day && !bday::is_business_day(current);
        if !excluded {
            let mut start = boundary::period_start(freq, current);
            let mut end = period_end_raw;
            if adjust_to_user_range {
                start = start.max(from);
                end = end.min(to);
            }
            if only_business_day {
                start = bday::shift_to_business_day(start, Direction::Forward);
                end = bday::shift_to_business_day(end, Direction::Backward);
            }
            // A period pushed entirely outside the requested range by the
            // adjustments contributes nothing.
            if end >= from && start <= to {
                pairs.push(PeriodPair::new(format_date(start), format_date(end)));
            }
        }

        let Some(next) = period_end_raw.checked_add_days(Days::new(1)) else {
            break;
        };
        current = next;
    }
    Ok(pairs)
}
