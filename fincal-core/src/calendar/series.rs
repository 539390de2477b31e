//! Date-series helpers.
//!
//! Plain date lists the reporting layer feeds into bucket labels: every day
//! of an interval, its business-day subset, and per-month marks.

use chrono::{Datelike, Days, NaiveDate};
use fincal_types::Frequency;

use crate::calendar::bday;
use crate::calendar::boundary;
use crate::error::FincalError;
use crate::types::{DateArg, format_date};

/// Every calendar date in `[date_from, date_to]`, inclusive.
///
/// # Errors
/// [`FincalError::InvalidDateFormat`] for unparsable inputs;
/// [`FincalError::RangeOrder`] for inverted endpoints.
pub fn dates_between<'a>(
    date_from: impl Into<DateArg<'a>>,
    date_to: impl Into<DateArg<'a>>,
) -> Result<Vec<String>, FincalError> {
    let (from, to) = resolve_interval(date_from, date_to)?;
    Ok(day_walk(from, to).map(format_date).collect())
}

/// Every business day in `[date_from, date_to]`, inclusive.
///
/// # Errors
/// [`FincalError::InvalidDateFormat`] for unparsable inputs;
/// [`FincalError::RangeOrder`] for inverted endpoints.
pub fn business_days_between<'a>(
    date_from: impl Into<DateArg<'a>>,
    date_to: impl Into<DateArg<'a>>,
) -> Result<Vec<String>, FincalError> {
    let (from, to) = resolve_interval(date_from, date_to)?;
    Ok(day_walk(from, to)
        .filter(|day| bday::is_business_day(*day))
        .map(format_date)
        .collect())
}

/// Month marks in `[date_from, date_to]`: `date_from` itself when it falls
/// mid-month, then the first day of every month inside the interval.
///
/// # Errors
/// [`FincalError::InvalidDateFormat`] for unparsable inputs;
/// [`FincalError::RangeOrder`] for inverted endpoints.
pub fn month_starts_between<'a>(
    date_from: impl Into<DateArg<'a>>,
    date_to: impl Into<DateArg<'a>>,
) -> Result<Vec<String>, FincalError> {
    let (from, to) = resolve_interval(date_from, date_to)?;
    Ok(month_marks(from, to).into_iter().map(format_date).collect())
}

/// Last business day of every month touched by `[date_from, date_to]`, with
/// the final month represented by `date_to` itself.
///
/// # Errors
/// [`FincalError::InvalidDateFormat`] for unparsable inputs;
/// [`FincalError::RangeOrder`] for inverted endpoints.
pub fn month_end_business_days_between<'a>(
    date_from: impl Into<DateArg<'a>>,
    date_to: impl Into<DateArg<'a>>,
) -> Result<Vec<String>, FincalError> {
    let (from, to) = resolve_interval(date_from, date_to)?;
    let marks = month_marks(from, to)
        .into_iter()
        .map(|mark| {
            if mark.year() == to.year() && mark.month() == to.month() {
                format_date(to)
            } else {
                format_date(bday::last_business_day_of_month(mark))
            }
        })
        .collect();
    Ok(marks)
}

fn resolve_interval<'a>(
    date_from: impl Into<DateArg<'a>>,
    date_to: impl Into<DateArg<'a>>,
) -> Result<(NaiveDate, NaiveDate), FincalError> {
    let from = date_from.into().resolve()?;
    let to = date_to.into().resolve()?;
    if from > to {
        return Err(FincalError::range_order(from, to));
    }
    Ok((from, to))
}

fn day_walk(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(from), |day| day.checked_add_days(Days::new(1)))
        .take_while(move |day| *day <= to)
}

fn month_marks(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut marks = Vec::new();
    let mut cursor = from;
    if from.day() != 1 {
        marks.push(from);
        cursor = boundary::advance(
            Frequency::Monthly,
            boundary::period_start(Frequency::Monthly, from),
            1,
        );
    }
    while cursor <= to {
        marks.push(cursor);
        cursor = boundary::advance(Frequency::Monthly, cursor, 1);
    }
    marks
}
