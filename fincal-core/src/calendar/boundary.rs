//! Canonical period boundaries and stepping for each reporting frequency.
//!
//! Floors, ceilings, and steps are exhaustive matches over the closed
//! [`Frequency`] set; there is no runtime frequency dispatch anywhere else.
//! `Custom` carries no canonical boundaries, so every public operation
//! special-cases it before calling in here; its arms pass the input through.

use chrono::{Datelike, Days, Months, NaiveDate};
use fincal_types::{Frequency, PeriodEdge};

/// Canonical start (floor) of the period containing `date`.
#[must_use]
pub fn period_start(frequency: Frequency, date: NaiveDate) -> NaiveDate {
    match frequency {
        Frequency::Daily | Frequency::Custom => date,
        Frequency::Weekly => week_start(date),
        Frequency::Monthly => date.with_day(1).unwrap_or(date),
        Frequency::Quarterly => {
            let month = ((date.month() - 1) / 3) * 3 + 1;
            NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
        }
        Frequency::HalfYearly => {
            let month = if date.month() <= 6 { 1 } else { 7 };
            NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
        }
        Frequency::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
    }
}

/// Canonical end (ceiling) of the period containing `date`.
///
/// Month-based ceilings land on the true last calendar day, leap February
/// included.
#[must_use]
pub fn period_end(frequency: Frequency, date: NaiveDate) -> NaiveDate {
    match frequency {
        Frequency::Daily | Frequency::Custom => date,
        Frequency::Weekly => week_end(date),
        Frequency::Monthly => last_day_of_month(date),
        Frequency::Quarterly | Frequency::HalfYearly | Frequency::Yearly => {
            let months = match frequency {
                Frequency::Quarterly => 3,
                Frequency::HalfYearly => 6,
                _ => 12,
            };
            period_start(frequency, date)
                .checked_add_months(Months::new(months))
                .and_then(|d| d.checked_sub_days(Days::new(1)))
                .unwrap_or(date)
        }
    }
}

/// Boundary selected by `edge`: floor for `Start`, ceiling for `End`.
#[must_use]
pub fn boundary(frequency: Frequency, edge: PeriodEdge, date: NaiveDate) -> NaiveDate {
    match edge {
        PeriodEdge::Start => period_start(frequency, date),
        PeriodEdge::End => period_end(frequency, date),
    }
}

/// Steps `date` by `periods` whole periods; negative values step backward.
///
/// Month-based frequencies clamp the day of month the way calendar
/// arithmetic does (January 31 plus one month is the last day of February).
/// Callers that need a canonical boundary apply [`boundary`] afterwards.
#[must_use]
pub fn advance(frequency: Frequency, date: NaiveDate, periods: i32) -> NaiveDate {
    match frequency {
        Frequency::Custom => date,
        Frequency::Daily => shift_days(date, i64::from(periods)),
        Frequency::Weekly => shift_days(date, 7 * i64::from(periods)),
        Frequency::Monthly => shift_months(date, i64::from(periods)),
        Frequency::Quarterly => shift_months(date, 3 * i64::from(periods)),
        Frequency::HalfYearly => shift_months(date, 6 * i64::from(periods)),
        Frequency::Yearly => shift_months(date, 12 * i64::from(periods)),
    }
}

/// Monday of `date`'s week.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(days_from_monday)).unwrap_or(date)
}

/// Sunday of `date`'s week.
#[must_use]
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date).checked_add_days(Days::new(6)).unwrap_or(date)
}

/// Last calendar day of `date`'s month.
#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(date)
}

fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let step = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(step).unwrap_or(date)
    } else {
        date.checked_sub_days(step).unwrap_or(date)
    }
}

fn shift_months(date: NaiveDate, months: i64) -> NaiveDate {
    let step = Months::new(u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX));
    if months >= 0 {
        date.checked_add_months(step).unwrap_or(date)
    } else {
        date.checked_sub_months(step).unwrap_or(date)
    }
}
