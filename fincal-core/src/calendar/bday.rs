//! Business-day predicate and adjustment.
//!
//! Saturday and Sunday are the only non-business days; no holiday calendar
//! is modeled.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use fincal_types::{Frequency, PeriodEdge};

use crate::calendar::boundary;

/// Direction used when shifting a date onto a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step towards later dates.
    Forward,
    /// Step towards earlier dates.
    Backward,
}

/// Adjustment direction implied by a boundary edge: period starts move
/// forward, period ends move backward.
#[must_use]
pub const fn edge_direction(edge: PeriodEdge) -> Direction {
    match edge {
        PeriodEdge::Start => Direction::Forward,
        PeriodEdge::End => Direction::Backward,
    }
}

/// True for Monday through Friday.
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns `date` unchanged when it is a business day, otherwise steps one
/// calendar day at a time in `direction` until a business day is reached.
#[must_use]
pub fn shift_to_business_day(mut date: NaiveDate, direction: Direction) -> NaiveDate {
    while !is_business_day(date) {
        let next = match direction {
            Direction::Forward => date.checked_add_days(Days::new(1)),
            Direction::Backward => date.checked_sub_days(Days::new(1)),
        };
        let Some(next) = next else { break };
        date = next;
    }
    date
}

/// The date itself on a business day, otherwise the preceding Friday.
#[must_use]
pub fn previous_business_day(date: NaiveDate) -> NaiveDate {
    shift_to_business_day(date, Direction::Backward)
}

/// Last business day of `date`'s month.
#[must_use]
pub fn last_business_day_of_month(date: NaiveDate) -> NaiveDate {
    previous_business_day(boundary::last_day_of_month(date))
}

/// Last business day strictly before the first day of `date`'s month.
#[must_use]
pub fn last_business_day_of_previous_month(date: NaiveDate) -> NaiveDate {
    let month_start = date.with_day(1).unwrap_or(date);
    previous_business_day(
        month_start
            .checked_sub_days(Days::new(1))
            .unwrap_or(month_start),
    )
}

/// Last business day strictly before the quarter containing `date`.
#[must_use]
pub fn last_business_day_of_previous_quarter(date: NaiveDate) -> NaiveDate {
    let quarter_start = boundary::period_start(Frequency::Quarterly, date);
    previous_business_day(
        quarter_start
            .checked_sub_days(Days::new(1))
            .unwrap_or(quarter_start),
    )
}

/// Last business day of the year before `date`'s year.
#[must_use]
pub fn last_business_day_of_previous_year(date: NaiveDate) -> NaiveDate {
    let prior_year_end = NaiveDate::from_ymd_opt(date.year() - 1, 12, 31).unwrap_or(date);
    previous_business_day(prior_year_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekends_are_not_business_days() {
        assert!(is_business_day(d(2024, 9, 6))); // Friday
        assert!(!is_business_day(d(2024, 9, 7))); // Saturday
        assert!(!is_business_day(d(2024, 9, 8))); // Sunday
        assert!(is_business_day(d(2024, 9, 9))); // Monday
    }

    #[test]
    fn shifting_spans_the_whole_weekend() {
        assert_eq!(
            shift_to_business_day(d(2024, 9, 7), Direction::Forward),
            d(2024, 9, 9)
        );
        assert_eq!(
            shift_to_business_day(d(2024, 9, 8), Direction::Backward),
            d(2024, 9, 6)
        );
        // Business days pass through untouched.
        assert_eq!(
            shift_to_business_day(d(2024, 9, 9), Direction::Forward),
            d(2024, 9, 9)
        );
    }

    #[test]
    fn previous_period_helpers_clamp_to_fridays() {
        // 2023-12-31 is a Sunday; the prior business day is Friday the 29th.
        assert_eq!(last_business_day_of_previous_year(d(2024, 3, 5)), d(2023, 12, 29));
        // Quarter before 2024-09-07 ends 2024-06-30 (Sunday) -> Friday the 28th.
        assert_eq!(
            last_business_day_of_previous_quarter(d(2024, 9, 7)),
            d(2024, 6, 28)
        );
        // Month before 2024-09-15 ends 2024-08-31 (Saturday) -> Friday the 30th.
        assert_eq!(
            last_business_day_of_previous_month(d(2024, 9, 15)),
            d(2024, 8, 30)
        );
        // 2024-11-30 is a Saturday -> Friday the 29th.
        assert_eq!(last_business_day_of_month(d(2024, 11, 10)), d(2024, 11, 29));
    }
}
