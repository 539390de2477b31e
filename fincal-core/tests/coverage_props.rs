use chrono::{Days, NaiveDate};
use fincal_core::{
    DateArg, Frequency, PeriodEdge, locate_period_boundary, period_end, period_start,
    pick_period_anchors, split_into_periods,
};
use proptest::prelude::*;

const ISO: &str = "%Y-%m-%d";

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Day offsets spanning roughly 1990 through 2040.
    (0u64..18_250).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn arb_calendar_frequency() -> impl Strategy<Value = Frequency> {
    prop::sample::select(vec![
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::HalfYearly,
        Frequency::Yearly,
    ])
}

fn arb_interval() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (arb_date(), 1u64..1200).prop_map(|(from, len)| {
        (from, from.checked_add_days(Days::new(len)).unwrap())
    })
}

fn arb_edge() -> impl Strategy<Value = PeriodEdge> {
    prop::sample::select(vec![PeriodEdge::Start, PeriodEdge::End])
}

proptest! {
    #[test]
    fn zero_shift_boundaries_bracket_the_reference(
        date in arb_date(),
        freq in arb_calendar_frequency(),
    ) {
        prop_assert!(period_start(freq, date) <= date);
        prop_assert!(date <= period_end(freq, date));

        let start = locate_period_boundary(date, freq, 0, false, PeriodEdge::Start).unwrap();
        let end = locate_period_boundary(date, freq, 0, false, PeriodEdge::End).unwrap();
        let iso = date.format(ISO).to_string();
        prop_assert!(start <= iso);
        prop_assert!(iso <= end);
    }

    #[test]
    fn unclipped_split_tiles_the_span_without_gaps(
        (from, to) in arb_interval(),
        freq in arb_calendar_frequency(),
    ) {
        let pairs = split_into_periods(
            Some(DateArg::from(from)),
            Some(DateArg::from(to)),
            freq,
            false,
            false,
        )
        .unwrap();

        prop_assert!(!pairs.is_empty());
        prop_assert!(pairs[0].start <= from.format(ISO).to_string());
        prop_assert!(pairs[pairs.len() - 1].end >= to.format(ISO).to_string());

        for pair in &pairs {
            prop_assert!(pair.start <= pair.end);
        }
        for window in pairs.windows(2) {
            let prev_end = NaiveDate::parse_from_str(&window[0].end, ISO).unwrap();
            let next_start = NaiveDate::parse_from_str(&window[1].start, ISO).unwrap();
            prop_assert_eq!(
                next_start,
                prev_end.checked_add_days(Days::new(1)).unwrap(),
                "gap or overlap between {:?} and {:?}",
                &window[0],
                &window[1]
            );
        }
    }

    #[test]
    fn anchors_are_strictly_increasing_and_in_range(
        (from, to) in arb_interval(),
        freq in arb_calendar_frequency(),
        edge in arb_edge(),
    ) {
        let anchors = pick_period_anchors(from, to, freq, false, edge).unwrap();
        for window in anchors.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        let from_iso = from.format(ISO).to_string();
        let to_iso = to.format(ISO).to_string();
        for anchor in &anchors {
            prop_assert!(*anchor >= from_iso && *anchor <= to_iso,
                "anchor {anchor} escapes [{from_iso}, {to_iso}]");
        }
    }

    #[test]
    fn identical_arguments_give_identical_results(
        (from, to) in arb_interval(),
        freq in arb_calendar_frequency(),
        shift in -40i32..40,
        adjust in any::<bool>(),
        only_bday in any::<bool>(),
        edge in arb_edge(),
    ) {
        let split_once = split_into_periods(
            Some(DateArg::from(from)),
            Some(DateArg::from(to)),
            freq,
            adjust,
            only_bday,
        );
        let split_twice = split_into_periods(
            Some(DateArg::from(from)),
            Some(DateArg::from(to)),
            freq,
            adjust,
            only_bday,
        );
        prop_assert_eq!(split_once, split_twice);

        let locate_once = locate_period_boundary(from, freq, shift, only_bday, edge).unwrap();
        let locate_twice = locate_period_boundary(from, freq, shift, only_bday, edge).unwrap();
        prop_assert_eq!(locate_once, locate_twice);

        let pick_once = pick_period_anchors(from, to, freq, only_bday, edge).unwrap();
        let pick_twice = pick_period_anchors(from, to, freq, only_bday, edge).unwrap();
        prop_assert_eq!(pick_once, pick_twice);
    }
}
