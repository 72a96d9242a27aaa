#![cfg(feature = "chrono")]

use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use interval_ops::{Closed, Interval, IntervalArray, Query};

fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 1, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn timestamps_touch_at_shared_day() {
    let first = Interval::new(day(1), day(2), Closed::Right).unwrap();
    let second = Interval::new(day(2), day(3), Closed::Left).unwrap();
    assert!(first.overlaps(&second));

    let second = Interval::new(day(2), day(3), Closed::Right).unwrap();
    assert!(!first.overlaps(&second));
}

#[test]
fn shift_by_duration() {
    let interval = Interval::new(day(1), day(3), Closed::Both).unwrap();
    let shifted = interval.shift(Duration::days(1)).unwrap();
    assert_eq!(shifted, Interval::new(day(2), day(4), Closed::Both).unwrap());
    assert_eq!(interval.length(), Duration::days(2));
}

#[test]
fn timezone_aware_endpoints() {
    let start = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
    let interval = Interval::new(start, start + Duration::hours(6), Closed::Left).unwrap();
    assert!(interval.contains(&start));
    assert!(!interval.contains(&(start + Duration::hours(6))));
}

#[test]
fn nat_positions_and_points() {
    let array = IntervalArray::from_tuples(
        vec![Some((Some(day(1)), Some(day(3)))), Some((None, None)), None],
        Closed::Both,
    )
    .unwrap();
    assert_eq!(array.isna(), vec![false, true, true]);
    assert_eq!(
        array.contains(Query::Point(&Some(day(2)))).unwrap(),
        vec![true, false, false]
    );
    assert_eq!(
        array.contains(Query::Point(&None)).unwrap(),
        vec![false, false, false]
    );
}

#[test]
fn timedelta_domain() {
    let interval = Interval::new(Duration::zero(), Duration::days(1), Closed::Neither).unwrap();
    assert!(interval.contains(&Duration::hours(12)));
    assert!(!interval.contains(&Duration::days(1)));
    let err = interval.overlaps_query(Query::Point(&Duration::hours(1))).unwrap_err();
    assert!(err.to_string().starts_with("`other` must be an Interval, got "));
}
