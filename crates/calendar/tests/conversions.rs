//! Integration tests for date/weekday conversions.

use janus_calendar::{Date, Weekday};

#[test]
fn weekday_cycles_over_a_week() {
    let mut date = Date::new(2023, 1, 1).unwrap(); // Sunday
    for expected in 0..7u8 {
        assert_eq!(date.weekday(), Weekday::from_index(expected).unwrap());
        date = date.next();
    }
    // Eighth day is Sunday again.
    assert_eq!(date.weekday(), Weekday::Sunday);
}

#[test]
fn weekday_consistent_with_civil_days() {
    // Consecutive civil days have consecutive weekdays (mod 7).
    let mut date = Date::new(1999, 12, 25).unwrap();
    for _ in 0..400 {
        let next = date.next();
        assert_eq!(
            i32::from(next.weekday().index()),
            (i32::from(date.weekday().index()) + 1) % 7
        );
        date = next;
    }
}

#[test]
fn civil_day_roundtrip_across_leap_century() {
    // 1900 (common century) and 2000 (leap century) both roundtrip.
    for year in [1899, 1900, 1901, 1999, 2000, 2001] {
        let date = Date::new(year, 2, 28).unwrap();
        assert_eq!(Date::from_days(date.to_days()), date);
    }
}

#[test]
fn week_start_groups_seven_consecutive_days() {
    // Under any first weekday, a run of dates starting on that weekday
    // keeps the same week_start for exactly seven days.
    for first in 0..7u8 {
        let first = Weekday::from_index(first).unwrap();
        let mut date = Date::new(2023, 3, 1).unwrap();
        while date.weekday() != first {
            date = date.next();
        }
        let key = date.week_start(first);
        let mut d = date;
        for _ in 0..7 {
            assert_eq!(d.week_start(first), key, "within week, first = {first}");
            d = d.next();
        }
        assert_ne!(d.week_start(first), key, "eighth day, first = {first}");
    }
}
