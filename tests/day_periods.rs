use locus::cal::period::AM_PM;
use locus::{DayPeriod, DayPeriodSet, LocalTime, NameStyle};

fn at(hour: i8, minute: i8, second: i8, millisecond: i16) -> LocalTime {
    LocalTime::hms_ms(hour, minute, second, millisecond).unwrap()
}

#[test]
fn the_clock_face_boundaries() {
    let label = |time: LocalTime| {
        AM_PM.resolve(time).and_then(|period| period.hour_in_period(time))
    };

    assert_eq!(label(at(0, 0, 0, 0)), Some(12));
    assert_eq!(label(at(12, 0, 0, 0)), Some(12));
    assert_eq!(label(at(13, 0, 0, 0)), Some(1));
    assert_eq!(label(at(23, 59, 59, 999)), Some(11));
}

#[test]
fn every_time_matches_exactly_one_period() {
    for hour in 0..24 {
        for (minute, second, millisecond) in &[(0, 0, 0), (59, 59, 999), (30, 15, 500)] {
            let time = at(hour, *minute, *second, *millisecond);
            let matching = AM_PM.periods()
                                .iter()
                                .filter(|period| period.contains(time))
                                .count();

            assert_eq!(matching, 1, "{:?} matched {} periods", time, matching);
        }
    }
}

#[test]
fn labels_invert() {
    for hour in 0..24 {
        for minute in &[0, 31, 59] {
            let time = at(hour, *minute, 7, 0);
            let period = AM_PM.resolve(time).unwrap();
            let label = period.hour_in_period(time).unwrap();

            assert_eq!(period.time(label, *minute, 7, 0), Some(time));
        }
    }
}

#[test]
fn names_come_in_three_sizes() {
    let noon = at(12, 0, 0, 0);
    let period = AM_PM.resolve(noon).unwrap();

    assert_eq!(period.code(), "pm");
    assert_eq!(period.name(NameStyle::Long), "PM");
    assert_eq!(period.name(NameStyle::Narrow), "P");
}

#[test]
fn alternative_period_sets_need_no_new_code() {
    // A three-way split of the day, purely data-driven.
    let thirds = DayPeriodSet::new(vec![
        DayPeriod::new("night", "night", "night", "n",
                       at(0, 0, 0, 0), at(7, 59, 59, 999), 0, 0),
        DayPeriod::new("work", "working day", "work", "w",
                       at(8, 0, 0, 0), at(15, 59, 59, 999), 0, 0),
        DayPeriod::new("evening", "evening", "eve", "e",
                       at(16, 0, 0, 0), at(23, 59, 59, 999), 0, 0),
    ]);

    assert_eq!(thirds.resolve(at(3, 0, 0, 0)).map(DayPeriod::code), Some("night"));
    assert_eq!(thirds.resolve(at(8, 0, 0, 0)).map(DayPeriod::code), Some("work"));
    assert_eq!(thirds.resolve(at(22, 0, 0, 0)).map(DayPeriod::code), Some("evening"));

    // Hour-in-period counts from each period's own start.
    let work = thirds.find("work").unwrap();
    assert_eq!(work.hour_in_period(at(10, 0, 0, 0)), Some(2));
}

#[test]
fn midnight_wrapping_period() {
    let night = DayPeriod::new("night", "night", "night", "n",
                               at(22, 0, 0, 0), at(5, 59, 59, 999), 0, 0);

    assert!(night.contains(at(22, 0, 0, 0)));
    assert!(night.contains(at(0, 0, 0, 0)));
    assert!(night.contains(at(5, 59, 59, 999)));
    assert!(!night.contains(at(6, 0, 0, 0)));
    assert!(!night.contains(at(21, 59, 59, 999)));
}

#[test]
fn sentinel_period() {
    let sentinel = DayPeriod::sentinel();

    assert!(!sentinel.is_valid());
    assert_eq!(sentinel.hour_in_period(at(10, 0, 0, 0)), None);
    assert_eq!(sentinel.time(10, 0, 0, 0), None);

    // An incomplete set can leave times unresolved; that's a data
    // problem, reported as None rather than a crash.
    let gappy = DayPeriodSet::new(vec![
        DayPeriod::new("am-only", "AM", "AM", "A",
                       at(0, 0, 0, 0), at(11, 59, 59, 999), 0, 12),
    ]);
    assert!(gappy.resolve(at(18, 0, 0, 0)).is_none());
}
