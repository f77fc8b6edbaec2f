use std::sync::Arc;

use locus::{
    LocalDate, LocalTime, Moment, Month, Relation, TimeSpec, Timespan, TimespanZone, ZoneRef,
};

fn zone() -> ZoneRef {
    // One hour ahead every northern summer of 2009.
    Arc::new(TimespanZone::new("Test/Summer",
        Timespan { offset: 0, is_dst: false, abbreviation: "TST".into() },
        vec![
            (1238288400, Timespan { offset: 3600, is_dst: true,  abbreviation: "TSS".into() }),
            (1256432400, Timespan { offset: 0,    is_dst: false, abbreviation: "TST".into() }),
        ]))
}

fn sample(hour: i8) -> Moment {
    Moment::new(LocalDate::ymd(2009, Month::June, 15).unwrap(),
                LocalTime::hms(hour, 30, 5).unwrap(),
                TimeSpec::Utc)
}

#[test]
fn conversions_round_trip() {
    let specs = [
        TimeSpec::Utc,
        TimeSpec::OffsetFromUtc(5 * 3600 + 1800),
        TimeSpec::OffsetFromUtc(-8 * 3600),
        TimeSpec::Zone(zone()),
    ];

    for hour in &[0, 1, 11, 12, 23] {
        let original = sample(*hour);

        for from in &specs {
            let there = original.to_time_spec(from);
            for to in &specs {
                let back = there.to_time_spec(to).to_time_spec(from);
                assert_eq!(back, there);
                assert_eq!(back.clock(), there.clock());
            }
        }
    }
}

#[test]
fn conversions_preserve_the_instant() {
    let original = sample(9);
    let zoned = original.to_time_spec(&TimeSpec::Zone(zone()));
    let offset = original.to_time_spec(&TimeSpec::OffsetFromUtc(-3600));

    assert_eq!(original.to_instant(), zoned.to_instant());
    assert_eq!(original.to_instant(), offset.to_instant());
}

#[test]
fn date_only_survives_every_conversion() {
    let day = Moment::date_only(LocalDate::ymd(2009, Month::June, 15).unwrap(), TimeSpec::Utc);

    for spec in &[TimeSpec::OffsetFromUtc(-43200), TimeSpec::Zone(zone()), TimeSpec::ClockTime] {
        let converted = day.to_time_spec(spec);
        assert!(converted.is_date_only());
        assert_eq!(converted.date(), day.date());
    }
}

#[test]
fn same_spec_conversion_is_identity() {
    let zoned = sample(9).to_time_spec(&TimeSpec::Zone(zone()));
    let again = zoned.to_time_spec(&TimeSpec::Zone(zone()));

    assert_eq!(zoned.clock(), again.clock());
    assert_eq!(zoned, again);
}

#[test]
fn arithmetic_across_a_transition() {
    let spec = TimeSpec::Zone(zone());

    // Half past midnight, half an hour before the spring-forward.
    let before = Moment::new(LocalDate::ymd(2009, Month::March, 29).unwrap(),
                             LocalTime::hms(0, 30, 0).unwrap(),
                             spec);

    let after = before.add_seconds(3600);
    assert_eq!(after.time(), LocalTime::hms(2, 30, 0).unwrap());
    assert_eq!(before.seconds_to(&after), Some(3600));

    // The same addition in clock time never sees the transition.
    let naive = Moment::new(LocalDate::ymd(2009, Month::March, 29).unwrap(),
                            LocalTime::hms(0, 30, 0).unwrap(),
                            TimeSpec::ClockTime);
    assert_eq!(naive.add_seconds(3600).time(), LocalTime::hms(1, 30, 0).unwrap());
}

#[test]
fn differences_and_relations() {
    let breakfast = Moment::new(LocalDate::ymd(2009, Month::June, 15).unwrap(),
                                LocalTime::hms(8, 0, 0).unwrap(), TimeSpec::Utc);
    let lunch = Moment::new(LocalDate::ymd(2009, Month::June, 15).unwrap(),
                            LocalTime::hms(13, 0, 0).unwrap(), TimeSpec::Utc);
    let that_day = Moment::date_only(LocalDate::ymd(2009, Month::June, 15).unwrap(), TimeSpec::Utc);

    assert_eq!(breakfast.seconds_to(&lunch), Some(5 * 3600));
    assert_eq!(breakfast.days_to(&lunch), Some(0));

    assert_eq!(breakfast.relation_to(&that_day), Some(Relation::ContainedBy));
    assert_eq!(that_day.relation_to(&breakfast), Some(Relation::Contains));
    assert_eq!(breakfast.relation_to(&lunch), Some(Relation::Before));
    assert!(breakfast < lunch);
}

#[test]
fn offsets_shift_the_interval() {
    // The same calendar day in two specs twelve hours apart overlaps
    // rather than coinciding.
    let utc_day = Moment::date_only(LocalDate::ymd(2009, Month::June, 15).unwrap(),
                                    TimeSpec::Utc);
    let shifted_noon = Moment::new(LocalDate::ymd(2009, Month::June, 15).unwrap(),
                                   LocalTime::hms(5, 0, 0).unwrap(),
                                   TimeSpec::OffsetFromUtc(-12 * 3600));

    // 05:00 at -12:00 is 17:00Z, inside the UTC day.
    assert_eq!(shifted_noon.relation_to(&utc_day), Some(Relation::ContainedBy));
}

#[test]
fn too_early_and_too_late_are_distinct() {
    let early = LocalDate::ymd(-1_000_001, Month::January, 1);
    let late = LocalDate::ymd(1_000_001, Month::January, 1);

    assert_eq!(Moment::from_date_error(early.unwrap_err()).spec(), &TimeSpec::TooEarly);
    assert_eq!(Moment::from_date_error(late.unwrap_err()).spec(), &TimeSpec::TooLate);

    let nearly = Moment::date_only(LocalDate::ymd(999_999, Month::December, 31).unwrap(),
                                   TimeSpec::Utc);
    assert_eq!(nearly.add_days(1).spec(), &TimeSpec::TooLate);
    assert_eq!(nearly.add_days(1).seconds_to(&nearly), None);
}

#[test]
fn month_and_year_arithmetic() {
    let end_of_january = Moment::new(LocalDate::ymd(2009, Month::January, 31).unwrap(),
                                     LocalTime::hms(10, 0, 0).unwrap(),
                                     TimeSpec::Utc);

    assert_eq!(end_of_january.add_months(1).date(),
               LocalDate::ymd(2009, Month::February, 28).unwrap());
    assert_eq!(end_of_january.add_months(13).date(),
               LocalDate::ymd(2010, Month::February, 28).unwrap());
    assert_eq!(end_of_january.add_years(3).date(),
               LocalDate::ymd(2012, Month::January, 31).unwrap());
    assert_eq!(end_of_january.add_months(1).time(), end_of_january.time());
}
