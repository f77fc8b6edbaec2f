use locus::fmt::{fixed, Style, ENGLISH};
use locus::{DatePiece, LocalDate, LocalTime, Moment, Month, TimePiece, TimeSpec};

#[test]
fn iso_text_is_a_fixed_point() {
    for text in &[
        "2002-05-03",
        "2002-05-03T10:20:30",
        "2002-05-03T10:20:30Z",
        "2002-05-03T10:20:30+05:30",
    ] {
        let parsed = fixed::parse(text, Style::Iso, &ENGLISH).unwrap();
        assert_eq!(&fixed::format(&parsed, Style::Iso, &ENGLISH), text);
    }
}

#[test]
fn iso_specs() {
    let zulu = fixed::parse("2002-05-03T10:20:30Z", Style::Iso, &ENGLISH).unwrap();
    assert_eq!(*zulu.spec(), TimeSpec::Utc);

    let offset = fixed::parse("2002-05-03T10:20:30+05:30", Style::Iso, &ENGLISH).unwrap();
    assert_eq!(*offset.spec(), TimeSpec::OffsetFromUtc(5 * 3600 + 1800));

    let floating = fixed::parse("2002-05-03T10:20:30", Style::Iso, &ENGLISH).unwrap();
    assert!(floating.is_clock_time());

    let day = fixed::parse("2002-05-03", Style::Iso, &ENGLISH).unwrap();
    assert!(day.is_date_only());
}

#[test]
fn iso_alternate_forms() {
    let basic = fixed::parse("20020503T102030Z", Style::Iso, &ENGLISH).unwrap();
    let extended = fixed::parse("2002-05-03T10:20:30Z", Style::Iso, &ENGLISH).unwrap();
    assert_eq!(basic, extended);

    let ordinal = fixed::parse("2002-123", Style::Iso, &ENGLISH).unwrap();
    assert_eq!(ordinal.date(), LocalDate::yd(2002, 123).unwrap());
    assert_eq!(ordinal.date().month(), Month::May);
}

#[test]
fn iso_rejects_nonsense() {
    for text in &[
        "",
        "2002-13-03",
        "2002-02-30",
        "2002-05-03T25:00:00",
        "2002-05-03TZ",
        "2002-05-03T10:20:30Z+05:30",
        "2002-05-03T10:20:30 trailing",
        "2002 -05-03",
    ] {
        assert!(fixed::parse(text, Style::Iso, &ENGLISH).is_err(),
                "{:?} should not parse", text);
    }
}

#[test]
fn leap_seconds_only_at_the_end_of_a_utc_day() {
    let accepted = fixed::parse("1995-12-31T23:59:60Z", Style::Iso, &ENGLISH).unwrap();
    assert_eq!(accepted.time().second(), 59);

    // The same wall-clock reading eight hours west is also the last UTC
    // second of its day.
    assert!(fixed::parse("1995-12-31T15:59:60-08:00", Style::Iso, &ENGLISH).is_ok());

    // Anywhere else, :60 is rejected.
    assert!(fixed::parse("1995-12-31T22:59:60Z", Style::Iso, &ENGLISH).is_err());
    assert!(fixed::parse("1995-12-31T23:59:60+01:00", Style::Iso, &ENGLISH).is_err());
}

#[test]
fn rfc_layouts() {
    let moment = Moment::new(LocalDate::ymd(2015, Month::June, 26).unwrap(),
                             LocalTime::hms(15, 4, 5).unwrap(),
                             TimeSpec::Utc);

    assert_eq!(fixed::format(&moment, Style::Rfc, &ENGLISH),
               "26 Jun 2015 15:04:05 +0000");
    assert_eq!(fixed::format(&moment, Style::RfcDay, &ENGLISH),
               "Fri, 26 Jun 2015 15:04:05 +0000");

    let parsed = fixed::parse("Fri, 26 Jun 2015 15:04:05 +0000", Style::Rfc, &ENGLISH).unwrap();
    assert_eq!(parsed, moment);

    // The obsolete layout also parses.
    let obsolete = fixed::parse("Fri Jun 26 15:04:05 2015", Style::Rfc, &ENGLISH).unwrap();
    assert_eq!(obsolete.clock(), moment.clock());
    assert!(obsolete.is_clock_time());
}

#[test]
fn rfc_offset_variants() {
    let eastern = fixed::parse("26 Jun 2015 15:04 EST", Style::Rfc, &ENGLISH).unwrap();
    assert_eq!(*eastern.spec(), TimeSpec::OffsetFromUtc(-5 * 3600));

    let unknown = fixed::parse("26 Jun 2015 15:04 -0000", Style::Rfc, &ENGLISH).unwrap();
    assert!(unknown.is_clock_time());

    let gmt = fixed::parse("26 Jun 2015 15:04 GMT", Style::Rfc, &ENGLISH).unwrap();
    assert_eq!(*gmt.spec(), TimeSpec::Utc);
}

#[test]
fn invalid_moments_render_as_nothing() {
    for style in &[Style::Iso, Style::Rfc, Style::RfcDay, Style::Text, Style::Locale] {
        assert_eq!(fixed::format(&Moment::invalid(), *style, &ENGLISH), "");
    }
}
