//! The fixed textual layouts: ISO-8601, RFC-822, the Qt-style text form,
//! and the locale-driven long form. Unlike the pattern engine, each of
//! these expands to one bit-exact layout, and each parser independently
//! validates and rejects malformed input in full.

use crate::cal::datetime::{Error as DateError, LocalDate, LocalTime, Month, Weekday};
use crate::cal::{DatePiece, TimePiece};
use crate::duration::Duration;
use crate::moment::{Moment, TimeSpec};

use super::pattern::{self, format_offset, Error, TextScanner};
use super::Lexicon;


/// One of the fixed layouts.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Style {

    /// ISO-8601 extended: `YYYY-MM-DD[THH:MM:SS[.fff]]` with `Z`, an
    /// `±HH:MM` offset, or nothing for clock time. The parser also
    /// accepts the basic (separator-free) and ordinal-date forms.
    Iso,

    /// RFC-822 without the weekday: `DD Mon YYYY HH:MM:SS ±HHMM`.
    Rfc,

    /// RFC-822 with the weekday: `Wdy, DD Mon YYYY HH:MM:SS ±HHMM`.
    RfcDay,

    /// The Qt text layout: `Wdy Mon D HH:MM:SS YYYY`.
    Text,

    /// The locale’s long form, driven by the lexicon.
    Locale,
}

/// The pattern the `Locale` style expands to.
const LOCALE_PATTERN: &str = "%A %d %B %Y %H:%M:%S";
const LOCALE_DATE_PATTERN: &str = "%A %d %B %Y";

/// Zone names RFC-822 allows in place of a numeric offset. `UTC` itself
/// is not in the RFC grammar but appears constantly in the wild; it must
/// sit before `UT` so prefix matching finds the longer name first.
const NAMED_ZONES: &[(&str, i32)] = &[
    ("UTC", 0),           ("UT",  0),           ("GMT", 0),
    ("EST", -5 * 3600),   ("EDT", -4 * 3600),
    ("CST", -6 * 3600),   ("CDT", -5 * 3600),
    ("MST", -7 * 3600),   ("MDT", -6 * 3600),
    ("PST", -8 * 3600),   ("PDT", -7 * 3600),
];


/// Renders a moment in one of the fixed layouts. Invalid moments render
/// as the empty string.
pub fn format(moment: &Moment, style: Style, lexicon: &Lexicon) -> String {
    if !moment.is_valid() {
        return String::new();
    }

    match style {
        Style::Iso     => format_iso(moment),
        Style::Rfc     => format_rfc(moment, false),
        Style::RfcDay  => format_rfc(moment, true),
        Style::Text    => format_text(moment),
        Style::Locale => {
            let pattern = if moment.is_date_only() { LOCALE_DATE_PATTERN } else { LOCALE_PATTERN };
            pattern::format(moment, pattern, lexicon)
        },
    }
}

/// Parses text in one of the fixed layouts. These parsers are strict:
/// the entire input must be consumed.
pub fn parse(input: &str, style: Style, lexicon: &Lexicon) -> Result<Moment, Error> {
    match style {
        Style::Iso             => parse_iso(input),
        Style::Rfc | Style::RfcDay  => parse_rfc(input),
        Style::Text            => parse_text(input),
        Style::Locale => {
            let strict = pattern::ParseOptions { strict: true, ..Default::default() };
            pattern::parse_with(input, LOCALE_PATTERN, lexicon, &strict)
                .or_else(|_| pattern::parse_with(input, LOCALE_DATE_PATTERN, lexicon, &strict))
        },
    }
}


fn iso_year(year: i64) -> String {
    if (0 ..= 9999).contains(&year) {
        format!("{:04}", year)
    }
    else {
        format!("{:+05}", year)
    }
}

fn format_iso(moment: &Moment) -> String {
    let date = moment.date();
    let mut out = format!("{}-{:02}-{:02}", iso_year(date.year()), date.month() as u8, date.day());

    if moment.is_date_only() {
        return out;
    }

    let time = moment.time();
    out.push_str(&format!("T{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second()));
    if time.millisecond() != 0 {
        out.push_str(&format!(".{:03}", time.millisecond()));
    }

    match moment.spec() {
        TimeSpec::Utc        => out.push('Z'),
        TimeSpec::ClockTime  => {},
        _ => {
            if let Some(offset) = moment.utc_offset() {
                out.push_str(&format_offset(offset, true));
            }
        },
    }

    out
}

fn format_rfc(moment: &Moment, with_weekday: bool) -> String {
    let date = moment.date();
    let mut out = String::new();

    if with_weekday {
        out.push_str(date.weekday().english_name(false));
        out.push_str(", ");
    }

    out.push_str(&format!("{:02} {} {}",
                          date.day(), date.month().english_name(false), iso_year(date.year())));

    if moment.is_date_only() {
        return out;
    }

    let time = moment.time();
    out.push_str(&format!(" {:02}:{:02}:{:02} ", time.hour(), time.minute(), time.second()));

    // RFC 2822 writes an unknowable local offset as -0000.
    match (moment.spec(), moment.utc_offset()) {
        (TimeSpec::ClockTime, _)  => out.push_str("-0000"),
        (_, Some(offset))         => out.push_str(&format_offset(offset, false)),
        (_, None)                 => out.push_str("-0000"),
    }

    out
}

fn format_text(moment: &Moment) -> String {
    let date = moment.date();

    if moment.is_date_only() {
        format!("{} {} {} {}",
                date.weekday().english_name(false), date.month().english_name(false),
                date.day(), iso_year(date.year()))
    }
    else {
        let time = moment.time();
        format!("{} {} {} {:02}:{:02}:{:02} {}",
                date.weekday().english_name(false), date.month().english_name(false),
                date.day(), time.hour(), time.minute(), time.second(), iso_year(date.year()))
    }
}


/// The date read off the front of an ISO string, and whether it used the
/// basic (separator-free) layout, which the time part must then follow.
struct IsoDate {
    date: LocalDate,
    basic: bool,
}

fn build_date(year: i64, month: i64, day: i64) -> Result<LocalDate, Error> {
    let month = Month::from_one(month as i8).map_err(|_| Error::OutOfRange)?;
    LocalDate::ymd(year, month, day as i8).map_err(date_error)
}

fn date_error(error: DateError) -> Error {
    match error {
        DateError::OutOfRange  => Error::OutOfRange,
        DateError::TooEarly    => Error::TooEarly,
        DateError::TooLate     => Error::TooLate,
    }
}

fn parse_iso_date(scanner: &mut TextScanner<'_>) -> Result<IsoDate, Error> {
    let sign = scanner.take_sign().unwrap_or(1);

    match scanner.digit_run() {
        // Basic calendar date, YYYYMMDD.
        8 => {
            let year = sign * scanner.take_digits(4, 4)?;
            let month = scanner.take_digits(2, 2)?;
            let day = scanner.take_digits(2, 2)?;
            Ok(IsoDate { date: build_date(year, month, day)?, basic: true })
        },

        // Basic ordinal date, YYYYDDD.
        7 => {
            let year = sign * scanner.take_digits(4, 4)?;
            let yearday = scanner.take_digits(3, 3)?;
            let date = LocalDate::yd(year, yearday).map_err(date_error)?;
            Ok(IsoDate { date, basic: true })
        },

        // Extended: YYYY-MM-DD or YYYY-DDD.
        4 | 5 | 6 => {
            let year = sign * scanner.take_digits(4, 6)?;
            scanner.take_char('-')?;

            match scanner.digit_run() {
                3 => {
                    let yearday = scanner.take_digits(3, 3)?;
                    let date = LocalDate::yd(year, yearday).map_err(date_error)?;
                    Ok(IsoDate { date, basic: false })
                },
                2 => {
                    let month = scanner.take_digits(2, 2)?;
                    scanner.take_char('-')?;
                    let day = scanner.take_digits(2, 2)?;
                    Ok(IsoDate { date: build_date(year, month, day)?, basic: false })
                },
                _ => Err(Error::Mismatch),
            }
        },

        _ => Err(Error::Mismatch),
    }
}

/// The time-of-day fields read off an ISO string, seconds possibly 60
/// until the leap-second rule has been applied.
struct IsoTime {
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
}

fn parse_iso_time(scanner: &mut TextScanner<'_>, basic: bool) -> Result<IsoTime, Error> {
    let hour = scanner.take_digits(2, 2)?;
    let mut minute = 0;
    let mut second = 0;

    if basic {
        match scanner.digit_run() {
            4 => {
                minute = scanner.take_digits(2, 2)?;
                second = scanner.take_digits(2, 2)?;
            },
            2 => {
                minute = scanner.take_digits(2, 2)?;
            },
            0 => {},
            _ => return Err(Error::Mismatch),
        }
    }
    else if scanner.eat(":") {
        minute = scanner.take_digits(2, 2)?;
        if scanner.eat(":") {
            second = scanner.take_digits(2, 2)?;
        }
    }

    let millisecond = if scanner.eat(".") || scanner.eat(",") {
        let rest = scanner.rest();
        let run = scanner.digit_run();
        if run == 0 || run > 9 {
            return Err(Error::Mismatch);
        }

        let fraction = &rest[.. run];
        scanner.pos += run;

        // Only millisecond precision is kept: ".5" is 500ms, ".1234" is
        // 123ms.
        let padded = format!("{:0<3}", &fraction[.. fraction.len().min(3)]);
        padded.parse().map_err(|_| Error::Mismatch)?
    }
    else {
        0
    };

    if hour > 23 || minute > 59 || second > 60 {
        return Err(Error::OutOfRange);
    }

    Ok(IsoTime { hour, minute, second, millisecond })
}

fn parse_iso(input: &str) -> Result<Moment, Error> {
    let mut scanner = TextScanner::new(input.trim());

    let IsoDate { date, basic } = parse_iso_date(&mut scanner)?;

    if scanner.at_end() {
        return Ok(Moment::date_only(date, TimeSpec::ClockTime));
    }

    scanner.take_char('T')?;
    let fields = parse_iso_time(&mut scanner, basic)?;

    let spec = if scanner.eat("Z") {
        TimeSpec::Utc
    }
    else if let Some(sign) = scanner.take_sign() {
        let hours = scanner.take_digits(2, 2)?;
        let minutes = if scanner.eat(":") {
            scanner.take_digits(2, 2)?
        }
        else if scanner.digit_run() == 2 {
            scanner.take_digits(2, 2)?
        }
        else {
            0
        };

        if hours > 23 || minutes > 59 {
            return Err(Error::OutOfRange);
        }

        TimeSpec::OffsetFromUtc((sign * (hours * 3600 + minutes * 60)) as i32)
    }
    else {
        TimeSpec::ClockTime
    };

    if !scanner.at_end() {
        return Err(Error::Mismatch);
    }

    let mut second = fields.second;
    if second == 60 {
        // A leap second is only real at the very end of a UTC day, once
        // the offset has been stripped off; it is stored as :59.
        let offset = match spec {
            TimeSpec::Utc                    => 0,
            TimeSpec::OffsetFromUtc(offset)  => offset,
            _                                => return Err(Error::OutOfRange),
        };

        let provisional = LocalTime::hms_ms(fields.hour as i8, fields.minute as i8, 59,
                                            fields.millisecond as i16)
            .map_err(|_| Error::OutOfRange)?;
        let in_utc = (crate::cal::datetime::LocalDateTime::new(date, provisional)
                      - Duration::of(offset as i64)).time();

        if in_utc.hour() != 23 || in_utc.minute() != 59 {
            return Err(Error::OutOfRange);
        }

        second = 59;
    }

    let time = LocalTime::hms_ms(fields.hour as i8, fields.minute as i8, second as i8,
                                 fields.millisecond as i16)
        .map_err(|_| Error::OutOfRange)?;

    Ok(Moment::new(date, time, spec))
}


fn weekday_prefix(scanner: &mut TextScanner<'_>) -> Option<Weekday> {
    for number in 0 .. 7 {
        if let Ok(weekday) = Weekday::from_zero(number) {
            if scanner.eat(weekday.english_name(false)) {
                return Some(weekday);
            }
        }
    }
    None
}

fn month_name(scanner: &mut TextScanner<'_>) -> Result<Month, Error> {
    for number in 1 ..= 12 {
        if let Ok(month) = Month::from_one(number) {
            if scanner.eat(month.english_name(false)) {
                return Ok(month);
            }
        }
    }
    Err(Error::Mismatch)
}

fn parse_rfc(input: &str) -> Result<Moment, Error> {
    let mut scanner = TextScanner::new(input.trim());

    let weekday = weekday_prefix(&mut scanner);
    if weekday.is_some() {
        let _ = scanner.eat(",");
        scanner.skip_whitespace();
    }

    // An alphabetic token where the day should be means the obsolete
    // asctime layout instead.
    if scanner.digit_run() == 0 {
        return parse_asctime_fields(&mut scanner, weekday);
    }

    let day = scanner.take_digits(1, 2)?;
    scanner.skip_whitespace();
    let month = month_name(&mut scanner)?;
    scanner.skip_whitespace();

    let year = match scanner.digit_run() {
        2 => {
            let short = scanner.take_digits(2, 2)?;
            if short < 50 { 2000 + short } else { 1900 + short }
        },
        _ => scanner.take_digits(4, 5)?,
    };

    let date = LocalDate::ymd(year, month, day as i8).map_err(date_error)?;
    if let Some(expected) = weekday {
        if expected != date.weekday() {
            return Err(Error::Contradiction);
        }
    }

    scanner.skip_whitespace();
    if scanner.at_end() {
        return Ok(Moment::date_only(date, TimeSpec::ClockTime));
    }

    let hour = scanner.take_digits(2, 2)?;
    scanner.take_char(':')?;
    let minute = scanner.take_digits(2, 2)?;
    let second = if scanner.eat(":") { scanner.take_digits(2, 2)? } else { 0 };

    if hour > 23 || minute > 59 || second > 59 {
        return Err(Error::OutOfRange);
    }
    let time = LocalTime::hms(hour as i8, minute as i8, second as i8)
        .map_err(|_| Error::OutOfRange)?;

    scanner.skip_whitespace();

    let spec = if let Some(sign) = scanner.take_sign() {
        let hours = scanner.take_digits(2, 2)?;
        let minutes = scanner.take_digits(2, 2)?;
        if hours > 23 || minutes > 59 {
            return Err(Error::OutOfRange);
        }

        let offset = (sign * (hours * 3600 + minutes * 60)) as i32;
        if offset == 0 && sign == -1 {
            // -0000 declares the offset unknowable.
            TimeSpec::ClockTime
        }
        else if offset == 0 {
            TimeSpec::Utc
        }
        else {
            TimeSpec::OffsetFromUtc(offset)
        }
    }
    else {
        let mut named = Err(Error::Mismatch);
        for (name, offset) in NAMED_ZONES {
            if scanner.eat(name) {
                named = Ok(if *offset == 0 { TimeSpec::Utc } else { TimeSpec::OffsetFromUtc(*offset) });
                break;
            }
        }
        named?
    };

    if !scanner.at_end() {
        return Err(Error::Mismatch);
    }

    Ok(Moment::new(date, time, spec))
}

/// The obsolete `Wdy Mon DD HH:MM:SS YYYY` layout. It carries no zone
/// information, so the result is clock time.
fn parse_asctime_fields(scanner: &mut TextScanner<'_>, weekday: Option<Weekday>)
    -> Result<Moment, Error>
{
    let month = month_name(scanner)?;
    scanner.skip_whitespace();
    let day = scanner.take_digits(1, 2)?;
    scanner.skip_whitespace();

    let hour = scanner.take_digits(2, 2)?;
    scanner.take_char(':')?;
    let minute = scanner.take_digits(2, 2)?;
    scanner.take_char(':')?;
    let second = scanner.take_digits(2, 2)?;
    scanner.skip_whitespace();
    let year = scanner.take_digits(4, 5)?;

    if !scanner.at_end() {
        return Err(Error::Mismatch);
    }
    if hour > 23 || minute > 59 || second > 59 {
        return Err(Error::OutOfRange);
    }

    let date = LocalDate::ymd(year, month, day as i8).map_err(date_error)?;
    if let Some(expected) = weekday {
        if expected != date.weekday() {
            return Err(Error::Contradiction);
        }
    }

    let time = LocalTime::hms(hour as i8, minute as i8, second as i8)
        .map_err(|_| Error::OutOfRange)?;
    Ok(Moment::new(date, time, TimeSpec::ClockTime))
}

fn parse_text(input: &str) -> Result<Moment, Error> {
    let mut scanner = TextScanner::new(input.trim());

    let weekday = weekday_prefix(&mut scanner);
    scanner.skip_whitespace();
    parse_asctime_fields(&mut scanner, weekday)
}
