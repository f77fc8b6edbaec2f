//! The `%`-token datetime formatter and parser.
//!
//! Patterns are sequences of literal characters and `%`-escapes, in two
//! namespaces: the plain tokens consult the caller’s lexicon, while the
//! `%:` tokens always speak English and render machine-stable output.
//! Unknown escapes pass through literally, so a pattern never fails to
//! format; parsing is the mirror image, walking the pattern and the input
//! in lock step.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::CharIndices;

use pad::{Alignment, PadStr};

use crate::cal::datetime::{Error as DateError, LocalDate, LocalTime, Month, Weekday};
use crate::cal::period::NameStyle;
use crate::cal::zone::ZoneRef;
use crate::cal::{DatePiece, TimePiece};
use crate::moment::{Moment, TimeSpec};

use super::{Lexicon, ENGLISH};


/// Which name table a token reads.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
enum Namespace {
    Locale,
    English,
}

/// One element of a scanned pattern.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
enum Field<'a> {
    Literal(&'a str),
    Percent,

    Year,                           // %Y
    YearOfCentury,                  // %y

    MonthNumber,                    // %m
    MonthName(bool, Namespace),     // %B, %b, %:B, %:b

    DayZero,                        // %d
    DaySpace,                       // %e

    WeekdayName(bool, Namespace),   // %A, %a, %:A, %:a

    Hour24Zero,                     // %H
    Hour24Space,                    // %k
    Hour12Zero,                     // %I
    Hour12Space,                    // %l

    Minute,                         // %M
    Second,                         // %S

    PeriodLower(Namespace),         // %P, %:P
    PeriodUpper(Namespace),         // %p, %:p

    OffsetHhmm,                     // %z
    OffsetColon,                    // %:z
    OffsetHour,                     // %:u

    ZoneAbbreviation,               // %Z
    ZoneName,                       // %:Z

    /// An escape this engine doesn’t know. Formats as itself, and must
    /// match itself when parsing.
    Unknown(char, bool),
}

impl Field<'_> {
    fn is_time_field(&self) -> bool {
        matches!(self,
                 Field::Hour24Zero | Field::Hour24Space
                 | Field::Hour12Zero | Field::Hour12Space
                 | Field::Minute | Field::Second
                 | Field::PeriodLower(_) | Field::PeriodUpper(_))
    }
}

fn plain_field(letter: char) -> Field<'static> {
    match letter {
        'Y' => Field::Year,
        'y' => Field::YearOfCentury,
        'm' => Field::MonthNumber,
        'B' => Field::MonthName(true, Namespace::Locale),
        'b' => Field::MonthName(false, Namespace::Locale),
        'd' => Field::DayZero,
        'e' => Field::DaySpace,
        'A' => Field::WeekdayName(true, Namespace::Locale),
        'a' => Field::WeekdayName(false, Namespace::Locale),
        'H' => Field::Hour24Zero,
        'k' => Field::Hour24Space,
        'I' => Field::Hour12Zero,
        'l' => Field::Hour12Space,
        'M' => Field::Minute,
        'S' => Field::Second,
        'P' => Field::PeriodLower(Namespace::Locale),
        'p' => Field::PeriodUpper(Namespace::Locale),
        'z' => Field::OffsetHhmm,
        'Z' => Field::ZoneAbbreviation,
        other => Field::Unknown(other, false),
    }
}

fn colon_field(letter: char) -> Field<'static> {
    match letter {
        'A' => Field::WeekdayName(true, Namespace::English),
        'a' => Field::WeekdayName(false, Namespace::English),
        'B' => Field::MonthName(true, Namespace::English),
        'b' => Field::MonthName(false, Namespace::English),
        'P' => Field::PeriodLower(Namespace::English),
        'p' => Field::PeriodUpper(Namespace::English),
        'z' => Field::OffsetColon,
        'u' => Field::OffsetHour,
        'Z' => Field::ZoneName,
        other => Field::Unknown(other, true),
    }
}


/// Scans a pattern into fields. Literal runs are slices of the pattern
/// itself, so scanning allocates nothing but the field list.
struct FormatScanner<'a> {
    iter:    CharIndices<'a>,
    fields:  Vec<Field<'a>>,
    input:   &'a str,
    anchor:  Option<usize>,
}

impl<'a> FormatScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            iter: input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
        }
    }

    fn flush_literal(&mut self, up_to: usize) {
        if let Some(anchor) = self.anchor.take() {
            if anchor < up_to {
                self.fields.push(Field::Literal(&self.input[anchor .. up_to]));
            }
        }
    }

    fn scan(mut self) -> Vec<Field<'a>> {
        while let Some((position, c)) = self.iter.next() {
            if c != '%' {
                if self.anchor.is_none() {
                    self.anchor = Some(position);
                }
                continue;
            }

            self.flush_literal(position);

            match self.iter.next() {
                None              => self.fields.push(Field::Unknown('%', false)),
                Some((_, '%'))    => self.fields.push(Field::Percent),
                Some((_, ':'))    => match self.iter.next() {
                    None              => self.fields.push(Field::Unknown(':', false)),
                    Some((_, letter)) => self.fields.push(colon_field(letter)),
                },
                Some((_, letter)) => self.fields.push(plain_field(letter)),
            }
        }

        self.flush_literal(self.input.len());
        self.fields
    }
}


/// Renders a moment through a pattern. Invalid moments render as the
/// empty string rather than failing.
pub fn format(moment: &Moment, pattern: &str, lexicon: &Lexicon) -> String {
    if !moment.is_valid() {
        return String::new();
    }

    let mut out = String::new();
    for field in FormatScanner::new(pattern).scan() {
        render(&field, moment, lexicon, &mut out);
    }
    out
}

fn render(field: &Field<'_>, moment: &Moment, lexicon: &Lexicon, out: &mut String) {
    let date = moment.date();
    let time = moment.time();

    match *field {
        Field::Literal(text)  => out.push_str(text),
        Field::Percent        => out.push('%'),

        Field::Unknown('%', _) => out.push('%'),
        Field::Unknown(c, colon) => {
            out.push('%');
            if colon {
                out.push(':');
            }
            out.push(c);
        },

        Field::Year           => out.push_str(&date.year().to_string()),
        Field::YearOfCentury  => out.push_str(&pad_number(date.year_of_century(), '0')),

        Field::MonthNumber    => out.push_str(&pad_number(date.month() as i64, '0')),
        Field::MonthName(long, namespace) => {
            out.push_str(table(namespace, lexicon).month_name(date.month(), long));
        },

        Field::DayZero        => out.push_str(&pad_number(date.day() as i64, '0')),
        Field::DaySpace       => out.push_str(&pad_number(date.day() as i64, ' ')),

        Field::WeekdayName(long, namespace) => {
            out.push_str(table(namespace, lexicon).weekday_name(date.weekday(), long));
        },

        Field::Hour24Zero     => out.push_str(&pad_number(time.hour() as i64, '0')),
        Field::Hour24Space    => out.push_str(&pad_number(time.hour() as i64, ' ')),
        Field::Hour12Zero     => out.push_str(&pad_number(hour_in_period(time, lexicon), '0')),
        Field::Hour12Space    => out.push_str(&pad_number(hour_in_period(time, lexicon), ' ')),

        Field::Minute         => out.push_str(&pad_number(time.minute() as i64, '0')),
        Field::Second         => out.push_str(&pad_number(time.second() as i64, '0')),

        Field::PeriodLower(namespace) => {
            out.push_str(&period_text(namespace, lexicon, time).to_lowercase());
        },
        Field::PeriodUpper(namespace) => {
            out.push_str(&period_text(namespace, lexicon, time).to_uppercase());
        },

        Field::OffsetHhmm     => out.push_str(&offset_text(moment, false)),
        Field::OffsetColon    => out.push_str(&offset_text(moment, true)),
        Field::OffsetHour => {
            if let (false, Some(offset)) = (moment.is_clock_time(), moment.utc_offset()) {
                out.push_str(&pad_number(offset.abs() as i64 / 3600, '0'));
            }
        },

        Field::ZoneAbbreviation => match moment.spec() {
            TimeSpec::Utc      => out.push_str("UTC"),
            TimeSpec::Zone(zone) => {
                if let Some(utc) = moment.utc_clock() {
                    out.push_str(&zone.abbreviation(utc));
                }
            },
            _ => {},
        },

        Field::ZoneName => match moment.spec() {
            TimeSpec::Utc         => out.push_str("UTC"),
            TimeSpec::Zone(zone)  => out.push_str(zone.name()),
            _ => {},
        },
    }
}

fn table<'l>(namespace: Namespace, lexicon: &'l Lexicon) -> &'l Lexicon {
    match namespace {
        Namespace::Locale   => lexicon,
        Namespace::English  => &ENGLISH,
    }
}

fn pad_number(value: i64, pad_char: char) -> String {
    value.to_string().pad(2, pad_char, Alignment::Right, false)
}

/// The 12-hour-clock label for a time, taken from the lexicon’s period
/// set, with the conventional arithmetic as a fallback for period sets
/// that leave the time uncovered.
fn hour_in_period(time: LocalTime, lexicon: &Lexicon) -> i64 {
    let resolved = lexicon.periods()
                          .resolve(time)
                          .and_then(|period| period.hour_in_period(time));

    match resolved {
        Some(label)  => label as i64,
        None => {
            let hour = time.hour() as i64 % 12;
            if hour == 0 { 12 } else { hour }
        },
    }
}

fn period_text(namespace: Namespace, lexicon: &Lexicon, time: LocalTime) -> String {
    table(namespace, lexicon)
        .periods()
        .resolve(time)
        .map(|period| period.name(NameStyle::Short).to_string())
        .unwrap_or_default()
}

/// Renders an offset as `±HHMM` or `±HH:MM`. Clock time has no offset
/// and renders as nothing.
fn offset_text(moment: &Moment, colon: bool) -> String {
    if moment.is_clock_time() {
        return String::new();
    }

    match moment.utc_offset() {
        Some(offset)  => format_offset(offset, colon),
        None          => String::new(),
    }
}

pub(crate) fn format_offset(seconds: i32, colon: bool) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let magnitude = seconds.abs();

    if colon {
        format!("{}{:02}:{:02}", sign, magnitude / 3600, magnitude / 60 % 60)
    }
    else {
        format!("{}{:02}{:02}", sign, magnitude / 3600, magnitude / 60 % 60)
    }
}


/// Errors from parsing text against a pattern.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Error {

    /// A literal or token failed to match the input.
    Mismatch,

    /// A field’s value fell outside its numeric range, or the assembled
    /// fields don’t form a real date or time.
    OutOfRange,

    /// The same field was given twice with different values, or a named
    /// weekday disagrees with the assembled date.
    Contradiction,

    /// A zone abbreviation matched more than one candidate zone, and the
    /// options don’t permit falling back to the literal offset.
    AmbiguousZone,

    /// The pattern doesn’t produce enough fields to assemble a date.
    MissingFields,

    /// Strict mode: the pattern matched, but input was left over.
    TrailingInput,

    /// The date was coherent but falls before the representable span.
    TooEarly,

    /// The date was coherent but falls after the representable span.
    TooLate,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Mismatch       => write!(f, "input does not match the pattern"),
            Error::OutOfRange     => write!(f, "field value out of range"),
            Error::Contradiction  => write!(f, "fields contradict one another"),
            Error::AmbiguousZone  => write!(f, "zone abbreviation is ambiguous"),
            Error::MissingFields  => write!(f, "not enough fields to assemble a date"),
            Error::TrailingInput  => write!(f, "unconsumed input after the pattern"),
            Error::TooEarly       => write!(f, "date before the representable span"),
            Error::TooLate        => write!(f, "date after the representable span"),
        }
    }
}

impl ErrorTrait for Error {
}


/// Knobs for parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {

    /// Require the entire input to be consumed. The default is lax:
    /// trailing garbage after a successful match is ignored.
    pub strict: bool,

    /// Candidate zones for resolving a bare zone abbreviation.
    pub zones: Vec<ZoneRef>,

    /// When an abbreviation matches more than one candidate and a
    /// numeric offset was also parsed, fall back to the literal offset
    /// instead of failing.
    pub offset_resolves_ambiguity: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict: false,
            zones: Vec::new(),
            offset_resolves_ambiguity: true,
        }
    }
}


/// Everything gathered while walking the pattern, before assembly.
#[derive(Default)]
struct Collected {
    year:     Option<i64>,
    month:    Option<i8>,
    day:      Option<i8>,
    weekday:  Option<Weekday>,
    hour24:   Option<i8>,
    hour12:   Option<i32>,
    period:   Option<String>,
    minute:   Option<i8>,
    second:   Option<i8>,
    offset:   Option<i32>,
    utc:      bool,
    zone:     Option<ZoneRef>,
}

/// Stores a field value, rejecting a second, different value for the
/// same field.
fn put<T: PartialEq>(slot: &mut Option<T>, value: T) -> Result<(), Error> {
    match slot {
        Some(existing) if *existing != value  => Err(Error::Contradiction),
        _                                     => { *slot = Some(value); Ok(()) },
    }
}


/// A cursor over the input text, shared with the fixed-format parsers.
pub(crate) struct TextScanner<'a> {
    text: &'a str,
    pub(crate) pos: usize,
}

impl<'a> TextScanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos ..]
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub(crate) fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.text.len() - trimmed.len();
    }

    pub(crate) fn take_char(&mut self, expected: char) -> Result<(), Error> {
        match self.rest().chars().next() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            },
            _ => Err(Error::Mismatch),
        }
    }

    /// Consumes the given text case-insensitively, returning whether it
    /// was there.
    pub(crate) fn eat(&mut self, text: &str) -> bool {
        match self.rest().get(.. text.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(text) => {
                self.pos += text.len();
                true
            },
            _ => false,
        }
    }

    /// How many ASCII digits start the remaining input.
    pub(crate) fn digit_run(&self) -> usize {
        self.rest().chars().take_while(|c| c.is_ascii_digit()).count()
    }

    /// Consumes between `min` and `max` ASCII digits.
    pub(crate) fn take_digits(&mut self, min: usize, max: usize) -> Result<i64, Error> {
        let digits: String = self.rest().chars().take(max).take_while(|c| c.is_ascii_digit()).collect();

        if digits.len() < min {
            return Err(Error::Mismatch);
        }

        self.pos += digits.len();
        digits.parse().map_err(|_| Error::Mismatch)
    }

    /// Consumes a `+` or `-`, returning the signum.
    pub(crate) fn take_sign(&mut self) -> Option<i64> {
        if self.eat("+") {
            Some(1)
        }
        else if self.eat("-") {
            Some(-1)
        }
        else {
            None
        }
    }
}


/// What an offset-or-zone token found.
enum OffsetReading {
    Utc,
    Seconds(i32),
}

fn take_offset(scanner: &mut TextScanner<'_>) -> Result<OffsetReading, Error> {
    if scanner.eat("Z") {
        return Ok(OffsetReading::Utc);
    }

    let sign = scanner.take_sign().ok_or(Error::Mismatch)?;
    let hours = scanner.take_digits(2, 2)?;

    let minutes = if scanner.eat(":") {
        scanner.take_digits(2, 2)?
    }
    else {
        scanner.take_digits(2, 2).unwrap_or(0)
    };

    if hours > 23 || minutes > 59 {
        return Err(Error::OutOfRange);
    }

    Ok(OffsetReading::Seconds((sign * (hours * 3600 + minutes * 60)) as i32))
}

/// Longest case-insensitive match over a candidate name table.
fn take_name<T: Clone>(scanner: &mut TextScanner<'_>, candidates: &mut Vec<(T, String)>) -> Result<T, Error> {
    candidates.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

    for (value, name) in candidates.iter() {
        if !name.is_empty() && scanner.eat(name) {
            return Ok(value.clone());
        }
    }

    Err(Error::Mismatch)
}

/// The lexica a token in the given namespace may read names from. The
/// English tables always participate, so machine-generated text parses
/// under any locale.
fn sources<'l>(lexicon: &'l Lexicon, namespace: Namespace) -> Vec<&'l Lexicon> {
    match namespace {
        Namespace::English  => vec![&ENGLISH],
        Namespace::Locale   => vec![lexicon, &ENGLISH],
    }
}

fn month_candidates(lexicon: &Lexicon, namespace: Namespace) -> Vec<(i8, String)> {
    let mut candidates = Vec::new();

    for source in sources(lexicon, namespace) {
        for number in 1 ..= 12 {
            if let Ok(month) = Month::from_one(number) {
                candidates.push((number, source.month_name(month, true).to_string()));
                candidates.push((number, source.month_name(month, false).to_string()));
            }
        }
    }

    candidates
}

fn weekday_candidates(lexicon: &Lexicon, namespace: Namespace) -> Vec<(Weekday, String)> {
    let mut candidates = Vec::new();

    for source in sources(lexicon, namespace) {
        for number in 0 .. 7 {
            if let Ok(weekday) = Weekday::from_zero(number) {
                candidates.push((weekday, source.weekday_name(weekday, true).to_string()));
                candidates.push((weekday, source.weekday_name(weekday, false).to_string()));
            }
        }
    }

    candidates
}

/// Period names are matched from both the caller’s set and the English
/// one, whatever namespace the token came from: “am” text should parse
/// as AM no matter how the locale spells it. Each candidate pairs a name
/// with its period code.
fn period_candidates(lexicon: &Lexicon) -> Vec<(String, String)> {
    let mut candidates = Vec::new();

    for set in &[lexicon.periods(), ENGLISH.periods()] {
        for period in set.periods() {
            let code = period.code().to_string();
            for style in &[NameStyle::Long, NameStyle::Short, NameStyle::Narrow] {
                candidates.push((code.clone(), period.name(*style).to_string()));
            }
            candidates.push((code.clone(), code.clone()));
        }
    }

    candidates
}


/// Parses text against a pattern, with the default options.
pub fn parse(input: &str, pattern: &str, lexicon: &Lexicon) -> Result<Moment, Error> {
    parse_with(input, pattern, lexicon, &ParseOptions::default())
}

/// Parses text against a pattern.
///
/// Literal pattern characters must match literally, except that
/// whitespace in the pattern matches any run of whitespace. Each token
/// consumes the matching prefix of the input under the same range rules
/// it formats with. The specification of the result follows the zone
/// information found: an explicit UTC marker, a matched zone, a numeric
/// offset, or — when the pattern carries none — floating clock time.
pub fn parse_with(input: &str, pattern: &str, lexicon: &Lexicon, options: &ParseOptions)
    -> Result<Moment, Error>
{
    let fields = FormatScanner::new(pattern).scan();
    let mut scanner = TextScanner::new(input);
    let mut collected = Collected::default();

    let has_time_fields = fields.iter().any(Field::is_time_field);

    for (index, field) in fields.iter().enumerate() {
        match *field {
            Field::Literal(text) => {
                for c in text.chars() {
                    if c.is_whitespace() {
                        scanner.skip_whitespace();
                    }
                    else {
                        scanner.take_char(c)?;
                    }
                }
            },

            Field::Percent => scanner.take_char('%')?,

            Field::Unknown(c, colon) => {
                scanner.take_char('%')?;
                if colon {
                    scanner.take_char(':')?;
                }
                if c != '%' {
                    scanner.take_char(c)?;
                }
            },

            Field::Year => {
                let sign = scanner.take_sign().unwrap_or(1);
                let digits = scanner.take_digits(1, 9)?;
                put(&mut collected.year, sign * digits)?;
            },

            Field::YearOfCentury => {
                let value = scanner.take_digits(1, 2)?;
                let year = if value < 50 { 2000 + value } else { 1900 + value };
                put(&mut collected.year, year)?;
            },

            Field::MonthNumber => {
                let value = scanner.take_digits(1, 2)?;
                if !(1 ..= 12).contains(&value) {
                    return Err(Error::OutOfRange);
                }
                put(&mut collected.month, value as i8)?;
            },

            Field::MonthName(_, namespace) => {
                let month = take_name(&mut scanner, &mut month_candidates(lexicon, namespace))?;
                put(&mut collected.month, month)?;
            },

            Field::DayZero | Field::DaySpace => {
                scanner.skip_whitespace();
                let value = scanner.take_digits(1, 2)?;
                if !(1 ..= 31).contains(&value) {
                    return Err(Error::OutOfRange);
                }
                put(&mut collected.day, value as i8)?;
            },

            Field::WeekdayName(_, namespace) => {
                let weekday = take_name(&mut scanner, &mut weekday_candidates(lexicon, namespace))?;
                put(&mut collected.weekday, weekday)?;
            },

            Field::Hour24Zero | Field::Hour24Space => {
                scanner.skip_whitespace();
                let value = scanner.take_digits(1, 2)?;
                if value > 23 {
                    return Err(Error::OutOfRange);
                }
                put(&mut collected.hour24, value as i8)?;
            },

            Field::Hour12Zero | Field::Hour12Space => {
                scanner.skip_whitespace();
                let value = scanner.take_digits(1, 2)?;
                if !(1 ..= 12).contains(&value) {
                    return Err(Error::OutOfRange);
                }
                put(&mut collected.hour12, value as i32)?;
            },

            Field::Minute => {
                let value = scanner.take_digits(1, 2)?;
                if value > 59 {
                    return Err(Error::OutOfRange);
                }
                put(&mut collected.minute, value as i8)?;
            },

            Field::Second => {
                let value = scanner.take_digits(1, 2)?;
                if value > 59 {
                    return Err(Error::OutOfRange);
                }
                put(&mut collected.second, value as i8)?;
            },

            Field::PeriodLower(_) | Field::PeriodUpper(_) => {
                let code = take_name(&mut scanner, &mut period_candidates(lexicon))?;
                put(&mut collected.period, code)?;
            },

            Field::OffsetHhmm | Field::OffsetColon => {
                match take_offset(&mut scanner)? {
                    OffsetReading::Utc               => collected.utc = true,
                    OffsetReading::Seconds(seconds)  => put(&mut collected.offset, seconds)?,
                }
            },

            Field::OffsetHour => {
                let sign = scanner.take_sign().unwrap_or(1);
                let hours = scanner.take_digits(1, 2)?;
                if hours > 23 {
                    return Err(Error::OutOfRange);
                }
                put(&mut collected.offset, (sign * hours * 3600) as i32)?;
            },

            Field::ZoneAbbreviation | Field::ZoneName => {
                let terminator = fields.get(index + 1).and_then(|next| match next {
                    Field::Literal(text)  => text.chars().next(),
                    Field::Percent        => Some('%'),
                    _                     => None,
                });

                take_zone(&mut scanner, terminator, options, &mut collected)?;
            },
        }
    }

    if options.strict && !scanner.at_end() {
        return Err(Error::TrailingInput);
    }

    assemble(&collected, lexicon, has_time_fields)
}

/// Consumes a zone abbreviation or name up to the inferred terminator and
/// resolves it against the candidate zones.
fn take_zone(scanner: &mut TextScanner<'_>, terminator: Option<char>,
             options: &ParseOptions, collected: &mut Collected) -> Result<(), Error> {
    let rest = scanner.rest();
    let length = match terminator {
        Some(stop)  => rest.find(stop).unwrap_or_else(|| rest.len()),
        None        => rest.find(|c: char| !(c.is_alphanumeric()
                                             || matches!(c, '/' | '_' | '+' | '-' | ':')))
                           .unwrap_or_else(|| rest.len()),
    };

    let text = &rest[.. length];
    if text.is_empty() {
        return Err(Error::Mismatch);
    }
    scanner.pos += length;

    if ["UTC", "GMT", "UT", "Z"].iter().any(|known| known.eq_ignore_ascii_case(text)) {
        collected.utc = true;
        return Ok(());
    }

    let matches: Vec<&ZoneRef> = options.zones
                                        .iter()
                                        .filter(|zone| zone.matches_abbreviation(text))
                                        .collect();

    match matches.len() {
        0 => Err(Error::Mismatch),
        1 => {
            collected.zone = Some(matches[0].clone());
            Ok(())
        },
        _ => {
            // More than one zone answers to this abbreviation. The caller
            // decides whether a literal offset is an acceptable stand-in.
            if options.offset_resolves_ambiguity && collected.offset.is_some() {
                Ok(())
            }
            else {
                Err(Error::AmbiguousZone)
            }
        },
    }
}

/// Builds the final moment out of everything collected.
fn assemble(collected: &Collected, lexicon: &Lexicon, has_time_fields: bool)
    -> Result<Moment, Error>
{
    let year = collected.year.ok_or(Error::MissingFields)?;
    let month_number = collected.month.ok_or(Error::MissingFields)?;
    let day = collected.day.ok_or(Error::MissingFields)?;

    let month = Month::from_one(month_number).map_err(|_| Error::OutOfRange)?;
    let date = LocalDate::ymd(year, month, day).map_err(|error| match error {
        DateError::OutOfRange  => Error::OutOfRange,
        DateError::TooEarly    => Error::TooEarly,
        DateError::TooLate     => Error::TooLate,
    })?;

    // A parsed weekday is a cross-check, never a date source.
    if let Some(expected) = collected.weekday {
        if expected != date.weekday() {
            return Err(Error::Contradiction);
        }
    }

    let minute = collected.minute.unwrap_or(0);
    let second = collected.second.unwrap_or(0);

    let time = if let Some(hour) = collected.hour24 {
        // A 12-hour label alongside a 24-hour one must agree with it.
        if let (Some(label), Some(code)) = (collected.hour12, &collected.period) {
            let period = lexicon.periods().find(code)
                                .or_else(|| ENGLISH.periods().find(code))
                                .ok_or(Error::Mismatch)?;
            match period.time(label, minute, second, 0) {
                Some(time) if time.hour() == hour  => {},
                _                                  => return Err(Error::Contradiction),
            }
        }

        LocalTime::hms(hour, minute, second).map_err(|_| Error::OutOfRange)?
    }
    else if let Some(label) = collected.hour12 {
        match &collected.period {
            Some(code) => {
                let period = lexicon.periods().find(code)
                                    .or_else(|| ENGLISH.periods().find(code))
                                    .ok_or(Error::Mismatch)?;
                period.time(label, minute, second, 0).ok_or(Error::OutOfRange)?
            },

            // With no period to anchor it, the label is taken at face
            // value.
            None => LocalTime::hms(label as i8, minute, second).map_err(|_| Error::OutOfRange)?,
        }
    }
    else {
        LocalTime::hms(0, minute, second).map_err(|_| Error::OutOfRange)?
    };

    let spec = if collected.utc {
        TimeSpec::Utc
    }
    else if let Some(zone) = &collected.zone {
        TimeSpec::Zone(zone.clone())
    }
    else if let Some(offset) = collected.offset {
        TimeSpec::OffsetFromUtc(offset)
    }
    else {
        TimeSpec::ClockTime
    };

    if has_time_fields {
        Ok(Moment::new(date, time, spec))
    }
    else {
        Ok(Moment::date_only(date, spec))
    }
}
