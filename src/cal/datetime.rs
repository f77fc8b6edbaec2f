//! Dates, times, datetimes, months, and weekdays.

use std::cmp::Ordering;
use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::duration::Duration;
use crate::instant::Instant;
use crate::system;
use crate::util::RangeExt;

use self::Month::*;
use self::Weekday::*;


/// The first year this library will represent.
///
/// Dates further back are not *malformed* — they get classified as “too
/// early”, so a caller can tell the difference between a date that never
/// existed and one that merely fell off the calendar.
pub const MIN_YEAR: i64 = -999_999;

/// The last year this library will represent. See `MIN_YEAR`.
pub const MAX_YEAR: i64 = 999_999;


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y: i64 = 365 * 4 + 1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between **1st January, 1970** and **1st March, 2000**,
/// the reference point for the calendar arithmetic below.
///
/// Anchoring the internal epoch immediately after a possible leap-year day,
/// on a year that’s a multiple of 400, reduces the day-to-date calculation
/// to simple division over the Gregorian 400-year cycle. The 1970-based
/// epoch everyone expects is recovered by adding this difference, so the
/// internal epoch never leaks out of this module.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.

/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the internal epoch), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// The number of days in this year: 365, or 366 for leap years.
    pub fn days(self) -> i64 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // This calculation is the reverse of LocalDate::from_days_since_epoch.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    millisecond: i16,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and
    /// day fields.
    ///
    /// The values are checked for validity before instantiation: a day out
    /// of range for its month is `Error::OutOfRange`, and a year beyond
    /// the representable span is classified as `Error::TooEarly` or
    /// `Error::TooLate` so the caller can report *why*.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use locus::cal::datetime::{LocalDate, Month};
    /// use locus::cal::DatePiece;
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        classify_year(year)?;
        let ymd = YMD { year, month, day };

        if !ymd.is_valid() {
            return Err(Error::OutOfRange);
        }

        Ok(Self::from_days_since_epoch(ymd.days_since_1970() - EPOCH_DIFFERENCE))
    }

    /// Creates a new local date instance from the given year and
    /// day-of-year values, where the 1st of January is day 1.
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        classify_year(year)?;

        if !yearday.is_within(1 .. Year(year).days() + 1) {
            return Err(Error::OutOfRange);
        }

        let jan_1 = YMD { year, month: January, day: 1 };
        Ok(Self::from_days_since_epoch(jan_1.days_since_1970() + yearday - 1 - EPOCH_DIFFERENCE))
    }

    /// Creates a new local date instance from the given year, ISO
    /// week-of-year, and weekday values.
    ///
    /// According to the ISO-8601 standard, the resulting year can differ
    /// from the one passed in when working with dates early in week 1, or
    /// late in week 53.
    pub fn ywd(year: i64, week: i64, weekday: Weekday) -> Result<Self, Error> {
        classify_year(year)?;

        let jan_4 = YMD { year, month: January, day: 4 };
        let correction = days_to_weekday(jan_4.days_since_1970() - EPOCH_DIFFERENCE)
            .days_from_monday_as_one() as i64 + 3;

        let yearday = 7 * week + weekday.days_from_monday_as_one() as i64 - correction;

        if yearday <= 0 {
            Self::yd(year - 1, Year(year - 1).days() + yearday)
        }
        else if yearday > Year(year).days() {
            Self::yd(year + 1, yearday - Year(year).days())
        }
        else {
            Self::yd(year, yearday)
        }
    }

    /// Computes a LocalDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since the internal epoch,
    /// the 1st of March, 2000.
    ///
    /// The Gregorian calendar works in 400-year cycles, so the calculation
    /// peels off the number of whole 400-year, 100-year, and 4-year cycles
    /// before scanning the time triangle for the month.
    fn from_days_since_epoch(days: i64) -> Self {
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        let num_100y_cycles = remainder / DAYS_IN_100Y;
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // days left in this 4-year cycle

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // days left in this year

        // A year is a leap year if it’s a multiple of 4, unless it’s a
        // multiple of 100 that isn’t also a multiple of 400. The cycle
        // counts computed above answer all three tests.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // The 306 below is the number of days in a year excluding January
        // and February, which the internal epoch skips over.
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;  // wrap around for January and February
        }

        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Scan the time triangle for the month with the correct number of
        // elapsed days at its end (it’s “11 - index” because the triangle
        // goes backwards).
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s February.
        };

        // Add 2 to compensate for the epoch being in March, wrapping
        // January and February around into the next year.
        month += 2;
        if month >= 12 {
            years += 1;
            month -= 12;
        }

        // The wrap above leaves the month in (0..12), so from_zero is
        // always going to find a variant.
        let month_variant = Month::from_zero(month as i8)
            .unwrap_or(January);

        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  years + 2000,
                month: month_variant,
                day:   (month_days + 1) as i8,
            },
        }
    }

    /// The number of days between the 1st of January, 1970 and this date.
    /// Negative for dates before it.
    pub fn days_since_1970(self) -> i64 {
        self.ymd.days_since_1970()
    }

    /// Returns the date the given number of days after (or, for negative
    /// arguments, before) this one, classifying results that fall off the
    /// calendar as too early or too late.
    pub fn add_days(self, days: i64) -> Result<Self, Error> {
        let shifted = self.days_since_1970()
                          .checked_add(days)
                          .ok_or(if days < 0 { Error::TooEarly } else { Error::TooLate })?;

        let date = Self::from_days_since_epoch(shifted - EPOCH_DIFFERENCE);
        classify_year(date.year())?;
        Ok(date)
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if year.is_within(0 .. 10000) {
            write!(f, "LocalDate({:04}-{:02}-{:02})", year, self.month() as usize, self.day())
        }
        else {
            write!(f, "LocalDate({:+05}-{:02}-{:02})", year, self.month() as usize, self.day())
        }
    }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


impl LocalTime {

    /// Returns the time at midnight, with all fields initialised to 0.
    /// This is the canonical time component of a date-only value.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, millisecond: 0 }
    }

    /// Returns the last representable time of a day, 23:59:59.999. Used
    /// as the closing bound of whole-day intervals and wrapped day-period
    /// ranges.
    pub fn end_of_day() -> Self {
        Self { hour: 23, minute: 59, second: 59, millisecond: 999 }
    }

    /// Creates a new timestamp instance with the given hour and minute
    /// fields. The second and millisecond fields are set to 0.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, 0, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The millisecond field is set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and millisecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<Self, Error> {
        if hour.is_within(0..24)   && minute.is_within(0..60)
        && second.is_within(0..60) && millisecond.is_within(0..1000)
        {
            Ok(Self { hour, minute, second, millisecond })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Computes the hour, minute, and second fields from the number of
    /// seconds that have elapsed since midnight, plus the millisecond.
    pub fn from_seconds_since_midnight(seconds: i64, millisecond: i16) -> Self {
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            millisecond,
        }
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring milliseconds.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }

    /// The number of milliseconds since midnight this time is at.
    pub fn milliseconds_since_midnight(self) -> i64 {
        self.to_seconds() * 1000 + self.millisecond as i64
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { self.millisecond }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalTime({:02}:{:02}:{:02}.{:03})",
               self.hour, self.minute, self.second, self.millisecond)
    }
}


impl LocalDateTime {

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Computes a complete date-time based on the values in the given
    /// Instant parameter.
    pub fn from_instant(instant: Instant) -> Self {
        Self::at_ms(instant.seconds(), instant.milliseconds())
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, setting the
    /// number of milliseconds to 0.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::at_ms(seconds_since_1970_epoch, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**.
    pub fn at_ms(seconds_since_1970_epoch: i64, millisecond_of_second: i16) -> Self {
        let seconds = seconds_since_1970_epoch - EPOCH_DIFFERENCE * SECONDS_IN_DAY;

        // Split the input into days and seconds-of-day, and let LocalDate
        // and LocalTime do all the hard work.
        let (days, secs) = split_cycles(seconds, SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_epoch(days),
            time: LocalTime::from_seconds_since_midnight(secs, millisecond_of_second),
        }
    }

    /// Creates a new date-time stamp set to the current time.
    pub fn now() -> Self {
        let (s, ms) = system::sys_time();
        Self::at_ms(s, ms)
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Replaces the time portion, keeping the date.
    pub fn with_time(&self, time: LocalTime) -> Self {
        Self { date: self.date, time }
    }

    pub fn to_instant(&self) -> Instant {
        let seconds = self.date.days_since_1970() * SECONDS_IN_DAY + self.time.to_seconds();
        Instant::at_ms(seconds, self.time.millisecond as i64)
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> i8 { self.date.day() }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn millisecond(&self) -> i16 { self.time.millisecond }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalDateTime({:?}T{:?})", self.date, self.time)
    }
}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self::from_instant(self.to_instant() + duration)
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::from_instant(self.to_instant() - duration)
    }
}


/// A **YMD** is an implementation detail of `LocalDate`, with no validity
/// guarantees of its own: the interface to `LocalDate` ensures that it is
/// impossible to construct an instance of the 74th of March, but a `YMD`
/// holding those fields is perfectly fine. For this reason, it is not
/// exposed outside this module.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st of
    /// January, 1970, assuming the fields have already been validated.
    fn days_since_1970(self) -> i64 {
        let years = self.year - 2000;
        let (leap_days_elapsed, is_leap_year) = Year(self.year).leap_year_calculations();

        // A multiple of the number of years elapsed...
        years * 365

            // Plus the number of days between the start of 1970 and the
            // start of 2000...
            + 10958

            // Plus the number of leap years between now and 2000...
            + leap_days_elapsed

            // Plus the days in all the months before this one...
            + self.month.days_before_start() as i64

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the 0-indexed number of days into the month so far.
            + (self.day - 1) as i64
    }

    /// Returns whether the day is in the range allowed by the month.
    fn is_valid(self) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(Year(self.year).is_leap_year())
    }
}

/// Classifies a year as representable, too early, or too late.
fn classify_year(year: i64) -> Result<(), Error> {
    if year < MIN_YEAR {
        Err(Error::TooEarly)
    }
    else if year > MAX_YEAR {
        Err(Error::TooLate)
    }
    else {
        Ok(())
    }
}

/// Computes the weekday, given the number of days that have passed since
/// the internal epoch.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    let weekday = (days + 3) % 7;

    // The modulo above leaves the value in (-6..7), so wrapping the
    // negative side makes from_zero always find a variant.
    Weekday::from_zero(if weekday < 0 { weekday + 7 } else { weekday } as i8)
        .unwrap_or(Sunday)
}

/// Split a number of periods into a number of cycles, and the number of
/// periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


/// Errors from constructing date or time values.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {

    /// A field fell outside the range allowed by its neighbours, such as
    /// a 31st of April or a 25 o’clock.
    OutOfRange,

    /// The fields were coherent, but the date falls before the span this
    /// library can represent.
    TooEarly,

    /// The fields were coherent, but the date falls after the span this
    /// library can represent.
    TooLate,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange  => write!(f, "datetime field out of range"),
            Error::TooEarly    => write!(f, "date before the representable span"),
            Error::TooLate     => write!(f, "date after the representable span"),
        }
    }
}

impl ErrorTrait for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before*
    /// this month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// The number of months between January and this month, for indexing
    /// into 0-based name tables.
    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// The English name of this month, in long or abbreviated form. The
    /// abbreviation is always the first three letters.
    pub fn english_name(self, long: bool) -> &'static str {
        let name = match self {
            January => "January",  February => "February",  March     => "March",
            April   => "April",    May      => "May",       June      => "June",
            July    => "July",     August   => "August",    September => "September",
            October => "October",  November => "November",  December  => "December",
        };

        if long { name } else { &name[..3] }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    pub fn from_one(month: i8) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::OutOfRange),
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        Self::from_one(month + 1)
    }
}


/// A named day of the week.
///
/// Sunday is Day 0. This seems to be a North American thing? It’s pretty
/// much an arbitrary choice, but it matches the indexing the locale name
/// tables use, and the field is ignored when comparing dates anyway.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

impl Weekday {

    /// The ISO-8601 day number, with Monday as day 1 and Sunday as day 7.
    pub fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// The English name of this weekday, in long or abbreviated form. The
    /// abbreviation is always the first three letters.
    pub fn english_name(self, long: bool) -> &'static str {
        let name = match self {
            Sunday    => "Sunday",     Monday   => "Monday",  Tuesday => "Tuesday",
            Wednesday => "Wednesday",  Thursday => "Thursday",
            Friday    => "Friday",     Saturday => "Saturday",
        };

        if long { name } else { &name[..3] }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday
    /// as Day 1, and so on.
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::OutOfRange),
        })
    }

    /// Return the weekday based on the ISO-8601 day number, with Monday
    /// as Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            7 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::OutOfRange),
        })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::{DatePiece, TimePiece};

    #[test]
    fn some_leap_years() {
        for year in &[2004, 2008, 2012, 2016] {
            assert!(LocalDate::ymd(*year, February, 29).is_ok());
            assert!(LocalDate::ymd(*year + 1, February, 29).is_err());
        }

        assert!(LocalDate::ymd(1600, February, 29).is_ok());
        assert!(LocalDate::ymd(1601, February, 29).is_err());
        assert!(LocalDate::ymd(1602, February, 29).is_err());
    }

    #[test]
    fn invalid_days() {
        for year in 1..3000 {
            assert!(LocalDate::ymd(year, January,   32).is_err());
            assert!(LocalDate::ymd(year, February,  30).is_err());
            assert!(LocalDate::ymd(year, April,     31).is_err());
            assert!(LocalDate::ymd(year, September, 31).is_err());
            assert!(LocalDate::ymd(year, December,  32).is_err());
        }
    }

    #[test]
    fn too_early_and_too_late() {
        assert_eq!(LocalDate::ymd(MIN_YEAR - 1, June, 1).unwrap_err(), Error::TooEarly);
        assert_eq!(LocalDate::ymd(MAX_YEAR + 1, June, 1).unwrap_err(), Error::TooLate);
        assert!(LocalDate::ymd(MIN_YEAR, June, 1).is_ok());
        assert!(LocalDate::ymd(MAX_YEAR, June, 1).is_ok());
    }

    #[test]
    fn round_trips_through_the_epoch() {
        for date in &[
            LocalDate::ymd(1970, January,   1).unwrap(),
            LocalDate::ymd(   1, January,   1).unwrap(),
            LocalDate::ymd(1971, January,   1).unwrap(),
            LocalDate::ymd(1989, November, 10).unwrap(),
            LocalDate::ymd(1990, July,      8).unwrap(),
            LocalDate::ymd(2014, July,     13).unwrap(),
            LocalDate::ymd(2001, February,  3).unwrap(),
        ] {
            assert_eq!(*date,
                LocalDate::from_days_since_epoch(date.days_since_1970() - EPOCH_DIFFERENCE));
        }
    }

    #[test]
    fn yearday_wraps() {
        let date = LocalDate::yd(2015, 268).unwrap();
        assert_eq!(date.month(), September);
        assert_eq!(date.day(), 25);

        // On leap years the same yearday is a day earlier.
        let date = LocalDate::yd(2016, 268).unwrap();
        assert_eq!(date.month(), September);
        assert_eq!(date.day(), 24);
    }

    #[test]
    fn week_dates() {
        let date = LocalDate::ywd(2015, 37, Friday).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2015, September, 11));

        // Early in week 1 the ISO year reaches back into December.
        let date = LocalDate::ywd(2009, 1, Monday).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2008, December, 29));

        let date = LocalDate::ywd(2009, 53, Sunday).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2010, January, 3));
    }

    #[test]
    fn day_arithmetic() {
        let date = LocalDate::ymd(2000, February, 28).unwrap();
        assert_eq!(date.add_days(1).unwrap(), LocalDate::ymd(2000, February, 29).unwrap());
        assert_eq!(date.add_days(2).unwrap(), LocalDate::ymd(2000, March, 1).unwrap());
        assert_eq!(date.add_days(-59).unwrap(), LocalDate::ymd(1999, December, 31).unwrap());
    }

    #[test]
    fn instants() {
        let when = LocalDateTime::at(0);
        assert_eq!((when.year(), when.month(), when.day()), (1970, January, 1));
        assert_eq!(when.to_instant().seconds(), 0);

        let when = LocalDateTime::at_ms(86400 + 3600, 500);
        assert_eq!(when.hour(), 1);
        assert_eq!(when.millisecond(), 500);
        assert_eq!(when.to_instant(), Instant::at_ms(86400 + 3600, 500));
    }

    mod debug {
        use super::*;

        #[test]
        fn recently() {
            let date = LocalDate::ymd(1600, February, 28).unwrap();
            assert_eq!(format!("{:?}", date), "LocalDate(1600-02-28)");
        }

        #[test]
        fn just_then() {
            let date = LocalDate::ymd(-753, December, 1).unwrap();
            assert_eq!(format!("{:?}", date), "LocalDate(-0753-12-01)");
        }

        #[test]
        fn far_far_future() {
            let date = LocalDate::ymd(10601, January, 31).unwrap();
            assert_eq!(format!("{:?}", date), "LocalDate(+10601-01-31)");
        }

        #[test]
        fn midday() {
            let time = LocalTime::hms(12, 0, 0).unwrap();
            assert_eq!(format!("{:?}", time), "LocalTime(12:00:00.000)");
        }
    }
}
