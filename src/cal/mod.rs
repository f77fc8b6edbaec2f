//! Calendar-facing building blocks: dates, times, day periods, zones, and
//! the calendar-system capability the datetime core consults.

pub mod datetime;
pub mod period;
pub mod zone;

use self::datetime::{Error, LocalDate, Month, Weekday, Year};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year().rem_euclid(100) }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16;
}


/// A **calendar** is the capability the datetime core uses for any
/// calculation that depends on how a culture arranges days into months
/// and years. The core never implements a calendar itself; it only calls
/// through this interface, so non-Gregorian systems can be supplied from
/// outside without the core changing.
pub trait Calendar {

    /// Whether the given fields form a real date in this calendar.
    fn is_valid_date(&self, year: i64, month: i8, day: i8) -> bool;

    /// The weekday a date falls on.
    fn day_of_week(&self, date: LocalDate) -> Weekday {
        date.weekday()
    }

    /// The name of a month, in long or abbreviated form.
    fn month_name(&self, month: Month, long: bool) -> String {
        month.english_name(long).to_string()
    }

    /// The name of a weekday, in long or abbreviated form.
    fn weekday_name(&self, weekday: Weekday, long: bool) -> String {
        weekday.english_name(long).to_string()
    }

    /// The date the given number of days away from the one passed in.
    fn add_days(&self, date: LocalDate, days: i64) -> Result<LocalDate, Error> {
        date.add_days(days)
    }

    /// The date the given number of months away, keeping the day of the
    /// month where possible.
    fn add_months(&self, date: LocalDate, months: i64) -> Result<LocalDate, Error>;

    /// The date the given number of years away, keeping the month and the
    /// day of the month where possible.
    fn add_years(&self, date: LocalDate, years: i64) -> Result<LocalDate, Error>;
}


/// The proleptic Gregorian calendar, the default `Calendar` capability.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Gregorian;

impl Calendar for Gregorian {

    fn is_valid_date(&self, year: i64, month: i8, day: i8) -> bool {
        match Month::from_one(month) {
            Ok(m)   => LocalDate::ymd(year, m, day).is_ok(),
            Err(_)  => false,
        }
    }

    fn add_months(&self, date: LocalDate, months: i64) -> Result<LocalDate, Error> {
        let absolute = date.year() * 12 + date.month().months_from_january() as i64 + months;
        let year = absolute.div_euclid(12);
        let month = Month::from_zero(absolute.rem_euclid(12) as i8)?;

        // Walking from the 31st of a long month into a shorter one lands
        // on the last day of the target month rather than overflowing.
        let day = std::cmp::min(date.day(), month.days_in_month(Year(year).is_leap_year()));
        LocalDate::ymd(year, month, day)
    }

    fn add_years(&self, date: LocalDate, years: i64) -> Result<LocalDate, Error> {
        let year = date.year() + years;

        // The only date that can stop existing across a whole-year jump
        // is the 29th of February.
        let day = std::cmp::min(date.day(), date.month().days_in_month(Year(year).is_leap_year()));
        LocalDate::ymd(year, date.month(), day)
    }
}
