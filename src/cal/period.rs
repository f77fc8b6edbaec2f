//! Day periods: named, possibly culture-specific sub-divisions of the
//! 24-hour day, such as AM/PM or “morning/afternoon/evening/night”.
//!
//! A period knows its place in the day and how to convert an absolute
//! hour into an “hour within the period” label (1 PM is hour 1 of the PM
//! period, not hour 13). The conversion constants are data rather than
//! logic, so alternative period sets need no code changes at all.

use lazy_static::lazy_static;

use crate::cal::datetime::LocalTime;
use crate::cal::TimePiece;
use crate::util::RangeExt;


/// Which of a period’s names to use.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum NameStyle {
    Long,
    Short,
    Narrow,
}


/// One named period of the day.
///
/// The bounds are inclusive at both ends. A period whose end is earlier
/// than its start is legal, and spans midnight: 22:00 to 05:59:59.999
/// covers late evening *and* early morning.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DayPeriod {
    code:         String,
    long_name:    String,
    short_name:   String,
    narrow_name:  String,
    start:        LocalTime,
    end:          LocalTime,

    /// Added to `hour - start.hour` when computing the hour-in-period
    /// label.
    offset_from_start: i32,

    /// The label the zero hour maps up to, and the step used to wrap
    /// labels back into range. 12 for the conventional 12-hour clock,
    /// where hour 0 is displayed as 12.
    offset_if_zero: i32,
}

impl DayPeriod {

    /// Creates a new day period. Periods are built once, when a locale’s
    /// configuration is loaded, and shared by value from then on.
    pub fn new(code: &str,
               long_name: &str, short_name: &str, narrow_name: &str,
               start: LocalTime, end: LocalTime,
               offset_from_start: i32, offset_if_zero: i32) -> Self {
        Self {
            code:         code.to_string(),
            long_name:    long_name.to_string(),
            short_name:   short_name.to_string(),
            narrow_name:  narrow_name.to_string(),
            start,
            end,
            offset_from_start,
            offset_if_zero,
        }
    }

    /// The default-constructed sentinel, which is not valid and answers
    /// every query with nothing.
    pub fn sentinel() -> Self {
        Self::new("", "", "", "", LocalTime::midnight(), LocalTime::midnight(), 0, 0)
    }

    /// A period is valid if it has a non-empty code. Times-of-day are
    /// valid by construction, so the code is the only thing left to check.
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty()
    }

    /// The unique key for this period, such as `"am"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn start(&self) -> LocalTime {
        self.start
    }

    pub fn end(&self) -> LocalTime {
        self.end
    }

    /// One of this period’s names.
    pub fn name(&self, style: NameStyle) -> &str {
        match style {
            NameStyle::Long    => &self.long_name,
            NameStyle::Short   => &self.short_name,
            NameStyle::Narrow  => &self.narrow_name,
        }
    }

    /// Whether the given time of day falls within this period.
    pub fn contains(&self, time: LocalTime) -> bool {
        if !self.is_valid() {
            return false;
        }

        if self.start <= self.end {
            time.is_within_inclusive(self.start ..= self.end)
        }
        else {
            // The period wraps past midnight, so it covers the outside of
            // the (end, start) gap instead of the inside of a range.
            time >= self.start || time <= self.end
        }
    }

    /// The “hour within this period” label for a time, such as 1 for
    /// 13:00 in the PM period, or `None` for times outside the period.
    pub fn hour_in_period(&self, time: LocalTime) -> Option<i32> {
        if !self.contains(time) {
            return None;
        }

        let mut hour = time.hour() as i32 - self.start.hour() as i32 + self.offset_from_start;
        while self.offset_if_zero > 0 && hour <= 0 {
            hour += self.offset_if_zero;
        }

        Some(hour)
    }

    /// The inverse of `hour_in_period`: reconstructs a time of day from an
    /// hour-in-period label and the smaller fields.
    ///
    /// A label equal to `offset_if_zero` is the zero hour (12 AM is hour
    /// 0). The reconstructed hour is stepped back down by `offset_if_zero`
    /// until it lands inside the day, mirroring the stepping-up that
    /// `hour_in_period` performs; if that misses, the label is tried as an
    /// absolute hour, which covers periods that wrap midnight. Whatever
    /// hour emerges must actually belong to this period, or the answer is
    /// `None`.
    pub fn time(&self, hour_in_period: i32, minute: i8, second: i8, millisecond: i16) -> Option<LocalTime> {
        if !self.is_valid() {
            return None;
        }

        let label = if hour_in_period == self.offset_if_zero { 0 } else { hour_in_period };
        let mut hour = label + self.start.hour() as i32 - self.offset_from_start;
        while self.offset_if_zero > 0 && hour >= 24 {
            hour -= self.offset_if_zero;
        }

        for &candidate in &[hour, hour_in_period] {
            if !candidate.is_within(0..24) {
                continue;
            }

            if let Ok(time) = LocalTime::hms_ms(candidate as i8, minute, second, millisecond) {
                if self.contains(time) {
                    return Some(time);
                }
            }
        }

        None
    }
}


/// An ordered collection of day periods for a locale.
///
/// Insertion order is evaluation order: when periods overlap, the first
/// match wins. A complete set covers every time of day; the standard
/// AM/PM pair always does.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DayPeriodSet {
    periods: Vec<DayPeriod>,
}

impl DayPeriodSet {

    pub fn new(periods: Vec<DayPeriod>) -> Self {
        Self { periods }
    }

    /// The period the given time of day falls in, or `None` if the set’s
    /// configuration leaves the time uncovered.
    pub fn resolve(&self, time: LocalTime) -> Option<&DayPeriod> {
        self.periods.iter().find(|p| p.contains(time))
    }

    /// Looks a period up by its code, case-insensitively.
    pub fn find(&self, code: &str) -> Option<&DayPeriod> {
        self.periods.iter().find(|p| p.code().eq_ignore_ascii_case(code))
    }

    pub fn periods(&self) -> &[DayPeriod] {
        &self.periods
    }
}

lazy_static! {

    /// The standard two-period AM/PM set.
    ///
    /// The constants are tuned so that the hour-in-period labels follow
    /// the conventional 12-hour clock: 00:00 is 12 AM, 01:00 is 1 AM,
    /// 12:00 is 12 PM, and 13:00 is 1 PM.
    pub static ref AM_PM: DayPeriodSet = DayPeriodSet::new(vec![
        DayPeriod::new("am", "AM", "AM", "A",
                       LocalTime::midnight(),
                       LocalTime::hms_ms(11, 59, 59, 999).unwrap_or_else(|_| LocalTime::midnight()),
                       0, 12),
        DayPeriod::new("pm", "PM", "PM", "P",
                       LocalTime::hms(12, 0, 0).unwrap_or_else(|_| LocalTime::midnight()),
                       LocalTime::end_of_day(),
                       -12, 12),
    ]);
}
