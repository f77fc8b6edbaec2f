//! Datetime-to-string and string-to-datetime routines.
//!
//! Rendering comes in two shapes: the `%`-token engine in `pattern`, and
//! the fixed, bit-exact layouts in `fixed` (ISO-8601, RFC-822, and
//! friends). Both are driven by a [`Lexicon`], the locale-text capability
//! holding month and weekday names and the day-period set; the built-in
//! English lexicon is always available as a fallback.

pub mod fixed;
pub mod pattern;

pub use self::fixed::Style;

use lazy_static::lazy_static;

use crate::cal::datetime::{Month, Weekday};
use crate::cal::period::{DayPeriodSet, AM_PM};


/// The locale text a formatter consults: month names, weekday names, and
/// the day-period set. Nothing in here is ever looked up implicitly from
/// ambient state; callers pass the lexicon they want.
#[derive(PartialEq, Debug, Clone)]
pub struct Lexicon {
    months_long:   Vec<String>,
    months_short:  Vec<String>,

    // Day name tables are indexed with Sunday as day 0.
    days_long:     Vec<String>,
    days_short:    Vec<String>,

    periods:       DayPeriodSet,
}

impl Lexicon {

    /// The built-in English lexicon, with the standard AM/PM periods.
    pub fn english() -> Self {
        let mut months_long = Vec::new();
        let mut months_short = Vec::new();
        for month in (0..12).flat_map(Month::from_zero) {
            months_long.push(month.english_name(true).to_string());
            months_short.push(month.english_name(false).to_string());
        }

        let mut days_long = Vec::new();
        let mut days_short = Vec::new();
        for day in (0..7).flat_map(Weekday::from_zero) {
            days_long.push(day.english_name(true).to_string());
            days_short.push(day.english_name(false).to_string());
        }

        Self {
            months_long, months_short,
            days_long, days_short,
            periods: AM_PM.clone(),
        }
    }

    /// Builds a lexicon from the user’s locale data, keeping the standard
    /// AM/PM period set. Periods for locales that divide the day
    /// differently are supplied with `with_periods`.
    pub fn from_locale(time: &locale::Time) -> Self {
        Self {
            months_long:   (0..12).map(|i| time.long_month_name(i)).collect(),
            months_short:  (0..12).map(|i| time.short_month_name(i)).collect(),
            days_long:     (0..7).map(|i| time.long_day_name(i)).collect(),
            days_short:    (0..7).map(|i| time.short_day_name(i)).collect(),
            periods:       AM_PM.clone(),
        }
    }

    /// Replaces the day-period set.
    pub fn with_periods(mut self, periods: DayPeriodSet) -> Self {
        self.periods = periods;
        self
    }

    pub fn month_name(&self, month: Month, long: bool) -> &str {
        let table = if long { &self.months_long } else { &self.months_short };
        &table[month.months_from_january()]
    }

    pub fn weekday_name(&self, weekday: Weekday, long: bool) -> &str {
        let table = if long { &self.days_long } else { &self.days_short };
        &table[weekday as usize]
    }

    pub fn periods(&self) -> &DayPeriodSet {
        &self.periods
    }
}

lazy_static! {

    /// The shared English lexicon, used by the `%:` token namespace and
    /// as the fallback when no locale data is supplied.
    pub static ref ENGLISH: Lexicon = Lexicon::english();
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn english_names() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.month_name(Month::September, true), "September");
        assert_eq!(lexicon.month_name(Month::September, false), "Sep");
        assert_eq!(lexicon.weekday_name(Weekday::Wednesday, false), "Wed");
    }

    #[test]
    fn english_periods() {
        let lexicon = Lexicon::english();
        assert!(lexicon.periods().find("am").is_some());
        assert!(lexicon.periods().find("pm").is_some());
    }
}
