//! The core datetime value: a wall-clock reading paired with a time
//! specification saying how that reading anchors to the timeline.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;

use crate::cal::datetime::{Error as DateError, LocalDate, LocalDateTime, LocalTime};
use crate::cal::zone::{same_zone, system_zone, ZoneRef};
use crate::cal::{Calendar, DatePiece, Gregorian};
use crate::duration::Duration;
use crate::instant::Instant;


/// How a wall-clock reading anchors to the timeline.
#[derive(Debug, Clone)]
pub enum TimeSpec {

    /// Coordinated Universal Time.
    Utc,

    /// A fixed offset from UTC, in seconds, positive east of Greenwich.
    OffsetFromUtc(i32),

    /// A named time zone, consulted for the offset in effect at each
    /// reading.
    Zone(ZoneRef),

    /// Floating “clock time” with no zone attached: resolved against
    /// whatever the local zone happens to be at the moment of conversion,
    /// so it never observes a transition.
    ClockTime,

    /// The reading was coherent but falls before the representable span.
    TooEarly,

    /// The reading was coherent but falls after the representable span.
    TooLate,

    /// Not a time at all.
    Invalid,
}

impl TimeSpec {

    /// Whether this specification denotes an actual point or day on the
    /// timeline, rather than one of the error states.
    pub fn is_valid(&self) -> bool {
        !matches!(self, TimeSpec::TooEarly | TimeSpec::TooLate | TimeSpec::Invalid)
    }

    /// The zone handle, for the `Zone` variant.
    pub fn zone(&self) -> Option<&ZoneRef> {
        match self {
            TimeSpec::Zone(zone)  => Some(zone),
            _                     => None,
        }
    }
}

impl PartialEq for TimeSpec {
    fn eq(&self, other: &Self) -> bool {
        use self::TimeSpec::*;

        match (self, other) {
            (Utc, Utc)
            | (ClockTime, ClockTime)
            | (TooEarly, TooEarly)
            | (TooLate, TooLate)
            | (Invalid, Invalid)                   => true,
            (OffsetFromUtc(a), OffsetFromUtc(b))   => a == b,
            (Zone(a), Zone(b))                     => same_zone(a, b),
            _                                      => false,
        }
    }
}


/// How two moments’ (possibly day-long) intervals relate on the timeline.
///
/// A moment is a single instant unless it is date-only, in which case it
/// covers its whole day; the seven-way answer is what lets a caller ask
/// “does this event occur during this day” without re-deriving interval
/// logic.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Relation {

    /// This interval ends before the other begins.
    Before,

    /// This interval starts first and the two overlap.
    BeforeOverlap,

    /// The two intervals coincide exactly.
    Equal,

    /// This interval lies entirely within the other.
    ContainedBy,

    /// The other interval lies entirely within this one.
    Contains,

    /// This interval starts last and the two overlap.
    AfterOverlap,

    /// This interval starts after the other ends.
    After,
}


/// The UTC equivalent of a moment’s wall-clock reading, memoised after
/// the first conversion. For clock-time values the cache also remembers
/// which local zone produced it, so a system zone change invalidates it
/// without any notification machinery.
#[derive(Clone)]
struct Resolved {
    utc: LocalDateTime,
    local_zone: Option<String>,
}


/// A **moment** is the datetime value type: a wall-clock date and time
/// exactly as entered, a `TimeSpec` anchoring it to the timeline, and a
/// flag for date-only values whose time component is meaningless.
///
/// Moments are plain values. Every operation returns a new moment rather
/// than mutating in place, and the only interior state is the lazily
/// computed UTC cache, which is a pure memo: sharing a moment between
/// threads is safe as long as each thread owns its own copy.
#[derive(Clone)]
pub struct Moment {
    clock: LocalDateTime,
    spec: TimeSpec,
    date_only: bool,
    cache: RefCell<Option<Resolved>>,
}

impl Moment {

    /// Creates a moment from a date, a time, and a specification.
    pub fn new(date: LocalDate, time: LocalTime, spec: TimeSpec) -> Self {
        Self {
            clock: LocalDateTime::new(date, time),
            spec,
            date_only: false,
            cache: RefCell::new(None),
        }
    }

    /// Creates a date-only moment: a whole-day marker whose time
    /// component is pinned to the start of the day.
    pub fn date_only(date: LocalDate, spec: TimeSpec) -> Self {
        Self {
            clock: LocalDateTime::new(date, LocalTime::midnight()),
            spec,
            date_only: true,
            cache: RefCell::new(None),
        }
    }

    /// The invalid moment. It supports every read-only query, answering
    /// all of them with nothing.
    pub fn invalid() -> Self {
        Self::bad(TimeSpec::Invalid)
    }

    /// A moment in one of the error states. The placeholder reading never
    /// escapes: every query checks validity first.
    fn bad(spec: TimeSpec) -> Self {
        Self {
            clock: LocalDateTime::at(0),
            spec,
            date_only: false,
            cache: RefCell::new(None),
        }
    }

    /// Turns a date-construction error into the corresponding moment
    /// error state, keeping “malformed” distinct from “off the calendar”.
    pub fn from_date_error(error: DateError) -> Self {
        match error {
            DateError::OutOfRange  => Self::bad(TimeSpec::Invalid),
            DateError::TooEarly    => Self::bad(TimeSpec::TooEarly),
            DateError::TooLate     => Self::bad(TimeSpec::TooLate),
        }
    }

    /// Creates a moment at the given instant, represented in the given
    /// specification.
    pub fn from_instant(instant: Instant, spec: TimeSpec) -> Self {
        let utc = Self {
            clock: LocalDateTime::from_instant(instant),
            spec: TimeSpec::Utc,
            date_only: false,
            cache: RefCell::new(None),
        };

        utc.to_time_spec(&spec)
    }

    /// The current time, as a UTC moment.
    pub fn now_utc() -> Self {
        Self::from_instant(Instant::now(), TimeSpec::Utc)
    }

    /// The current time, in the system’s local zone.
    pub fn now_local() -> Self {
        Self::from_instant(Instant::now(), TimeSpec::Zone(system_zone()))
    }

    /// The current time, as a floating clock-time moment.
    pub fn now_clock() -> Self {
        Self::from_instant(Instant::now(), TimeSpec::ClockTime)
    }

    /// The wall-clock date, exactly as entered.
    pub fn date(&self) -> LocalDate {
        self.clock.date()
    }

    /// The wall-clock time, exactly as entered. Midnight for date-only
    /// values.
    pub fn time(&self) -> LocalTime {
        self.clock.time()
    }

    /// The wall-clock reading as a whole.
    pub fn clock(&self) -> LocalDateTime {
        self.clock
    }

    pub fn spec(&self) -> &TimeSpec {
        &self.spec
    }

    pub fn is_date_only(&self) -> bool {
        self.date_only
    }

    pub fn is_valid(&self) -> bool {
        self.spec.is_valid()
    }

    /// Whether this moment is anchored directly to UTC, either by the UTC
    /// spec itself or by a zero offset.
    pub fn is_utc(&self) -> bool {
        matches!(self.spec, TimeSpec::Utc | TimeSpec::OffsetFromUtc(0))
    }

    pub fn is_clock_time(&self) -> bool {
        matches!(self.spec, TimeSpec::ClockTime)
    }

    /// Re-flags this moment as date-only or not. Enabling pins the time
    /// to the start of the day.
    pub fn with_date_only(&self, date_only: bool) -> Self {
        if !self.is_valid() || date_only == self.date_only {
            return self.clone();
        }

        let time = if date_only { LocalTime::midnight() } else { self.time() };
        Self {
            clock: LocalDateTime::new(self.date(), time),
            spec: self.spec.clone(),
            date_only,
            cache: RefCell::new(None),
        }
    }

    /// Replaces the wall-clock time, keeping the date and specification.
    /// The result is no longer date-only.
    pub fn with_time(&self, time: LocalTime) -> Self {
        if !self.is_valid() {
            return self.clone();
        }

        Self {
            clock: self.clock.with_time(time),
            spec: self.spec.clone(),
            date_only: false,
            cache: RefCell::new(None),
        }
    }

    /// Re-labels this moment with a new specification *without* changing
    /// the wall-clock reading, so it denotes a different point on the
    /// timeline. Use `to_time_spec` to convert while preserving the
    /// instant.
    pub fn with_spec(&self, spec: TimeSpec) -> Self {
        Self {
            clock: self.clock,
            spec,
            date_only: self.date_only,
            cache: RefCell::new(None),
        }
    }

    /// The offset from UTC, in seconds, this moment’s reading is at.
    /// Clock time resolves against the current local zone.
    pub fn utc_offset(&self) -> Option<i32> {
        match &self.spec {
            TimeSpec::Utc                 => Some(0),
            TimeSpec::OffsetFromUtc(off)  => Some(*off),
            TimeSpec::Zone(zone)          => Some(zone.offset_at_zone_time(self.clock)),
            TimeSpec::ClockTime           => Some(system_zone().offset_at_zone_time(self.clock)),
            _                             => None,
        }
    }

    /// The UTC wall-clock equivalent of this moment, memoised where the
    /// conversion involves a zone lookup.
    pub(crate) fn utc_clock(&self) -> Option<LocalDateTime> {
        self.utc_clock_with(None)
    }

    /// As `utc_clock`, with an explicit stand-in for “the local zone”
    /// used to resolve clock time. `None` means ask the OS.
    pub(crate) fn utc_clock_with(&self, local_hint: Option<&ZoneRef>) -> Option<LocalDateTime> {
        match &self.spec {
            TimeSpec::Utc => Some(self.clock),

            TimeSpec::OffsetFromUtc(off) => Some(self.clock - Duration::of(*off as i64)),

            TimeSpec::Zone(zone) => {
                if let Some(resolved) = &*self.cache.borrow() {
                    return Some(resolved.utc);
                }

                let utc = zone.to_utc(self.clock);
                *self.cache.borrow_mut() = Some(Resolved { utc, local_zone: None });
                Some(utc)
            },

            TimeSpec::ClockTime => {
                let local = match local_hint {
                    Some(zone)  => zone.clone(),
                    None        => system_zone(),
                };

                // The memo is only good while the local zone that made it
                // is still the local zone.
                if let Some(resolved) = &*self.cache.borrow() {
                    if resolved.local_zone.as_deref() == Some(local.name()) {
                        return Some(resolved.utc);
                    }
                }

                let utc = local.to_utc(self.clock);
                *self.cache.borrow_mut() = Some(Resolved {
                    utc,
                    local_zone: Some(local.name().to_string()),
                });
                Some(utc)
            },

            _ => None,
        }
    }

    /// The instant this moment denotes. Date-only values answer with the
    /// start of their day.
    pub fn to_instant(&self) -> Option<Instant> {
        self.utc_clock().map(|utc| utc.to_instant())
    }

    /// Converts this moment to another specification, preserving the
    /// instant it denotes.
    ///
    /// Converting a date-only value never goes through a time of day: the
    /// date is simply re-anchored under the new specification.
    pub fn to_time_spec(&self, spec: &TimeSpec) -> Self {
        self.to_time_spec_with(spec, None)
    }

    /// As `to_time_spec`, with an explicit stand-in for “the local zone”
    /// used to resolve clock time on either side.
    pub fn to_time_spec_with(&self, spec: &TimeSpec, local_hint: Option<&ZoneRef>) -> Self {
        if !self.is_valid() || !spec.is_valid() {
            return Self::invalid();
        }

        // Same specification: nothing to convert, and the memo carries
        // over rather than being recomputed.
        if self.spec == *spec {
            return self.clone();
        }

        if self.date_only {
            return Self::date_only(self.date(), spec.clone());
        }

        let utc = match self.utc_clock_with(local_hint) {
            Some(utc)  => utc,
            None       => return Self::invalid(),
        };

        let (clock, resolved_zone) = match spec {
            TimeSpec::Utc                 => (utc, None),
            TimeSpec::OffsetFromUtc(off)  => (utc + Duration::of(*off as i64), None),
            TimeSpec::Zone(zone)          => (zone.to_zone_time(utc), None),
            TimeSpec::ClockTime => {
                let local = match local_hint {
                    Some(zone)  => zone.clone(),
                    None        => system_zone(),
                };
                let name = local.name().to_string();
                (local.to_zone_time(utc), Some(name))
            },
            _ => return Self::invalid(),
        };

        Self {
            clock,
            spec: spec.clone(),
            date_only: false,
            cache: RefCell::new(Some(Resolved { utc, local_zone: resolved_zone })),
        }
    }

    pub fn to_utc(&self) -> Self {
        self.to_time_spec(&TimeSpec::Utc)
    }

    pub fn to_zone(&self, zone: &ZoneRef) -> Self {
        self.to_time_spec(&TimeSpec::Zone(zone.clone()))
    }

    pub fn to_local_zone(&self) -> Self {
        self.to_time_spec(&TimeSpec::Zone(system_zone()))
    }

    pub fn to_clock_time(&self) -> Self {
        self.to_time_spec(&TimeSpec::ClockTime)
    }

    /// Converts to a fixed-offset specification using the offset in
    /// effect at this moment’s reading. The wall clock does not change.
    pub fn to_offset_spec(&self) -> Self {
        match self.utc_offset() {
            Some(offset)  => self.with_spec(TimeSpec::OffsetFromUtc(offset)),
            None          => Self::invalid(),
        }
    }

    /// Converts this moment into the specification of another one.
    pub fn to_time_spec_of(&self, other: &Self) -> Self {
        self.to_time_spec(&other.spec)
    }

    /// Returns this moment moved forwards by a number of seconds.
    ///
    /// For date-only values, only whole days of the shift move the date.
    /// Clock time adds naively on the wall clock, consistent with never
    /// observing a transition; so do UTC and fixed offsets, where the
    /// round trip through UTC cancels out. Only zoned moments convert,
    /// add, and convert back.
    pub fn add_seconds(&self, seconds: i64) -> Self {
        if !self.is_valid() {
            return self.clone();
        }

        if self.date_only {
            return self.add_days(seconds / 86400);
        }

        match &self.spec {
            TimeSpec::Zone(zone) => {
                let utc = match self.utc_clock() {
                    Some(utc)  => utc + Duration::of(seconds),
                    None       => return Self::invalid(),
                };

                let clock = zone.to_zone_time(utc);
                let shifted = Self {
                    clock,
                    spec: self.spec.clone(),
                    date_only: false,
                    cache: RefCell::new(Some(Resolved { utc, local_zone: None })),
                };
                shifted.classified()
            },

            _ => {
                let shifted = Self {
                    clock: self.clock + Duration::of(seconds),
                    spec: self.spec.clone(),
                    date_only: false,
                    cache: RefCell::new(None),
                };
                shifted.classified()
            },
        }
    }

    /// Returns this moment moved forwards by a number of days, leaving
    /// the time of day and the specification untouched.
    pub fn add_days(&self, days: i64) -> Self {
        if !self.is_valid() {
            return self.clone();
        }

        match self.date().add_days(days) {
            Ok(date)    => self.anchored_to(date),
            Err(error)  => Self::from_date_error(error),
        }
    }

    /// Returns this moment moved by a number of months in the default
    /// Gregorian calendar.
    pub fn add_months(&self, months: i64) -> Self {
        self.add_months_in(&Gregorian, months)
    }

    /// Returns this moment moved by a number of months in the given
    /// calendar. Only the date component is touched.
    pub fn add_months_in(&self, calendar: &dyn Calendar, months: i64) -> Self {
        if !self.is_valid() {
            return self.clone();
        }

        match calendar.add_months(self.date(), months) {
            Ok(date)    => self.anchored_to(date),
            Err(error)  => Self::from_date_error(error),
        }
    }

    /// Returns this moment moved by a number of years in the default
    /// Gregorian calendar.
    pub fn add_years(&self, years: i64) -> Self {
        self.add_years_in(&Gregorian, years)
    }

    /// Returns this moment moved by a number of years in the given
    /// calendar. Only the date component is touched.
    pub fn add_years_in(&self, calendar: &dyn Calendar, years: i64) -> Self {
        if !self.is_valid() {
            return self.clone();
        }

        match calendar.add_years(self.date(), years) {
            Ok(date)    => self.anchored_to(date),
            Err(error)  => Self::from_date_error(error),
        }
    }

    /// The same moment with a different date component.
    fn anchored_to(&self, date: LocalDate) -> Self {
        Self {
            clock: LocalDateTime::new(date, self.time()),
            spec: self.spec.clone(),
            date_only: self.date_only,
            cache: RefCell::new(None),
        }
    }

    /// Re-classifies a shifted moment whose date may have been pushed off
    /// the representable span.
    fn classified(self) -> Self {
        use crate::cal::datetime::{MAX_YEAR, MIN_YEAR};

        let year = self.clock.year();
        if year < MIN_YEAR {
            Self::bad(TimeSpec::TooEarly)
        }
        else if year > MAX_YEAR {
            Self::bad(TimeSpec::TooLate)
        }
        else {
            self
        }
    }

    /// The number of seconds from this moment to the other.
    ///
    /// If either side is date-only the answer is in whole days (see
    /// `days_to`) scaled to seconds. Two clock-time values subtract
    /// naively, so a transition between them is not double-counted.
    pub fn seconds_to(&self, other: &Self) -> Option<i64> {
        if !self.is_valid() || !other.is_valid() {
            return None;
        }

        if self.date_only || other.date_only {
            return self.days_to(other).map(|days| days * 86400);
        }

        if self.is_clock_time() && other.is_clock_time() {
            return Some((other.clock.to_instant() - self.clock.to_instant()).seconds());
        }

        let from = self.to_instant()?;
        let to = other.to_instant()?;
        Some((to - from).seconds())
    }

    /// The number of calendar days from this moment to the other.
    ///
    /// When one side is date-only, the other is brought into its
    /// specification first, so “how many days until that date” is asked
    /// in the date’s own terms. Two date-only values compare their raw
    /// dates directly.
    pub fn days_to(&self, other: &Self) -> Option<i64> {
        if !self.is_valid() || !other.is_valid() {
            return None;
        }

        let (from, to) = if self.date_only && other.date_only {
            (self.date(), other.date())
        }
        else if other.date_only {
            let aligned = self.to_time_spec(&other.spec);
            if !aligned.is_valid() {
                return None;
            }
            (aligned.date(), other.date())
        }
        else {
            let aligned = other.to_time_spec(&self.spec);
            if !aligned.is_valid() {
                return None;
            }
            (self.date(), aligned.date())
        };

        Some(to.days_since_1970() - from.days_since_1970())
    }

    /// The interval on the timeline this moment covers: a single instant,
    /// or the whole day for date-only values, in UTC terms.
    fn interval(&self) -> Option<(Instant, Instant)> {
        if self.date_only {
            let start = Self::new(self.date(), LocalTime::midnight(), self.spec.clone());
            let end = Self::new(self.date(), LocalTime::end_of_day(), self.spec.clone());
            Some((start.to_instant()?, end.to_instant()?))
        }
        else {
            let instant = self.to_instant()?;
            Some((instant, instant))
        }
    }

    /// How this moment’s interval relates to the other’s. `None` if
    /// either side is invalid.
    ///
    /// Two date-only values are spec-agnostic whole-day markers and
    /// relate by their raw dates; every other pairing converts both
    /// intervals to UTC first.
    pub fn relation_to(&self, other: &Self) -> Option<Relation> {
        if self.date_only && other.date_only {
            let ordering = self.date().days_since_1970().cmp(&other.date().days_since_1970());
            return Some(match ordering {
                Ordering::Less     => Relation::Before,
                Ordering::Equal    => Relation::Equal,
                Ordering::Greater  => Relation::After,
            });
        }

        let (start_a, end_a) = self.interval()?;
        let (start_b, end_b) = other.interval()?;

        Some(if end_a < start_b {
            Relation::Before
        }
        else if start_a > end_b {
            Relation::After
        }
        else if start_a == start_b && end_a == end_b {
            Relation::Equal
        }
        else if start_a >= start_b && end_a <= end_b {
            Relation::ContainedBy
        }
        else if start_a <= start_b && end_a >= end_b {
            Relation::Contains
        }
        else if start_a < start_b {
            Relation::BeforeOverlap
        }
        else {
            Relation::AfterOverlap
        })
    }
}

impl PartialEq for Moment {
    fn eq(&self, other: &Self) -> bool {
        if !self.is_valid() || !other.is_valid() {
            // Error states compare by kind, so an invalid moment still
            // equals another invalid moment.
            return !self.is_valid() && !other.is_valid() && self.spec == other.spec;
        }

        if self.date_only != other.date_only {
            return false;
        }

        if self.date_only {
            return self.date() == other.date();
        }

        match (self.to_instant(), other.to_instant()) {
            (Some(a), Some(b))  => a == b,
            _                   => false,
        }
    }
}

impl PartialOrd for Moment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.date_only && other.date_only {
            return Some(self.date().days_since_1970().cmp(&other.date().days_since_1970()));
        }

        let (start_a, end_a) = self.interval()?;
        let (start_b, end_b) = other.interval()?;
        Some(start_a.cmp(&start_b).then(end_a.cmp(&end_b)))
    }
}

impl fmt::Debug for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Moment({:?})", self.spec);
        }

        if self.date_only {
            write!(f, "Moment({:?} date-only, {:?})", self.clock.date(), self.spec)
        }
        else {
            write!(f, "Moment({:?}, {:?})", self.clock, self.spec)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::Month;
    use crate::cal::zone::{FixedZone, Timespan, TimespanZone};
    use std::sync::Arc;

    fn date(year: i64, month: Month, day: i8) -> LocalDate {
        LocalDate::ymd(year, month, day).unwrap()
    }

    fn time(hour: i8, minute: i8, second: i8) -> LocalTime {
        LocalTime::hms(hour, minute, second).unwrap()
    }

    fn plus_one() -> ZoneRef {
        Arc::new(FixedZone::of_hours_and_minutes(1, 0).unwrap())
    }

    /// A zone an hour ahead of UTC every northern summer, on the hour.
    fn dst_zone() -> ZoneRef {
        Arc::new(TimespanZone::new("Test/Summer",
            Timespan { offset: 0, is_dst: false, abbreviation: "TST".into() },
            vec![
                // 2009-03-29T01:00Z and 2009-10-25T01:00Z
                (1238288400, Timespan { offset: 3600, is_dst: true,  abbreviation: "TSS".into() }),
                (1256432400, Timespan { offset: 0,    is_dst: false, abbreviation: "TST".into() }),
            ]))
    }

    #[test]
    fn offset_conversion_round_trips() {
        let utc = Moment::new(date(2001, Month::February, 3), time(4, 5, 6), TimeSpec::Utc);
        let offset = utc.to_time_spec(&TimeSpec::OffsetFromUtc(5 * 3600 + 1800));

        assert_eq!(offset.time(), time(9, 35, 6));
        assert_eq!(offset.to_utc(), utc);
        assert_eq!(offset, utc);
    }

    #[test]
    fn zone_conversion_moves_the_clock() {
        let utc = Moment::new(date(2009, Month::June, 1), time(12, 0, 0), TimeSpec::Utc);
        let zoned = utc.to_zone(&dst_zone());

        assert_eq!(zoned.time(), time(13, 0, 0));
        assert_eq!(zoned.to_utc(), utc);
    }

    #[test]
    fn winter_is_unshifted() {
        let utc = Moment::new(date(2009, Month::January, 1), time(12, 0, 0), TimeSpec::Utc);
        let zoned = utc.to_zone(&dst_zone());

        assert_eq!(zoned.time(), time(12, 0, 0));
    }

    #[test]
    fn clock_time_resolves_against_the_hint() {
        let clock = Moment::new(date(2001, Month::May, 1), time(9, 0, 0), TimeSpec::ClockTime);
        let hint = plus_one();

        let utc = clock.to_time_spec_with(&TimeSpec::Utc, Some(&hint));
        assert_eq!(utc.time(), time(8, 0, 0));
    }

    #[test]
    fn date_only_conversion_reanchors() {
        let day = Moment::date_only(date(2002, Month::May, 3), TimeSpec::Utc);
        let moved = day.to_zone(&plus_one());

        assert!(moved.is_date_only());
        assert_eq!(moved.date(), date(2002, Month::May, 3));
    }

    #[test]
    fn zoned_addition_observes_transitions() {
        let zone = dst_zone();

        // 00:30 wall clock, half an hour before the spring-forward at
        // 01:00Z (= 01:00 wall, offset still zero).
        let before = Moment::new(date(2009, Month::March, 29), time(0, 30, 0),
                                 TimeSpec::Zone(zone.clone()));
        let after = before.add_seconds(3600);

        assert_eq!(after.time(), time(2, 30, 0));
    }

    #[test]
    fn clock_addition_is_naive() {
        let before = Moment::new(date(2009, Month::March, 29), time(0, 30, 0), TimeSpec::ClockTime);
        let after = before.add_seconds(3600);

        assert_eq!(after.time(), time(1, 30, 0));
        assert_eq!(before.seconds_to(&after), Some(3600));
    }

    #[test]
    fn date_only_addition_moves_whole_days() {
        let day = Moment::date_only(date(2001, Month::January, 1), TimeSpec::Utc);

        assert_eq!(day.add_seconds(86400 * 2 + 86399).date(),
                   date(2001, Month::January, 3));
        assert_eq!(day.add_seconds(86399).date(),
                   date(2001, Month::January, 1));
    }

    #[test]
    fn month_arithmetic_keeps_the_time() {
        let m = Moment::new(date(2001, Month::January, 31), time(10, 0, 0), TimeSpec::Utc);
        let next = m.add_months(1);

        assert_eq!(next.date(), date(2001, Month::February, 28));
        assert_eq!(next.time(), time(10, 0, 0));
    }

    #[test]
    fn differences() {
        let a = Moment::new(date(2001, Month::January, 1), time(0, 0, 0), TimeSpec::Utc);
        let b = Moment::new(date(2001, Month::January, 2), time(1, 0, 0), TimeSpec::Utc);

        assert_eq!(a.seconds_to(&b), Some(86400 + 3600));
        assert_eq!(b.seconds_to(&a), Some(-86400 - 3600));
        assert_eq!(a.days_to(&b), Some(1));
    }

    #[test]
    fn date_only_differences_use_days() {
        let a = Moment::date_only(date(2001, Month::January, 1), TimeSpec::Utc);
        let b = Moment::new(date(2001, Month::January, 3), time(23, 0, 0), TimeSpec::Utc);

        assert_eq!(a.seconds_to(&b), Some(2 * 86400));
    }

    #[test]
    fn relations() {
        let day = Moment::date_only(date(2001, Month::June, 10), TimeSpec::Utc);
        let during = Moment::new(date(2001, Month::June, 10), time(12, 0, 0), TimeSpec::Utc);
        let before = Moment::new(date(2001, Month::June, 9), time(12, 0, 0), TimeSpec::Utc);

        assert_eq!(during.relation_to(&day), Some(Relation::ContainedBy));
        assert_eq!(day.relation_to(&during), Some(Relation::Contains));
        assert_eq!(before.relation_to(&day), Some(Relation::Before));
        assert_eq!(day.relation_to(&before), Some(Relation::After));
        assert_eq!(during.relation_to(&during), Some(Relation::Equal));
    }

    #[test]
    fn date_only_pairs_compare_by_date() {
        let a = Moment::date_only(date(2001, Month::June, 10), TimeSpec::Utc);
        let b = Moment::date_only(date(2001, Month::June, 10), TimeSpec::OffsetFromUtc(-36000));

        assert_eq!(a.relation_to(&b), Some(Relation::Equal));
        assert_eq!(a, b);
    }

    #[test]
    fn mixed_precision_is_never_equal() {
        let day = Moment::date_only(date(2001, Month::June, 10), TimeSpec::Utc);
        let midnight = Moment::new(date(2001, Month::June, 10), time(0, 0, 0), TimeSpec::Utc);

        assert!(day != midnight);
    }

    #[test]
    fn invalid_values_are_inert() {
        let invalid = Moment::invalid();

        assert!(!invalid.is_valid());
        assert_eq!(invalid.to_instant(), None);
        assert_eq!(invalid.seconds_to(&Moment::now_utc()), None);
        assert!(!invalid.add_seconds(60).is_valid());
        assert_eq!(invalid, Moment::invalid());
    }

    #[test]
    fn classification_survives_arithmetic() {
        let day = Moment::date_only(date(999_999, Month::December, 31), TimeSpec::Utc);
        let pushed = day.add_days(1);

        assert!(!pushed.is_valid());
        assert_eq!(*pushed.spec(), TimeSpec::TooLate);
    }
}
