//! Time zones as a capability: converting wall-clock datetimes to UTC and
//! back, and reporting the offset in effect at a given point.
//!
//! The datetime core only ever talks to the `Zone` trait. Concrete zones
//! come from outside: a fixed offset, a list of transition timespans, or
//! the operating system’s zone database.

use std::fmt;
use std::sync::Arc;

use crate::cal::datetime::{Error, LocalDateTime};
use crate::duration::Duration;
use crate::system;
use crate::util::RangeExt;


/// A shared handle to a zone. Zones are read-mostly shared services;
/// values hold handles, never owned zones.
pub type ZoneRef = Arc<dyn Zone + Send + Sync>;

/// The **zone** capability.
///
/// Implementations answer two questions - what offset applies at a UTC
/// instant, and what offset applies at a wall-clock reading - and
/// everything else follows from those.
pub trait Zone: fmt::Debug {

    /// This zone’s name, such as “Europe/London” or “UTC+01:00”. Names
    /// are also the identity: two handles refer to the same zone when
    /// their names are equal.
    fn name(&self) -> &str;

    /// The total offset from UTC, in seconds, in effect at the given UTC
    /// datetime.
    fn offset_at_utc(&self, utc: LocalDateTime) -> i32;

    /// The total offset from UTC, in seconds, in effect when a wall clock
    /// in this zone shows the given datetime. During the repeated hour of
    /// a backwards transition the earlier of the two candidate offsets is
    /// chosen.
    fn offset_at_zone_time(&self, wall: LocalDateTime) -> i32;

    /// The abbreviation in use at the given UTC datetime, such as “GMT”
    /// or “PDT”. Abbreviations are notoriously vague, and should only be
    /// used when referring to a known zone.
    fn abbreviation(&self, utc: LocalDateTime) -> String;

    /// Whether this zone has ever been known by the given abbreviation.
    /// Parsers use this to resolve a bare abbreviation against a caller’s
    /// list of candidate zones.
    fn matches_abbreviation(&self, abbreviation: &str) -> bool {
        self.name() == abbreviation
    }

    /// Converts a UTC datetime to the wall-clock reading in this zone.
    fn to_zone_time(&self, utc: LocalDateTime) -> LocalDateTime {
        utc + Duration::of(self.offset_at_utc(utc) as i64)
    }

    /// Converts a wall-clock reading in this zone to UTC.
    fn to_utc(&self, wall: LocalDateTime) -> LocalDateTime {
        wall - Duration::of(self.offset_at_zone_time(wall) as i64)
    }
}

/// Whether two zone handles refer to the same zone.
pub fn same_zone(a: &ZoneRef, b: &ZoneRef) -> bool {
    a.name() == b.name()
}

/// A handle to the UTC zone.
pub fn utc() -> ZoneRef {
    Arc::new(FixedZone::utc())
}

/// A handle to the system’s current local zone. This re-queries the OS,
/// so calling it again after the system zone has been reconfigured
/// returns the new zone.
pub fn system_zone() -> ZoneRef {
    Arc::new(SystemZone::new())
}


/// A zone with a single offset that never transitions.
#[derive(PartialEq, Debug, Clone)]
pub struct FixedZone {
    name: String,
    offset: i32,
}

impl FixedZone {

    pub fn utc() -> Self {
        Self { name: String::from("UTC"), offset: 0 }
    }

    /// Creates a fixed zone the given number of seconds ahead of UTC
    /// (negative for behind), named after its offset.
    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if !seconds.is_within(-86400 .. 86401) {
            return Err(Error::OutOfRange);
        }

        let sign = if seconds < 0 { '-' } else { '+' };
        let magnitude = seconds.abs();
        let name = format!("UTC{}{:02}:{:02}", sign, magnitude / 3600, magnitude / 60 % 60);

        Ok(Self { name, offset: seconds })
    }

    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if hours.signum() * minutes.signum() == -1
        || !hours.is_within(-23 .. 24) || !minutes.is_within(-59 .. 60) {
            return Err(Error::OutOfRange);
        }

        Self::of_seconds(hours as i32 * 3600 + minutes as i32 * 60)
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }
}

impl Zone for FixedZone {
    fn name(&self) -> &str {
        &self.name
    }

    fn offset_at_utc(&self, _utc: LocalDateTime) -> i32 {
        self.offset
    }

    fn offset_at_zone_time(&self, _wall: LocalDateTime) -> i32 {
        self.offset
    }

    fn abbreviation(&self, _utc: LocalDateTime) -> String {
        self.name.clone()
    }
}


/// An individual timespan with a fixed offset, between two transitions.
#[derive(PartialEq, Debug, Clone)]
pub struct Timespan {

    /// The *total* offset in effect during this timespan, in seconds:
    /// the zone’s standard offset plus any daylight-saving offset.
    pub offset: i32,

    /// Whether a daylight-saving offset was in effect.
    pub is_dst: bool,

    /// The abbreviation in use during this timespan.
    pub abbreviation: String,
}

/// A zone described by a list of timespans, separated by the instants at
/// which one timespan changes over to the next. There is always one more
/// timespan than transitions.
#[derive(PartialEq, Debug, Clone)]
pub struct TimespanZone {
    name: String,

    /// The timespan in effect before the first transition (if any).
    first: Timespan,

    /// The remaining timespans, each paired with the Unix timestamp at
    /// which it takes effect.
    rest: Vec<(i64, Timespan)>,
}

impl TimespanZone {

    pub fn new(name: &str, first: Timespan, rest: Vec<(i64, Timespan)>) -> Self {
        Self { name: name.to_string(), first, rest }
    }

    fn find(&self, time: i64) -> &Timespan {
        match self.rest.iter().take_while(|t| t.0 <= time).last() {
            None      => &self.first,
            Some(zd)  => &zd.1,
        }
    }
}

impl Zone for TimespanZone {
    fn name(&self) -> &str {
        &self.name
    }

    fn offset_at_utc(&self, utc: LocalDateTime) -> i32 {
        self.find(utc.to_instant().seconds()).offset
    }

    fn offset_at_zone_time(&self, wall: LocalDateTime) -> i32 {
        // The wall-clock reading doesn’t say which side of a transition
        // it’s on, so guess using the reading itself, then re-check the
        // guess against the timestamp it implies.
        let reading = wall.to_instant().seconds();

        let first_guess = self.find(reading).offset;
        let second_guess = self.find(reading - first_guess as i64).offset;

        if self.find(reading - second_guess as i64).offset == second_guess {
            second_guess
        }
        else {
            first_guess
        }
    }

    fn abbreviation(&self, utc: LocalDateTime) -> String {
        self.find(utc.to_instant().seconds()).abbreviation.clone()
    }

    fn matches_abbreviation(&self, abbreviation: &str) -> bool {
        self.name() == abbreviation
            || self.first.abbreviation == abbreviation
            || self.rest.iter().any(|(_, span)| span.abbreviation == abbreviation)
    }
}


/// The zone the operating system is configured with. Offsets and
/// abbreviations come from the C library on every query, so a value of
/// this type never goes stale; the *name* is captured at construction,
/// which is what lets a later handle detect that the system zone has
/// changed.
#[derive(Debug)]
pub struct SystemZone {
    name: String,
}

impl SystemZone {
    pub fn new() -> Self {
        let name = system::sys_timezone().unwrap_or_else(|| String::from("Local"));
        Self { name }
    }
}

impl Default for SystemZone {
    fn default() -> Self {
        Self::new()
    }
}

impl Zone for SystemZone {
    fn name(&self) -> &str {
        &self.name
    }

    fn offset_at_utc(&self, utc: LocalDateTime) -> i32 {
        system::local_offset_at(utc.to_instant().seconds()).0
    }

    fn offset_at_zone_time(&self, wall: LocalDateTime) -> i32 {
        let reading = wall.to_instant().seconds();

        let (first_guess, _) = system::local_offset_at(reading);
        let (second_guess, _) = system::local_offset_at(reading - first_guess as i64);

        if system::local_offset_at(reading - second_guess as i64).0 == second_guess {
            second_guess
        }
        else {
            first_guess
        }
    }

    fn abbreviation(&self, utc: LocalDateTime) -> String {
        system::local_offset_at(utc.to_instant().seconds()).1
    }
}
