//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::duration::Duration;
use crate::system;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with millisecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and a 16-bit integer holding the millisecond of the second,
/// which is always in `0..1000`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    milliseconds: i16,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero milliseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_ms(seconds, 0)
    }

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, along with the number of milliseconds so far this second.
    /// The milliseconds argument is normalised, carrying into the seconds
    /// if it falls outside `0..1000`.
    pub fn at_ms(seconds: i64, milliseconds: i64) -> Self {
        let total = seconds * 1000 + milliseconds;
        Self {
            seconds: total.div_euclid(1000),
            milliseconds: total.rem_euclid(1000) as i16,
        }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, milliseconds) = system::sys_time();
        Self::at_ms(seconds, milliseconds as i64)
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant.
    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// Returns the millisecond of the second at this instant.
    pub fn milliseconds(self) -> i16 {
        self.milliseconds
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}s/{}ms)", self.seconds, self.milliseconds)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self::at_ms(self.seconds, self.milliseconds as i64 + duration.total_milliseconds())
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::at_ms(self.seconds, self.milliseconds as i64 - duration.total_milliseconds())
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, other: Instant) -> Duration {
        Duration::of_ms(self.seconds - other.seconds,
                        (self.milliseconds - other.milliseconds) as i64)
    }
}
