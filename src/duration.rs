//! Signed lengths of time on the timeline.

use std::ops::{Add, Mul, Neg, Sub};


/// A **duration** is a signed length of time on the timeline, irrespective
/// of time zone or calendar format, with millisecond precision.
///
/// Internally this is a single count of milliseconds, so carrying between
/// the seconds and milliseconds portions can never be forgotten.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub struct Duration {
    milliseconds: i64,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { milliseconds: seconds * 1000 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// milliseconds long. The two parts are simply summed, so the
    /// milliseconds argument may carry into whole seconds.
    pub fn of_ms(seconds: i64, milliseconds: i64) -> Self {
        Self { milliseconds: seconds * 1000 + milliseconds }
    }

    /// Create a new duration that’s the given number of days long,
    /// ignoring leap seconds as everywhere in this library.
    pub fn of_days(days: i64) -> Self {
        Self::of(days * 86400)
    }

    /// Return the seconds and milliseconds portions of the duration as a
    /// 2-element tuple. The milliseconds portion is always in `0..1000`,
    /// with the seconds portion rounding towards negative infinity, so
    /// the two parts can be re-summed without special sign handling.
    pub fn lengths(self) -> (i64, i16) {
        (self.milliseconds.div_euclid(1000), self.milliseconds.rem_euclid(1000) as i16)
    }

    /// The whole number of seconds in this duration, rounding towards zero.
    pub fn seconds(self) -> i64 {
        self.milliseconds / 1000
    }

    /// The total number of milliseconds in this duration.
    pub fn total_milliseconds(self) -> i64 {
        self.milliseconds
    }

    pub fn is_zero(self) -> bool {
        self.milliseconds == 0
    }
}

impl Add<Duration> for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration { milliseconds: self.milliseconds + rhs.milliseconds }
    }
}

impl Sub<Duration> for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration { milliseconds: self.milliseconds - rhs.milliseconds }
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, amount: i64) -> Duration {
        Duration { milliseconds: self.milliseconds * amount }
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration { milliseconds: -self.milliseconds }
    }
}


#[cfg(test)]
mod test {
    pub use super::Duration;

    mod addition {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(10), Duration::of(2) + Duration::of(8))
        }

        #[test]
        fn wrapping() {
            assert_eq!(Duration::of_ms(1, 500), Duration::of_ms(0, 750) + Duration::of_ms(0, 750))
        }
    }

    mod subtraction {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(13), Duration::of(28) - Duration::of(15))
        }

        #[test]
        fn wrapping() {
            assert_eq!(Duration::of_ms(0, 750), Duration::of_ms(1, 500) - Duration::of_ms(0, 750))
        }

        #[test]
        fn below_zero() {
            assert_eq!(Duration::of(-2), Duration::of(3) - Duration::of(5))
        }
    }

    mod lengths {
        use super::*;

        #[test]
        fn positive() {
            assert_eq!((1, 250), Duration::of_ms(1, 250).lengths())
        }

        #[test]
        fn negative() {
            // -750ms is 250ms past one whole second backwards.
            assert_eq!((-1, 250), Duration::of_ms(0, -750).lengths())
        }
    }

    mod multiplication {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(16), Duration::of(8) * 2)
        }

        #[test]
        fn milliseconds() {
            assert_eq!(Duration::of(1), Duration::of_ms(0, 500) * 2)
        }
    }
}
