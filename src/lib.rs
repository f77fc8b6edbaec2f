#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for [ date-time and URL ](https://crates.io/crates/locus) value
//! types, with time-zone conversion, formatting, and parsing.
//!
//! # Examples
//!
//! ```no_run
//! use locus::{Moment, TimeSpec, Url, Trailing};
//! use locus::fmt::{fixed, Style, ENGLISH};
//!
//! let now = Moment::now_local();
//! let when = fixed::parse("2001-02-03T04:05:06+07:00", Style::Iso, &ENGLISH).unwrap();
//! assert_eq!(*when.spec(), TimeSpec::OffsetFromUtc(7 * 3600));
//!
//! let url = Url::new("http://www.example.com/docs/../index.html").clean_path();
//! assert_eq!(url.url(Trailing::Leave), "http://www.example.com/index.html");
//! ```

pub mod cal;
pub mod duration;
pub mod fmt;
pub mod instant;
pub mod moment;
pub mod url;
mod system;
mod util;

pub use crate::cal::datetime::{Error as DateError, LocalDate, LocalDateTime, LocalTime, Month, Weekday, Year};
pub use crate::cal::period::{DayPeriod, DayPeriodSet, NameStyle};
pub use crate::cal::zone::{system_zone, utc, FixedZone, SystemZone, Timespan, TimespanZone, Zone, ZoneRef};
pub use crate::cal::{Calendar, DatePiece, Gregorian, TimePiece};
pub use crate::duration::Duration;
pub use crate::fmt::{Lexicon, Style};
pub use crate::instant::Instant;
pub use crate::moment::{Moment, Relation, TimeSpec};
pub use crate::url::{join, resolve, split, urls_equal, EqualsOptions, Trailing, Url};
