use chrono::{DateTime, Datelike, NaiveDateTime, Offset, Timelike};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;

/// Wall-clock date and time with no zone attached, as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Wall-clock date and time in a named zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZonedDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// IANA identifier, e.g. `America/New_York`
    pub zone: String,
    /// Offset from UTC in force at this instant
    pub offset_seconds: i32,
    #[serde(skip)]
    wall_clock: NaiveDateTime,
}

impl From<DateTime<Tz>> for ZonedDateTime {
    fn from(dt: DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            zone: dt.timezone().name().to_string(),
            offset_seconds: dt.offset().fix().local_minus_utc(),
            wall_clock: dt.naive_local(),
        }
    }
}

/// `Mar 10, 2024, 17:30`
impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wall_clock.format("%b %d, %Y, %H:%M"))
    }
}
