//! Time-of-day handling for trip schedules.
//!
//! Trips store their departure as an "HH:MM" string. This module provides a
//! validated time-of-day type with no date component, so arithmetic on it
//! wraps around midnight.

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day in 24-hour "HH:MM" form.
///
/// # Examples
///
/// ```
/// use bus_trips::domain::ClockTime;
///
/// let time = ClockTime::parse_hhmm("23:30").unwrap();
/// assert_eq!(time.add_minutes(45).to_string(), "00:15");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time of day written as "HH:MM".
    ///
    /// Both parts must be exactly two ASCII digits, the hour at most 23 and
    /// the minute at most 59. No surrounding whitespace is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_trips::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("9:30").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// assert!(ClockTime::parse_hhmm("12:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hh, mm) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("missing ':' separator"))?;
        let hour = two_digits(hh).ok_or_else(|| TimeError::new("hour must be two digits"))?;
        let minute = two_digits(mm).ok_or_else(|| TimeError::new("minute must be two digits"))?;

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("hour or minute out of range"))
    }

    /// Create a time from hour (0-23) and minute (0-59) components.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Add minutes, wrapping past midnight.
    ///
    /// Any whole days in `minutes` are dropped first; only the resulting
    /// time of day is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_trips::domain::ClockTime;
    ///
    /// let time = ClockTime::parse_hhmm("08:00").unwrap();
    /// assert_eq!(time.add_minutes(1500).to_string(), "09:00");
    /// ```
    pub fn add_minutes(&self, minutes: u64) -> Self {
        // Under one day, so it fits chrono's range.
        let within_day = (minutes % u64::from(MINUTES_PER_DAY)) as i64;
        let (time, _wrapped_secs) = self
            .0
            .overflowing_add_signed(Duration::minutes(within_day));
        Self(time)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}

/// Value of a string made of exactly two ASCII digits.
fn two_digits(s: &str) -> Option<u32> {
    match s.as_bytes() {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}
