//! Schedule time handling.
//!
//! Flight schedules give times as "HH:MM" strings on a single implicit day.
//! Internally every time is a count of minutes since midnight; strings are
//! only parsed and formatted at the edges (loader, CLI, reports).

use chrono::Duration;
use std::fmt;
use std::str::FromStr;

/// Number of minutes in the single schedule day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when parsing or constructing an invalid time.
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

/// A time of day on the schedule, stored as minutes since midnight.
///
/// Any `ClockTime` is in `[0, 1440)`. There is no date component: schedules
/// never cross midnight.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::ClockTime;
///
/// let time = ClockTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(time.minutes(), 870);
/// assert_eq!(time.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight at the start of the schedule day.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Create a time from minutes since midnight.
    ///
    /// Fails if `minutes` is not within the schedule day.
    pub fn from_minutes(minutes: u32) -> Result<Self, TimeError> {
        if minutes >= u32::from(MINUTES_PER_DAY) {
            return Err(TimeError::new("minutes must be below 1440"));
        }
        Ok(Self(minutes as u16))
    }

    /// Create a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Self::from_minutes(hour * 60 + minute)
    }

    /// Parse a time from 24-hour "HH:MM" format.
    ///
    /// Surrounding whitespace is ignored and a single-digit hour or minute
    /// is accepted ("7:05" is 07:05).
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::ClockTime;
    ///
    /// // Valid times
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    /// assert!(ClockTime::parse_hhmm("7:05").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("14:30:00").is_err());
    /// assert!(ClockTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

        let hour = parse_digits(hour).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_digits(minute).ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Returns minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        Duration::minutes(i64::from(self.0) - i64::from(other.0))
    }

    /// Add a duration, returning `None` if the result leaves the schedule day.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let minutes = i64::from(self.0) + duration.num_minutes();
        u32::try_from(minutes)
            .ok()
            .and_then(|m| Self::from_minutes(m).ok())
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
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

/// Parse one or two ASCII digits into a u32.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Format a duration as hours and minutes, e.g. "5h0m".
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_minutes();
    format!("{}h{}m", total / 60, total % 60)
}
