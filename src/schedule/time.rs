//! Wall-clock dose times.
//!
//! Dose times travel as plain `"HH:MM"` strings between the frontend, the
//! database, and the core. `ClockTime` validates on parse so the schedule
//! arithmetic never sees an out-of-range hour or minute.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("invalid time {0:?}: expected HH:MM")]
    Format(String),

    #[error("invalid time {0:?}: hour must be 00-23")]
    HourRange(String),

    #[error("invalid time {0:?}: minute must be 00-59")]
    MinuteRange(String),
}

/// A time of day, stored as minutes since midnight.
///
/// Ordering and equality follow the minute value, so sorting a dose list by
/// `ClockTime` sorts it chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Total minutes past midnight, or `None` out of range.
    pub fn from_minutes_of_day(minutes: u16) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Some(Self(minutes))
    }

    /// Reduce an arbitrary minute count onto the 24-hour clock.
    pub fn from_minutes_wrapping(minutes: u32) -> Self {
        Self((minutes % u32::from(MINUTES_PER_DAY)) as u16)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Plain linear difference in minutes between two clock times.
    ///
    /// Deliberately NOT the shorter circular distance: 23:00 and 00:30 are
    /// 1350 minutes apart, not 90. Conflict checking treats each day's
    /// times independently.
    pub fn abs_diff(self, other: Self) -> u16 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (h, m) = trimmed
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(s.to_string()))?;

        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(TimeParseError::Format(s.to_string()));
        }

        let hour: u8 = h
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;

        if hour > 23 {
            return Err(TimeParseError::HourRange(s.to_string()));
        }
        if minute > 59 {
            return Err(TimeParseError::MinuteRange(s.to_string()));
        }

        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
