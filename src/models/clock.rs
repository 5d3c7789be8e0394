use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A roster clock value written as four digits (`0930`, `2215`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a bare `HHMM` token. Returns `None` for anything that is not a
    /// valid time of day.
    pub fn from_hhmm(token: &str) -> Option<Self> {
        if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hour: u32 = token[..2].parse().ok()?;
        let minute: u32 = token[2..].parse().ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    /// `HH:MM`, the form used by the summary and the sheet rows.
    pub fn colon(&self) -> String {
        self.0.format("%H:%M").to_string()
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        ClockTime::from_hhmm(s.trim()).ok_or_else(|| AppError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H%M"))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An elapsed duration written as `H:MM` / `HH:MM` (flight time, duty time, FDP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DutyDuration {
    minutes: i64,
}

impl DutyDuration {
    pub fn from_minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    /// Parse an `H:MM` token; minutes must be below 60.
    pub fn from_hmm(token: &str) -> Option<Self> {
        let (h, m) = token.split_once(':')?;
        if h.is_empty() || h.len() > 3 || m.len() != 2 {
            return None;
        }
        let hours: i64 = h.parse().ok()?;
        let minutes: i64 = m.parse().ok()?;
        if minutes >= 60 {
            return None;
        }
        Some(Self::from_minutes(hours * 60 + minutes))
    }

    pub fn hours(&self) -> i64 {
        self.minutes / 60
    }

    pub fn minutes(&self) -> i64 {
        self.minutes % 60
    }

    /// `hours + minutes / 60`, rounded to two decimal places.
    pub fn decimal_hours(&self) -> f64 {
        let raw = self.hours() as f64 + self.minutes() as f64 / 60.0;
        (raw * 100.0).round() / 100.0
    }
}

impl std::ops::Add for DutyDuration {
    type Output = DutyDuration;

    fn add(self, rhs: Self) -> Self::Output {
        DutyDuration::from_minutes(self.minutes + rhs.minutes)
    }
}

impl FromStr for DutyDuration {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        DutyDuration::from_hmm(s.trim()).ok_or_else(|| AppError::InvalidDuration(s.to_string()))
    }
}

impl fmt::Display for DutyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours(), self.minutes())
    }
}

impl Serialize for DutyDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
