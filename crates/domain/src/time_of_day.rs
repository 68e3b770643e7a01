// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Twelve-hour time of day as shown by the time picker (`"hh:mm AM"`).

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;
use time::Time;

/// Reasons a time-of-day string is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeOfDayError {
    /// The string is not `hh:mm AM` / `hh:mm PM`.
    #[error("expected the form 'hh:mm AM' or 'hh:mm PM'")]
    Malformed,

    /// Hour outside `01..=12`.
    #[error("hour must be between 01 and 12 (found {0})")]
    HourOutOfRange(u8),

    /// Minute outside `00..=59`.
    #[error("minute must be between 00 and 59 (found {0})")]
    MinuteOutOfRange(u8),

    /// Period is neither `AM` nor `PM`.
    #[error("period must be AM or PM (found '{0}')")]
    UnknownPeriod(String),
}

/// Morning or afternoon half of the twelve-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Meridiem {
    /// Midnight up to noon.
    Am,
    /// Noon up to midnight.
    Pm,
}

impl Meridiem {
    /// Returns the upper-case label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// A wall-clock time with minute precision, stored the way the picker shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    /// Hour on the twelve-hour dial (`1..=12`).
    hour: u8,
    /// Minute (`0..=59`).
    minute: u8,
    /// AM or PM.
    meridiem: Meridiem,
}

impl TimeOfDay {
    /// Creates a time of day from twelve-hour components.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour is not `1..=12` or the minute is not `0..=59`.
    pub const fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Result<Self, TimeOfDayError> {
        if hour < 1 || hour > 12 {
            return Err(TimeOfDayError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeOfDayError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// Converts a 24-hour time, dropping seconds.
    #[must_use]
    pub const fn from_time(time: Time) -> Self {
        let hour24: u8 = time.hour();
        let meridiem: Meridiem = if hour24 >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        };
        let hour: u8 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour,
            minute: time.minute(),
            meridiem,
        }
    }

    /// Returns the hour on the twelve-hour dial.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns AM or PM.
    #[must_use]
    pub const fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Returns the hour on the 24-hour clock.
    #[must_use]
    pub const fn hour24(&self) -> u8 {
        match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) | (Meridiem::Pm, h @ 12) => h,
            (Meridiem::Pm, h) => h + 12,
        }
    }

    /// Converts to a 24-hour [`Time`] with zero seconds.
    #[must_use]
    pub fn to_time(&self) -> Time {
        // Components are range-checked on construction.
        Time::from_hms(self.hour24(), self.minute, 0).unwrap_or(Time::MIDNIGHT)
    }
}

impl Default for TimeOfDay {
    /// The picker's initial value, `08:00 AM`.
    fn default() -> Self {
        Self {
            hour: 8,
            minute: 0,
            meridiem: Meridiem::Am,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02} {}",
            self.hour,
            self.minute,
            self.meridiem.as_str()
        )
    }
}

impl TimeOfDay {
    fn parse_strict(s: &str) -> Result<Self, TimeOfDayError> {
        let (clock, period) = s.split_once(' ').ok_or(TimeOfDayError::Malformed)?;
        let (hour, minute) = clock.split_once(':').ok_or(TimeOfDayError::Malformed)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(TimeOfDayError::Malformed);
        }
        let hour: u8 = hour.parse().map_err(|_| TimeOfDayError::Malformed)?;
        let minute: u8 = minute.parse().map_err(|_| TimeOfDayError::Malformed)?;
        let meridiem: Meridiem = match period {
            "AM" => Meridiem::Am,
            "PM" => Meridiem::Pm,
            other => return Err(TimeOfDayError::UnknownPeriod(other.to_string())),
        };
        Self::new(hour, minute, meridiem)
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s).map_err(|err| DomainError::InvalidTimeOfDay {
            input: s.to_string(),
            reason: err.to_string(),
        })
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
