use core::fmt;
use std::cmp;
use std::str::FromStr;

use serde::{de, Deserialize};
use thiserror::Error;

use crate::time::WorkingDuration;

#[macro_export]
macro_rules! time_stamp {
    ( $hour:literal : $minute:literal ) => {{
        static_assertions::const_assert!($hour < 24 || ($hour == 24 && $minute == 0));
        static_assertions::const_assert!($minute < 60);

        $crate::time::TimeStamp::from_minutes(($hour as u16) * 60 + ($minute as u16))
    }};
}

/// A time of the day, from `00:00` up to and including `24:00` (the end of the day).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidTime {
    #[error("time is not valid: {hour:02}:{minute:02}")]
    OutOfRange { hour: u8, minute: u8 },
    #[error("time is not valid: `{0}`, expected an hour like `8` or a time like `08:30`")]
    Malformed(String),
}

impl TimeStamp {
    pub const END_OF_DAY: Self = Self {
        hour: 24,
        minute: 0,
    };

    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
            return Err(InvalidTime::OutOfRange { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    pub fn from_hour(hour: u8) -> Result<Self, InvalidTime> {
        Self::new(hour, 0)
    }

    #[doc(hidden)]
    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Self {
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    // the maximum TimeStamp is 24:00, which would be 24 * 60 = 1440
    // u16::MAX is 2^16 - 1 = 65535
    #[must_use]
    pub const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    #[must_use]
    pub const fn is_half_hour_aligned(&self) -> bool {
        self.minute % 30 == 0
    }

    /// Returns the duration between `self` and `other`, regardless of their order.
    #[must_use]
    pub fn elapsed(&self, other: &Self) -> WorkingDuration {
        let minutes = cmp::max(self.as_minutes(), other.as_minutes())
            - cmp::min(self.as_minutes(), other.as_minutes());

        WorkingDuration::from_mins(u32::from(minutes))
    }

    /// Returns `None` if the result would be after the end of the day.
    #[must_use]
    pub fn checked_add(self, duration: WorkingDuration) -> Option<Self> {
        let minutes = u32::from(self.as_minutes()) + duration.as_mins();

        (minutes <= u32::from(Self::END_OF_DAY.as_minutes()))
            .then(|| Self::from_minutes(minutes as u16))
    }

    /// Returns `None` if the result would be before midnight.
    #[must_use]
    pub fn checked_sub(self, duration: WorkingDuration) -> Option<Self> {
        u32::from(self.as_minutes())
            .checked_sub(duration.as_mins())
            .map(|minutes| Self::from_minutes(minutes as u16))
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeStamp {
    type Err = InvalidTime;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim();
        let malformed = || InvalidTime::Malformed(string.to_string());

        match string.split_once(':') {
            Some((hour, minute)) => Self::new(
                hour.parse().map_err(|_| malformed())?,
                minute.parse().map_err(|_| malformed())?,
            ),
            None => Self::from_hour(string.parse().map_err(|_| malformed())?),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimeStamp {
    Hour(u8),
    Text(String),
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        match RawTimeStamp::deserialize(deserializer)? {
            RawTimeStamp::Hour(hour) => Self::from_hour(hour),
            RawTimeStamp::Text(text) => Self::from_str(&text),
        }
        .map_err(de::Error::custom)
    }
}
