use core::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{de, Deserialize};
use thiserror::Error;

#[macro_export]
macro_rules! working_duration {
    ( $hours:literal : $mins:literal ) => {{
        static_assertions::const_assert!($mins < 60);

        $crate::time::WorkingDuration::from_mins(($hours as u32) * 60 + ($mins as u32))
    }};
}

/// An amount of working time with a resolution of minutes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkingDuration {
    minutes: u32,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidWorkingDuration {
    #[error("duration is not valid: `{0}`, expected hours like `7.5` or `07:30`")]
    Malformed(String),
    #[error("duration is not valid: `{0}`, it must not be negative")]
    Negative(String),
    #[error("duration is not valid: `{0}`, it must be a whole number of minutes")]
    FractionalMinutes(String),
    #[error("duration is not valid: `{0}`, it is too large")]
    TooLarge(String),
}

impl WorkingDuration {
    pub const HALF_HOUR: Self = Self::from_mins(30);

    #[must_use]
    pub const fn from_mins(minutes: u32) -> Self {
        Self { minutes }
    }

    #[must_use]
    pub const fn from_half_hours(half_hours: u32) -> Self {
        Self::from_mins(half_hours * 30)
    }

    #[must_use]
    pub const fn as_mins(&self) -> u32 {
        self.minutes
    }

    /// The number of complete half hours in this duration.
    #[must_use]
    pub const fn half_hours(&self) -> u32 {
        self.minutes / 30
    }

    #[must_use]
    pub const fn is_half_hour_aligned(&self) -> bool {
        self.minutes % 30 == 0
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.minutes == 0
    }

    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.minutes / 60
    }

    /// The minutes that remain after removing the full hours.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes % 60
    }

    fn from_decimal_hours(string: &str) -> Result<Self, InvalidWorkingDuration> {
        let hours: f64 = string
            .parse()
            .map_err(|_| InvalidWorkingDuration::Malformed(string.to_string()))?;

        if !hours.is_finite() {
            return Err(InvalidWorkingDuration::Malformed(string.to_string()));
        }

        if hours < 0.0 {
            return Err(InvalidWorkingDuration::Negative(string.to_string()));
        }

        let minutes = hours * 60.0;
        if minutes > f64::from(u32::MAX) {
            return Err(InvalidWorkingDuration::TooLarge(string.to_string()));
        }

        if (minutes - minutes.round()).abs() > 1e-6 {
            return Err(InvalidWorkingDuration::FractionalMinutes(string.to_string()));
        }

        Ok(Self::from_mins(minutes.round() as u32))
    }
}

impl fmt::Display for WorkingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for WorkingDuration {
    type Err = InvalidWorkingDuration;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim();

        let Some((hours, minutes)) = string.split_once(':') else {
            return Self::from_decimal_hours(string);
        };

        let malformed = || InvalidWorkingDuration::Malformed(string.to_string());
        let hours: u32 = hours.parse().map_err(|_| malformed())?;
        let minutes: u32 = minutes.parse().map_err(|_| malformed())?;

        if minutes >= 60 {
            return Err(malformed());
        }

        hours
            .checked_mul(60)
            .and_then(|hours| hours.checked_add(minutes))
            .map(Self::from_mins)
            .ok_or_else(|| InvalidWorkingDuration::TooLarge(string.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWorkingDuration {
    Hours(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for WorkingDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        match RawWorkingDuration::deserialize(deserializer)? {
            RawWorkingDuration::Hours(hours) => Self::from_str(&hours.to_string()),
            RawWorkingDuration::Text(text) => Self::from_str(&text),
        }
        .map_err(de::Error::custom)
    }
}

impl Add for WorkingDuration {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_mins(self.minutes + other.minutes)
    }
}

impl Sub for WorkingDuration {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::from_mins(self.minutes - other.minutes)
    }
}

impl Sum for WorkingDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_str() {
        assert_eq!("23".parse::<WorkingDuration>(), Ok(working_duration!(23:00)));
        assert_eq!("7.5".parse::<WorkingDuration>(), Ok(working_duration!(07:30)));
        assert_eq!("07:30".parse::<WorkingDuration>(), Ok(working_duration!(07:30)));
        assert_eq!(" 0.25 ".parse::<WorkingDuration>(), Ok(working_duration!(00:15)));
        assert_eq!("120:00".parse::<WorkingDuration>(), Ok(working_duration!(120:00)));

        assert_eq!(
            "-1".parse::<WorkingDuration>(),
            Err(InvalidWorkingDuration::Negative("-1".to_string()))
        );
        assert_eq!(
            "0.01".parse::<WorkingDuration>(),
            Err(InvalidWorkingDuration::FractionalMinutes(
                "0.01".to_string()
            ))
        );
        assert!("07:60".parse::<WorkingDuration>().is_err());
        assert!("seven".parse::<WorkingDuration>().is_err());
        assert!("inf".parse::<WorkingDuration>().is_err());
    }

    #[test]
    fn test_from_str_too_large() {
        assert_eq!(
            "80000000:00".parse::<WorkingDuration>(),
            Err(InvalidWorkingDuration::TooLarge("80000000:00".to_string()))
        );
        assert_eq!(
            "1e12".parse::<WorkingDuration>(),
            Err(InvalidWorkingDuration::TooLarge("1e12".to_string()))
        );
        // u32::MAX minutes still fit
        assert_eq!(
            "71582788:15".parse::<WorkingDuration>(),
            Ok(WorkingDuration::from_mins(u32::MAX))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(working_duration!(08:00).to_string(), "08:00");
        assert_eq!(working_duration!(00:30).to_string(), "00:30");
        assert_eq!(working_duration!(123:30).to_string(), "123:30");
    }

    #[test]
    fn test_half_hours() {
        assert_eq!(working_duration!(08:00).half_hours(), 16);
        assert!(working_duration!(02:30).is_half_hour_aligned());
        assert!(!working_duration!(02:15).is_half_hour_aligned());
        assert_eq!(WorkingDuration::from_half_hours(5), working_duration!(02:30));
    }

    #[test]
    fn test_sum() {
        let total = [
            working_duration!(01:30),
            working_duration!(02:00),
            working_duration!(00:30),
        ]
        .into_iter()
        .sum::<WorkingDuration>();

        assert_eq!(total, working_duration!(04:00));
    }

    #[test]
    fn test_deserialize() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            value: WorkingDuration,
        }

        let wrapper: Wrapper = toml::from_str("value = 23").unwrap();
        assert_eq!(wrapper.value, working_duration!(23:00));

        let wrapper: Wrapper = toml::from_str("value = 6.5").unwrap();
        assert_eq!(wrapper.value, working_duration!(06:30));

        let wrapper: Wrapper = toml::from_str("value = \"04:30\"").unwrap();
        assert_eq!(wrapper.value, working_duration!(04:30));
    }
}
