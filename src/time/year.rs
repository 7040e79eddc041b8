use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::time::{Date, Month, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Year(usize);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidYear {
    #[error("year is not valid: `{0}`, expected a number like `2024`")]
    Malformed(String),
    #[error("year `{0}` is not supported, expected a year up to {max}", max = Year::MAX)]
    OutOfRange(usize),
}

impl Year {
    /// The last year that dates can be calculated for.
    pub const MAX: Self = Self(9999);

    /// Choose the date 0000/01/01 as a base date, because it does not make sense to go past this date.
    const BASE_WEEK_DAY: WeekDay = WeekDay::Saturday;

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// The number of days in this year before the first day of `month`.
    #[must_use]
    pub const fn days_before_month(&self, month: Month) -> usize {
        let mut result = 0;
        let mut current = Month::January;

        while !current.is_eq(&month) {
            result += self.number_of_days_in_month(current);
            current = current.next();
        }

        result
    }

    /// Returns the number of days between 0000/01/01 and the first day of this year.
    #[must_use]
    const fn days_since_base_date(&self) -> usize {
        // leap years in [0, self): every 4th year, except every 100th, but including every 400th
        let leap_years = (self.0 + 3) / 4 - (self.0 + 99) / 100 + (self.0 + 399) / 400;

        self.0 * 365 + leap_years
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let days = self.days_since_base_date() + self.days_before_month(month) + (day - 1);

        Self::BASE_WEEK_DAY.add_const(days)
    }

    /// Iterates over every date of the `month` in this year.
    pub fn iter_days_in(&self, month: Month) -> impl Iterator<Item = Date> + Clone {
        let year = *self;

        (1..=self.number_of_days_in_month(month)).map(move |day| Date::from_parts(year, month, day))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Year {
    type Err = InvalidYear;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let year: usize = string
            .trim()
            .parse()
            .map_err(|_| InvalidYear::Malformed(string.to_string()))?;

        if year > Self::MAX.as_usize() {
            return Err(InvalidYear::OutOfRange(year));
        }

        Ok(Self::new(year))
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
