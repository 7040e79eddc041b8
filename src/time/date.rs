use core::fmt;

use thiserror::Error;

use crate::time::{Month, WeekDay, Year};

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        $crate::time::Date::from_parts(_YEAR, _MONTH, $day)
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("invalid day `{day}` for {year:04}-{month:02}, the month has {days} days")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
        days: usize,
    },
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        let days = year.number_of_days_in_month(month);
        if days < day || day == 0 {
            return Err(InvalidDate::InvalidDay {
                year,
                month,
                day,
                days,
            });
        }

        Ok(Self { year, month, day })
    }

    /// Creates a date without checking that the day exists in the month.
    #[doc(hidden)]
    #[must_use]
    pub const fn from_parts(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the date of the first day as a date in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }
}

impl Date {
    #[must_use]
    pub fn formatted(&self, f: &str) -> String {
        f.replace("{year}", &format!("{:04}", self.year()))
            .replace("{month}", &format!("{:02}", self.month()))
            .replace("{day}", &format!("{:02}", self.day()))
    }

    #[must_use]
    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }

    /// The day of the year, starting with `1` for the first of january.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.year().days_before_month(self.month()) + self.day()
    }

    /// Returns the signed number of days from `self` to `other` when both are
    /// in the same year.
    #[must_use]
    pub const fn days_in_year_until(&self, other: Self) -> isize {
        other.ordinal() as isize - self.ordinal() as isize
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year().as_usize(),
            self.month().as_usize(),
            self.day()
        )
    }
}
