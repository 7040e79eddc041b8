//! Public holidays of the regions a time sheet can be made for.
//!
//! The rest of the crate only talks to the [`HolidayCalendar`] trait, the
//! tables in this module are one way to answer it.

mod brazil;
mod easter;
mod region;

pub use brazil::BrazilianState;
pub use easter::easter_sunday;
pub use region::*;

use crate::time::{Date, Month, Year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Holiday {
    name: &'static str,
}

impl Holiday {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Answers whether a date is a public holiday in a region.
pub trait HolidayCalendar {
    /// Returns the holiday on `date` in `region`, if there is one.
    #[must_use]
    fn holiday(&self, region: Region, date: Date) -> Option<Holiday>;

    #[must_use]
    fn is_holiday(&self, region: Region, date: Date) -> bool {
        self.holiday(region, date).is_some()
    }

    /// Returns all holidays of the `month`.
    #[must_use]
    fn holidays_in(&self, region: Region, year: Year, month: Month) -> Vec<(Date, Holiday)> {
        year.iter_days_in(month)
            .filter_map(|date| self.holiday(region, date).map(|holiday| (date, holiday)))
            .collect()
    }
}

impl<C: HolidayCalendar + ?Sized> HolidayCalendar for &C {
    fn holiday(&self, region: Region, date: Date) -> Option<Holiday> {
        <C as HolidayCalendar>::holiday(*self, region, date)
    }
}

/// The holiday tables that are compiled into the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinHolidays;

impl HolidayCalendar for BuiltinHolidays {
    fn holiday(&self, region: Region, date: Date) -> Option<Holiday> {
        match region {
            Region::National => brazil::holiday(None, date),
            Region::State(state) => brazil::holiday(Some(state), date),
        }
    }
}

/// Looks `date` up in a table of `(day, month, name)` entries.
fn find_fixed(table: &[(usize, Month, &'static str)], date: Date) -> Option<Holiday> {
    table
        .iter()
        .find(|(day, month, _)| *day == date.day() && *month == date.month())
        .map(|(_, _, name)| Holiday::new(*name))
}

/// Looks `date` up in a table of holidays given as their distance in days to easter sunday.
fn find_movable(table: &[(isize, &'static str)], date: Date) -> Option<Holiday> {
    let offset = easter_sunday(date.year()).days_in_year_until(date);

    table
        .iter()
        .find(|(distance, _)| *distance == offset)
        .map(|(_, name)| Holiday::new(*name))
}
