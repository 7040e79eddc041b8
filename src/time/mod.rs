//! Calendar and clock types used throughout the crate.

mod date;
mod month;
mod time_stamp;
mod week_day;
mod working_duration;
mod year;

pub use date::*;
pub use month::*;
pub use time_stamp::*;
pub use week_day::*;
pub use working_duration::*;
pub use year::*;

use log::warn;

/// Returns the current date in the local time zone.
///
/// Falls back to UTC when the local offset can not be determined (for example
/// in multi-threaded processes on some unix platforms).
#[must_use]
pub fn today() -> Date {
    let now = ::time::OffsetDateTime::now_local().unwrap_or_else(|error| {
        warn!("failed to determine local offset, using UTC: {}", error);
        ::time::OffsetDateTime::now_utc()
    });

    let year = Year::new(usize::try_from(now.year()).unwrap_or_default());
    let month = Month::new(u8::from(now.month()) as usize);

    // the time crate only hands out valid dates
    Date::new(year, month, now.day() as usize).unwrap_or_else(|_| Date::first_day(year, month))
}
