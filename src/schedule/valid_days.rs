use log::debug;

use crate::holiday::HolidayCalendar;
use crate::input::Config;

/// Returns the days of the configured range that are on an allowed weekday
/// and not a public holiday in the configured region, in ascending order.
#[must_use]
pub fn valid_days(config: &Config, calendar: impl HolidayCalendar) -> Vec<usize> {
    let mut result = Vec::new();

    for day in config.days() {
        let date = config.date(day);

        if !config.allows(date.week_day()) {
            continue;
        }

        if let Some(holiday) = calendar.holiday(config.region(), date) {
            debug!("skipping {}, it is a holiday: {}", date, holiday.name());
            continue;
        }

        result.push(day);
    }

    debug!("valid days: {:?}", result);

    result
}
