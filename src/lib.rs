mod utils;

pub mod holiday;
pub mod input;
pub mod output;
pub mod schedule;
pub mod time;

use std::path::PathBuf;

use anyhow::Context;
use log::info;
use rand::Rng;

use crate::holiday::{BuiltinHolidays, HolidayCalendar};
use crate::input::Config;
use crate::output::TimeSheet;
use crate::schedule::DistributionError;

/// Selects the valid days, distributes the hours over them and lays out the
/// resulting time sheet.
pub fn make_time_sheet<R: Rng + ?Sized>(
    config: &Config,
    calendar: impl HolidayCalendar,
    rng: &mut R,
) -> Result<TimeSheet, DistributionError> {
    let valid_days = schedule::valid_days(config, calendar);
    info!(
        "distributing {} over {} valid days",
        config.target_hours(),
        valid_days.len()
    );

    let distribution = schedule::distribute(config, valid_days, rng)?;
    info!(
        "worked on {} days, {} of them reached the maximum of {}",
        distribution.len(),
        distribution.saturated().len(),
        config.daily_limit()
    );

    Ok(TimeSheet::new(config, &distribution))
}

/// Makes the time sheet with the built-in holidays and writes it to
/// [`Config::output`], which is returned.
///
/// Nothing is written if the hours can not be distributed.
pub fn generate_time_sheet(config: &Config) -> anyhow::Result<PathBuf> {
    let sheet = make_time_sheet(config, BuiltinHolidays, &mut config.rng())?;

    let output = config.output();
    info!("writing time sheet to \"{}\"", output.display());
    utils::write_atomic(&output, sheet.to_string())
        .with_context(|| format!("failed to write `{}`", output.display()))?;

    Ok(output)
}
