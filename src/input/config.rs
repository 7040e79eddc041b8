use std::ops::RangeInclusive;
use std::path::PathBuf;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::holiday::Region;
use crate::input::Defaults;
use crate::time::{
    Date, InvalidWeekDayNumber, Month, TimeStamp, WeekDay, WorkingDuration, Year,
};
use crate::{time_stamp, working_duration};

/// Everything needed to make one time sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    year: Year,
    month: Month,
    first_day: usize,
    last_day: usize,
    week_days: Vec<WeekDay>,
    target_hours: WorkingDuration,
    work_start: TimeStamp,
    work_end: TimeStamp,
    daily_limit: WorkingDuration,
    region: Region,
    output: PathBuf,
    seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("the first day `{first_day}` is not a day of the month, which has {days_in_month} days")]
    FirstDayOutOfRange {
        first_day: usize,
        days_in_month: usize,
    },
    #[error("the last day `{last_day}` is before the first day `{first_day}`")]
    EmptyDayRange { first_day: usize, last_day: usize },
    #[error("the year `{0}` is not supported, the last supported year is {max}", max = Year::MAX)]
    YearOutOfRange(Year),
    #[error(transparent)]
    InvalidWeekDay(#[from] InvalidWeekDayNumber),
    #[error("the {what} `{value}` is not a multiple of half an hour")]
    NotHalfHourAligned {
        what: &'static str,
        value: WorkingDuration,
    },
    #[error("the {what} `{value}` is not on a full or half hour")]
    TimeNotHalfHourAligned { what: &'static str, value: TimeStamp },
    #[error("the working window {start} - {end} is empty")]
    EmptyWorkWindow { start: TimeStamp, end: TimeStamp },
    #[error("the maximum working time per day must not be zero")]
    ZeroDailyLimit,
    #[error("the maximum working time per day `{limit}` must be at least half an hour shorter than the working window `{window}`")]
    DailyLimitExceedsWindow {
        limit: WorkingDuration,
        window: WorkingDuration,
    },
}

/// Collects the options of a time sheet and fills in the defaults for the ones
/// that have not been set.
///
/// Options that are set directly take precedence over the [`Defaults`], which
/// take precedence over the built-in defaults.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    today: Date,
    defaults: Defaults,
    year: Option<Year>,
    month: Option<Month>,
    first_day: Option<usize>,
    last_day: Option<usize>,
    week_days: Option<Vec<usize>>,
    target_hours: Option<WorkingDuration>,
    work_start: Option<TimeStamp>,
    work_end: Option<TimeStamp>,
    daily_limit: Option<WorkingDuration>,
    region: Option<Region>,
    output: Option<PathBuf>,
    seed: Option<u64>,
}

impl ConfigBuilder {
    fn new(today: Date) -> Self {
        Self {
            today,
            defaults: Defaults::default(),
            year: None,
            month: None,
            first_day: None,
            last_day: None,
            week_days: None,
            target_hours: None,
            work_start: None,
            work_end: None,
            daily_limit: None,
            region: None,
            output: None,
            seed: None,
        }
    }

    pub fn defaults(&mut self, defaults: Defaults) -> &mut Self {
        self.defaults = defaults;
        self
    }

    pub fn year(&mut self, year: impl Into<Year>) -> &mut Self {
        self.year = Some(year.into());
        self
    }

    pub fn month(&mut self, month: Month) -> &mut Self {
        self.month = Some(month);
        self
    }

    pub fn first_day(&mut self, day: usize) -> &mut Self {
        self.first_day = Some(day);
        self
    }

    pub fn last_day(&mut self, day: usize) -> &mut Self {
        self.last_day = Some(day);
        self
    }

    /// The weekdays on which work may be scheduled, `0` is monday and `6` is sunday.
    pub fn week_days(&mut self, week_days: impl IntoIterator<Item = usize>) -> &mut Self {
        self.week_days = Some(week_days.into_iter().collect());
        self
    }

    pub fn target_hours(&mut self, hours: WorkingDuration) -> &mut Self {
        self.target_hours = Some(hours);
        self
    }

    pub fn work_start(&mut self, start: TimeStamp) -> &mut Self {
        self.work_start = Some(start);
        self
    }

    pub fn work_end(&mut self, end: TimeStamp) -> &mut Self {
        self.work_end = Some(end);
        self
    }

    pub fn daily_limit(&mut self, limit: WorkingDuration) -> &mut Self {
        self.daily_limit = Some(limit);
        self
    }

    pub fn region(&mut self, region: Region) -> &mut Self {
        self.region = Some(region);
        self
    }

    /// The name of the output file without the `.csv` extension.
    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    fn resolve_days(&self, days_in_month: usize) -> Result<(usize, usize), ConfigError> {
        let first_day = self.first_day.unwrap_or(1);
        // defaults to yesterday, which is `0` on the first day of a month
        let last_day = self.last_day.unwrap_or(self.today.day() - 1);

        if first_day == 0 || first_day > days_in_month {
            return Err(ConfigError::FirstDayOutOfRange {
                first_day,
                days_in_month,
            });
        }

        let last_day = {
            if last_day > days_in_month {
                warn!(
                    "last day `{}` is after the end of the month, using `{}` instead",
                    last_day, days_in_month
                );
                days_in_month
            } else {
                last_day
            }
        };

        if last_day < first_day {
            return Err(ConfigError::EmptyDayRange {
                first_day,
                last_day,
            });
        }

        Ok((first_day, last_day))
    }

    fn check_working_hours(
        target_hours: WorkingDuration,
        work_start: TimeStamp,
        work_end: TimeStamp,
        daily_limit: WorkingDuration,
    ) -> Result<(), ConfigError> {
        for (what, value) in [
            ("number of hours", target_hours),
            ("maximum working time per day", daily_limit),
        ] {
            if !value.is_half_hour_aligned() {
                return Err(ConfigError::NotHalfHourAligned { what, value });
            }
        }

        for (what, value) in [
            ("start of the working window", work_start),
            ("end of the working window", work_end),
        ] {
            if !value.is_half_hour_aligned() {
                return Err(ConfigError::TimeNotHalfHourAligned { what, value });
            }
        }

        if work_start >= work_end {
            return Err(ConfigError::EmptyWorkWindow {
                start: work_start,
                end: work_end,
            });
        }

        if daily_limit.is_zero() {
            return Err(ConfigError::ZeroDailyLimit);
        }

        // a block below the limit must always be able to grow on one side,
        // the aligned window is at least half an hour long
        let window = work_start.elapsed(&work_end);
        if daily_limit > window - WorkingDuration::HALF_HOUR {
            return Err(ConfigError::DailyLimitExceedsWindow {
                limit: daily_limit,
                window,
            });
        }

        Ok(())
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = &self.defaults;

        let year = self.year.unwrap_or(self.today.year());
        if year > Year::MAX {
            return Err(ConfigError::YearOutOfRange(year));
        }

        let month = self.month.unwrap_or(self.today.month());
        let (first_day, last_day) = self.resolve_days(year.number_of_days_in_month(month))?;

        let week_days = match self.week_days.as_ref().or(defaults.week_days()) {
            Some(indices) => indices
                .iter()
                .map(|index| WeekDay::from_index(*index))
                .collect::<Result<Vec<_>, _>>()?,
            None => Config::DEFAULT_WEEK_DAYS.to_vec(),
        };

        let target_hours = self
            .target_hours
            .or(defaults.hours())
            .unwrap_or(Config::DEFAULT_HOURS);
        let work_start = self
            .work_start
            .or(defaults.start())
            .unwrap_or(Config::DEFAULT_WORK_START);
        let work_end = self
            .work_end
            .or(defaults.end())
            .unwrap_or(Config::DEFAULT_WORK_END);
        let daily_limit = self
            .daily_limit
            .or(defaults.max())
            .unwrap_or(Config::DEFAULT_DAILY_LIMIT);

        Self::check_working_hours(target_hours, work_start, work_end, daily_limit)?;

        let config = Config {
            year,
            month,
            first_day,
            last_day,
            week_days,
            target_hours,
            work_start,
            work_end,
            daily_limit,
            region: self.region.or(defaults.region()).unwrap_or_default(),
            output: self
                .output
                .or_else(|| defaults.output().map(|path| path.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from(Config::DEFAULT_OUTPUT)),
            seed: self.seed,
        };

        debug!("resolved config: {:?}", config);

        Ok(config)
    }
}

impl Config {
    pub const DEFAULT_HOURS: WorkingDuration = working_duration!(23:00);
    pub const DEFAULT_WEEK_DAYS: [WeekDay; 5] = WeekDay::work_week();
    pub const DEFAULT_WORK_START: TimeStamp = time_stamp!(08:00);
    pub const DEFAULT_WORK_END: TimeStamp = time_stamp!(18:00);
    pub const DEFAULT_DAILY_LIMIT: WorkingDuration = working_duration!(06:00);
    pub const DEFAULT_OUTPUT: &'static str = "timesheet";

    /// Starts a new config, the defaults that depend on the date are relative to `today`.
    #[must_use]
    pub fn builder(today: Date) -> ConfigBuilder {
        ConfigBuilder::new(today)
    }

    #[must_use]
    pub fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub fn days_in_month(&self) -> usize {
        self.year.number_of_days_in_month(self.month)
    }

    /// The days of the month on which work may be scheduled (before the weekday
    /// and holiday filters).
    #[must_use]
    pub fn days(&self) -> RangeInclusive<usize> {
        self.first_day..=self.last_day
    }

    /// Returns the date of the `day` in the configured month.
    #[must_use]
    pub fn date(&self, day: usize) -> Date {
        Date::from_parts(self.year, self.month, day)
    }

    #[must_use]
    pub fn week_days(&self) -> &[WeekDay] {
        &self.week_days
    }

    #[must_use]
    pub fn allows(&self, week_day: WeekDay) -> bool {
        self.week_days.contains(&week_day)
    }

    #[must_use]
    pub fn target_hours(&self) -> WorkingDuration {
        self.target_hours
    }

    #[must_use]
    pub fn work_start(&self) -> TimeStamp {
        self.work_start
    }

    #[must_use]
    pub fn work_end(&self) -> TimeStamp {
        self.work_end
    }

    #[must_use]
    pub fn daily_limit(&self) -> WorkingDuration {
        self.daily_limit
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Path of the file that will be written (the output name with a `.csv` extension).
    #[must_use]
    pub fn output(&self) -> PathBuf {
        let mut path = self.output.clone().into_os_string();
        path.push(".csv");
        PathBuf::from(path)
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The random number generator for the distribution, seeded if a seed was configured.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
