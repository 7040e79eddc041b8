use random_time_sheet::date;
use random_time_sheet::holiday::{Holiday, HolidayCalendar, Region};
use random_time_sheet::input::{Config, ConfigBuilder};
use random_time_sheet::time::{Date, Month, WorkingDuration};

/// A calendar where only the listed dates are holidays, independent of the region.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct FixedHolidays {
    dates: Vec<Date>,
}

impl FixedHolidays {
    #[must_use]
    #[allow(dead_code)]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    #[allow(dead_code)]
    pub fn on(dates: impl IntoIterator<Item = Date>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }
}

impl HolidayCalendar for FixedHolidays {
    fn holiday(&self, _region: Region, date: Date) -> Option<Holiday> {
        self.dates
            .contains(&date)
            .then(|| Holiday::new("Feriado"))
    }
}

/// A builder for the whole of september 2023 (30 days, starting on a friday)
/// with a fixed seed.
#[must_use]
pub fn september_2023() -> ConfigBuilder {
    let mut builder = Config::builder(date!(2023:10:15));
    builder
        .year(2023_usize)
        .month(Month::September)
        .first_day(1)
        .last_day(30)
        .seed(0x5EED);
    builder
}

/// Parses a row of the time sheet into its four columns.
#[must_use]
#[allow(dead_code)]
pub fn columns(row: &str) -> Vec<&str> {
    row.split('\t').collect()
}

/// Sums the duration column of every row, skipping the total line.
#[must_use]
#[allow(dead_code)]
pub fn sum_of_rows(sheet: &str) -> WorkingDuration {
    sheet
        .lines()
        .filter_map(|line| {
            let columns = columns(line);
            (columns.len() == 4 && !columns[3].is_empty()).then(|| columns[3])
        })
        .map(|duration| {
            duration
                .parse::<WorkingDuration>()
                .expect("duration column should be valid")
        })
        .sum()
}
