//! Tests the whole pipeline from a config to the written time sheet.

use random_time_sheet::date;
use random_time_sheet::input::Config;
use random_time_sheet::schedule::{self, DistributionError};
use random_time_sheet::time::{Month, WeekDay};
use random_time_sheet::{generate_time_sheet, make_time_sheet, time_stamp, working_duration};

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::FixedHolidays;

mod common;

#[test]
fn test_eight_hours_in_september() {
    let mut builder = common::september_2023();
    builder
        .target_hours(working_duration!(08:00))
        .work_start(time_stamp!(08:00))
        .work_end(time_stamp!(18:00))
        .daily_limit(working_duration!(06:00));
    let config = builder.build().expect("config should be valid");

    let valid_days = schedule::valid_days(&config, FixedHolidays::none());
    assert_eq!(valid_days.len(), 21);

    let distribution = schedule::distribute(&config, valid_days, &mut config.rng())
        .expect("there is enough room for 8 hours");
    let half_hours: u32 = distribution
        .blocks()
        .map(|(_, block)| block.duration().half_hours())
        .sum();
    assert_eq!(half_hours, 16);

    let sheet = make_time_sheet(&config, FixedHolidays::none(), &mut config.rng())
        .expect("there is enough room for 8 hours")
        .to_string();

    assert_eq!(sheet.lines().count(), 31);
    assert_eq!(sheet.lines().last(), Some("08:00"));
    assert_eq!(common::sum_of_rows(&sheet), working_duration!(08:00));
}

#[test]
fn test_blank_rows_for_days_that_are_not_worked() {
    let mut builder = common::september_2023();
    builder
        .first_day(4)
        .last_day(15)
        .target_hours(working_duration!(40:00))
        .daily_limit(working_duration!(06:00));
    let config = builder.build().expect("config should be valid");

    let holidays = FixedHolidays::on([date!(2023:09:07)]);
    let sheet = make_time_sheet(&config, holidays, &mut config.rng())
        .expect("9 days with 6 hours are enough for 40 hours");

    assert_eq!(sheet.rows().len(), 30);
    for row in sheet.rows() {
        let date = row.date();
        let workable = (4..=15).contains(&date.day())
            && date.week_day() != WeekDay::Saturday
            && date.week_day() != WeekDay::Sunday
            && date != date!(2023:09:07);

        if !workable {
            assert_eq!(row.block(), None, "{} should not be worked", date);
            assert_eq!(
                row.to_string(),
                format!("{}\t\t\t", date.formatted("{day}.{month}"))
            );
        }
    }
    assert_eq!(sheet.total(), working_duration!(40:00));
}

#[test]
fn test_single_day_grows_to_maximum() {
    let mut builder = common::september_2023();
    builder
        .first_day(4)
        .last_day(4)
        .target_hours(working_duration!(02:00))
        .daily_limit(working_duration!(02:00));
    let config = builder.build().expect("config should be valid");

    let distribution = schedule::distribute(
        &config,
        vec![4],
        &mut StdRng::seed_from_u64(7),
    )
    .expect("one day with 2 hours is enough for 2 hours");

    let block = distribution.get(4).expect("the day should be worked");
    assert_eq!(block.duration(), working_duration!(02:00));
    assert!(block.start() >= time_stamp!(08:00));
    assert!(block.end() <= time_stamp!(18:00));
    assert_eq!(distribution.saturated(), &[4]);
    assert_eq!(distribution.len(), 1);
}

#[test]
fn test_over_capacity_writes_nothing() {
    let directory = tempfile::tempdir().expect("should be able to create a temporary directory");
    let output = directory.path().join("sheet");

    let mut builder = common::september_2023();
    builder
        .target_hours(working_duration!(200:00))
        .daily_limit(working_duration!(06:00))
        .output(&output);
    let config = builder.build().expect("config should be valid");

    let error = generate_time_sheet(&config).expect_err("200 hours do not fit into september");
    assert!(matches!(
        error.downcast_ref::<DistributionError>(),
        Some(DistributionError::CapacityExhausted { .. })
    ));

    assert!(!config.output().exists());
    assert_eq!(
        std::fs::read_dir(directory.path())
            .expect("directory should exist")
            .count(),
        0
    );
}

#[test]
fn test_written_sheet() {
    let directory = tempfile::tempdir().expect("should be able to create a temporary directory");

    let mut builder = common::september_2023();
    builder
        .target_hours(working_duration!(23:00))
        .output(directory.path().join("september"));
    let config = builder.build().expect("config should be valid");

    let path = generate_time_sheet(&config).expect("23 hours fit into september");
    assert_eq!(path, directory.path().join("september.csv"));

    let contents = std::fs::read_to_string(&path).expect("sheet should have been written");
    let lines = contents.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 31);
    assert_eq!(lines[0].split('\t').next(), Some("01.09"));
    assert_eq!(lines[29].split('\t').next(), Some("30.09"));
    assert_eq!(lines[30], "23:00");
    // independence day
    assert_eq!(lines[6], "07.09\t\t\t");
    assert_eq!(common::sum_of_rows(&contents), working_duration!(23:00));
}

#[test]
fn test_same_seed_same_sheet() {
    let make = || {
        let mut builder = common::september_2023();
        builder.seed(1234).target_hours(working_duration!(30:00));
        let config = builder.build().expect("config should be valid");

        make_time_sheet(&config, FixedHolidays::none(), &mut config.rng())
            .expect("30 hours fit into september")
            .to_string()
    };

    assert_eq!(make(), make());
}

#[test]
fn test_no_default_last_day_on_first_of_month() {
    // on the first day of a month there is no day before to default to
    let mut builder = Config::builder(date!(2023:10:01));
    builder.month(Month::October);

    assert!(builder.build().is_err());
}
