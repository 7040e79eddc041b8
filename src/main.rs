use std::env;
use std::ffi::OsStr;

use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use random_time_sheet::generate_time_sheet;
use random_time_sheet::holiday::{BuiltinHolidays, HolidayCalendar, Region};
use random_time_sheet::input::{Config, Defaults};
use random_time_sheet::time::{self, Month, Year};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();
    app(&args[0]).run(args);
}

mod seahorse_exts {
    use core::fmt;
    use core::str::FromStr;

    use log::error;
    use seahorse::Context;

    pub fn exit_on_error(result: anyhow::Result<()>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        /// Parses the value of the flag, `None` if the flag has not been passed.
        fn optional_flag<T>(&self, name: &str) -> anyhow::Result<Option<T>>
        where
            T: FromStr,
            T::Err: fmt::Display,
        {
            let Ok(value) = self.context().string_flag(name) else {
                return Ok(None);
            };

            value.parse().map(Some).map_err(|e| {
                anyhow::anyhow!("invalid value `{}` for flag \"{}\": {}", value, name, e)
            })
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

/// Parses a list of weekday numbers separated by commas and/or whitespace.
fn parse_week_days(value: &str) -> anyhow::Result<Vec<usize>> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse()
                .map_err(|e| anyhow::anyhow!("invalid weekday `{}`: {}", part, e))
        })
        .collect()
}

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let mut builder = Config::builder(time::today());

    if let Some(path) = context.optional_flag::<String>("defaults")? {
        builder.defaults(Defaults::try_from_file(path)?);
    }

    if let Some(year) = context.optional_flag::<Year>("year")? {
        builder.year(year);
    }

    if let Some(month) = context.optional_flag::<Month>("month")? {
        builder.month(month);
    }

    if let Some(day) = context.optional_flag("first-day")? {
        builder.first_day(day);
    }

    if let Some(day) = context.optional_flag("last-day")? {
        builder.last_day(day);
    }

    if let Some(week_days) = context.optional_flag::<String>("week-days")? {
        builder.week_days(parse_week_days(&week_days)?);
    }

    if let Some(hours) = context.optional_flag("hours")? {
        builder.target_hours(hours);
    }

    if let Some(start) = context.optional_flag("start")? {
        builder.work_start(start);
    }

    if let Some(end) = context.optional_flag("end")? {
        builder.work_end(end);
    }

    if let Some(limit) = context.optional_flag("max")? {
        builder.daily_limit(limit);
    }

    if let Some(output) = context.optional_flag::<String>("output")? {
        builder.output(output);
    }

    if let Some(region) = context.optional_flag("region")? {
        builder.region(region);
    }

    if let Some(seed) = context.optional_flag("seed")? {
        builder.seed(seed);
    }

    let config = builder.build()?;

    info!("finished building config");

    Ok(config)
}

fn make(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let output = generate_time_sheet(&config)?;

    info!("wrote time sheet to \"{}\"", output.display());

    Ok(())
}

fn list_holidays(context: &Context) -> anyhow::Result<()> {
    let today = time::today();
    let region = context
        .optional_flag::<Region>("region")?
        .unwrap_or_default();
    let year = context
        .optional_flag::<Year>("year")?
        .unwrap_or(today.year());

    let months = match context.optional_flag::<Month>("month")? {
        Some(month) => vec![month],
        None => Month::months().to_vec(),
    };

    info!("holidays in {} for {}", region, year);
    for month in months {
        for (date, holiday) in BuiltinHolidays.holidays_in(region, year, month) {
            println!("{}\t{}", date.formatted("{day}.{month}.{year}"), holiday.name());
        }
    }

    Ok(())
}

fn make_flags() -> Vec<Flag> {
    vec![
        Flag::new("year", FlagType::String)
            .description("Year of the time sheet. Default: current year")
            .alias("y"),
        Flag::new("month", FlagType::String)
            .description("Month of the time sheet (1-12). Default: current month")
            .alias("m"),
        Flag::new("first-day", FlagType::String)
            .description("First day of the month that may be worked. Default: 1")
            .alias("f"),
        Flag::new("last-day", FlagType::String)
            .description("Last day of the month that may be worked. Default: yesterday")
            .alias("l"),
        Flag::new("week-days", FlagType::String)
            .description("Weekdays that may be worked (monday = 0, ..., sunday = 6). Default: \"0,1,2,3,4\"")
            .alias("d"),
        Flag::new("hours", FlagType::String)
            .description("Number of hours to distribute, like `23`, `7.5` or `07:30`. Default: 23")
            .alias("H"),
        Flag::new("start", FlagType::String)
            .description("Start of the working window, like `8` or `08:30`. Default: 8")
            .alias("s"),
        Flag::new("end", FlagType::String)
            .description("End of the working window, like `18` or `17:30`. Default: 18")
            .alias("e"),
        Flag::new("max", FlagType::String)
            .description("Maximum working time per day. Default: 6")
            .alias("x"),
        Flag::new("output", FlagType::String)
            .description("Name of the output file, `.csv` is appended. Default: timesheet")
            .alias("o"),
        Flag::new("region", FlagType::String)
            .description("Region whose public holidays are not worked: `BR` for the national ones or a brazilian state like `RJ`. Default: RJ")
            .alias("r"),
        Flag::new("seed", FlagType::String)
            .description("[optional] Seed for the random distribution, makes the result reproducible."),
        Flag::new("defaults", FlagType::String)
            .description("[optional] Path to a toml file with personal defaults."),
    ]
}

fn app(program: &str) -> App {
    let holidays_command = Command::new("holidays")
        .usage(format!("{} holidays [args]", program))
        .description("Lists the public holidays of a region.")
        .flag(
            Flag::new("region", FlagType::String)
                .description("Region code, like `RJ` or `BR`. Default: RJ")
                .alias("r"),
        )
        .flag(
            Flag::new("year", FlagType::String)
                .description("Year to list the holidays of. Default: current year")
                .alias("y"),
        )
        .flag(
            Flag::new("month", FlagType::String)
                .description("[optional] Only list the holidays of this month.")
                .alias("m"),
        )
        .action(|context: &Context| exit_on_error(list_holidays(context)));

    make_flags().into_iter().fold(
        App::new(env!("CARGO_PKG_NAME"))
            .description(env!("CARGO_PKG_DESCRIPTION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .version(env!("CARGO_PKG_VERSION"))
            .usage(format!("{} [args]", program))
            .action(|context: &Context| exit_on_error(make(context)))
            .command(holidays_command),
        App::flag,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use random_time_sheet::holiday::BrazilianState;
    use random_time_sheet::time::WeekDay;
    use random_time_sheet::{time_stamp, working_duration};

    #[test]
    fn test_parse_week_days() {
        assert_eq!(parse_week_days("0,1,2,3,4").unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(parse_week_days("1 3, 5").unwrap(), vec![1, 3, 5]);
        assert_eq!(parse_week_days("").unwrap(), Vec::<usize>::new());
        assert!(parse_week_days("0,monday").is_err());
    }

    fn context(args: &[&str]) -> Context {
        Context::new(
            args.iter().map(|arg| arg.to_string()).collect(),
            Some(make_flags()),
            String::new(),
        )
    }

    #[test]
    fn test_build_config_from_flags() {
        let config = build_config(&context(&[
            "--year", "2023", "-m", "9", "-f", "4", "-l", "29", "-d", "0 2 4", "--hours", "12.5",
            "-s", "9", "-e", "17:30", "-x", "4", "-o", "out/sept", "-r", "sp", "--seed", "3",
        ]))
        .unwrap();

        assert_eq!(config.year(), Year::new(2023));
        assert_eq!(config.month(), Month::September);
        assert_eq!(config.days(), 4..=29);
        assert_eq!(
            config.week_days(),
            &[WeekDay::Monday, WeekDay::Wednesday, WeekDay::Friday]
        );
        assert_eq!(config.target_hours(), working_duration!(12:30));
        assert_eq!(config.work_start(), time_stamp!(09:00));
        assert_eq!(config.work_end(), time_stamp!(17:30));
        assert_eq!(config.daily_limit(), working_duration!(04:00));
        assert_eq!(config.region(), Region::State(BrazilianState::SP));
        assert_eq!(config.output(), std::path::PathBuf::from("out/sept.csv"));
        assert_eq!(config.seed(), Some(3));
    }

    #[test]
    fn test_flags_take_precedence_over_defaults_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hours = 40").unwrap();
        writeln!(file, "max = 5").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = build_config(&context(&[
            "--defaults", path.as_str(), "-y", "2023", "-m", "9", "-l", "30", "--hours", "10",
        ]))
        .unwrap();

        assert_eq!(config.target_hours(), working_duration!(10:00));
        assert_eq!(config.daily_limit(), working_duration!(05:00));
        assert_eq!(config.work_end(), Config::DEFAULT_WORK_END);
    }

    #[test]
    fn test_invalid_flag_values() {
        for args in [
            &["-y", "10000", "-m", "9", "-l", "30"][..],
            &["-y", "2023", "-m", "13", "-l", "30"],
            &["-y", "2023", "-m", "9", "-l", "30", "--hours", "80000000:00"],
            &["-y", "2023", "-m", "9", "-l", "30", "-r", "XX"],
            &["-y", "2023", "-m", "9", "-l", "30", "-d", "7"],
        ] {
            assert!(build_config(&context(args)).is_err(), "{:?} should fail", args);
        }
    }
}
