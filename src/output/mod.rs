//! Turns a [`Distribution`] into the tab separated time sheet.

use core::fmt;

use crate::input::Config;
use crate::schedule::{DayBlock, Distribution};
use crate::time::{Date, WorkingDuration};

/// One line of the time sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    date: Date,
    block: Option<DayBlock>,
}

impl Row {
    #[must_use]
    pub const fn new(date: Date, block: Option<DayBlock>) -> Self {
        Self { date, block }
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn block(&self) -> Option<&DayBlock> {
        self.block.as_ref()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t", self.date.formatted("{day}.{month}"))?;

        match &self.block {
            Some(block) => write!(
                f,
                "{}\t{}\t{}",
                block.start(),
                block.end(),
                block.duration()
            ),
            None => f.write_str("\t\t"),
        }
    }
}

/// A row for every day of the month, followed by the total working time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSheet {
    rows: Vec<Row>,
    total: WorkingDuration,
}

impl TimeSheet {
    #[must_use]
    pub fn new(config: &Config, distribution: &Distribution) -> Self {
        let rows = (1..=config.days_in_month())
            .map(|day| Row::new(config.date(day), distribution.get(day).copied()))
            .collect();

        Self {
            rows,
            total: config.target_hours(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn total(&self) -> WorkingDuration {
        self.total
    }
}

impl fmt::Display for TimeSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }

        write!(f, "{}", self.total)
    }
}
