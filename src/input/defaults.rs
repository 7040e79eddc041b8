use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::holiday::Region;
use crate::time::{TimeStamp, WorkingDuration};
use crate::utils;

/// Personal defaults, read from a toml file.
///
/// ```toml
/// hours = 23
/// week_days = [0, 1, 2, 3, 4]
/// start = 8
/// end = "18:00"
/// max = 6
/// output = "timesheet"
/// region = "RJ"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    hours: Option<WorkingDuration>,
    week_days: Option<Vec<usize>>,
    start: Option<TimeStamp>,
    end: Option<TimeStamp>,
    max: Option<WorkingDuration>,
    output: Option<PathBuf>,
    region: Option<Region>,
}

impl Defaults {
    pub fn try_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?;

        utils::toml_from_reader(file).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    #[must_use]
    pub fn hours(&self) -> Option<WorkingDuration> {
        self.hours
    }

    #[must_use]
    pub fn week_days(&self) -> Option<&Vec<usize>> {
        self.week_days.as_ref()
    }

    #[must_use]
    pub fn start(&self) -> Option<TimeStamp> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<TimeStamp> {
        self.end
    }

    #[must_use]
    pub fn max(&self) -> Option<WorkingDuration> {
        self.max
    }

    #[must_use]
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    #[must_use]
    pub fn region(&self) -> Option<Region> {
        self.region
    }
}
