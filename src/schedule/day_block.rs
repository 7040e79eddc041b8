use derive_more::Display;

use crate::time::{TimeStamp, WorkingDuration};

/// The side of a [`DayBlock`] on which it can grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Side {
    Before,
    After,
}

/// The contiguous time span worked on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{start} - {end}")]
pub struct DayBlock {
    start: TimeStamp,
    end: TimeStamp,
}

impl DayBlock {
    /// Creates a half hour long block starting at `start`.
    ///
    /// Returns `None` if the block would end after the end of the day.
    #[must_use]
    pub fn half_hour_at(start: TimeStamp) -> Option<Self> {
        let end = start.checked_add(WorkingDuration::HALF_HOUR)?;

        Some(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> TimeStamp {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> TimeStamp {
        self.end
    }

    #[must_use]
    pub fn duration(&self) -> WorkingDuration {
        self.start.elapsed(&self.end)
    }

    /// Returns the sides on which the block can grow by half an hour without
    /// leaving the working window.
    ///
    /// The end only grows while it is more than half an hour before the end
    /// of the window.
    #[must_use]
    pub fn extensible_sides(&self, window_start: TimeStamp, window_end: TimeStamp) -> Vec<Side> {
        let mut sides = Vec::with_capacity(2);

        if self.start > window_start {
            sides.push(Side::Before);
        }

        let last_end = window_end.checked_sub(WorkingDuration::HALF_HOUR);
        if last_end.map_or(false, |last_end| self.end < last_end) {
            sides.push(Side::After);
        }

        sides
    }

    /// Grows the block by half an hour on the given side.
    ///
    /// Returns `None` if the block would leave the day.
    #[must_use]
    pub fn extended(&self, side: Side) -> Option<Self> {
        let mut result = *self;

        match side {
            Side::Before => result.start = self.start.checked_sub(WorkingDuration::HALF_HOUR)?,
            Side::After => result.end = self.end.checked_add(WorkingDuration::HALF_HOUR)?,
        }

        Some(result)
    }
}
