use derive_more::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    const WEEK: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    /// Returns the weekday for a zero based index, where monday is `0` and sunday is `6`.
    pub const fn from_index(index: usize) -> Result<Self, InvalidWeekDayNumber> {
        if index < Self::WEEK.len() {
            Ok(Self::WEEK[index])
        } else {
            Err(InvalidWeekDayNumber(index))
        }
    }

    /// The zero based index of this weekday (monday is `0`).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.as_usize() - 1
    }

    #[must_use]
    pub const fn add_const(self, days: usize) -> Self {
        Self::WEEK[(self.index() + days % 7) % 7]
    }

    /// Monday to friday.
    #[must_use]
    pub const fn work_week() -> [Self; 5] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid weekday number `{0}`, expected 0 (monday) to 6 (sunday)")]
pub struct InvalidWeekDayNumber(pub usize);
