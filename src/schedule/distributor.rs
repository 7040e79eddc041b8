use std::collections::BTreeMap;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::input::Config;
use crate::schedule::{DayBlock, WeightedPool};
use crate::time::{TimeStamp, WorkingDuration};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("could not work off all hours with the given parameters, {remaining} are left after every valid day reached its maximum")]
    CapacityExhausted { remaining: WorkingDuration },
    #[error("the work on day {day} ({block}) can not be extended without leaving the working window")]
    NoRoomToExtend { day: usize, block: DayBlock },
}

/// The work of a month: the block that is worked on each day of the month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    blocks: BTreeMap<usize, DayBlock>,
    saturated: Vec<usize>,
}

impl Distribution {
    #[must_use]
    pub fn get(&self, day: usize) -> Option<&DayBlock> {
        self.blocks.get(&day)
    }

    /// The worked days and their blocks, ordered by day.
    pub fn blocks(&self) -> impl Iterator<Item = (usize, &DayBlock)> + '_ {
        self.blocks.iter().map(|(day, block)| (*day, block))
    }

    /// The days that reached the maximum working time, in the order they reached it.
    #[must_use]
    pub fn saturated(&self) -> &[usize] {
        &self.saturated
    }

    #[must_use]
    pub fn total(&self) -> WorkingDuration {
        self.blocks.values().map(DayBlock::duration).sum()
    }

    /// The number of days with work.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Distributes the configured hours in half hour steps over the valid days.
///
/// The days are shuffled and then weighted by the inverse of their position,
/// so a few random days get most of the work. A drawn day either gets a new
/// half hour block somewhere in the working window or its block grows by half
/// an hour at the start or the end. Days that reach the maximum working time
/// are never drawn again.
pub struct HourDistributor<'a, R: ?Sized> {
    config: &'a Config,
    rng: &'a mut R,
    pool: WeightedPool<usize>,
    chunks: Vec<DayBlock>,
    blocks: BTreeMap<usize, DayBlock>,
    saturated: Vec<usize>,
}

impl<'a, R: Rng + ?Sized> HourDistributor<'a, R> {
    #[must_use]
    pub fn new(config: &'a Config, mut valid_days: Vec<usize>, rng: &'a mut R) -> Self {
        valid_days.shuffle(rng);
        trace!("shuffled days: {:?}", valid_days);

        let chunks = (config.work_start().as_minutes()..config.work_end().as_minutes())
            .step_by(30)
            .map(TimeStamp::from_minutes)
            .filter_map(DayBlock::half_hour_at)
            .collect();

        Self {
            config,
            rng,
            pool: WeightedPool::with_inverse_rank(valid_days),
            chunks,
            blocks: BTreeMap::new(),
            saturated: Vec::new(),
        }
    }

    pub fn run(mut self) -> Result<Distribution, DistributionError> {
        let mut remaining = self.config.target_hours();

        while !remaining.is_zero() {
            let Some(&day) = self.pool.draw(&mut *self.rng) else {
                return Err(DistributionError::CapacityExhausted { remaining });
            };

            self.work_half_hour_on(day, remaining)?;
            remaining = remaining - WorkingDuration::HALF_HOUR;
        }

        Ok(Distribution {
            blocks: self.blocks,
            saturated: self.saturated,
        })
    }

    fn work_half_hour_on(
        &mut self,
        day: usize,
        remaining: WorkingDuration,
    ) -> Result<(), DistributionError> {
        let block = match self.blocks.get(&day).copied() {
            Some(block) => {
                let no_room = DistributionError::NoRoomToExtend { day, block };
                let sides =
                    block.extensible_sides(self.config.work_start(), self.config.work_end());
                let side = *sides.choose(&mut *self.rng).ok_or_else(|| no_room.clone())?;

                let extended = block.extended(side).ok_or(no_room)?;
                trace!("day {}: {} -> {} ({})", day, block, extended, side);
                extended
            }
            None => {
                // without a single chunk in the window no day can take any work
                let Some(&block) = self.chunks.choose(&mut *self.rng) else {
                    return Err(DistributionError::CapacityExhausted { remaining });
                };

                trace!("day {}: new block {}", day, block);
                block
            }
        };

        self.blocks.insert(day, block);

        if block.duration() >= self.config.daily_limit() {
            self.pool.remove(&day);
            self.saturated.push(day);
            debug!(
                "day {} reached the maximum working time with {}, {} days left",
                day,
                block,
                self.pool.len()
            );
        }

        Ok(())
    }
}

/// Distributes the configured hours over the `valid_days`, see [`HourDistributor`].
pub fn distribute<R: Rng + ?Sized>(
    config: &Config,
    valid_days: Vec<usize>,
    rng: &mut R,
) -> Result<Distribution, DistributionError> {
    HourDistributor::new(config, valid_days, rng).run()
}
