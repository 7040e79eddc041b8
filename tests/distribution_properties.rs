//! Invariants of the hour distribution that hold for any valid config.

use random_time_sheet::input::Config;
use random_time_sheet::schedule::{self, DistributionError};
use random_time_sheet::time::{TimeStamp, WorkingDuration};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;

/// A window and a daily limit that leaves at least half an hour of room in it.
fn working_hours() -> impl Strategy<Value = (TimeStamp, TimeStamp, WorkingDuration)> {
    (0_u16..=24, 2_u16..=24)
        .prop_flat_map(|(start, length)| (Just(start), Just(length), 1..length))
        .prop_map(|(start, length, limit)| {
            (
                TimeStamp::from_minutes(start * 30),
                TimeStamp::from_minutes((start + length) * 30),
                WorkingDuration::from_half_hours(u32::from(limit)),
            )
        })
}

fn config(
    target_half_hours: u32,
    (start, end, limit): (TimeStamp, TimeStamp, WorkingDuration),
) -> Config {
    let mut builder = common::september_2023();
    builder
        .target_hours(WorkingDuration::from_half_hours(target_half_hours))
        .work_start(start)
        .work_end(end)
        .daily_limit(limit);
    builder.build().expect("config should be valid")
}

proptest! {
    #[test]
    fn prop_distribution_invariants(
        hours in working_hours(),
        target in 0_u32..=200,
        days in proptest::sample::subsequence((1..=30).collect::<Vec<usize>>(), 0..=12),
        seed in any::<u64>(),
    ) {
        let config = config(target, hours);
        let capacity = config.daily_limit().half_hours() * days.len() as u32;

        let result = schedule::distribute(&config, days.clone(), &mut StdRng::seed_from_u64(seed));

        if target > capacity {
            prop_assert!(
                matches!(result, Err(DistributionError::CapacityExhausted { .. })),
                "expected capacity to be exhausted, got {:?}",
                result
            );
            return Ok(());
        }

        let distribution = result.expect("there is enough capacity");
        prop_assert_eq!(distribution.total(), config.target_hours());

        for (day, block) in distribution.blocks() {
            prop_assert!(days.contains(&day));
            prop_assert!(block.duration() <= config.daily_limit());
            prop_assert!(block.start() >= config.work_start());
            prop_assert!(block.end() <= config.work_end());
        }

        for day in distribution.saturated() {
            let block = distribution.get(*day).expect("saturated days are worked");
            prop_assert_eq!(block.duration(), config.daily_limit());
        }

        let mut saturated = distribution.saturated().to_vec();
        saturated.sort_unstable();
        saturated.dedup();
        prop_assert_eq!(saturated.len(), distribution.saturated().len());
    }
}
