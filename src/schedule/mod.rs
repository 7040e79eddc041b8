//! Decides on which days and at which times the hours are worked.

mod day_block;
mod distributor;
mod valid_days;
mod weighted_pool;

pub use day_block::*;
pub use distributor::*;
pub use valid_days::*;
pub use weighted_pool::*;
