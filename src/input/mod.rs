mod config;
mod defaults;

pub use config::*;
pub use defaults::*;
