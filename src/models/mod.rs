//! Domain model helpers shared across the crate.

pub mod time;

pub use time::{clock, minutes_between, TimeFormatter, DEFAULT_TIME_PATTERN};
