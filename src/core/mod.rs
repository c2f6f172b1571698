//! Core data types shared across the crate.

mod calendar;
mod series;

pub use calendar::{DailyIndex, DatedAnomaly};
pub use series::{Anomaly, Series};
