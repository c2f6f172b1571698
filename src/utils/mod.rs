//! Utility functions shared by transforms and detectors.

pub mod stats;

pub use stats::{autocorrelation, linear_slope, mean, median, population_std, population_variance};
