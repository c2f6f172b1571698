//! Windowed trend classification.

use crate::transform::sliding_window;
use crate::utils::stats::linear_slope;
use std::fmt;

/// Default window length for [`detect_trend`].
pub const DEFAULT_TREND_WINDOW: usize = 10;

/// Slope magnitude separating "flat" from "up"/"down".
///
/// Unscaled: it assumes the series is already on a normalized range.
pub const TREND_SLOPE_THRESHOLD: f64 = 0.01;

/// Direction of a window's linear trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classify an OLS slope; `None` (fewer than two points) is flat.
    pub fn from_slope(slope: Option<f64>) -> Self {
        match slope {
            Some(s) if s > TREND_SLOPE_THRESHOLD => Trend::Up,
            Some(s) if s < -TREND_SLOPE_THRESHOLD => Trend::Down,
            _ => Trend::Flat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the trend of every length-`window` window (step 1).
///
/// Returns one label per window, in window order. An invalid window yields
/// no labels.
pub fn detect_trend(series: &[f64], window: usize) -> Vec<Trend> {
    match sliding_window(series, window, 1) {
        Ok(windows) => windows
            .iter()
            .map(|w| Trend::from_slope(linear_slope(w)))
            .collect(),
        Err(_) => Vec::new(),
    }
}
