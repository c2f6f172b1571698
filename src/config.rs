//! Tunable parameters for a full analysis run.

use crate::detection::{Voting, DEFAULT_MAD_THRESHOLD, DEFAULT_Z_THRESHOLD};
use crate::error::{AnalysisError, Result};
use crate::pattern::{DEFAULT_MAX_PERIOD, DEFAULT_PEAK_THRESHOLD, DEFAULT_TREND_WINDOW};

/// Configuration for [`analyze`](crate::report::analyze).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Z-score threshold for the z-score detector.
    pub z_threshold: f64,
    /// Modified z-score threshold for the MAD detector.
    pub mad_threshold: f64,
    /// How the z-score and MAD votes are combined.
    pub voting: Voting,
    /// Minimum rise over a neighbour for peaks and valleys.
    pub peak_threshold: f64,
    /// Window length for trend classification.
    pub trend_window: usize,
    /// Largest seasonal period searched.
    pub max_period: usize,
    /// Moving-average window applied before pattern detection, if any.
    pub smoothing_window: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            z_threshold: DEFAULT_Z_THRESHOLD,
            mad_threshold: DEFAULT_MAD_THRESHOLD,
            voting: Voting::Majority,
            peak_threshold: DEFAULT_PEAK_THRESHOLD,
            trend_window: DEFAULT_TREND_WINDOW,
            max_period: DEFAULT_MAX_PERIOD,
            smoothing_window: None,
        }
    }
}

impl AnalysisConfig {
    pub fn with_z_threshold(mut self, threshold: f64) -> Self {
        self.z_threshold = threshold;
        self
    }

    pub fn with_mad_threshold(mut self, threshold: f64) -> Self {
        self.mad_threshold = threshold;
        self
    }

    pub fn with_voting(mut self, voting: Voting) -> Self {
        self.voting = voting;
        self
    }

    pub fn with_peak_threshold(mut self, threshold: f64) -> Self {
        self.peak_threshold = threshold;
        self
    }

    pub fn with_trend_window(mut self, window: usize) -> Self {
        self.trend_window = window;
        self
    }

    pub fn with_max_period(mut self, max_period: usize) -> Self {
        self.max_period = max_period;
        self
    }

    /// Smooth with a moving average before peak, trend and seasonality detection.
    pub fn with_smoothing(mut self, window: usize) -> Self {
        self.smoothing_window = Some(window);
        self
    }

    /// Reject thresholds that are negative or NaN and a zero trend window.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("z_threshold", self.z_threshold),
            ("mad_threshold", self.mad_threshold),
            ("peak_threshold", self.peak_threshold),
        ];
        for (name, value) in thresholds {
            if value.is_nan() || value < 0.0 {
                return Err(AnalysisError::InvalidArgument(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.trend_window == 0 {
            return Err(AnalysisError::InvalidArgument(
                "trend_window must be positive".to_string(),
            ));
        }
        if self.smoothing_window == Some(0) {
            return Err(AnalysisError::InvalidArgument(
                "smoothing_window must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
