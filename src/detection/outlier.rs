//! Z-score and MAD outlier detection.
//!
//! Both detectors score every index independently against whole-series
//! statistics and flag indices whose absolute score exceeds a threshold.
//! Degenerate inputs (too short, constant) have no anomalies.

use crate::core::Anomaly;
use crate::utils::stats::{mean, median, population_std};
use tracing::debug;

/// Default threshold for [`z_score_anomalies`].
pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

/// Default threshold for [`mad_anomalies`].
pub const DEFAULT_MAD_THRESHOLD: f64 = 3.5;

/// 0.75 quantile of the standard normal, scaling MAD to a std estimate.
pub const MAD_CONSISTENCY: f64 = 0.6745;

/// Substitute for a zero MAD.
///
/// An approximation kept for compatibility, not a statistical correction:
/// with it, every point away from the median of a mostly-constant series
/// scores as an extreme outlier.
pub const MAD_EPSILON: f64 = 1e-10;

/// Anything that flags anomalous indices in a series.
pub trait Detector {
    /// Detect anomalies, returned in ascending index order.
    fn detect(&self, series: &[f64]) -> Vec<Anomaly>;

    /// Name of the detection method.
    fn name(&self) -> &str;
}

/// Signed z-scores against the population mean and std.
///
/// Returns `None` when the series has fewer than two points or zero variance.
pub fn z_scores(series: &[f64]) -> Option<Vec<f64>> {
    if series.len() < 2 {
        return None;
    }

    let m = mean(series);
    let std = population_std(series);
    if std == 0.0 {
        return None;
    }

    Some(series.iter().map(|x| (x - m) / std).collect())
}

/// Signed modified z-scores `0.6745 * (x - median) / MAD`.
///
/// A zero MAD is replaced by [`MAD_EPSILON`]. Returns `None` for fewer than
/// two points.
pub fn modified_z_scores(series: &[f64]) -> Option<Vec<f64>> {
    if series.len() < 2 {
        return None;
    }

    let med = median(series);
    let deviations: Vec<f64> = series.iter().map(|x| (x - med).abs()).collect();
    let mut mad = median(&deviations);
    if mad == 0.0 {
        mad = MAD_EPSILON;
    }

    Some(
        series
            .iter()
            .map(|x| MAD_CONSISTENCY * (x - med) / mad)
            .collect(),
    )
}

fn flag(series: &[f64], scores: &[f64], threshold: f64) -> Vec<Anomaly> {
    scores
        .iter()
        .zip(series.iter())
        .enumerate()
        .filter(|(_, (score, _))| score.abs() > threshold)
        .map(|(i, (_, &value))| Anomaly::new(i, value))
        .collect()
}

/// Flag indices whose z-score magnitude exceeds `threshold`.
pub fn z_score_anomalies(series: &[f64], threshold: f64) -> Vec<Anomaly> {
    match z_scores(series) {
        Some(scores) => flag(series, &scores, threshold),
        None => {
            debug!(len = series.len(), "z-score detection skipped: degenerate series");
            Vec::new()
        }
    }
}

/// Flag indices whose modified z-score magnitude exceeds `threshold`.
pub fn mad_anomalies(series: &[f64], threshold: f64) -> Vec<Anomaly> {
    match modified_z_scores(series) {
        Some(scores) => flag(series, &scores, threshold),
        None => {
            debug!(len = series.len(), "MAD detection skipped: series too short");
            Vec::new()
        }
    }
}

/// Z-score detector with a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreDetector {
    pub threshold: f64,
}

impl ZScoreDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::new(DEFAULT_Z_THRESHOLD)
    }
}

impl Detector for ZScoreDetector {
    fn detect(&self, series: &[f64]) -> Vec<Anomaly> {
        z_score_anomalies(series, self.threshold)
    }

    fn name(&self) -> &str {
        "zscore"
    }
}

/// Modified z-score (MAD) detector with a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MadDetector {
    pub threshold: f64,
}

impl MadDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for MadDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MAD_THRESHOLD)
    }
}

impl Detector for MadDetector {
    fn detect(&self, series: &[f64]) -> Vec<Anomaly> {
        mad_anomalies(series, self.threshold)
    }

    fn name(&self) -> &str {
        "mad"
    }
}

/// Adapts a plain function or closure into a [`Detector`].
///
/// # Example
///
/// ```
/// use retail_ts::core::Anomaly;
/// use retail_ts::detection::{Detector, FnDetector};
///
/// let above_100 = FnDetector::new("above-100", |s: &[f64]| {
///     s.iter()
///         .enumerate()
///         .filter(|(_, &v)| v > 100.0)
///         .map(|(i, &v)| Anomaly::new(i, v))
///         .collect()
/// });
///
/// assert_eq!(above_100.detect(&[50.0, 150.0]), vec![Anomaly::new(1, 150.0)]);
/// ```
pub struct FnDetector<F> {
    name: String,
    func: F,
}

impl<F> FnDetector<F>
where
    F: Fn(&[f64]) -> Vec<Anomaly>,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Detector for FnDetector<F>
where
    F: Fn(&[f64]) -> Vec<Anomaly>,
{
    fn detect(&self, series: &[f64]) -> Vec<Anomaly> {
        (self.func)(series)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnDetector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDetector").field("name", &self.name).finish()
    }
}
