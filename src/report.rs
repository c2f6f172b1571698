//! One-call analysis of a sales series.

use crate::config::AnalysisConfig;
use crate::core::{Anomaly, Series};
use crate::detection::{ensemble_anomaly_detection, MadDetector, ZScoreDetector};
use crate::error::{AnalysisError, Result};
use crate::pattern::{
    detect_peaks_and_valleys, detect_trend, seasonal_period, PeaksAndValleys, SeasonalPeriod,
    Trend,
};
use crate::transform::moving_average;
use tracing::{debug, warn};

/// Everything [`analyze`] finds in a series.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Ensemble z-score/MAD anomalies, indexed into the raw series.
    pub anomalies: Vec<Anomaly>,
    /// Turning points of the pattern series.
    pub turning_points: PeaksAndValleys,
    /// One trend label per window of the pattern series.
    pub trends: Vec<Trend>,
    /// Seasonal period of the pattern series, if any.
    pub seasonality: Option<SeasonalPeriod>,
    /// The smoothed series when smoothing was configured.
    ///
    /// Pattern indices then refer to this series; smoothed index `i` covers
    /// raw positions `i..i + window`.
    pub smoothed: Option<Series>,
}

impl AnalysisReport {
    /// The most frequent trend label, `None` when no windows were classified.
    ///
    /// Ties resolve in the order up, down, flat.
    pub fn dominant_trend(&self) -> Option<Trend> {
        let count = |t: Trend| self.trends.iter().filter(|&&x| x == t).count();
        [Trend::Up, Trend::Down, Trend::Flat]
            .into_iter()
            .map(|t| (t, count(t)))
            .filter(|&(_, n)| n > 0)
            .fold(None, |best: Option<(Trend, usize)>, (t, n)| match best {
                Some((_, best_n)) if best_n >= n => best,
                _ => Some((t, n)),
            })
            .map(|(t, _)| t)
    }

    /// Detected seasonal period, if any.
    pub fn period(&self) -> Option<usize> {
        self.seasonality.map(|s| s.period)
    }
}

/// Run anomaly, turning-point, trend and seasonality detection in one pass.
///
/// Anomalies are always computed on the raw series. Pattern detectors run on
/// the smoothed series when `config.smoothing_window` is set.
pub fn analyze(series: &[f64], config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;
    if series.is_empty() {
        warn!("cannot analyze an empty series");
        return Err(AnalysisError::EmptyData);
    }

    let z = ZScoreDetector::new(config.z_threshold);
    let mad = MadDetector::new(config.mad_threshold);
    let anomalies = ensemble_anomaly_detection(series, &[&z, &mad], config.voting);

    let smoothed = match config.smoothing_window {
        Some(window) => Some(moving_average(series, window)?),
        None => None,
    };
    let pattern_series = smoothed.as_deref().unwrap_or(series);

    let report = AnalysisReport {
        anomalies,
        turning_points: detect_peaks_and_valleys(pattern_series, config.peak_threshold),
        trends: detect_trend(pattern_series, config.trend_window),
        seasonality: seasonal_period(pattern_series, config.max_period),
        smoothed,
    };

    debug!(
        len = series.len(),
        anomalies = report.anomalies.len(),
        turning_points = report.turning_points.len(),
        windows = report.trends.len(),
        period = ?report.period(),
        "analysis complete"
    );
    Ok(report)
}
