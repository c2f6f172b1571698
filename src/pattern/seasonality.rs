//! Autocorrelation-based seasonality detection.

use crate::utils::stats::autocorrelation;
use tracing::debug;

/// Default largest period considered by [`detect_seasonality`].
pub const DEFAULT_MAX_PERIOD: usize = 50;

/// Smallest lag considered as a period.
pub const MIN_PERIOD: usize = 2;

/// Autocorrelation a lag must exceed to count as a period.
pub const SEASONALITY_ACF_THRESHOLD: f64 = 0.5;

/// A detected seasonal period and the autocorrelation at that lag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalPeriod {
    pub period: usize,
    pub autocorrelation: f64,
}

/// Find the lag in `[2, min(max_period, n / 2))` with the highest autocorrelation.
///
/// Requires `n >= 2 * max_period`. The best lag is reported only if its
/// autocorrelation exceeds 0.5; ties go to the smallest lag.
pub fn seasonal_period(series: &[f64], max_period: usize) -> Option<SeasonalPeriod> {
    let n = series.len();
    if n < max_period.saturating_mul(2) {
        debug!(len = n, max_period, "seasonality detection skipped: series too short");
        return None;
    }

    let upper = max_period.min(n / 2);
    let mut best: Option<SeasonalPeriod> = None;
    for lag in MIN_PERIOD..upper {
        let acf = autocorrelation(series, lag);
        if best.map_or(true, |b| acf > b.autocorrelation) {
            best = Some(SeasonalPeriod {
                period: lag,
                autocorrelation: acf,
            });
        }
    }

    match best {
        Some(b) if b.autocorrelation > SEASONALITY_ACF_THRESHOLD => Some(b),
        Some(b) => {
            debug!(
                lag = b.period,
                acf = b.autocorrelation,
                "no lag above autocorrelation threshold"
            );
            None
        }
        None => None,
    }
}

/// Detected seasonal period, or `None` when the series shows no periodicity.
pub fn detect_seasonality(series: &[f64], max_period: usize) -> Option<usize> {
    seasonal_period(series, max_period).map(|s| s.period)
}
