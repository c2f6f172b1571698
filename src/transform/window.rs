//! Windowed transforms: moving average, differencing and sliding windows.
//!
//! Invalid windows or lags are reported as `Err` together with a `warn`
//! event; they are expected data conditions, so callers can fall back to
//! "no result" without parsing diagnostics.

use crate::core::Series;
use crate::error::{AnalysisError, Result};
use tracing::warn;

fn check_window(series: &[f64], window: usize, op: &'static str) -> Result<()> {
    if window == 0 || window > series.len() {
        warn!(op, window, len = series.len(), "invalid window size");
        return Err(AnalysisError::InvalidWindow {
            window,
            len: series.len(),
        });
    }
    Ok(())
}

/// Trailing moving average.
///
/// Element `i` of the output is the mean of `series[i..i + window]`, so the
/// result has `series.len() - window + 1` elements.
pub fn moving_average(series: &[f64], window: usize) -> Result<Series> {
    check_window(series, window, "moving_average")?;

    let w = window as f64;
    Ok(series.windows(window).map(|s| s.iter().sum::<f64>() / w).collect())
}

/// Lagged difference `series[i] - series[i - lag]` for `i` in `lag..len`.
pub fn difference(series: &[f64], lag: usize) -> Result<Series> {
    if lag == 0 || lag >= series.len() {
        warn!(lag, len = series.len(), "invalid difference lag");
        return Err(AnalysisError::InvalidLag {
            lag,
            len: series.len(),
        });
    }

    Ok(series[lag..]
        .iter()
        .zip(series.iter())
        .map(|(current, previous)| current - previous)
        .collect())
}

/// Contiguous windows of length `window`, starting every `step` positions.
///
/// Yields `(len - window) / step + 1` windows. The last partial window is
/// never emitted.
pub fn sliding_window(series: &[f64], window: usize, step: usize) -> Result<Vec<Series>> {
    check_window(series, window, "sliding_window")?;
    if step == 0 {
        warn!(step, "invalid window step");
        return Err(AnalysisError::InvalidStep(step));
    }

    Ok(series
        .windows(window)
        .step_by(step)
        .map(|w| w.to_vec())
        .collect())
}

/// Number of windows [`sliding_window`] produces, or 0 for an invalid window.
pub fn window_count(len: usize, window: usize, step: usize) -> usize {
    if window == 0 || step == 0 || window > len {
        return 0;
    }
    (len - window) / step + 1
}
