//! Min-max and z-score normalization with recorded parameters.
//!
//! Every normalization returns the parameters it used so the scaling can be
//! reported, replayed on new data or inverted.

use crate::core::Series;
use crate::error::{AnalysisError, Result};
use crate::utils::stats::{mean, population_std};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Output value of min-max normalization for a constant series.
pub const CONSTANT_MINMAX_VALUE: f64 = 0.5;

/// Normalization method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMethod {
    /// Rescale to [0, 1] using the observed minimum and maximum.
    MinMax,
    /// Center on the mean and divide by the population standard deviation.
    ZScore,
}

impl NormalizeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizeMethod::MinMax => "minmax",
            NormalizeMethod::ZScore => "zscore",
        }
    }
}

impl fmt::Display for NormalizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizeMethod {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "minmax" => Ok(NormalizeMethod::MinMax),
            "zscore" => Ok(NormalizeMethod::ZScore),
            other => Err(AnalysisError::InvalidArgument(format!(
                "unknown normalization method: {other}"
            ))),
        }
    }
}

/// Statistics used by a normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizationParams {
    MinMax { min: f64, max: f64 },
    ZScore { mean: f64, std: f64 },
}

impl NormalizationParams {
    pub fn method(&self) -> NormalizeMethod {
        match self {
            NormalizationParams::MinMax { .. } => NormalizeMethod::MinMax,
            NormalizationParams::ZScore { .. } => NormalizeMethod::ZScore,
        }
    }

    /// The parameters as named statistics, e.g. `[("min", 1.0), ("max", 9.0)]`.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        match *self {
            NormalizationParams::MinMax { min, max } => vec![("min", min), ("max", max)],
            NormalizationParams::ZScore { mean, std } => vec![("mean", mean), ("std", std)],
        }
    }

    /// Look up a single statistic by name.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// Scale new data with these parameters.
    ///
    /// Degenerate parameters (zero range or zero std) map every value to the
    /// same constant that fitting them produced.
    pub fn apply(&self, data: &[f64]) -> Series {
        match *self {
            NormalizationParams::MinMax { min, max } => {
                if max == min {
                    return vec![CONSTANT_MINMAX_VALUE; data.len()];
                }
                let range = max - min;
                data.iter().map(|&x| (x - min) / range).collect()
            }
            NormalizationParams::ZScore { mean, std } => {
                if std == 0.0 {
                    return vec![0.0; data.len()];
                }
                data.iter().map(|&x| (x - mean) / std).collect()
            }
        }
    }

    /// Map normalized values back to the original scale.
    pub fn inverse(&self, normalized: &[f64]) -> Series {
        match *self {
            NormalizationParams::MinMax { min, max } => {
                normalized.iter().map(|&x| x * (max - min) + min).collect()
            }
            NormalizationParams::ZScore { mean, std } => {
                normalized.iter().map(|&x| x * std + mean).collect()
            }
        }
    }
}

/// Normalize a series by method name (`"minmax"` or `"zscore"`).
///
/// An unknown method name is a hard `InvalidArgument` error.
pub fn normalize(series: &[f64], method: &str) -> Result<(Series, NormalizationParams)> {
    let method = method.parse::<NormalizeMethod>()?;
    normalize_with(series, method)
}

/// Normalize a series with a typed method.
///
/// - `MinMax`: `(x - min) / (max - min)`, or 0.5 everywhere for a constant series.
/// - `ZScore`: `(x - mean) / std` with population std, or 0.0 everywhere when std is 0.
pub fn normalize_with(
    series: &[f64],
    method: NormalizeMethod,
) -> Result<(Series, NormalizationParams)> {
    if series.is_empty() {
        warn!(%method, "cannot normalize an empty series");
        return Err(AnalysisError::EmptyData);
    }

    let params = match method {
        NormalizeMethod::MinMax => {
            let min = series.iter().copied().fold(f64::INFINITY, f64::min);
            let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            NormalizationParams::MinMax { min, max }
        }
        NormalizeMethod::ZScore => NormalizationParams::ZScore {
            mean: mean(series),
            std: population_std(series),
        },
    };

    Ok((params.apply(series), params))
}
