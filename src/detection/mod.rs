//! Anomaly detection for time series.
//!
//! This module provides:
//! - Z-score and MAD (modified z-score) outlier detectors
//! - The [`Detector`] trait, implemented by every detector
//! - Ensemble voting over any set of detectors
//!
//! # Example
//!
//! ```
//! use retail_ts::detection::{
//!     ensemble_anomaly_detection, Detector, MadDetector, Voting, ZScoreDetector,
//! };
//!
//! let mut sales: Vec<f64> = (0..60).map(|i| 100.0 + (i % 7) as f64).collect();
//! sales[45] = 400.0;
//!
//! let z = ZScoreDetector::default();
//! let mad = MadDetector::default();
//! let anomalies = ensemble_anomaly_detection(&sales, &[&z, &mad], Voting::Majority);
//!
//! assert_eq!(anomalies.len(), 1);
//! assert_eq!(anomalies[0].index, 45);
//! ```

mod ensemble;
mod outlier;

pub use ensemble::{ensemble_anomaly_detection, EnsembleDetector, Voting};
pub use outlier::{
    mad_anomalies, modified_z_scores, z_score_anomalies, z_scores, Detector, FnDetector,
    MadDetector, ZScoreDetector, DEFAULT_MAD_THRESHOLD, DEFAULT_Z_THRESHOLD, MAD_CONSISTENCY,
    MAD_EPSILON,
};
