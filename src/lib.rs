//! # retail-ts
//!
//! Numeric analysis of retail sales time series.
//!
//! Provides statistical transforms (moving average, differencing, sliding
//! windows, normalization), z-score/MAD anomaly detection with ensemble
//! voting, peak/trend/seasonality pattern detection, and an immutable
//! pipeline for chaining transforms over a series.
//!
//! Every operation is a pure, synchronous computation over an in-memory
//! series: inputs are never mutated and results are freshly allocated, so
//! pipelines and detectors can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use retail_ts::prelude::*;
//!
//! let mut sales: Vec<f64> = (0..140)
//!     .map(|i| 100.0 + 20.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin())
//!     .collect();
//! sales[93] = 230.0;
//!
//! let report = analyze(&sales, &AnalysisConfig::default()).unwrap();
//! assert_eq!(report.anomalies[0].index, 93);
//! assert_eq!(report.period(), Some(7));
//!
//! let scaled = Pipeline::new(sales)
//!     .add_transformation(MovingAverage::new(7))
//!     .add_transformation(Normalize::minmax());
//! let (values, params) = scaled.execute().unwrap();
//! assert_eq!(values.len(), 134);
//! assert_eq!(params.method(), NormalizeMethod::MinMax);
//! ```

pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod pattern;
pub mod pipeline;
pub mod report;
pub mod transform;
pub mod utils;

pub use error::{AnalysisError, Result};

pub mod prelude {
    pub use crate::config::AnalysisConfig;
    pub use crate::core::{Anomaly, Series};
    pub use crate::detection::{
        ensemble_anomaly_detection, mad_anomalies, z_score_anomalies, Detector, MadDetector,
        Voting, ZScoreDetector,
    };
    pub use crate::error::{AnalysisError, Result};
    pub use crate::pattern::{detect_peaks_and_valleys, detect_seasonality, detect_trend, Trend};
    pub use crate::pipeline::{Difference, MovingAverage, Normalize, Pipeline, Transform};
    pub use crate::report::{analyze, AnalysisReport};
    pub use crate::transform::{
        difference, moving_average, normalize, sliding_window, NormalizationParams,
        NormalizeMethod,
    };
}
