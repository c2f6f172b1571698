//! Pattern detection: turning points, windowed trends and seasonality.
//!
//! # Example
//!
//! ```
//! use retail_ts::pattern::{detect_peaks_and_valleys, detect_seasonality, detect_trend, Trend};
//!
//! let turning = detect_peaks_and_valleys(&[1.0, 5.0, 1.0, 5.0, 1.0], 0.01);
//! assert_eq!(turning.peaks, vec![1, 3]);
//! assert_eq!(turning.valleys, vec![2]);
//!
//! let trends = detect_trend(&[1.0, 2.0, 3.0, 2.0, 1.0], 3);
//! assert_eq!(trends, vec![Trend::Up, Trend::Flat, Trend::Down]);
//!
//! let weekly: Vec<f64> = (0..140)
//!     .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin())
//!     .collect();
//! assert_eq!(detect_seasonality(&weekly, 50), Some(7));
//! ```

mod peaks;
mod seasonality;
mod trend;

pub use peaks::{detect_peaks_and_valleys, PeaksAndValleys, DEFAULT_PEAK_THRESHOLD};
pub use seasonality::{
    detect_seasonality, seasonal_period, SeasonalPeriod, DEFAULT_MAX_PERIOD, MIN_PERIOD,
    SEASONALITY_ACF_THRESHOLD,
};
pub use trend::{detect_trend, Trend, DEFAULT_TREND_WINDOW, TREND_SLOPE_THRESHOLD};
