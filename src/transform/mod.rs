//! Statistical transforms over a series.
//!
//! Provides moving average, differencing, sliding windows and normalization.
//!
//! # Example
//!
//! ```
//! use retail_ts::transform::{moving_average, normalize};
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! // Moving average with window 3
//! let ma = moving_average(&series, 3).unwrap();
//! assert_eq!(ma, vec![2.0, 3.0, 4.0]);
//!
//! // Min-max scaling, keeping the parameters for the inverse
//! let (scaled, params) = normalize(&series, "minmax").unwrap();
//! assert_eq!(scaled[4], 1.0);
//! assert_eq!(params.inverse(&scaled), series);
//! ```

pub mod scale;
pub mod window;

pub use scale::{
    normalize, normalize_with, NormalizationParams, NormalizeMethod, CONSTANT_MINMAX_VALUE,
};
pub use window::{difference, moving_average, sliding_window, window_count};
