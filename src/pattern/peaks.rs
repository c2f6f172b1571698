//! Local peak and valley detection.

use tracing::debug;

/// Default minimum rise over a neighbour for [`detect_peaks_and_valleys`].
pub const DEFAULT_PEAK_THRESHOLD: f64 = 0.01;

/// Indices of local maxima and minima, each in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeaksAndValleys {
    pub peaks: Vec<usize>,
    pub valleys: Vec<usize>,
}

impl PeaksAndValleys {
    /// Total number of turning points.
    pub fn len(&self) -> usize {
        self.peaks.len() + self.valleys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty() && self.valleys.is_empty()
    }
}

/// Find interior points strictly above (peak) or below (valley) both neighbours.
///
/// A turning point is kept only if it differs from at least one neighbour by
/// more than `threshold`. The first and last points are never reported.
pub fn detect_peaks_and_valleys(series: &[f64], threshold: f64) -> PeaksAndValleys {
    let mut result = PeaksAndValleys::default();
    if series.len() < 3 {
        debug!(len = series.len(), "peak detection needs at least 3 points");
        return result;
    }

    for (offset, w) in series.windows(3).enumerate() {
        let (prev, cur, next) = (w[0], w[1], w[2]);
        let significant = (cur - prev).abs() > threshold || (cur - next).abs() > threshold;

        if cur > prev && cur > next {
            if significant {
                result.peaks.push(offset + 1);
            }
        } else if cur < prev && cur < next && significant {
            result.valleys.push(offset + 1);
        }
    }

    result
}
