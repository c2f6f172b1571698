//! Series and anomaly record types.

/// An ordered, time-indexed sequence of samples.
///
/// Operations take `&[f64]` and return freshly allocated series; inputs are
/// never reordered or mutated.
pub type Series = Vec<f64>;

/// A flagged observation: its position in the input series and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anomaly {
    /// Position in the series that was analysed.
    pub index: usize,
    /// Series value at `index`.
    pub value: f64,
}

impl Anomaly {
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }

    /// Build a record for `index`, reading its value from `series`.
    pub fn at(series: &[f64], index: usize) -> Option<Self> {
        series.get(index).map(|&value| Self { index, value })
    }
}

impl From<(usize, f64)> for Anomaly {
    fn from((index, value): (usize, f64)) -> Self {
        Self { index, value }
    }
}

impl From<Anomaly> for (usize, f64) {
    fn from(anomaly: Anomaly) -> Self {
        (anomaly.index, anomaly.value)
    }
}
