//! Statistical utility functions.

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the population variance of a slice (n denominator).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / values.len() as f64
}

/// Calculate the population standard deviation of a slice.
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Calculate the median of a slice.
///
/// Even-length slices average the two middle values.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Normalized autocorrelation at a given lag.
///
/// ```text
/// sum_{i=0}^{n-lag-1} (x_i - mean)(x_{i+lag} - mean) / sum_i (x_i - mean)^2
/// ```
///
/// The denominator always spans the full series. Returns 0.0 when the lag
/// leaves no overlapping pairs or the series has zero variance.
pub fn autocorrelation(values: &[f64], lag: usize) -> f64 {
    let n = values.len();
    if lag >= n {
        return 0.0;
    }
    let m = mean(values);

    let denominator: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    if denominator <= 0.0 {
        return 0.0;
    }

    let numerator: f64 = values
        .iter()
        .zip(values[lag..].iter())
        .map(|(a, b)| (a - m) * (b - m))
        .sum();

    numerator / denominator
}

/// Ordinary least-squares slope of `values` against their positions `0..n`.
///
/// Returns `None` for fewer than two points (no variance in position).
pub fn linear_slope(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(values);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}
