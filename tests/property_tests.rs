//! Property-based tests for transforms, detectors and pipelines.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated series.

use proptest::prelude::*;
use retail_ts::detection::{
    ensemble_anomaly_detection, mad_anomalies, z_score_anomalies, Detector, MadDetector, Voting,
    ZScoreDetector,
};
use retail_ts::pattern::{detect_peaks_and_valleys, detect_trend};
use retail_ts::pipeline::{compose, pipe, Difference, MovingAverage, Normalize, Pipeline};
use retail_ts::transform::{difference, moving_average, normalize, sliding_window, window_count};

/// Strategy for generating sales-like series.
fn sales_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0..1000.0_f64, min_len..max_len)
}

/// Strategy for a series together with a window that fits it.
fn series_and_window() -> impl Strategy<Value = (Vec<f64>, usize)> {
    sales_strategy(1, 120).prop_flat_map(|s| {
        let len = s.len();
        (Just(s), 1..=len)
    })
}

// =============================================================================
// Property: moving average length and window means
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn moving_average_length_and_values((series, window) in series_and_window()) {
        let result = moving_average(&series, window).unwrap();
        prop_assert_eq!(result.len(), series.len() - window + 1);

        for (i, &value) in result.iter().enumerate() {
            let expected = series[i..i + window].iter().sum::<f64>() / window as f64;
            prop_assert!((value - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn moving_average_rejects_oversized_window(series in sales_strategy(0, 30), extra in 1usize..10) {
        prop_assert!(moving_average(&series, series.len() + extra).is_err());
    }

    #[test]
    fn difference_length((series, lag) in series_and_window()) {
        match difference(&series, lag) {
            Ok(diffs) => {
                prop_assert!(lag < series.len());
                prop_assert_eq!(diffs.len(), series.len() - lag);
            }
            Err(err) => {
                prop_assert!(lag >= series.len());
                prop_assert!(err.is_invalid_input());
            }
        }
    }

    #[test]
    fn sliding_window_count_matches_formula(
        (series, window) in series_and_window(),
        step in 1usize..8
    ) {
        let windows = sliding_window(&series, window, step).unwrap();
        prop_assert_eq!(windows.len(), (series.len() - window) / step + 1);
        prop_assert_eq!(windows.len(), window_count(series.len(), window, step));
        for (k, w) in windows.iter().enumerate() {
            prop_assert_eq!(w.as_slice(), &series[k * step..k * step + window]);
        }
    }
}

// =============================================================================
// Property: normalization round trips
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn minmax_round_trip(series in sales_strategy(1, 100)) {
        let (scaled, params) = normalize(&series, "minmax").unwrap();
        prop_assert!(scaled.iter().all(|&x| (0.0..=1.0).contains(&x)));

        for (a, b) in series.iter().zip(params.inverse(&scaled).iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn zscore_round_trip(series in sales_strategy(1, 100)) {
        let (scaled, params) = normalize(&series, "zscore").unwrap();
        for (a, b) in series.iter().zip(params.inverse(&scaled).iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }
}

// =============================================================================
// Property: detectors on degenerate and arbitrary series
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn constant_series_has_no_anomalies(c in -1.0e6..1.0e6_f64, n in 2usize..200) {
        let series = vec![c; n];
        prop_assert!(z_score_anomalies(&series, 3.0).is_empty());
        prop_assert!(mad_anomalies(&series, 3.5).is_empty());
    }

    #[test]
    fn anomalies_are_sorted_and_point_back(series in sales_strategy(2, 150)) {
        for anomalies in [z_score_anomalies(&series, 2.0), mad_anomalies(&series, 2.0)] {
            prop_assert!(anomalies.windows(2).all(|w| w[0].index < w[1].index));
            for a in &anomalies {
                prop_assert_eq!(series[a.index], a.value);
            }
        }
    }

    #[test]
    fn unanimous_identical_detectors_match_single(series in sales_strategy(2, 150)) {
        let z = ZScoreDetector::new(2.0);
        let alone = z.detect(&series);
        let both = ensemble_anomaly_detection(&series, &[&z, &z], Voting::Unanimous);
        prop_assert_eq!(both, alone);
    }

    #[test]
    fn unanimous_is_subset_of_majority(series in sales_strategy(2, 150)) {
        let z = ZScoreDetector::new(2.0);
        let mad = MadDetector::new(2.5);
        let loose = ZScoreDetector::new(1.0);
        let detectors: [&dyn Detector; 3] = [&z, &mad, &loose];

        let majority = ensemble_anomaly_detection(&series, &detectors, Voting::Majority);
        let unanimous = ensemble_anomaly_detection(&series, &detectors, Voting::Unanimous);
        for a in &unanimous {
            prop_assert!(majority.contains(a));
        }
    }
}

// =============================================================================
// Property: pattern detectors
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn turning_points_are_interior_and_disjoint(series in sales_strategy(0, 100)) {
        let result = detect_peaks_and_valleys(&series, 0.01);
        let n = series.len();
        for &i in result.peaks.iter().chain(result.valleys.iter()) {
            prop_assert!(i > 0 && i + 1 < n);
        }
        for p in &result.peaks {
            prop_assert!(!result.valleys.contains(p));
        }
        prop_assert!(result.peaks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn one_trend_label_per_window((series, window) in series_and_window()) {
        prop_assert_eq!(detect_trend(&series, window).len(), series.len() - window + 1);
    }
}

// =============================================================================
// Property: composition and pipeline immutability
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn pipe_and_compose_order(x in -1000i64..1000, a in -50i64..50, b in 1i64..10) {
        let f = move |v: i64| v + a;
        let g = move |v: i64| v * b;
        let fns: Vec<Box<dyn Fn(i64) -> i64>> = vec![Box::new(f), Box::new(g)];
        prop_assert_eq!(pipe(fns)(x), g(f(x)));

        let fns: Vec<Box<dyn Fn(i64) -> i64>> = vec![Box::new(f), Box::new(g)];
        prop_assert_eq!(compose(fns)(x), f(g(x)));
    }

    #[test]
    fn appending_never_changes_prefix_output(series in sales_strategy(4, 80)) {
        let p1 = Pipeline::new(series.clone()).add_transformation(MovingAverage::new(2));
        let before = p1.execute().unwrap();

        let p2 = p1.add_transformation(Difference::new(1));
        let _ = p2.add_transformation(Normalize::zscore()).execute();
        let _ = p2.add_transformation(MovingAverage::new(3)).execute();

        prop_assert_eq!(p1.execute().unwrap(), before);
        prop_assert_eq!(p1.get_data(), series);
    }
}
