//! End-to-end tests: pipelines feeding detectors, shared across threads.

use chrono::NaiveDate;
use retail_ts::core::{Anomaly, DailyIndex, Series};
use retail_ts::detection::{
    ensemble_anomaly_detection, EnsembleDetector, FnDetector, MadDetector, Voting,
    ZScoreDetector,
};
use retail_ts::pattern::{detect_seasonality, detect_trend, Trend};
use retail_ts::pipeline::{bind, from_fn, Detect, MovingAverage, Normalize, Pipeline};
use retail_ts::transform::{difference, normalize, NormalizationParams};
use retail_ts::AnalysisError;
use std::f64::consts::PI;

/// Twenty weeks of daily unit sales with a weekend bump and slow growth.
fn daily_sales() -> Vec<f64> {
    (0..140)
        .map(|i| {
            let weekly = 30.0 * (2.0 * PI * i as f64 / 7.0).sin();
            200.0 + weekly + 0.2 * i as f64
        })
        .collect()
}

#[test]
fn ensemble_detection_step() {
    let mut sales = daily_sales();
    sales[100] = 900.0;

    let pipeline = Pipeline::new(sales.clone()).add_transformation(Detect::new(
        EnsembleDetector::new(Voting::Majority)
            .with_detector(ZScoreDetector::default())
            .with_detector(MadDetector::default()),
    ));

    let anomalies = pipeline.execute().unwrap();
    assert_eq!(anomalies, vec![Anomaly::new(100, 900.0)]);
    assert_eq!(pipeline.step_names(), ["ensemble"]);
}

#[test]
fn normalized_trend_classification() {
    // a normalized rising ramp climbs 1/(n-1) per step, above the 0.01 slope cut-off
    let ramp: Vec<f64> = (0..50).map(|i| 40.0 + 3.0 * i as f64).collect();

    let trends = Pipeline::new(ramp)
        .add_transformation(Normalize::minmax())
        .add_fn("trend", |(values, _): (Series, NormalizationParams)| {
            Ok(detect_trend(&values, 10))
        })
        .execute()
        .unwrap();

    assert_eq!(trends.len(), 41);
    assert!(trends.iter().all(|&t| t == Trend::Up));
}

#[test]
fn seasonality_survives_differencing() {
    let sales = daily_sales();
    let detrended = difference(&sales, 1).unwrap();
    assert_eq!(detect_seasonality(&detrended, 50), Some(7));
    assert_eq!(detect_seasonality(&sales, 50), Some(7));
}

#[test]
fn bound_free_functions_chain() {
    let p = Pipeline::new(daily_sales())
        .add_transformation(bind("ma7", retail_ts::transform::moving_average, 7))
        .add_transformation(bind("scale", normalize, "zscore"));

    let (values, params) = p.execute().unwrap();
    assert_eq!(values.len(), 134);
    assert_eq!(params.method().to_string(), "zscore");
    assert_eq!(p.step_names(), ["ma7", "scale"]);
}

#[test]
fn unknown_method_fails_the_pipeline() {
    let p = Pipeline::new(daily_sales()).add_transformation(bind("scale", normalize, "robust"));
    assert!(matches!(p.execute(), Err(AnalysisError::InvalidArgument(_))));
}

#[test]
fn shared_pipeline_runs_concurrently() {
    let base = Pipeline::new(daily_sales()).add_transformation(MovingAverage::new(7));
    let expected = base.execute().unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=4)
            .map(|w| {
                let base = &base;
                scope.spawn(move || {
                    let extended = base.add_transformation(MovingAverage::new(w));
                    (base.execute().unwrap(), extended.execute().unwrap().len())
                })
            })
            .collect();

        for (w, handle) in (1..=4).zip(handles) {
            let (prefix, extended_len) = handle.join().unwrap();
            assert_eq!(prefix, expected);
            assert_eq!(extended_len, expected.len() - w + 1);
        }
    });
}

#[test]
fn custom_detectors_vote_with_builtin_ones() {
    let mut sales = daily_sales();
    sales[30] = 1000.0;

    let above_300 = FnDetector::new("above-300", |s: &[f64]| {
        s.iter()
            .enumerate()
            .filter(|(_, &v)| v > 300.0)
            .map(|(i, &v)| Anomaly::new(i, v))
            .collect()
    });
    let z = ZScoreDetector::default();

    let both = ensemble_anomaly_detection(&sales, &[&z, &above_300], Voting::Unanimous);
    assert_eq!(both, vec![Anomaly::new(30, 1000.0)]);

    let either_of_three = ensemble_anomaly_detection(
        &sales,
        &[&z, &above_300, &MadDetector::default()],
        Voting::Majority,
    );
    assert!(either_of_three.contains(&Anomaly::new(30, 1000.0)));
}

#[test]
fn anomalies_map_to_calendar_days() {
    let mut sales = daily_sales();
    sales[2] = 5000.0;

    let calendar = DailyIndex::new(NaiveDate::from_ymd_opt(2011, 1, 29).unwrap());
    let anomalies = Pipeline::new(sales)
        .add_transformation(from_fn("zscore", |s: Series| {
            Ok(retail_ts::detection::z_score_anomalies(&s, 3.0))
        }))
        .execute()
        .unwrap();

    let dated = calendar.label(&anomalies);
    assert_eq!(dated.len(), 1);
    assert_eq!(dated[0].date, NaiveDate::from_ymd_opt(2011, 1, 31).unwrap());
    assert_eq!(dated[0].value, 5000.0);
}
