//! Benchmarks for detection and pipeline execution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use retail_ts::detection::{ensemble_anomaly_detection, MadDetector, Voting, ZScoreDetector};
use retail_ts::pattern::{detect_seasonality, detect_trend};
use retail_ts::pipeline::{Difference, MovingAverage, Normalize, Pipeline};

fn generate_sales(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            100.0
                + 25.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin()
                + 0.05 * i as f64
                + if i % 97 == 0 { 200.0 } else { 0.0 }
        })
        .collect()
}

fn bench_seasonality(c: &mut Criterion) {
    let mut group = c.benchmark_group("seasonality");

    for size in [128, 512, 2048].iter() {
        let signal = generate_sales(*size);
        group.bench_with_input(BenchmarkId::new("acf", size), size, |b, _| {
            b.iter(|| detect_seasonality(black_box(&signal), 50))
        });
    }

    group.finish();
}

fn bench_anomalies(c: &mut Criterion) {
    let mut group = c.benchmark_group("anomalies");
    let z = ZScoreDetector::default();
    let mad = MadDetector::default();

    for size in [256, 1024, 4096].iter() {
        let signal = generate_sales(*size);
        group.bench_with_input(BenchmarkId::new("ensemble", size), size, |b, _| {
            b.iter(|| ensemble_anomaly_detection(black_box(&signal), &[&z, &mad], Voting::Majority))
        });
        group.bench_with_input(BenchmarkId::new("trend", size), size, |b, _| {
            b.iter(|| detect_trend(black_box(&signal), 10))
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for size in [1024, 8192].iter() {
        let pipeline = Pipeline::new(generate_sales(*size))
            .add_transformation(MovingAverage::new(7))
            .add_transformation(Difference::new(7))
            .add_transformation(Normalize::zscore());

        group.bench_with_input(BenchmarkId::new("ma_diff_zscore", size), size, |b, _| {
            b.iter(|| black_box(&pipeline).execute())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_seasonality, bench_anomalies, bench_pipeline);
criterion_main!(benches);
