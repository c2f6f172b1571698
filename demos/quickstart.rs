//! Quickstart: analyse twenty weeks of synthetic daily store sales.
//!
//! Run with `RUST_LOG=debug cargo run --example quickstart` to see the
//! library's diagnostics.

use chrono::NaiveDate;
use retail_ts::core::DailyIndex;
use retail_ts::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let weekly = [0.9, 0.8, 0.85, 0.9, 1.1, 1.4, 1.5];
    let mut sales: Vec<f64> = (0..140)
        .map(|i| 120.0 * weekly[i % 7] + 0.3 * i as f64)
        .collect();
    sales[58] = 420.0;
    sales[101] = 15.0;

    println!("=== Statistics ===");
    let smoothed = moving_average(&sales, 7)?;
    println!("7-day moving average: {} points", smoothed.len());
    let (_, params) = normalize(&sales, "zscore")?;
    println!("z-score parameters: {:?}", params.entries());

    println!("\n=== Pipeline ===");
    let base = Pipeline::new(sales.clone()).add_transformation(MovingAverage::new(7));
    let scaled = base.add_transformation(Normalize::minmax());
    let (values, params) = scaled.execute()?;
    println!("steps: {:?}", scaled.step_names());
    println!("scaled {} points with {:?}", values.len(), params);
    println!("first smoothed value still {:.2}", base.execute()?[0]);

    println!("\n=== Anomalies ===");
    let calendar = DailyIndex::new(NaiveDate::from_ymd_opt(2011, 1, 29).expect("valid date"));
    let z = ZScoreDetector::default();
    let mad = MadDetector::default();
    let anomalies = ensemble_anomaly_detection(&sales, &[&z, &mad], Voting::Majority);
    for a in calendar.label(&anomalies) {
        println!("{} (day {}): {:.1}", a.date, a.index, a.value);
    }

    println!("\n=== Patterns ===");
    let report = analyze(&sales, &AnalysisConfig::default().with_trend_window(14))?;
    println!("peaks: {}", report.turning_points.peaks.len());
    println!("valleys: {}", report.turning_points.valleys.len());
    match report.dominant_trend() {
        Some(trend) => println!("dominant trend: {trend}"),
        None => println!("dominant trend: n/a"),
    }
    match report.seasonality {
        Some(s) => println!(
            "seasonal period: {} days (acf {:.2})",
            s.period, s.autocorrelation
        ),
        None => println!("no seasonal period found"),
    }

    Ok(())
}
