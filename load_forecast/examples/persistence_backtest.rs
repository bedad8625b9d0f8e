//! Backtest the persistence baselines over two synthetic years of hourly
//! load and compare their walk-forward errors.
//!
//! Run with: cargo run --example persistence_backtest

use chrono::{Duration, TimeZone, Utc};
use load_forecast::evaluation::evaluate_models;
use load_forecast::models::{DayAheadForecaster, DayMovingAverage, PreviousDay, SameDayLastYear};
use load_forecast::profiles::{day_profiles, split_by_date};
use load_window::{HourlyObservation, LoadSeries};

fn main() -> load_forecast::Result<()> {
    // 560 days of hourly load with daily, weekly and seasonal shape.
    let start = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
    let observations = (0..560 * 24i64)
        .map(|h| {
            let hour_of_day = (h % 24) as f64;
            let day = (h / 24) as f64;
            let daily = 4_000.0 * (hour_of_day * std::f64::consts::PI / 12.0).sin();
            let weekly = if (h / 24) % 7 >= 5 { -1_500.0 } else { 0.0 };
            let seasonal = 2_000.0 * (day * 2.0 * std::f64::consts::PI / 365.0).cos();
            HourlyObservation::new(
                start + Duration::hours(h),
                25_000.0 + daily + weekly + seasonal,
            )
        })
        .collect();
    let series = LoadSeries::new(observations)?;

    let profiles = day_profiles(&series);
    println!("{} complete day profiles", profiles.len());

    // Train on the first 500 days, walk forward through the remainder.
    let split_date = profiles[499].date;
    let (train, test) = split_by_date(&profiles, split_date);
    println!("train: {} days, test: {} days", train.len(), test.len());

    let models: Vec<Box<dyn DayAheadForecaster>> = vec![
        Box::new(PreviousDay::new(1)?),
        Box::new(DayMovingAverage::new(3)?),
        Box::new(SameDayLastYear::new()),
    ];

    for report in evaluate_models(&models, &train, &test)? {
        println!("\n=== {} ===", report.model);
        println!("{}", report.errors);
    }

    Ok(())
}
