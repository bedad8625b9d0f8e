//! Frame a week of synthetic hourly load into day-ahead samples and walk
//! the rolling folds.
//!
//! Run with: cargo run --example frame_series

use chrono::{Duration, TimeZone, Utc};
use load_window::{DatasetBuilder, HourlyObservation, LagSpec, LoadSeries, OriginPolicy};

fn main() -> load_window::Result<()> {
    // Two weeks of hourly load with a daily shape and a weekly drift.
    let start = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
    let observations = (0..14 * 24i64)
        .map(|h| {
            let daily = (h % 24) as f64;
            let load = 24_000.0 + 3_000.0 * (daily * std::f64::consts::PI / 12.0).sin()
                + 10.0 * h as f64;
            HourlyObservation::new(start + Duration::hours(h), load)
        })
        .collect();
    let series = LoadSeries::new(observations)?;

    // Inputs: same hour yesterday and the hour before the origin.
    let builder = DatasetBuilder::new(LagSpec::new(&[1, 24])?, 24, OriginPolicy::Daily)?;
    let dataset = builder.build(&series)?;

    println!("Built {} day-ahead samples", dataset.len());
    println!("Input channels: {:?}", dataset.channels());
    println!("Input width:    {}", dataset.input_width());

    for fold in dataset.rolling_split(8, 2, 2)? {
        println!(
            "fold: train {} .. {} | test {} .. {}",
            fold.train.first().unwrap().origin(),
            fold.train.last().unwrap().origin(),
            fold.test.first().unwrap().origin(),
            fold.test.last().unwrap().origin(),
        );
    }

    Ok(())
}
