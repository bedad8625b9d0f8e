//! Frame an hourly series into day-ahead samples shared by every model
//! family, then slice the samples into rolling evaluation folds.
//!
//! Run with: cargo run --example windowed_folds

use chrono::{Duration, TimeZone, Utc};
use load_window::{DatasetBuilder, HourlyObservation, LagSpec, LoadSeries, OriginPolicy};

fn main() -> load_forecast::Result<()> {
    // 300 days of hourly load with a simple daily shape.
    let start = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
    let observations = (0..300 * 24i64)
        .map(|h| {
            let hour_of_day = (h % 24) as f64;
            let load = 24_000.0 + 3_500.0 * (hour_of_day * std::f64::consts::PI / 12.0).sin();
            HourlyObservation::new(start + Duration::hours(h), load)
        })
        .collect();
    let series = LoadSeries::new(observations)?;

    // Inputs: the last three hours, the same hour yesterday and last week.
    let lags = LagSpec::new(&[1, 2, 3, 24, 168])?;
    let builder = DatasetBuilder::new(lags, 24, OriginPolicy::Daily)?;
    let dataset = builder.build(&series)?;

    println!("{} samples, input width {}", dataset.len(), dataset.input_width());

    for (i, fold) in dataset.rolling_split(120, 30, 30)?.enumerate() {
        println!(
            "fold {}: {} train days ending {}, {} test days ending {}",
            i,
            fold.train.len(),
            fold.train.last().unwrap().origin().date_naive(),
            fold.test.len(),
            fold.test.last().unwrap().origin().date_naive(),
        );
    }

    Ok(())
}
