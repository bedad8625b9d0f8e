//! # Demanda
//!
//! `demanda` is the facade crate of a day-ahead hourly electricity load
//! forecasting toolkit for the Spanish market. The work happens in the
//! member crates, re-exported here for convenience:
//!
//! - [`load_window`] frames an hourly load series into aligned
//!   (input window, label window) samples with strict leakage prevention,
//!   and slices a built dataset into rolling-origin train/test folds. Every
//!   model family consumes the same framing, which is what keeps their
//!   errors comparable.
//! - [`load_forecast`] supplies the surrounding workflow: CSV ingestion of
//!   cleaned hourly data, day-profile windowing, persistence baselines and
//!   a walk-forward evaluation harness reporting per-hour RMSE.
//!
//! ## Example
//!
//! ```
//! use demanda::load_window::{LagSpec, OriginPolicy};
//!
//! let lags = LagSpec::new(&[1, 24, 168]).unwrap();
//! assert_eq!(lags.max_offset(), 168);
//! assert_eq!(OriginPolicy::default(), OriginPolicy::Daily);
//! ```

pub use load_forecast;
pub use load_window;

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use load_window::{DatasetBuilder, HourlyObservation, LagSpec, LoadSeries, OriginPolicy};

    #[test]
    fn test_facade_exposes_the_full_pipeline() {
        let start = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
        let observations = (0..96i64)
            .map(|h| HourlyObservation::new(start + Duration::hours(h), 20_000.0 + h as f64))
            .collect();
        let series = LoadSeries::new(observations).unwrap();

        let builder =
            DatasetBuilder::new(LagSpec::new(&[1, 24]).unwrap(), 24, OriginPolicy::Daily).unwrap();
        let dataset = builder.build(&series).unwrap();
        assert_eq!(dataset.len(), 3);

        let profiles = load_forecast::day_profiles(&series);
        assert_eq!(profiles.len(), 4);
    }
}
