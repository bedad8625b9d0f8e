//! # Load Forecast
//!
//! A Rust library for day-ahead hourly electricity load forecasting.
//!
//! ## Features
//!
//! - Hourly load series ingestion from cleaned CSV exports (gaps become
//!   explicit missing markers, never silently skipped hours)
//! - Day-profile windowing (one row per date, one column per hour slice)
//! - Persistence baselines (previous day, trailing day average, same day
//!   last year)
//! - Walk-forward evaluation with per-hour and overall RMSE
//! - Sample framing shared with every model family through the
//!   [`load_window`] crate
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use load_forecast::data::SeriesLoader;
//! use load_forecast::evaluation::walk_forward;
//! use load_forecast::models::PreviousDay;
//! use load_forecast::profiles::{day_profiles, split_by_date};
//!
//! # fn main() -> load_forecast::Result<()> {
//! // Load the cleaned hourly data
//! let series = SeriesLoader::from_csv("data/energy_loads_2015_2019.csv")?;
//!
//! // Collapse to complete-day profiles and split chronologically
//! let profiles = day_profiles(&series);
//! let split = NaiveDate::from_ymd_opt(2017, 12, 31).unwrap();
//! let (train, test) = split_by_date(&profiles, split);
//!
//! // Walk a persistence baseline forward through the test year
//! let report = walk_forward(&PreviousDay::new(1)?, &train, &test)?;
//! println!("{}", report.errors);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod evaluation;
pub mod metrics;
pub mod models;
pub mod profiles;

// Re-export commonly used types
pub use crate::data::SeriesLoader;
pub use crate::error::{ForecastError, Result};
pub use crate::evaluation::{evaluate_models, walk_forward, WalkForwardReport};
pub use crate::metrics::{forecast_accuracy, hourly_rmse, ForecastAccuracy, HourlyRmse};
pub use crate::models::DayAheadForecaster;
pub use crate::profiles::{day_profiles, split_by_date, DayProfile, HOURS_PER_DAY};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
