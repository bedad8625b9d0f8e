//! # Load Window
//!
//! `load_window` turns an hourly electricity load series into aligned
//! (input window, label window) sample pairs for day-ahead forecasting,
//! and slices the result into rolling-origin train/test folds.
//!
//! Every model family downstream (persistence baselines, feed-forward,
//! convolutional or recurrent networks) consumes the same framing, which is
//! what makes their errors comparable. The framing rules are strict:
//!
//! - the series must be hourly-contiguous; gaps are explicit missing
//!   markers, never silently skipped hours
//! - inputs are drawn only from hours strictly before the origin, so no
//!   label information can leak into an input window
//! - an origin with any missing input or label value is dropped, never
//!   imputed
//!
//! Both operations are pure functions of their inputs: no I/O, no interior
//! state, safe to call concurrently on shared data.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use load_window::{DatasetBuilder, HourlyObservation, LagSpec, LoadSeries, OriginPolicy};
//!
//! # fn main() -> load_window::Result<()> {
//! let start = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
//! let observations = (0..72i64)
//!     .map(|h| HourlyObservation::new(start + Duration::hours(h), 21_000.0 + h as f64))
//!     .collect();
//! let series = LoadSeries::new(observations)?;
//!
//! // Predict the next 24 hours from the loads 1 and 24 hours back,
//! // one candidate origin per midnight.
//! let builder = DatasetBuilder::new(LagSpec::new(&[1, 24])?, 24, OriginPolicy::Daily)?;
//! let dataset = builder.build(&series)?;
//!
//! // Midnight origins with a full lookback and a full label day.
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.input_width(), 2);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod series;
pub mod spec;
pub mod split;

// Re-export commonly used types
pub use crate::builder::{DatasetBuilder, Sample, WindowedDataset, LOAD_CHANNEL};
pub use crate::error::{Result, WindowError};
pub use crate::series::{HourlyObservation, LoadSeries};
pub use crate::spec::{LagSpec, OriginPolicy};
pub use crate::split::{Fold, RollingSplit};
