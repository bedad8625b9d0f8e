//! Day-ahead forecasting models
//!
//! Every model consumes the same day-profile history and produces the next
//! day's 24 hourly loads, so persistence baselines and learned models stay
//! directly comparable.

use crate::error::Result;
use crate::profiles::{DayProfile, HOURS_PER_DAY};
use std::fmt::Debug;

/// A forecaster predicting the next day's hourly loads from history
///
/// `history` is ordered oldest-first; the forecast targets the day after
/// the last profile in it.
pub trait DayAheadForecaster: Debug {
    /// Forecast the next day's 24 hour slices
    fn forecast(&self, history: &[DayProfile]) -> Result<[f64; HOURS_PER_DAY]>;

    /// Name of the model
    fn name(&self) -> &str;
}

pub mod persistence;

pub use persistence::{DayMovingAverage, PreviousDay, SameDayLastYear};
