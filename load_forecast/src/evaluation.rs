//! Walk-forward evaluation harness
//!
//! Forecasts are produced stepwise: predict one day, then append that day's
//! actual observations to the history before predicting the next. The
//! forecast for test day `i` therefore only ever sees the training set plus
//! test days before `i`.

use crate::error::{ForecastError, Result};
use crate::metrics::{hourly_rmse, HourlyRmse};
use crate::models::DayAheadForecaster;
use crate::profiles::{DayProfile, HOURS_PER_DAY};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day-ahead forecast produced during evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// The day being predicted
    pub date: NaiveDate,
    /// Predicted loads for hour slices h0 .. h23
    pub hours: [f64; HOURS_PER_DAY],
}

/// Result of walking one model forward through the test set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkForwardReport {
    /// Name of the evaluated model
    pub model: String,
    /// One forecast per test day, in test order
    pub forecasts: Vec<DayForecast>,
    /// Per-hour and overall RMSE against the test days
    pub errors: HourlyRmse,
}

impl WalkForwardReport {
    /// Serialize the report to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Walk a model forward through the test days with an expanding history
pub fn walk_forward(
    model: &dyn DayAheadForecaster,
    train: &[DayProfile],
    test: &[DayProfile],
) -> Result<WalkForwardReport> {
    if train.is_empty() {
        return Err(ForecastError::ValidationError(
            "Training set is empty".to_string(),
        ));
    }
    if test.is_empty() {
        return Err(ForecastError::ValidationError(
            "Test set is empty".to_string(),
        ));
    }

    let mut history = train.to_vec();
    let mut forecasts = Vec::with_capacity(test.len());

    for day in test {
        let hours = model.forecast(&history)?;
        forecasts.push(DayForecast {
            date: day.date,
            hours,
        });
        // The actual observation becomes available before the next step.
        history.push(day.clone());
    }

    let predicted: Vec<[f64; HOURS_PER_DAY]> = forecasts.iter().map(|f| f.hours).collect();
    let actual: Vec<[f64; HOURS_PER_DAY]> = test.iter().map(|p| p.hours).collect();
    let errors = hourly_rmse(&predicted, &actual)?;

    Ok(WalkForwardReport {
        model: model.name().to_string(),
        forecasts,
        errors,
    })
}

/// Run a set of models through the same walk-forward harness
///
/// Reports come back in model order so results are directly comparable.
pub fn evaluate_models(
    models: &[Box<dyn DayAheadForecaster>],
    train: &[DayProfile],
    test: &[DayProfile],
) -> Result<Vec<WalkForwardReport>> {
    models
        .iter()
        .map(|model| walk_forward(model.as_ref(), train, test))
        .collect()
}
