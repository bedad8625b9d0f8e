//! Forecast error metrics
//!
//! RMSE is the headline number so errors read directly in MW. It is
//! reported two ways: once per hour slice, to show where in the day a model
//! struggles, and once overall.

use crate::error::{ForecastError, Result};
use crate::profiles::HOURS_PER_DAY;
use serde::{Deserialize, Serialize};

/// RMSE per hour slice across a set of forecast days, plus the overall mean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRmse {
    /// RMSE for hour slices h0 .. h23, in MW
    pub per_hour: [f64; HOURS_PER_DAY],
    /// Mean of the per-hour errors
    pub overall: f64,
}

/// Compute per-hour and overall RMSE over paired forecast/actual days
pub fn hourly_rmse(
    forecasts: &[[f64; HOURS_PER_DAY]],
    actuals: &[[f64; HOURS_PER_DAY]],
) -> Result<HourlyRmse> {
    if forecasts.len() != actuals.len() || forecasts.is_empty() {
        return Err(ForecastError::ValidationError(
            "Forecast and actual days must have the same non-zero count".to_string(),
        ));
    }

    let days = forecasts.len() as f64;
    let mut per_hour = [0.0; HOURS_PER_DAY];
    for (hour, slot) in per_hour.iter_mut().enumerate() {
        let mse = forecasts
            .iter()
            .zip(actuals.iter())
            .map(|(f, a)| (f[hour] - a[hour]).powi(2))
            .sum::<f64>()
            / days;
        *slot = mse.sqrt();
    }

    let overall = per_hour.iter().sum::<f64>() / HOURS_PER_DAY as f64;

    Ok(HourlyRmse { per_hour, overall })
}

impl std::fmt::Display for HourlyRmse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "RMSE by hour of day (MW):")?;
        for (hour, value) in self.per_hour.iter().enumerate() {
            writeln!(f, "  h{:02}: {:.2}", hour, value)?;
        }
        writeln!(f, "  overall: {:.2}", self.overall)?;
        Ok(())
    }
}

/// Forecast accuracy metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error
    pub mape: f64,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
}

/// Calculate accuracy metrics for a forecast vs actual values
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::ValidationError(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;

    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;
    let rmse = mse.sqrt();

    let mape = actual
        .iter()
        .zip(errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &e)| (e.abs() / a.abs()) * 100.0)
        .sum::<f64>()
        / n;

    let smape = actual
        .iter()
        .zip(forecast.iter())
        .map(|(&a, &f)| {
            let denominator = a.abs() + f.abs();
            if denominator == 0.0 {
                0.0
            } else {
                200.0 * (a - f).abs() / denominator
            }
        })
        .sum::<f64>()
        / n;

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse,
        mape,
        smape,
    })
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MSE:   {:.4}", self.mse)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        writeln!(f, "  SMAPE: {:.4}%", self.smape)?;
        Ok(())
    }
}
