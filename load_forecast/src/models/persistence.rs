//! Persistence (naive) baselines
//!
//! Simple references every richer model has to beat: repeat a past day's
//! shape, average a few recent days, or reach back a full year. Benchmarking
//! against these is what makes feature engineering and architecture changes
//! measurable.

use crate::error::{ForecastError, Result};
use crate::models::DayAheadForecaster;
use crate::profiles::{DayProfile, HOURS_PER_DAY};
use chrono::Duration;

const DAYS_PER_YEAR: i64 = 365;

/// Hour-by-hour copy of a recent day
#[derive(Debug, Clone)]
pub struct PreviousDay {
    name: String,
    days_back: usize,
}

impl PreviousDay {
    /// Create a previous-day baseline reaching `days_back` days into history
    pub fn new(days_back: usize) -> Result<Self> {
        if days_back == 0 {
            return Err(ForecastError::ValidationError(
                "days_back must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Previous day (days_back={})", days_back),
            days_back,
        })
    }
}

impl DayAheadForecaster for PreviousDay {
    fn forecast(&self, history: &[DayProfile]) -> Result<[f64; HOURS_PER_DAY]> {
        if history.len() < self.days_back {
            return Err(ForecastError::InsufficientHistory(format!(
                "{} needs {} days of history, got {}",
                self.name,
                self.days_back,
                history.len()
            )));
        }

        Ok(history[history.len() - self.days_back].hours)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Per-hour mean of the last `window` days
#[derive(Debug, Clone)]
pub struct DayMovingAverage {
    name: String,
    window: usize,
}

impl DayMovingAverage {
    /// Create a moving-average baseline over the trailing `window` days
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::ValidationError(
                "window must cover at least one day".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Day moving average (window={})", window),
            window,
        })
    }
}

impl DayAheadForecaster for DayMovingAverage {
    fn forecast(&self, history: &[DayProfile]) -> Result<[f64; HOURS_PER_DAY]> {
        if history.len() < self.window {
            return Err(ForecastError::InsufficientHistory(format!(
                "{} needs {} days of history, got {}",
                self.name,
                self.window,
                history.len()
            )));
        }

        let recent = &history[history.len() - self.window..];
        let mut hours = [0.0; HOURS_PER_DAY];
        for profile in recent {
            for (hour, value) in profile.hours.iter().enumerate() {
                hours[hour] += value;
            }
        }
        for value in &mut hours {
            *value /= self.window as f64;
        }

        Ok(hours)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Hour-by-hour copy of the same day one year earlier
///
/// The target day is the one after the last history entry, so the source
/// profile is looked up 365 days before that last entry by date. Works on
/// histories with dropped (incomplete) days as long as the year-ago date
/// itself survived.
#[derive(Debug, Clone)]
pub struct SameDayLastYear {
    name: String,
}

impl SameDayLastYear {
    /// Create a year-ago baseline
    pub fn new() -> Self {
        Self {
            name: "Same day last year".to_string(),
        }
    }
}

impl Default for SameDayLastYear {
    fn default() -> Self {
        Self::new()
    }
}

impl DayAheadForecaster for SameDayLastYear {
    fn forecast(&self, history: &[DayProfile]) -> Result<[f64; HOURS_PER_DAY]> {
        let last = history.last().ok_or_else(|| {
            ForecastError::InsufficientHistory(format!("{} got an empty history", self.name))
        })?;

        let wanted = last.date - Duration::days(DAYS_PER_YEAR);
        history
            .iter()
            .rev()
            .find(|profile| profile.date == wanted)
            .map(|profile| profile.hours)
            .ok_or_else(|| {
                ForecastError::InsufficientHistory(format!(
                    "{} found no profile dated {}",
                    self.name, wanted
                ))
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
