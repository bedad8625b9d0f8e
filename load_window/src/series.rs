//! Hourly load series types

use crate::error::{Result, WindowError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One hourly reading of system load plus optional exogenous features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    /// Hour this reading covers
    pub timestamp: DateTime<Utc>,
    /// Load in MW; `None` marks a known gap in the source data
    pub load: Option<f64>,
    /// Exogenous per-hour features (temperature, calendar flags, ...)
    #[serde(default)]
    pub features: BTreeMap<String, f64>,
}

impl HourlyObservation {
    /// Create an observation with a known load and no exogenous features
    pub fn new(timestamp: DateTime<Utc>, load: f64) -> Self {
        Self {
            timestamp,
            load: Some(load),
            features: BTreeMap::new(),
        }
    }

    /// Create an explicit missing-value marker for the given hour
    pub fn missing(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            load: None,
            features: BTreeMap::new(),
        }
    }

    /// Attach an exogenous feature value, consuming and returning the observation
    pub fn with_feature(mut self, name: &str, value: f64) -> Self {
        self.features.insert(name.to_string(), value);
        self
    }

    /// Look up an exogenous feature value by name
    pub fn feature(&self, name: &str) -> Option<f64> {
        self.features.get(name).copied()
    }
}

/// An hourly-contiguous, strictly increasing sequence of observations
///
/// The cadence invariant is checked at construction: every pair of
/// consecutive observations must be exactly one hour apart. Calendar gaps
/// in the source data have to be represented as explicit missing markers
/// ([`HourlyObservation::missing`]), never skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSeries {
    observations: Vec<HourlyObservation>,
}

impl LoadSeries {
    /// Create a new series, validating the hourly cadence invariant
    pub fn new(observations: Vec<HourlyObservation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(WindowError::EmptySeries(
                "series contains no observations".to_string(),
            ));
        }

        let series = Self { observations };
        series.validate_cadence()?;
        Ok(series)
    }

    /// Check that consecutive observations are exactly one hour apart
    ///
    /// Construction already runs this check; consumers that obtained a
    /// series through deserialization should re-run it before framing.
    pub fn validate_cadence(&self) -> Result<()> {
        for pair in self.observations.windows(2) {
            let step = pair[1].timestamp - pair[0].timestamp;
            if step != Duration::hours(1) {
                return Err(WindowError::IrregularCadence(format!(
                    "expected one hour between {} and {}, found {} minutes",
                    pair[0].timestamp,
                    pair[1].timestamp,
                    step.num_minutes()
                )));
            }
        }
        Ok(())
    }

    /// Number of hourly observations in the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All observations in ascending timestamp order
    pub fn observations(&self) -> &[HourlyObservation] {
        &self.observations
    }

    /// Observation at the given position, if any
    pub fn get(&self, index: usize) -> Option<&HourlyObservation> {
        self.observations.get(index)
    }

    /// Timestamp of the first observation
    pub fn start(&self) -> DateTime<Utc> {
        self.observations[0].timestamp
    }

    /// Timestamp of the last observation
    pub fn end(&self) -> DateTime<Utc> {
        self.observations[self.observations.len() - 1].timestamp
    }

    /// Sorted union of exogenous feature names across all observations
    ///
    /// An observation that lacks one of these keys has a missing value for
    /// that channel at its hour.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for obs in &self.observations {
            for name in obs.features.keys() {
                names.insert(name.clone());
            }
        }
        names.into_iter().collect()
    }
}
