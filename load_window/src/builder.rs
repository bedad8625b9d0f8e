//! Deterministic dataset construction from an hourly series
//!
//! Every downstream model family consumes the same sample framing, so the
//! builder is the single place where input/label alignment is decided.
//! Candidate origins with any missing input or label value are skipped,
//! never imputed.

use crate::error::{Result, WindowError};
use crate::series::{HourlyObservation, LoadSeries};
use crate::spec::{LagSpec, OriginPolicy};
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Channel name under which the load value itself enters the input window
pub const LOAD_CHANNEL: &str = "load";

/// One aligned (input window, label window) pair
///
/// Inputs look backward from the origin, labels forward. The input layout
/// is fixed by the builder: lags in descending offset order, and within
/// each lag the load value first, then exogenous features in sorted name
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    origin: DateTime<Utc>,
    input: Vec<f64>,
    label: Vec<f64>,
}

impl Sample {
    /// The timestamp the prediction is made from
    pub fn origin(&self) -> DateTime<Utc> {
        self.origin
    }

    /// Flattened input window values
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Label values for hours `origin .. origin + horizon`
    pub fn label(&self) -> &[f64] {
        &self.label
    }
}

/// An immutable collection of samples plus the framing that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowedDataset {
    samples: Vec<Sample>,
    lags: LagSpec,
    horizon: usize,
    channels: Vec<String>,
}

impl WindowedDataset {
    /// All samples in ascending origin order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no candidate origin survived validation
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at the given position, if any
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// The lag set the samples were framed with
    pub fn lags(&self) -> &LagSpec {
        &self.lags
    }

    /// Number of future hourly steps per label
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Input channel names: the load channel first, then exogenous features
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Width of every sample's input vector
    pub fn input_width(&self) -> usize {
        self.lags.len() * self.channels.len()
    }

    /// Read one input value back out of the flat layout
    ///
    /// Returns `None` when the offset is not in the lag set or the channel
    /// name is unknown.
    pub fn input_value(&self, sample: &Sample, lag: u32, channel: &str) -> Option<f64> {
        let lag_idx = self.lags.offsets().iter().position(|&l| l == lag)?;
        let channel_idx = self.channels.iter().position(|c| c == channel)?;
        sample.input().get(lag_idx * self.channels.len() + channel_idx).copied()
    }

    pub(crate) fn from_parts(
        samples: Vec<Sample>,
        lags: LagSpec,
        horizon: usize,
        channels: Vec<String>,
    ) -> Self {
        Self {
            samples,
            lags,
            horizon,
            channels,
        }
    }
}

/// Builds comparable datasets for any downstream model family
///
/// A builder is a pure description of the framing; `build` never mutates
/// the series and repeated invocations over identical inputs produce
/// identical datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetBuilder {
    lags: LagSpec,
    horizon: usize,
    origins: OriginPolicy,
}

impl DatasetBuilder {
    /// Create a builder, validating the framing configuration
    pub fn new(lags: LagSpec, horizon: usize, origins: OriginPolicy) -> Result<Self> {
        if horizon == 0 {
            return Err(WindowError::InvalidSpec(
                "horizon must cover at least one hour".to_string(),
            ));
        }
        if lags.is_empty() {
            return Err(WindowError::InvalidSpec(
                "lag set must name at least one offset".to_string(),
            ));
        }

        Ok(Self {
            lags,
            horizon,
            origins,
        })
    }

    /// The lag set samples will be framed with
    pub fn lags(&self) -> &LagSpec {
        &self.lags
    }

    /// Number of future hourly steps per label
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// The origin policy candidate timestamps are drawn from
    pub fn origin_policy(&self) -> OriginPolicy {
        self.origins
    }

    /// Frame the series into one sample per valid origin
    ///
    /// Fails when the series cadence is irregular or the series is shorter
    /// than `max(lag) + horizon`. Origins whose input or label window
    /// touches a missing value are dropped silently; a dataset with zero
    /// samples is a legal result.
    pub fn build(&self, series: &LoadSeries) -> Result<WindowedDataset> {
        // A deserialized series can bypass the constructor check.
        series.validate_cadence()?;

        let max_lag = self.lags.max_offset() as usize;
        let min_span = max_lag + self.horizon;
        if series.len() < min_span {
            return Err(WindowError::EmptySeries(format!(
                "series has {} observations, framing needs at least {}",
                series.len(),
                min_span
            )));
        }

        let feature_names = series.feature_names();
        let mut channels = Vec::with_capacity(1 + feature_names.len());
        channels.push(LOAD_CHANNEL.to_string());
        channels.extend(feature_names);

        let observations = series.observations();
        let mut samples = Vec::new();
        for (index, obs) in observations.iter().enumerate() {
            if !self.is_origin(obs.timestamp) {
                continue;
            }
            if let Some(sample) = self.frame_at(observations, index, &channels) {
                samples.push(sample);
            }
        }

        Ok(WindowedDataset::from_parts(
            samples,
            self.lags.clone(),
            self.horizon,
            channels,
        ))
    }

    fn is_origin(&self, timestamp: DateTime<Utc>) -> bool {
        match self.origins {
            OriginPolicy::Hourly => true,
            OriginPolicy::Daily => timestamp.hour() == 0,
        }
    }

    /// Frame one candidate origin; `None` when any required value is missing
    fn frame_at(
        &self,
        observations: &[HourlyObservation],
        index: usize,
        channels: &[String],
    ) -> Option<Sample> {
        if index + self.horizon > observations.len() {
            return None;
        }

        let mut label = Vec::with_capacity(self.horizon);
        for step in 0..self.horizon {
            label.push(observations[index + step].load?);
        }

        let mut input = Vec::with_capacity(self.lags.len() * channels.len());
        for &lag in self.lags.offsets() {
            let lag = lag as usize;
            if lag > index {
                return None;
            }
            let source = &observations[index - lag];
            input.push(source.load?);
            for name in &channels[1..] {
                input.push(source.feature(name)?);
            }
        }

        Some(Sample {
            origin: observations[index].timestamp,
            input,
            label,
        })
    }
}
