//! Framing configuration: lag sets and origin policies

use crate::error::{Result, WindowError};
use serde::{Deserialize, Serialize};

/// Which candidate timestamps may serve as prediction origins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OriginPolicy {
    /// One origin per day, at midnight on the series' clock
    Daily,
    /// An origin at every hour
    Hourly,
}

impl Default for OriginPolicy {
    fn default() -> Self {
        OriginPolicy::Daily
    }
}

/// The set of hourly lookback offsets feeding a sample's input window
///
/// Offsets count backwards from the prediction origin, so every offset must
/// be at least one hour: an offset of zero would read the first label hour.
/// Offsets are stored deduplicated and sorted descending (furthest lookback
/// first), which fixes the input layout of every sample built from the spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LagSpec {
    offsets: Vec<u32>,
}

impl LagSpec {
    /// Create a lag set from hour offsets, validating and normalizing them
    pub fn new(offsets: &[u32]) -> Result<Self> {
        if offsets.is_empty() {
            return Err(WindowError::InvalidSpec(
                "lag set must name at least one offset".to_string(),
            ));
        }
        if offsets.contains(&0) {
            return Err(WindowError::InvalidSpec(
                "lag offset 0 reads the first label hour".to_string(),
            ));
        }

        let mut sorted = offsets.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        Ok(Self { offsets: sorted })
    }

    /// Lag set covering every hour of the previous `n` hours: {1, 2, ..., n}
    pub fn last_hours(n: u32) -> Result<Self> {
        if n == 0 {
            return Err(WindowError::InvalidSpec(
                "lag set must name at least one offset".to_string(),
            ));
        }
        Ok(Self {
            offsets: (1..=n).rev().collect(),
        })
    }

    /// Offsets in descending order (furthest lookback first)
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Number of distinct offsets
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the lag set is empty (never true for a validated spec)
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The furthest lookback in hours
    pub fn max_offset(&self) -> u32 {
        self.offsets[0]
    }

    /// Whether the given offset is part of the set
    pub fn contains(&self, offset: u32) -> bool {
        self.offsets.contains(&offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lag_spec_sorts_and_dedups() {
        let lags = LagSpec::new(&[24, 1, 168, 24]).unwrap();
        assert_eq!(lags.offsets(), &[168, 24, 1]);
        assert_eq!(lags.len(), 3);
        assert_eq!(lags.max_offset(), 168);
        assert!(lags.contains(24));
        assert!(!lags.contains(2));
    }

    #[test]
    fn test_lag_spec_rejects_empty_and_zero() {
        assert!(LagSpec::new(&[]).is_err());
        assert!(LagSpec::new(&[0]).is_err());
        assert!(LagSpec::new(&[24, 0]).is_err());
    }

    #[test]
    fn test_last_hours() {
        let lags = LagSpec::last_hours(3).unwrap();
        assert_eq!(lags.offsets(), &[3, 2, 1]);
        assert!(LagSpec::last_hours(0).is_err());
    }
}
