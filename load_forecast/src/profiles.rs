//! Day-window transformation of hourly series
//!
//! Persistence baselines and their evaluation work on whole days: one row
//! per calendar date, one column per hour slice. Only days that are fully
//! observed make it into a profile; a day with any missing hour is dropped,
//! mirroring the skip-don't-impute rule of the windowing core.

use chrono::{NaiveDate, Timelike};
use load_window::LoadSeries;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hour slices per day profile
pub const HOURS_PER_DAY: usize = 24;

/// One complete day of hourly loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProfile {
    /// Calendar date the profile covers
    pub date: NaiveDate,
    /// Loads for hour slices h0 .. h23
    pub hours: [f64; HOURS_PER_DAY],
}

/// Collapse an hourly series into complete-day profiles in date order
pub fn day_profiles(series: &LoadSeries) -> Vec<DayProfile> {
    let mut by_date: BTreeMap<NaiveDate, [Option<f64>; HOURS_PER_DAY]> = BTreeMap::new();

    for obs in series.observations() {
        if let Some(load) = obs.load {
            let date = obs.timestamp.date_naive();
            let hour = obs.timestamp.hour() as usize;
            by_date.entry(date).or_insert([None; HOURS_PER_DAY])[hour] = Some(load);
        }
    }

    by_date
        .into_iter()
        .filter_map(|(date, slices)| {
            let mut hours = [0.0; HOURS_PER_DAY];
            for (hour, slice) in slices.iter().enumerate() {
                hours[hour] = (*slice)?;
            }
            Some(DayProfile { date, hours })
        })
        .collect()
}

/// Chronological train/test split at a calendar date
///
/// Profiles dated up to and including `last_train_date` form the training
/// set; everything later is test.
pub fn split_by_date(
    profiles: &[DayProfile],
    last_train_date: NaiveDate,
) -> (Vec<DayProfile>, Vec<DayProfile>) {
    let mut train = Vec::new();
    let mut test = Vec::new();

    for profile in profiles {
        if profile.date <= last_train_date {
            train.push(profile.clone());
        } else {
            test.push(profile.clone());
        }
    }

    (train, test)
}

/// Keep only the profiles dated within `start..=stop`
pub fn profiles_between(
    profiles: &[DayProfile],
    start: NaiveDate,
    stop: NaiveDate,
) -> Vec<DayProfile> {
    profiles
        .iter()
        .filter(|p| p.date >= start && p.date <= stop)
        .cloned()
        .collect()
}

