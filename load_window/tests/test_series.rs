use chrono::{Duration, TimeZone, Utc};
use load_window::{HourlyObservation, LoadSeries, WindowError};

fn hourly_observations(hours: i64) -> Vec<HourlyObservation> {
    let start = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
    (0..hours)
        .map(|h| HourlyObservation::new(start + Duration::hours(h), 20_000.0 + h as f64))
        .collect()
}

#[test]
fn test_series_construction() {
    let observations = hourly_observations(48);
    let series = LoadSeries::new(observations.clone()).unwrap();

    assert_eq!(series.len(), 48);
    assert!(!series.is_empty());
    assert_eq!(series.start(), observations[0].timestamp);
    assert_eq!(series.end(), observations[47].timestamp);
    assert_eq!(series.get(3), Some(&observations[3]));
    assert_eq!(series.get(48), None);
}

#[test]
fn test_empty_series_is_rejected() {
    let result = LoadSeries::new(Vec::new());
    assert!(matches!(result, Err(WindowError::EmptySeries(_))));
}

#[test]
fn test_skipped_hour_is_rejected() {
    let mut observations = hourly_observations(48);
    // Dropping an interior hour leaves a two-hour step behind.
    observations.remove(10);

    let result = LoadSeries::new(observations);
    assert!(matches!(result, Err(WindowError::IrregularCadence(_))));
}

#[test]
fn test_duplicate_hour_is_rejected() {
    let mut observations = hourly_observations(48);
    let duplicate = observations[10].clone();
    observations.insert(10, duplicate);

    let result = LoadSeries::new(observations);
    assert!(matches!(result, Err(WindowError::IrregularCadence(_))));
}

#[test]
fn test_explicit_missing_marker_keeps_cadence() {
    let mut observations = hourly_observations(48);
    let gap_hour = observations[10].timestamp;
    observations[10] = HourlyObservation::missing(gap_hour);

    let series = LoadSeries::new(observations).unwrap();
    assert_eq!(series.len(), 48);
    assert_eq!(series.get(10).unwrap().load, None);
}

#[test]
fn test_feature_names_are_sorted_union() {
    let mut observations = hourly_observations(24);
    observations[0] = observations[0].clone().with_feature("temp", 4.5);
    observations[1] = observations[1]
        .clone()
        .with_feature("holiday", 0.0)
        .with_feature("temp", 4.7);

    let series = LoadSeries::new(observations).unwrap();
    assert_eq!(series.feature_names(), vec!["holiday", "temp"]);
    assert_eq!(series.get(1).unwrap().feature("temp"), Some(4.7));
    assert_eq!(series.get(2).unwrap().feature("temp"), None);
}

#[test]
fn test_serde_round_trip() {
    let series = LoadSeries::new(hourly_observations(24)).unwrap();

    let json = serde_json::to_string(&series).unwrap();
    let restored: LoadSeries = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, series);
    assert!(restored.validate_cadence().is_ok());
}
