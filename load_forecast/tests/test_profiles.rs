use chrono::{Duration, NaiveDate, TimeZone, Utc};
use load_forecast::profiles::{day_profiles, profiles_between, split_by_date, DayProfile};
use load_window::{HourlyObservation, LoadSeries};
use pretty_assertions::assert_eq;

/// Hourly series starting at the given hour-of-day, load = 1000 + hour index
fn series_from(start_hour: u32, hours: i64, gap_at: Option<usize>) -> LoadSeries {
    let start = Utc
        .with_ymd_and_hms(2017, 3, 1, start_hour, 0, 0)
        .unwrap();
    let observations = (0..hours)
        .map(|h| {
            if Some(h as usize) == gap_at {
                HourlyObservation::missing(start + Duration::hours(h))
            } else {
                HourlyObservation::new(start + Duration::hours(h), 1000.0 + h as f64)
            }
        })
        .collect();
    LoadSeries::new(observations).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 3, day).unwrap()
}

#[test]
fn test_day_profiles_from_complete_days() {
    let series = series_from(0, 72, None);
    let profiles = day_profiles(&series);

    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].date, date(1));
    assert_eq!(profiles[2].date, date(3));
    assert_eq!(profiles[0].hours[0], 1000.0);
    assert_eq!(profiles[0].hours[23], 1023.0);
    assert_eq!(profiles[2].hours[0], 1048.0);
}

#[test]
fn test_day_with_missing_hour_is_dropped() {
    // Hour 30 sits in the second day.
    let series = series_from(0, 72, Some(30));
    let profiles = day_profiles(&series);

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].date, date(1));
    assert_eq!(profiles[1].date, date(3));
}

#[test]
fn test_partial_edge_days_are_dropped() {
    // Starts at noon: the first and last days are incomplete.
    let series = series_from(12, 50, None);
    let profiles = day_profiles(&series);

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].date, date(2));
    // Day 2 starts 12 hours into the series.
    assert_eq!(profiles[0].hours[0], 1012.0);
}

#[test]
fn test_split_by_date_is_chronological() {
    let series = series_from(0, 96, None);
    let profiles = day_profiles(&series);

    let (train, test) = split_by_date(&profiles, date(2));

    assert_eq!(train.len(), 2);
    assert_eq!(test.len(), 2);
    assert_eq!(train.last().unwrap().date, date(2));
    assert_eq!(test.first().unwrap().date, date(3));
}

#[test]
fn test_profiles_between_is_inclusive() {
    let series = series_from(0, 96, None);
    let profiles = day_profiles(&series);

    let kept = profiles_between(&profiles, date(2), date(3));
    let dates: Vec<NaiveDate> = kept.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2), date(3)]);
}

#[test]
fn test_profile_serde_round_trip() {
    let profile = DayProfile {
        date: date(5),
        hours: [21_500.0; 24],
    };

    let json = serde_json::to_string(&profile).unwrap();
    let restored: DayProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, profile);
}
