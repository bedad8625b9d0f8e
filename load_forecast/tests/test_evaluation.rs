use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate};
use load_forecast::evaluation::{evaluate_models, walk_forward};
use load_forecast::models::{DayAheadForecaster, DayMovingAverage, PreviousDay};
use load_forecast::profiles::DayProfile;
use load_forecast::ForecastError;

fn day(offset: i64, level: f64) -> DayProfile {
    DayProfile {
        date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap() + Duration::days(offset),
        hours: [level; 24],
    }
}

#[test]
fn test_walk_forward_on_repeating_days_is_exact() {
    // Every day looks the same, so previous-day persistence is perfect.
    let train: Vec<DayProfile> = (0..5).map(|offset| day(offset, 21_000.0)).collect();
    let test: Vec<DayProfile> = (5..9).map(|offset| day(offset, 21_000.0)).collect();

    let model = PreviousDay::new(1).unwrap();
    let report = walk_forward(&model, &train, &test).unwrap();

    assert_eq!(report.model, model.name());
    assert_eq!(report.forecasts.len(), 4);
    for (forecast, actual) in report.forecasts.iter().zip(test.iter()) {
        assert_eq!(forecast.date, actual.date);
    }
    assert_relative_eq!(report.errors.overall, 0.0);
    for hour in 0..24 {
        assert_relative_eq!(report.errors.per_hour[hour], 0.0);
    }
}

#[test]
fn test_walk_forward_expands_history_step_by_step() {
    // Day level climbs by 10 per day, so previous-day persistence always
    // predicts yesterday's level: the train tail first, then each test day
    // as it is absorbed into the history.
    let train: Vec<DayProfile> = (0..3).map(|offset| day(offset, 10.0 * offset as f64)).collect();
    let test: Vec<DayProfile> = (3..6).map(|offset| day(offset, 10.0 * offset as f64)).collect();

    let model = PreviousDay::new(1).unwrap();
    let report = walk_forward(&model, &train, &test).unwrap();

    let predicted: Vec<f64> = report.forecasts.iter().map(|f| f.hours[0]).collect();
    assert_eq!(predicted, vec![20.0, 30.0, 40.0]);

    // Constant +10 error on every hour slice.
    for hour in 0..24 {
        assert_relative_eq!(report.errors.per_hour[hour], 10.0);
    }
    assert_relative_eq!(report.errors.overall, 10.0);
}

#[test]
fn test_walk_forward_rejects_empty_sets() {
    let days: Vec<DayProfile> = (0..3).map(|offset| day(offset, 100.0)).collect();
    let model = PreviousDay::new(1).unwrap();

    assert!(matches!(
        walk_forward(&model, &[], &days),
        Err(ForecastError::ValidationError(_))
    ));
    assert!(matches!(
        walk_forward(&model, &days, &[]),
        Err(ForecastError::ValidationError(_))
    ));
}

#[test]
fn test_evaluate_models_keeps_order() {
    let train: Vec<DayProfile> = (0..5).map(|offset| day(offset, 21_000.0)).collect();
    let test: Vec<DayProfile> = (5..8).map(|offset| day(offset, 21_000.0)).collect();

    let models: Vec<Box<dyn DayAheadForecaster>> = vec![
        Box::new(PreviousDay::new(1).unwrap()),
        Box::new(DayMovingAverage::new(3).unwrap()),
    ];

    let reports = evaluate_models(&models, &train, &test).unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].model, "Previous day (days_back=1)");
    assert_eq!(reports[1].model, "Day moving average (window=3)");
}

#[test]
fn test_report_serializes_to_json() {
    let train: Vec<DayProfile> = (0..3).map(|offset| day(offset, 100.0)).collect();
    let test: Vec<DayProfile> = (3..5).map(|offset| day(offset, 100.0)).collect();

    let model = PreviousDay::new(1).unwrap();
    let report = walk_forward(&model, &train, &test).unwrap();

    let json = report.to_json().unwrap();
    assert!(json.contains("Previous day"));
    assert!(json.contains("per_hour"));
}
