use approx::assert_relative_eq;
use load_forecast::metrics::{forecast_accuracy, hourly_rmse};
use load_forecast::ForecastError;

#[test]
fn test_hourly_rmse_of_exact_forecast_is_zero() {
    let days = vec![[21_000.0; 24], [22_000.0; 24]];
    let errors = hourly_rmse(&days, &days).unwrap();

    for hour in 0..24 {
        assert_relative_eq!(errors.per_hour[hour], 0.0);
    }
    assert_relative_eq!(errors.overall, 0.0);
}

#[test]
fn test_hourly_rmse_localizes_errors_to_hours() {
    let mut forecasts = vec![[100.0; 24], [100.0; 24]];
    let actuals = vec![[100.0; 24], [100.0; 24]];

    // Both days miss hour 0 by 10 MW; every other slice is exact.
    forecasts[0][0] = 110.0;
    forecasts[1][0] = 110.0;

    let errors = hourly_rmse(&forecasts, &actuals).unwrap();

    assert_relative_eq!(errors.per_hour[0], 10.0);
    for hour in 1..24 {
        assert_relative_eq!(errors.per_hour[hour], 0.0);
    }
    assert_relative_eq!(errors.overall, 10.0 / 24.0);
}

#[test]
fn test_hourly_rmse_rejects_mismatched_input() {
    let one = vec![[100.0; 24]];
    let two = vec![[100.0; 24], [100.0; 24]];

    assert!(matches!(
        hourly_rmse(&one, &two),
        Err(ForecastError::ValidationError(_))
    ));
    assert!(matches!(
        hourly_rmse(&[], &[]),
        Err(ForecastError::ValidationError(_))
    ));
}

#[test]
fn test_hourly_rmse_display_lists_every_slice() {
    let days = vec![[100.0; 24]];
    let errors = hourly_rmse(&days, &days).unwrap();

    let rendered = format!("{}", errors);
    assert!(rendered.contains("h00"));
    assert!(rendered.contains("h23"));
    assert!(rendered.contains("overall"));
}

#[test]
fn test_forecast_accuracy_known_values() {
    let forecast = vec![90.0, 110.0];
    let actual = vec![100.0, 100.0];

    let accuracy = forecast_accuracy(&forecast, &actual).unwrap();

    assert_relative_eq!(accuracy.mae, 10.0);
    assert_relative_eq!(accuracy.mse, 100.0);
    assert_relative_eq!(accuracy.rmse, 10.0);
    assert_relative_eq!(accuracy.mape, 10.0);
    let expected_smape = (200.0 * 10.0 / 190.0 + 200.0 * 10.0 / 210.0) / 2.0;
    assert_relative_eq!(accuracy.smape, expected_smape);
}

#[test]
fn test_forecast_accuracy_rejects_mismatched_input() {
    assert!(matches!(
        forecast_accuracy(&[1.0], &[1.0, 2.0]),
        Err(ForecastError::ValidationError(_))
    ));
    assert!(matches!(
        forecast_accuracy(&[], &[]),
        Err(ForecastError::ValidationError(_))
    ));
}
