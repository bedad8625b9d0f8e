//! Hourly load data ingestion
//!
//! Reads cleaned hourly load exports (time column, load column, optional
//! numeric exogenous columns) into a [`LoadSeries`]. Calendar gaps in the
//! file are materialized as explicit missing markers so the windowing core
//! never sees silently skipped hours.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use load_window::{HourlyObservation, LoadSeries};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Loader turning flat files and frames into hourly load series
#[derive(Debug)]
pub struct SeriesLoader;

impl SeriesLoader {
    /// Load an hourly series from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<LoadSeries> {
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::from_dataframe(df)
    }

    /// Build an hourly series from an existing DataFrame
    pub fn from_dataframe(df: DataFrame) -> Result<LoadSeries> {
        let time_column = Self::detect_time_column(&df)?;
        let load_column = Self::detect_load_column(&df, &time_column)?;
        let feature_columns = Self::detect_feature_columns(&df, &time_column, &load_column);

        let timestamps = Self::column_timestamps(&df, &time_column)?;
        let loads = Self::column_optional_f64(&df, &load_column)?;
        let mut features = Vec::with_capacity(feature_columns.len());
        for name in &feature_columns {
            features.push((name.clone(), Self::column_optional_f64(&df, name)?));
        }

        let mut rows: Vec<HourlyObservation> = Vec::with_capacity(timestamps.len());
        for (i, &timestamp) in timestamps.iter().enumerate() {
            let mut obs = match loads[i] {
                Some(load) => HourlyObservation::new(timestamp, load),
                None => HourlyObservation::missing(timestamp),
            };
            for (name, values) in &features {
                if let Some(value) = values[i] {
                    obs = obs.with_feature(name, value);
                }
            }
            rows.push(obs);
        }

        rows.sort_by_key(|obs| obs.timestamp);
        Ok(LoadSeries::new(Self::fill_gaps(rows))?)
    }

    /// Detect the time column in a DataFrame
    fn detect_time_column(df: &DataFrame) -> Result<String> {
        let column_names = df.get_column_names();

        for name in &column_names {
            let lower_name = name.to_lowercase();
            if lower_name.contains("time")
                || lower_name.contains("date")
                || lower_name.contains("timestamp")
            {
                return Ok(name.to_string());
            }
        }

        // Fall back to the first temporal column
        if let Some(first) = df
            .get_columns()
            .iter()
            .find(|col| col.dtype().is_temporal())
        {
            return Ok(first.name().to_string());
        }

        Err(ForecastError::DataError(
            "No time column found in data".to_string(),
        ))
    }

    /// Detect the load column in a DataFrame
    fn detect_load_column(df: &DataFrame, time_column: &str) -> Result<String> {
        let column_names = df.get_column_names();

        for candidate in ["load", "demand", "value"] {
            for name in &column_names {
                if *name != time_column && name.to_lowercase().contains(candidate) {
                    return Ok(name.to_string());
                }
            }
        }

        // Fall back to the first numeric column
        for name in &column_names {
            if *name == time_column {
                continue;
            }
            if let Ok(col) = df.column(name) {
                if Self::is_numeric(col.dtype()) {
                    return Ok(name.to_string());
                }
            }
        }

        Err(ForecastError::DataError(
            "No load column found in data".to_string(),
        ))
    }

    /// Every numeric column other than time and load is an exogenous feature
    fn detect_feature_columns(df: &DataFrame, time_column: &str, load_column: &str) -> Vec<String> {
        df.get_columns()
            .iter()
            .filter(|col| {
                col.name() != time_column
                    && col.name() != load_column
                    && Self::is_numeric(col.dtype())
            })
            .map(|col| col.name().to_string())
            .collect()
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float64
                | DataType::Float32
                | DataType::Int64
                | DataType::Int32
                | DataType::UInt64
                | DataType::UInt32
        )
    }

    /// Extract the time column as wall-clock timestamps
    fn column_timestamps(df: &DataFrame, column_name: &str) -> Result<Vec<DateTime<Utc>>> {
        let col = df.column(column_name)?;

        let raw: Vec<Option<DateTime<Utc>>> = match col.dtype() {
            DataType::Datetime(unit, _) => {
                let unit = *unit;
                col.datetime()?
                    .into_iter()
                    .map(|opt| opt.and_then(|v| Self::stamp_from_units(v, unit)))
                    .collect()
            }
            DataType::Date => col
                .date()?
                .into_iter()
                .map(|opt| opt.and_then(|days| DateTime::from_timestamp(days as i64 * 86_400, 0)))
                .collect(),
            DataType::Utf8 => {
                let mut parsed = Vec::with_capacity(df.height());
                for opt in col.utf8()? {
                    match opt {
                        Some(value) => parsed.push(Some(Self::parse_wall_clock(value)?)),
                        None => parsed.push(None),
                    }
                }
                parsed
            }
            other => {
                return Err(ForecastError::DataError(format!(
                    "Column '{}' has dtype {} and cannot be read as timestamps",
                    column_name, other
                )))
            }
        };

        raw.into_iter()
            .enumerate()
            .map(|(i, opt)| {
                opt.ok_or_else(|| {
                    ForecastError::DataError(format!(
                        "Null timestamp in column '{}' at row {}",
                        column_name, i
                    ))
                })
            })
            .collect()
    }

    fn stamp_from_units(value: i64, unit: TimeUnit) -> Option<DateTime<Utc>> {
        let (secs, nanos) = match unit {
            TimeUnit::Milliseconds => (
                value.div_euclid(1_000),
                (value.rem_euclid(1_000) * 1_000_000) as u32,
            ),
            TimeUnit::Microseconds => (
                value.div_euclid(1_000_000),
                (value.rem_euclid(1_000_000) * 1_000) as u32,
            ),
            TimeUnit::Nanoseconds => (
                value.div_euclid(1_000_000_000),
                value.rem_euclid(1_000_000_000) as u32,
            ),
        };
        DateTime::from_timestamp(secs, nanos)
    }

    /// Parse a timestamp string, keeping the wall clock
    ///
    /// Offset-carrying stamps ("2015-01-01 00:00:00+01:00") keep their local
    /// clock rather than being shifted to UTC: the market's day boundary is
    /// what daily prediction origins key on.
    fn parse_wall_clock(value: &str) -> Result<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Ok(Utc.from_utc_datetime(&parsed.naive_local()));
        }
        for format in ["%Y-%m-%d %H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%z"] {
            if let Ok(parsed) = DateTime::parse_from_str(value, format) {
                return Ok(Utc.from_utc_datetime(&parsed.naive_local()));
            }
        }
        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(Utc.from_utc_datetime(&parsed));
            }
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(Utc.from_utc_datetime(&parsed.and_time(NaiveTime::default())));
        }

        Err(ForecastError::DataError(format!(
            "Unparseable timestamp '{}'",
            value
        )))
    }

    /// Extract a numeric column with nulls preserved as missing values
    fn column_optional_f64(df: &DataFrame, column_name: &str) -> Result<Vec<Option<f64>>> {
        let col = df.column(column_name).map_err(|e| {
            ForecastError::DataError(format!("Column '{}' not found: {}", column_name, e))
        })?;

        let values = match col.dtype() {
            DataType::Float64 => col.f64()?.into_iter().collect(),
            DataType::Float32 => col
                .f32()?
                .into_iter()
                .map(|opt| opt.map(|v| v as f64))
                .collect(),
            DataType::Int64 => col
                .i64()?
                .into_iter()
                .map(|opt| opt.map(|v| v as f64))
                .collect(),
            DataType::Int32 => col
                .i32()?
                .into_iter()
                .map(|opt| opt.map(|v| v as f64))
                .collect(),
            DataType::UInt64 => col
                .u64()?
                .into_iter()
                .map(|opt| opt.map(|v| v as f64))
                .collect(),
            DataType::UInt32 => col
                .u32()?
                .into_iter()
                .map(|opt| opt.map(|v| v as f64))
                .collect(),
            _ => {
                return Err(ForecastError::DataError(format!(
                    "Column '{}' cannot be converted to f64",
                    column_name
                )))
            }
        };

        Ok(values)
    }

    /// Insert explicit missing markers for hours absent from the file
    fn fill_gaps(observations: Vec<HourlyObservation>) -> Vec<HourlyObservation> {
        let mut filled: Vec<HourlyObservation> = Vec::with_capacity(observations.len());
        for obs in observations {
            if let Some(previous) = filled.last() {
                let mut expected = previous.timestamp + Duration::hours(1);
                while expected < obs.timestamp {
                    filled.push(HourlyObservation::missing(expected));
                    expected += Duration::hours(1);
                }
            }
            filled.push(obs);
        }
        filled
    }
}

/// Keep only the observations whose calendar date falls in `start..=stop`
pub fn slice_dates(series: &LoadSeries, start: NaiveDate, stop: NaiveDate) -> Result<LoadSeries> {
    let kept: Vec<HourlyObservation> = series
        .observations()
        .iter()
        .filter(|obs| {
            let date = obs.timestamp.date_naive();
            date >= start && date <= stop
        })
        .cloned()
        .collect();

    Ok(LoadSeries::new(kept)?)
}

/// Write a series back out as a flat CSV file
///
/// Missing values become empty cells, which read back in as nulls.
pub fn write_series_csv<P: AsRef<Path>>(series: &LoadSeries, path: P) -> Result<()> {
    let feature_names = series.feature_names();
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["timestamp".to_string(), "load".to_string()];
    header.extend(feature_names.iter().cloned());
    writer.write_record(&header)?;

    for obs in series.observations() {
        let mut record = Vec::with_capacity(header.len());
        record.push(obs.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
        record.push(obs.load.map(|v| v.to_string()).unwrap_or_default());
        for name in &feature_names {
            record.push(obs.feature(name).map(|v| v.to_string()).unwrap_or_default());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
