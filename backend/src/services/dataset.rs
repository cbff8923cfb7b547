//! Weather dataset loader
//!
//! Reads the weather table from CSV. Malformed cells are coerced to missing
//! values instead of failing the load; only an unreadable source or a missing
//! column is an error.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::{parse_timestamp, Observation, WeatherDataset};

use crate::error::{AppError, AppResult};

/// Columns the loader requires in the header row
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "event_start",
    "belief_horizon_in_sec",
    "event_value",
    "sensor",
];

/// Row as read from the file, before coercion
#[derive(Debug, Deserialize)]
struct RawRecord {
    event_start: Option<String>,
    belief_horizon_in_sec: Option<String>,
    event_value: Option<String>,
    sensor: Option<String>,
}

/// Counters collected while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows turned into observations
    pub rows: usize,
    /// Non-empty cells that could not be parsed
    pub coerced_cells: usize,
    /// Rows the CSV reader could not decode at all
    pub skipped_rows: usize,
}

/// Load the weather table from a CSV file
pub fn load_weather_data(path: impl AsRef<Path>) -> AppResult<WeatherDataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| AppError::DatasetLoad(format!("{}: {}", path.display(), e)))?;

    let (dataset, report) = read_weather_data(file)?;

    tracing::info!(
        path = %path.display(),
        rows = report.rows,
        "Weather dataset loaded"
    );
    if report.coerced_cells > 0 || report.skipped_rows > 0 {
        tracing::warn!(
            coerced_cells = report.coerced_cells,
            skipped_rows = report.skipped_rows,
            "Weather dataset contained malformed values"
        );
    }

    Ok(dataset)
}

/// Parse the weather table from any CSV source
pub fn read_weather_data<R: Read>(source: R) -> AppResult<(WeatherDataset, LoadReport)> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::DatasetLoad(format!("unreadable header row: {}", e)))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::DatasetLoad(format!("missing column `{}`", column)));
        }
    }

    let mut report = LoadReport::default();
    let mut records = Vec::new();

    for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = match row {
            Ok(raw) => raw,
            Err(e) if e.is_io_error() => {
                return Err(AppError::DatasetLoad(format!("read failed: {}", e)));
            }
            Err(e) => {
                tracing::debug!(row = index + 1, error = %e, "Skipping undecodable row");
                report.skipped_rows += 1;
                continue;
            }
        };
        records.push(coerce_record(raw, &mut report));
        report.rows += 1;
    }

    Ok((WeatherDataset::new(records), report))
}

fn coerce_record(raw: RawRecord, report: &mut LoadReport) -> Observation {
    Observation {
        event_start: coerce(raw.event_start, parse_event_start, report),
        belief_horizon_in_sec: coerce(raw.belief_horizon_in_sec, parse_belief_horizon, report),
        event_value: coerce(raw.event_value, parse_event_value, report),
        sensor: raw.sensor.unwrap_or_default(),
    }
}

/// Empty cells are simply missing; non-empty unparseable cells are counted
fn coerce<T>(
    cell: Option<String>,
    parse: fn(&str) -> Option<T>,
    report: &mut LoadReport,
) -> Option<T> {
    let cell = cell.filter(|c| !c.is_empty())?;
    let parsed = parse(&cell);
    if parsed.is_none() {
        report.coerced_cells += 1;
    }
    parsed
}

fn parse_event_start(cell: &str) -> Option<DateTime<Utc>> {
    parse_timestamp(cell).ok()
}

/// Whole, non-negative seconds; integral floats such as `3600.0` are accepted
fn parse_belief_horizon(cell: &str) -> Option<i64> {
    let seconds = match cell.parse::<i64>() {
        Ok(seconds) => seconds,
        Err(_) => {
            let float = cell.parse::<f64>().ok()?;
            if !float.is_finite() || float.fract() != 0.0 || float.abs() > i64::MAX as f64 {
                return None;
            }
            float as i64
        }
    };
    (seconds >= 0).then_some(seconds)
}

fn parse_event_value(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE: &str = "\
event_start,belief_horizon_in_sec,event_value,sensor,unit
2020-11-03 18:00:00+00:00,3600,8.97,temperature,°C
2020-11-03 18:00:00+00:00,7200,0.0,irradiance,W/m²
2020-11-03T18:00:00Z,3600.0,6.17,wind speed,m/s
";

    #[test]
    fn test_reads_sample() {
        let (dataset, report) = read_weather_data(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(report, LoadReport { rows: 3, coerced_cells: 0, skipped_rows: 0 });

        let first = &dataset.records()[0];
        assert_eq!(
            first.event_start,
            Some(Utc.with_ymd_and_hms(2020, 11, 3, 18, 0, 0).unwrap())
        );
        assert_eq!(first.belief_horizon_in_sec, Some(3600));
        assert_eq!(first.event_value, Some(8.97));
        assert_eq!(first.sensor, "temperature");
        assert_eq!(dataset.records()[2].belief_horizon_in_sec, Some(3600));
    }

    #[test]
    fn test_malformed_cells_become_missing() {
        let csv = "\
event_start,belief_horizon_in_sec,event_value,sensor
not a date,3600,1.0,temperature
2020-11-03 18:00:00,-5,2.0,temperature
2020-11-03 18:00:00,1.5,abc,irradiance
,,,
";
        let (dataset, report) = read_weather_data(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(report.coerced_cells, 4);

        let records = dataset.records();
        assert_eq!(records[0].event_start, None);
        assert_eq!(records[1].belief_horizon_in_sec, None);
        assert_eq!(records[2].belief_horizon_in_sec, None);
        assert_eq!(records[2].event_value, None);
        assert!(!records[3].is_complete());
        assert_eq!(records[3].sensor, "");
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "event_start,event_value,sensor\n2020-11-03 18:00:00,1.0,temperature\n";
        let err = read_weather_data(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::DatasetLoad(msg) if msg.contains("belief_horizon_in_sec")));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_weather_data("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, AppError::DatasetLoad(_)));
    }

    #[test]
    fn test_header_only() {
        let csv = "event_start,belief_horizon_in_sec,event_value,sensor\n";
        let (dataset, _) = read_weather_data(csv.as_bytes()).unwrap();
        assert!(dataset.is_empty());
    }
}
