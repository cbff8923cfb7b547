//! Tomorrow's warm / sunny / windy flags
//!
//! Unlike forecast selection this looks at every record dated tomorrow,
//! regardless of when it became knowable.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dataset::WeatherDataset;
use crate::models::{ConditionResult, Sensor};

pub const DEFAULT_WARM_THRESHOLD: f64 = 20.0;
pub const DEFAULT_SUNNY_THRESHOLD: f64 = 200.0;
pub const DEFAULT_WINDY_THRESHOLD: f64 = 5.0;

/// Inclusive lower bounds for each condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    /// Temperature
    pub warm: f64,
    /// Irradiance
    pub sunny: f64,
    /// Wind speed
    pub windy: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warm: DEFAULT_WARM_THRESHOLD,
            sunny: DEFAULT_SUNNY_THRESHOLD,
            windy: DEFAULT_WINDY_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn for_sensor(&self, sensor: Sensor) -> f64 {
        match sensor {
            Sensor::Temperature => self.warm,
            Sensor::Irradiance => self.sunny,
            Sensor::WindSpeed => self.windy,
        }
    }
}

/// Calendar date (UTC) of `now + 24h`, `None` past the last representable day
pub fn tomorrow_date(now: DateTime<Utc>) -> Option<NaiveDate> {
    now.checked_add_signed(Duration::days(1))
        .map(|t| t.date_naive())
}

/// Whether any record of tomorrow reaches the threshold of its sensor
pub fn evaluate_tomorrow(
    dataset: &WeatherDataset,
    now: DateTime<Utc>,
    thresholds: &Thresholds,
) -> ConditionResult {
    let mut result = ConditionResult::default();
    if dataset.is_empty() {
        return result;
    }

    let Some(tomorrow) = tomorrow_date(now) else {
        return result;
    };

    let tomorrows = dataset.iter().filter(|record| {
        record
            .event_start
            .map_or(false, |start| start.date_naive() == tomorrow)
    });

    for record in tomorrows {
        let (Some(sensor), Some(value)) = (record.sensor_kind(), record.event_value) else {
            continue;
        };
        if value < thresholds.for_sensor(sensor) || value.is_nan() {
            continue;
        }
        match sensor {
            Sensor::Temperature => result.warm = true,
            Sensor::Irradiance => result.sunny = true,
            Sensor::WindSpeed => result.windy = true,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Observation;
    use chrono::TimeZone;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 11, d, h, 0, 0).unwrap()
    }

    fn thresholds() -> Thresholds {
        Thresholds {
            warm: 8.0,
            sunny: 50.0,
            windy: 6.0,
        }
    }

    #[test]
    fn test_tomorrow_date_crosses_month() {
        let now = Utc.with_ymd_and_hms(2020, 11, 30, 23, 30, 0).unwrap();
        assert_eq!(tomorrow_date(now), NaiveDate::from_ymd_opt(2020, 12, 1));
    }

    #[test]
    fn test_tomorrow_past_max_date_is_all_false() {
        let now = crate::types::parse_timestamp("+262142-12-31T12:00:00").unwrap();
        assert_eq!(tomorrow_date(now), None);

        let dataset = WeatherDataset::new(vec![Observation::new(now, 0, 30.0, "temperature")]);
        assert_eq!(
            evaluate_tomorrow(&dataset, now, &Thresholds::default()),
            ConditionResult::default()
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let dataset = WeatherDataset::new(vec![
            Observation::new(at(4, 12), 0, 8.0, "temperature"),
            Observation::new(at(4, 12), 0, 49.99, "irradiance"),
        ]);

        let result = evaluate_tomorrow(&dataset, at(3, 12), &thresholds());
        assert_eq!(
            result,
            ConditionResult {
                warm: true,
                sunny: false,
                windy: false
            }
        );
    }

    #[test]
    fn test_any_record_suffices() {
        let dataset = WeatherDataset::new(vec![
            Observation::new(at(4, 1), 0, 1.0, "wind speed"),
            Observation::new(at(4, 2), 0, 7.5, "wind speed"),
            Observation::new(at(4, 3), 0, 2.0, "wind speed"),
        ]);

        assert!(evaluate_tomorrow(&dataset, at(3, 0), &thresholds()).windy);
    }

    #[test]
    fn test_other_days_ignored() {
        let dataset = WeatherDataset::new(vec![
            Observation::new(at(3, 23), 0, 30.0, "temperature"),
            Observation::new(at(5, 0), 0, 30.0, "temperature"),
        ]);

        assert!(!evaluate_tomorrow(&dataset, at(3, 10), &thresholds()).warm);
    }

    #[test]
    fn test_knowledge_time_not_applied() {
        // Only knowable 48h after `now`, still counted
        let dataset = WeatherDataset::new(vec![Observation::new(at(4, 12), -172_800, 30.0, "temperature")]);

        assert!(evaluate_tomorrow(&dataset, at(3, 12), &thresholds()).warm);
    }

    #[test]
    fn test_missing_values_never_match() {
        let mut record = Observation::new(at(4, 12), 0, 30.0, "temperature");
        record.event_value = None;
        let mut nan = Observation::new(at(4, 12), 0, f64::NAN, "irradiance");
        nan.belief_horizon_in_sec = None;

        let dataset = WeatherDataset::new(vec![record, nan]);
        assert_eq!(
            evaluate_tomorrow(&dataset, at(3, 12), &thresholds()),
            ConditionResult::default()
        );
    }

    #[test]
    fn test_empty_dataset() {
        assert_eq!(
            evaluate_tomorrow(&WeatherDataset::default(), at(3, 12), &thresholds()),
            ConditionResult {
                warm: false,
                sunny: false,
                windy: false
            }
        );
    }
}
