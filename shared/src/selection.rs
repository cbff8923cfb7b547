//! Forecast selection
//!
//! Picks, per sensor, the single most relevant record in the space of
//! (target time, knowledge time, sensor). A record is a candidate when its
//! event starts at or before the target time `then` and it was already
//! knowable at `now`. Among candidates the latest `event_start` wins, then
//! the smallest belief horizon, then the earliest record in dataset order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::dataset::WeatherDataset;
use crate::models::{ForecastResult, Observation, Sensor};

/// Comparable view of a candidate record
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    event_start: DateTime<Utc>,
    belief_horizon_in_sec: i64,
    record: &'a Observation,
}

impl<'a> Candidate<'a> {
    /// Build a candidate if the record is eligible for `then` as seen from `now`
    fn eligible(record: &'a Observation, now: DateTime<Utc>, then: DateTime<Utc>) -> Option<Self> {
        if !record.is_complete() {
            return None;
        }
        let event_start = record.event_start?;
        let belief_horizon_in_sec = record.belief_horizon_in_sec?;
        if event_start > then || record.knowledge_time()? > now {
            return None;
        }
        Some(Self {
            event_start,
            belief_horizon_in_sec,
            record,
        })
    }

    /// Strict improvement only, so an exact tie keeps the earlier record
    fn beats(&self, current: &Candidate<'_>) -> bool {
        self.event_start > current.event_start
            || (self.event_start == current.event_start
                && self.belief_horizon_in_sec < current.belief_horizon_in_sec)
    }
}

/// Best eligible record per recognized sensor. Sensors without a candidate
/// are absent from the map.
pub fn best_candidates(
    dataset: &WeatherDataset,
    now: DateTime<Utc>,
    then: DateTime<Utc>,
) -> HashMap<Sensor, &Observation> {
    let mut best: HashMap<Sensor, Candidate<'_>> = HashMap::with_capacity(Sensor::ALL.len());

    for record in dataset {
        let Some(sensor) = record.sensor_kind() else {
            continue;
        };
        let Some(candidate) = Candidate::eligible(record, now, then) else {
            continue;
        };
        let replace = best
            .get(&sensor)
            .map_or(true, |current| candidate.beats(current));
        if replace {
            best.insert(sensor, candidate);
        }
    }

    best.into_iter().map(|(s, c)| (s, c.record)).collect()
}

/// Most recently known forecast per sensor for target time `then`, as of
/// knowledge time `now`.
///
/// Always returns exactly one result; sensors without data carry
/// [`MISSING_VALUE`](crate::models::MISSING_VALUE).
pub fn select_forecast(
    dataset: &WeatherDataset,
    now: DateTime<Utc>,
    then: DateTime<Utc>,
) -> Vec<ForecastResult> {
    let mut forecast = ForecastResult::default();
    for (sensor, record) in best_candidates(dataset, now, then) {
        if let Some(value) = record.event_value {
            forecast.set(sensor, value);
        }
    }
    vec![forecast]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MISSING_VALUE;
    use chrono::TimeZone;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 11, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_latest_event_start_wins() {
        let dataset = WeatherDataset::new(vec![
            Observation::new(at(3, 16), 0, 7.0, "temperature"),
            Observation::new(at(3, 17), 0, 8.0, "temperature"),
            Observation::new(at(3, 19), 0, 9.0, "temperature"),
        ]);

        let result = select_forecast(&dataset, at(3, 20), at(3, 18));
        assert_eq!(result[0].temperature, 8.0);
    }

    #[test]
    fn test_tie_broken_by_smallest_horizon() {
        let dataset = WeatherDataset::new(vec![
            Observation::new(at(3, 18), 7200, 1.0, "irradiance"),
            Observation::new(at(3, 18), 3600, 2.0, "irradiance"),
            Observation::new(at(3, 18), 10800, 3.0, "irradiance"),
        ]);

        let result = select_forecast(&dataset, at(3, 19), at(3, 18));
        assert_eq!(result[0].irradiance, 2.0);
    }

    #[test]
    fn test_exact_tie_keeps_first_record() {
        let dataset = WeatherDataset::new(vec![
            Observation::new(at(3, 18), 3600, 4.0, "wind speed"),
            Observation::new(at(3, 18), 3600, 5.0, "wind speed"),
        ]);

        let result = select_forecast(&dataset, at(3, 19), at(3, 18));
        assert_eq!(result[0].wind_speed, 4.0);
    }

    #[test]
    fn test_future_knowledge_is_invisible() {
        // Knowable at 17:00 and 19:00 respectively
        let dataset = WeatherDataset::new(vec![
            Observation::new(at(3, 18), 3600, 1.0, "temperature"),
            Observation::new(at(3, 18), -3600, 2.0, "temperature"),
        ]);

        let result = select_forecast(&dataset, at(3, 18), at(3, 18));
        assert_eq!(result[0].temperature, 1.0);
    }

    #[test]
    fn test_falls_back_to_older_event_when_fresh_one_unknown() {
        let dataset = WeatherDataset::new(vec![
            Observation::new(at(3, 17), 0, 1.0, "temperature"),
            Observation::new(at(3, 18), 0, 2.0, "temperature"),
        ]);

        let result = select_forecast(&dataset, at(3, 17), at(3, 18));
        assert_eq!(result[0].temperature, 1.0);
    }

    #[test]
    fn test_unknown_sensor_and_incomplete_records_ignored() {
        let mut broken = Observation::new(at(3, 18), 0, 3.0, "temperature");
        broken.event_start = None;
        let mut no_value = Observation::new(at(3, 18), 0, 3.0, "irradiance");
        no_value.event_value = None;

        let dataset = WeatherDataset::new(vec![
            Observation::new(at(3, 18), 0, 99.0, "humidity"),
            broken,
            no_value,
        ]);

        let result = select_forecast(&dataset, at(3, 19), at(3, 18));
        assert_eq!(result, vec![ForecastResult::default()]);
        assert!(result[0].is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let result = select_forecast(&WeatherDataset::default(), at(3, 19), at(3, 18));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].temperature, MISSING_VALUE);
        assert_eq!(result[0].irradiance, MISSING_VALUE);
        assert_eq!(result[0].wind_speed, MISSING_VALUE);
    }

    #[test]
    fn test_zero_reading_is_not_missing() {
        let dataset = WeatherDataset::new(vec![Observation::new(at(3, 18), 7200, 0.0, "irradiance")]);

        let result = select_forecast(&dataset, at(3, 19), at(3, 18));
        assert_eq!(result[0].irradiance, 0.0);
        assert!(!result[0].is_empty());
    }

    #[test]
    fn test_minus_one_readings_look_empty() {
        let dataset = WeatherDataset::new(
            Sensor::ALL
                .iter()
                .map(|s| Observation::new(at(3, 18), 0, -1.0, s.label()))
                .collect(),
        );

        let result = select_forecast(&dataset, at(3, 19), at(3, 18));
        assert!(result[0].is_empty());
    }

    #[test]
    fn test_serialized_keys() {
        let result = select_forecast(&WeatherDataset::default(), at(3, 19), at(3, 18));
        let json = serde_json::to_value(&result).unwrap();
        let object = json[0].as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["irradiance", "temperature", "wind_speed"]);
    }
}
