//! Weather service answering forecast and condition queries
//!
//! Wraps the read-only dataset snapshot and the configured thresholds, and
//! emits the diagnostic events for each query. The selection rules live in
//! the `shared` crate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::{
    best_candidates, evaluate_tomorrow, select_forecast, tomorrow_date, ConditionResult,
    ForecastResult, Thresholds, WeatherDataset,
};

/// Weather service over an immutable dataset snapshot
#[derive(Clone)]
pub struct WeatherService {
    dataset: Arc<WeatherDataset>,
    thresholds: Thresholds,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(dataset: Arc<WeatherDataset>, thresholds: Thresholds) -> Self {
        Self {
            dataset,
            thresholds,
        }
    }

    /// Number of observations in the snapshot
    pub fn record_count(&self) -> usize {
        self.dataset.len()
    }

    /// Most recently known forecast per sensor for `then`, as of `now`
    pub fn forecasts(&self, now: DateTime<Utc>, then: DateTime<Utc>) -> Vec<ForecastResult> {
        if tracing::enabled!(tracing::Level::DEBUG) {
            for (sensor, record) in best_candidates(&self.dataset, now, then) {
                tracing::debug!(
                    %sensor,
                    event_start = ?record.event_start,
                    belief_horizon_in_sec = ?record.belief_horizon_in_sec,
                    "Selected forecast record"
                );
            }
        }

        let forecasts = select_forecast(&self.dataset, now, then);
        tracing::debug!(%now, %then, ?forecasts, "Forecast query evaluated");
        forecasts
    }

    /// Warm / sunny / windy flags for the day after `now`
    pub fn tomorrow(&self, now: DateTime<Utc>) -> ConditionResult {
        let conditions = evaluate_tomorrow(&self.dataset, now, &self.thresholds);
        tracing::debug!(
            %now,
            tomorrow = ?tomorrow_date(now),
            warm = conditions.warm,
            sunny = conditions.sunny,
            windy = conditions.windy,
            "Tomorrow conditions evaluated"
        );
        conditions
    }
}
