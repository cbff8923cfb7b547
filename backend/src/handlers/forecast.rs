//! HTTP handlers for forecast and tomorrow-condition endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::{parse_timestamp, validate_time_order, ConditionResult, ForecastResult};

use crate::error::{AppError, AppResult};
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// Knowledge time
    pub now: String,
    /// Target event time
    pub then: String,
}

/// Query parameters for the tomorrow endpoint
#[derive(Debug, Deserialize)]
pub struct TomorrowQuery {
    pub now: String,
}

fn parse_param(field: &str, value: &str) -> AppResult<DateTime<Utc>> {
    parse_timestamp(value).map_err(|_| AppError::InvalidTimestamp {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Get the most recent forecasts for temperature, irradiance and wind speed
///
/// Sensors without data report -1.0. A result without any data is a 404.
pub async fn get_forecasts(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<Vec<ForecastResult>>> {
    let now = parse_param("now", &query.now)?;
    let then = parse_param("then", &query.then)?;

    validate_time_order(now, then)
        .map_err(|msg| AppError::InvalidTimeOrder(msg.to_string()))?;

    let service = WeatherService::new(state.dataset.clone(), state.thresholds);
    let forecasts = service.forecasts(now, then);

    if forecasts.iter().all(ForecastResult::is_empty) {
        return Err(AppError::NotFound(
            "No forecasts available for the specified `then` time.".to_string(),
        ));
    }

    Ok(Json(forecasts))
}

/// Determine whether tomorrow is expected to be warm, sunny and windy
pub async fn get_tomorrow(
    State(state): State<AppState>,
    Query(query): Query<TomorrowQuery>,
) -> AppResult<Json<ConditionResult>> {
    let now = parse_param("now", &query.now)?;

    let service = WeatherService::new(state.dataset.clone(), state.thresholds);
    Ok(Json(service.tomorrow(now)))
}
