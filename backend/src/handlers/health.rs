//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::WeatherService;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = WeatherService::new(state.dataset.clone(), state.thresholds);

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: service.record_count(),
    })
}
