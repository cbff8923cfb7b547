//! Route definitions for the Weather Forecast API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/forecasts", get(handlers::get_forecasts))
        .route("/tomorrow", get(handlers::get_tomorrow))
}
