//! Weather Forecast API - Backend
//!
//! Serves point forecasts and tomorrow's condition flags over a weather
//! table loaded once at startup.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::{Thresholds, WeatherDataset};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use crate::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<WeatherDataset>,
    pub thresholds: Thresholds,
}

impl AppState {
    /// Build state from loaded configuration and a dataset snapshot
    pub fn new(config: &Config, dataset: WeatherDataset) -> error::AppResult<Self> {
        let thresholds = config.thresholds.to_thresholds()?;
        Ok(Self {
            dataset: Arc::new(dataset),
            thresholds,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Weather Forecast API v1.0"
}
