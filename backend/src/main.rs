//! Weather Forecast API - Server
//!
//! Loads the weather table once and serves forecast queries over it.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_forecast_backend::{
    config::Config, create_app, services::load_weather_data, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "wfa_server=debug,weather_forecast_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Weather Forecast API");
    tracing::info!("Environment: {}", config.environment);

    // Load the weather table
    tracing::info!("Loading weather data from {}", config.data.weather_data_path);
    let dataset = load_weather_data(&config.data.weather_data_path)?;

    let addr = config.bind_address();
    let state = AppState::new(&config, dataset)?;
    tracing::info!(
        warm = state.thresholds.warm,
        sunny = state.thresholds.sunny,
        windy = state.thresholds.windy,
        "Condition thresholds configured"
    );

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
