//! Configuration management for the Weather Forecast API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WFA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{
    validate_threshold, Thresholds, DEFAULT_SUNNY_THRESHOLD, DEFAULT_WARM_THRESHOLD,
    DEFAULT_WINDY_THRESHOLD,
};

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather dataset location
    pub data: DataConfig,

    /// Condition thresholds for the tomorrow query
    pub thresholds: ThresholdConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Path of the CSV file holding the weather table
    pub weather_data_path: String,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ThresholdConfig {
    /// Minimum temperature counted as warm
    pub warm: f64,

    /// Minimum irradiance counted as sunny
    pub sunny: f64,

    /// Minimum wind speed counted as windy
    pub windy: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("WFA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("data.weather_data_path", "data/weather.csv")?
            .set_default("thresholds.warm", DEFAULT_WARM_THRESHOLD)?
            .set_default("thresholds.sunny", DEFAULT_SUNNY_THRESHOLD)?
            .set_default("thresholds.windy", DEFAULT_WINDY_THRESHOLD)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WFA_ prefix)
            .add_source(
                Environment::with_prefix("WFA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ThresholdConfig {
    /// Checked conversion into the thresholds used by the evaluator
    pub fn to_thresholds(&self) -> AppResult<Thresholds> {
        for (name, value) in [("warm", self.warm), ("sunny", self.sunny), ("windy", self.windy)] {
            validate_threshold(value)
                .map_err(|msg| AppError::Configuration(format!("thresholds.{}: {}", name, msg)))?;
        }
        Ok(Thresholds {
            warm: self.warm,
            sunny: self.sunny,
            windy: self.windy,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        let defaults = Thresholds::default();
        Self {
            warm: defaults.warm,
            sunny: defaults.sunny,
            windy: defaults.windy,
        }
    }
}
