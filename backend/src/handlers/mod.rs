//! HTTP handlers for the Weather Forecast API

pub mod forecast;
pub mod health;

pub use forecast::{get_forecasts, get_tomorrow};
pub use health::health_check;
