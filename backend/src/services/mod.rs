//! Services for the Weather Forecast API

pub mod dataset;
pub mod weather;

pub use dataset::{load_weather_data, read_weather_data, LoadReport};
pub use weather::WeatherService;
