//! Query results returned to API callers

use serde::{Deserialize, Serialize};

use super::Sensor;

/// Value reported for a sensor with no applicable data.
///
/// A genuine reading of exactly -1.0 is indistinguishable from it, so a
/// result where every sensor reads -1.0 counts as empty.
pub const MISSING_VALUE: f64 = -1.0;

/// Best-known value per sensor for a target time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastResult {
    pub temperature: f64,
    pub irradiance: f64,
    pub wind_speed: f64,
}

impl Default for ForecastResult {
    fn default() -> Self {
        Self {
            temperature: MISSING_VALUE,
            irradiance: MISSING_VALUE,
            wind_speed: MISSING_VALUE,
        }
    }
}

impl ForecastResult {
    pub fn get(&self, sensor: Sensor) -> f64 {
        match sensor {
            Sensor::Temperature => self.temperature,
            Sensor::Irradiance => self.irradiance,
            Sensor::WindSpeed => self.wind_speed,
        }
    }

    pub fn set(&mut self, sensor: Sensor, value: f64) {
        match sensor {
            Sensor::Temperature => self.temperature = value,
            Sensor::Irradiance => self.irradiance = value,
            Sensor::WindSpeed => self.wind_speed = value,
        }
    }

    /// True when no sensor has data
    pub fn is_empty(&self) -> bool {
        Sensor::ALL.iter().all(|s| self.get(*s) == MISSING_VALUE)
    }
}

/// Tomorrow's condition flags
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConditionResult {
    pub warm: bool,
    pub sunny: bool,
    pub windy: bool,
}
