//! Observation records and the sensors they report on

use chrono::{DateTime, Duration, Utc};

/// Sensors the forecast queries understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sensor {
    Temperature,
    Irradiance,
    WindSpeed,
}

impl Sensor {
    pub const ALL: [Sensor; 3] = [Sensor::Temperature, Sensor::Irradiance, Sensor::WindSpeed];

    /// Label as it appears in the `sensor` column
    pub fn label(&self) -> &'static str {
        match self {
            Sensor::Temperature => "temperature",
            Sensor::Irradiance => "irradiance",
            Sensor::WindSpeed => "wind speed",
        }
    }

    /// Match a raw column label; unknown labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the weather table.
///
/// Fields that could not be parsed from the source are `None` and the record
/// is then skipped by every comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub event_start: Option<DateTime<Utc>>,
    pub belief_horizon_in_sec: Option<i64>,
    pub event_value: Option<f64>,
    pub sensor: String,
}

impl Observation {
    pub fn new(
        event_start: DateTime<Utc>,
        belief_horizon_in_sec: i64,
        event_value: f64,
        sensor: impl Into<String>,
    ) -> Self {
        Self {
            event_start: Some(event_start),
            belief_horizon_in_sec: Some(belief_horizon_in_sec),
            event_value: Some(event_value),
            sensor: sensor.into(),
        }
    }

    /// Recognized sensor for this record, if any
    pub fn sensor_kind(&self) -> Option<Sensor> {
        Sensor::from_label(&self.sensor)
    }

    /// Moment the value became knowable: `event_start - belief_horizon_in_sec`
    pub fn knowledge_time(&self) -> Option<DateTime<Utc>> {
        let start = self.event_start?;
        let horizon = self.belief_horizon_in_sec?;
        start.checked_sub_signed(Duration::try_seconds(horizon)?)
    }

    /// True when every field needed for comparisons is present
    pub fn is_complete(&self) -> bool {
        self.event_start.is_some()
            && self.belief_horizon_in_sec.is_some()
            && self.event_value.map_or(false, |v| !v.is_nan())
    }
}
