//! Validation rules applied at the API boundary

use chrono::{DateTime, Utc};

/// Forecast queries require the knowledge time `now` not to precede the
/// target time `then`.
pub fn validate_time_order(now: DateTime<Utc>, then: DateTime<Utc>) -> Result<(), &'static str> {
    if now < then {
        return Err("`now` should not be earlier than `then`.");
    }
    Ok(())
}

/// Validate a configured condition threshold
pub fn validate_threshold(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Threshold must be a finite number");
    }
    Ok(())
}
