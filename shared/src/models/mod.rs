//! Domain models for the Weather Forecast API

mod forecast;
mod observation;

pub use forecast::*;
pub use observation::*;
