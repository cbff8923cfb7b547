//! Shared types and forecast logic for the Weather Forecast API
//!
//! This crate holds the observation data model and the two pure queries
//! served over it: per-sensor forecast selection and tomorrow's condition
//! flags. It performs no I/O; the backend loads the dataset and hands it in.

pub mod conditions;
pub mod dataset;
pub mod models;
pub mod selection;
pub mod types;
pub mod validation;

pub use conditions::*;
pub use dataset::*;
pub use models::*;
pub use selection::*;
pub use types::*;
pub use validation::*;
