//! Core occupancy model, device contracts and error taxonomy.

pub mod error;
pub mod activity;
pub mod component;
pub mod car_park;

pub use error::{CarParkError, Result};
pub use activity::{Action, ActivityRecord, ActivitySink};
pub use component::{Component, Display, DisplayData, Sensor, DEFAULT_TEMPERATURE};
pub use car_park::{CarPark, SharedCarPark};
