//! Configuration models for car park persistence.

pub mod car_park;

pub use car_park::{default_config_file, CarParkConfig, DEFAULT_LOG_FILE};
