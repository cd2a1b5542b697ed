//! Builders to construct car parks from arguments or configuration.

pub mod car_park_builder;

pub use car_park_builder::CarParkBuilder;
