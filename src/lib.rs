//! # Car Park
//!
//! Central occupancy authority for a single car park.
//!
//! The [`CarPark`](core::CarPark) tracks which plates are inside, derives the
//! number of free bays, pushes an occupancy snapshot to every registered
//! display after each change and appends one line per entry or exit to a
//! plain-text activity log. Its identity (location, capacity, log location)
//! can be saved to and rebuilt from a JSON configuration file.
//!
//! ## Key Behaviour
//!
//! - **Permissive occupancy**: vehicles are always accepted; available bays
//!   floor at zero when the site is over-full
//! - **Append-only log**: `"<plate> <action> at <YYYY-MM-DD HH:MM:SS>"`, one
//!   file open per event
//! - **Identity-only reload**: a car park loaded from configuration starts
//!   with no plates, sensors or displays
//! - **Non-reentrant sharing**: a [`SharedCarPark`](core::SharedCarPark) is a
//!   plain mutex; registered sensors are polled with the guard held via
//!   [`CarPark::poll_sensors`](core::CarPark::poll_sensors)
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use car_park::core::{CarPark, Component};
//! use car_park::infra::{EntrySensor, MessageDisplay};
//!
//! # fn main() -> car_park::core::Result<()> {
//! let car_park = CarPark::builder("Moondalup", 100)
//!     .log_file("moondalup.txt")
//!     .config_file("moondalup_config.json")
//!     .build()?;
//! car_park.save_config()?;
//!
//! let shared = CarPark::from_config("moondalup_config.json")?.into_shared();
//! let entry = Arc::new(EntrySensor::new(1, true, &shared));
//! let display = Arc::new(MessageDisplay::new(1, "Welcome to Moondalup", true));
//! shared.lock().register(Component::Sensor(entry.clone()))?;
//! shared.lock().register(Component::Display(display.clone()))?;
//!
//! entry.fire()?;
//! assert_eq!(shared.lock().available_bays(), 99);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core occupancy model, device contracts and errors.
pub mod core;
/// Configuration snapshot persistence.
pub mod config;
/// Builders to construct car parks.
pub mod builders;
/// File-backed log and reference devices.
pub mod infra;
/// Shared utilities.
pub mod util;
