//! Builder for the optional car park construction arguments.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{default_config_file, DEFAULT_LOG_FILE};
use crate::core::{CarPark, Display, Result, Sensor};

/// Collects construction arguments for a [`CarPark`].
///
/// Every builder starts from its own empty collections; nothing is shared
/// between car parks.
pub struct CarParkBuilder {
    location: String,
    capacity: i64,
    plates: Vec<String>,
    sensors: Vec<Arc<dyn Sensor>>,
    displays: Vec<Arc<dyn Display>>,
    log_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl CarParkBuilder {
    /// Create a builder for `location` with `capacity` bays.
    pub fn new(location: impl Into<String>, capacity: i64) -> Self {
        Self {
            location: location.into(),
            capacity,
            plates: Vec::new(),
            sensors: Vec::new(),
            displays: Vec::new(),
            log_file: None,
            config_file: None,
        }
    }

    /// Seed the car park with already-parked plates.
    pub fn plates<I, S>(mut self, plates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plates = plates.into_iter().map(Into::into).collect();
        self
    }

    /// Pre-register a sensor.
    pub fn sensor(mut self, sensor: Arc<dyn Sensor>) -> Self {
        self.sensors.push(sensor);
        self
    }

    /// Pre-register a display.
    pub fn display(mut self, display: Arc<dyn Display>) -> Self {
        self.displays.push(display);
        self
    }

    /// Activity log destination. Defaults to `log.txt`.
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Configuration destination. Defaults to `<location>_config.json`.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Site identifier this builder targets.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Log destination the built car park will use.
    pub fn log_destination(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    /// Configuration destination the built car park will use.
    pub fn config_destination(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(|| default_config_file(&self.location))
    }

    /// Validate arguments, create the log and config files if absent, and
    /// build the car park.
    pub fn build(self) -> Result<CarPark> {
        let log_file = self.log_destination();
        let config_file = self.config_destination();
        CarPark::construct(
            self.location,
            self.capacity,
            self.plates,
            self.sensors,
            self.displays,
            log_file,
            config_file,
        )
    }
}
