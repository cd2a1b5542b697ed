//! The car park entity: occupancy bookkeeping and device registry.

use std::any::Any;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::builders::CarParkBuilder;
use crate::config::CarParkConfig;
use crate::core::{
    Action, ActivityRecord, ActivitySink, CarParkError, Component, Display, DisplayData, Result,
    Sensor, DEFAULT_TEMPERATURE,
};
use crate::infra::activity_log::{touch, FileActivityLog};

/// Car park handle shared with the sensors that feed it.
///
/// The mutex is not reentrant. Sensors registered with a car park are
/// driven through [`CarPark::poll_sensors`] or [`Sensor::detect_vehicle`]
/// with the guard already held, never by re-locking the handle.
pub type SharedCarPark = Arc<Mutex<CarPark>>;

/// Sole authority over one site's occupancy.
///
/// Capacity is advisory: vehicles are always accepted and
/// [`available_bays`](Self::available_bays) floors at zero once the site is
/// full. Plates are not required to be unique.
pub struct CarPark {
    location: String,
    capacity: u64,
    plates: Vec<String>,
    sensors: Vec<Arc<dyn Sensor>>,
    displays: Vec<Arc<dyn Display>>,
    log: FileActivityLog,
    config_file: PathBuf,
}

impl CarPark {
    /// Create a car park with default log and config destinations.
    pub fn new(location: impl Into<String>, capacity: i64) -> Result<Self> {
        Self::builder(location, capacity).build()
    }

    /// Start a builder for the optional construction arguments.
    pub fn builder(location: impl Into<String>, capacity: i64) -> CarParkBuilder {
        CarParkBuilder::new(location, capacity)
    }

    /// Rebuild a car park from a saved configuration.
    ///
    /// Only identity is restored; plates and registrations start empty and
    /// `config_file` becomes the new configuration destination.
    pub fn from_config(config_file: impl AsRef<Path>) -> Result<Self> {
        let config_file = config_file.as_ref();
        let cfg = CarParkConfig::load(config_file)?;
        Self::builder(cfg.location, cfg.capacity)
            .log_file(cfg.log_file)
            .config_file(config_file)
            .build()
    }

    pub(crate) fn construct(
        location: String,
        capacity: i64,
        plates: Vec<String>,
        sensors: Vec<Arc<dyn Sensor>>,
        displays: Vec<Arc<dyn Display>>,
        log_file: PathBuf,
        config_file: PathBuf,
    ) -> Result<Self> {
        let capacity = u64::try_from(capacity).map_err(|_| {
            CarParkError::InvalidArgument(format!(
                "capacity must be non-negative, got {capacity}"
            ))
        })?;
        let log = FileActivityLog::open(log_file)?;
        touch(&config_file)?;

        tracing::info!(
            location = %location,
            capacity,
            log_file = %log.path().display(),
            config_file = %config_file.display(),
            "car park created"
        );
        Ok(Self {
            location,
            capacity,
            plates,
            sensors,
            displays,
            log,
            config_file,
        })
    }

    /// Wrap in a shared handle for sensors.
    pub fn into_shared(self) -> SharedCarPark {
        Arc::new(Mutex::new(self))
    }

    /// Site identifier.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Maximum simultaneous vehicles.
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Currently parked plates in arrival order.
    pub fn plates(&self) -> &[String] {
        &self.plates
    }

    /// Registered sensors in registration order.
    pub fn sensors(&self) -> &[Arc<dyn Sensor>] {
        &self.sensors
    }

    /// Registered displays in registration order.
    pub fn displays(&self) -> &[Arc<dyn Display>] {
        &self.displays
    }

    /// Activity log destination.
    pub fn log_file(&self) -> &Path {
        self.log.path()
    }

    /// Configuration destination.
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Free bays, floored at zero when the site is over-full.
    pub fn available_bays(&self) -> u64 {
        let occupied = u64::try_from(self.plates.len()).unwrap_or(u64::MAX);
        self.capacity.saturating_sub(occupied)
    }

    /// True once occupancy has reached capacity.
    pub fn is_full(&self) -> bool {
        self.available_bays() == 0
    }

    /// Register a sensor or display. Duplicates are not detected.
    pub fn register(&mut self, component: impl Into<Component>) -> Result<()> {
        match component.into() {
            Component::Sensor(sensor) => {
                let sensor_id = sensor.id();
                tracing::info!(sensor_id, "sensor registered");
                self.sensors.push(sensor);
            }
            Component::Display(display) => {
                let display_id = display.id();
                tracing::info!(display_id, "display registered");
                self.displays.push(display);
            }
        }
        Ok(())
    }

    /// Register a dynamically typed value, rejecting anything that is not a
    /// sensor or display with [`CarParkError::TypeMismatch`].
    pub fn register_any(&mut self, value: Box<dyn Any>) -> Result<()> {
        self.register(Component::from_any(value)?)
    }

    /// Park a vehicle. Never refused, even when full.
    pub fn add_vehicle(&mut self, plate: impl Into<String>) -> Result<()> {
        let plate = plate.into();
        self.plates.push(plate.clone());
        tracing::info!(plate = %plate, available_bays = self.available_bays(), "vehicle entered");
        self.update_displays()?;
        self.log.append(&ActivityRecord::now(plate, Action::Entered))
    }

    /// Remove the first occurrence of `plate`.
    ///
    /// An unknown plate fails with [`CarParkError::NotFound`] and leaves
    /// plates, displays and log untouched.
    pub fn remove_vehicle(&mut self, plate: &str) -> Result<()> {
        let Some(idx) = self.plates.iter().position(|p| p == plate) else {
            tracing::warn!(plate, "vehicle not parked");
            return Err(CarParkError::NotFound(plate.to_string()));
        };
        let plate = self.plates.remove(idx);
        tracing::info!(plate = %plate, available_bays = self.available_bays(), "vehicle exited");
        self.update_displays()?;
        self.log.append(&ActivityRecord::now(plate, Action::Exited))
    }

    /// Let every registered sensor scan once, in registration order.
    ///
    /// Returns the plates that were reported. The first sensor error aborts
    /// the sweep.
    pub fn poll_sensors(&mut self) -> Result<Vec<String>> {
        let sensors = self.sensors.clone();
        let mut reported = Vec::new();
        for sensor in sensors {
            if let Some(plate) = sensor.detect_vehicle(self)? {
                reported.push(plate);
            }
        }
        Ok(reported)
    }

    /// Snapshot pushed to displays.
    pub fn display_data(&self) -> DisplayData {
        DisplayData {
            available_bays: self.available_bays(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    // The first failing display aborts the fan-out.
    fn update_displays(&self) -> Result<()> {
        let data = self.display_data();
        for display in &self.displays {
            let display_id = display.id();
            tracing::debug!(display_id, ?data, "updating display");
            display.update(&data)?;
        }
        Ok(())
    }

    /// Identity fields as a configuration snapshot.
    pub fn to_config(&self) -> CarParkConfig {
        CarParkConfig {
            location: self.location.clone(),
            capacity: i64::try_from(self.capacity).unwrap_or(i64::MAX),
            log_file: self.log.path().to_path_buf(),
        }
    }

    /// Overwrite the configuration destination with the current identity.
    pub fn save_config(&self) -> Result<()> {
        self.to_config().save(&self.config_file)
    }
}

impl fmt::Display for CarPark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car park at {}, with {} bays.", self.location, self.capacity)
    }
}

impl fmt::Debug for CarPark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarPark")
            .field("location", &self.location)
            .field("capacity", &self.capacity)
            .field("plates", &self.plates)
            .field("sensors", &self.sensors.len())
            .field("displays", &self.displays.len())
            .field("log_file", &self.log.path())
            .field("config_file", &self.config_file)
            .finish()
    }
}
