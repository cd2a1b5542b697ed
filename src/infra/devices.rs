//! Reference sensor and display devices.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use rand::Rng;

use crate::core::{CarPark, CarParkError, Display, DisplayData, Result, Sensor, SharedCarPark};

/// Prefix of the plates generated by [`EntrySensor`].
pub const FAKE_PLATE_PREFIX: &str = "FAKE-";

/// Generate a plate of the form `FAKE-NNN`.
pub fn random_plate() -> String {
    let n: u16 = rand::rng().random_range(100..1000);
    format!("{FAKE_PLATE_PREFIX}{n}")
}

fn attach(car_park: &SharedCarPark) -> Weak<Mutex<CarPark>> {
    Arc::downgrade(car_park)
}

fn fire(sensor: &dyn Sensor, car_park: &Weak<Mutex<CarPark>>) -> Result<Option<String>> {
    let car_park = car_park.upgrade().ok_or(CarParkError::Detached)?;
    let mut guard = car_park.lock();
    sensor.detect_vehicle(&mut guard)
}

/// Sensor at the entrance; every detection parks a freshly scanned plate.
#[derive(Debug)]
pub struct EntrySensor {
    id: u32,
    is_active: bool,
    car_park: Weak<Mutex<CarPark>>,
}

impl EntrySensor {
    /// Bind a new entry sensor to `car_park`.
    pub fn new(id: u32, is_active: bool, car_park: &SharedCarPark) -> Self {
        Self {
            id,
            is_active,
            car_park: attach(car_park),
        }
    }

    /// The car park this sensor reports to, if still alive.
    pub fn car_park(&self) -> Option<SharedCarPark> {
        self.car_park.upgrade()
    }

    /// Lock the attached car park and scan once.
    ///
    /// Must not be called while the caller holds that car park's lock; use
    /// [`Sensor::detect_vehicle`] with the guard instead.
    pub fn fire(&self) -> Result<Option<String>> {
        fire(self, &self.car_park)
    }
}

impl Sensor for EntrySensor {
    fn id(&self) -> u32 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn detect_vehicle(&self, car_park: &mut CarPark) -> Result<Option<String>> {
        if !self.is_active {
            return Ok(None);
        }
        let plate = random_plate();
        tracing::debug!(sensor_id = self.id, plate = %plate, "entry detected");
        car_park.add_vehicle(plate.clone())?;
        Ok(Some(plate))
    }
}

/// Sensor at the exit; every detection removes one currently parked vehicle.
#[derive(Debug)]
pub struct ExitSensor {
    id: u32,
    is_active: bool,
    car_park: Weak<Mutex<CarPark>>,
}

impl ExitSensor {
    /// Bind a new exit sensor to `car_park`.
    pub fn new(id: u32, is_active: bool, car_park: &SharedCarPark) -> Self {
        Self {
            id,
            is_active,
            car_park: attach(car_park),
        }
    }

    /// The car park this sensor reports to, if still alive.
    pub fn car_park(&self) -> Option<SharedCarPark> {
        self.car_park.upgrade()
    }

    /// Lock the attached car park and scan once.
    ///
    /// Must not be called while the caller holds that car park's lock; use
    /// [`Sensor::detect_vehicle`] with the guard instead.
    pub fn fire(&self) -> Result<Option<String>> {
        fire(self, &self.car_park)
    }
}

impl Sensor for ExitSensor {
    fn id(&self) -> u32 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    /// Picks a random parked plate; an empty car park detects nothing.
    fn detect_vehicle(&self, car_park: &mut CarPark) -> Result<Option<String>> {
        if !self.is_active {
            return Ok(None);
        }
        let parked = car_park.plates().len();
        if parked == 0 {
            return Ok(None);
        }
        let plate = car_park.plates()[rand::rng().random_range(0..parked)].clone();
        tracing::debug!(sensor_id = self.id, plate = %plate, "exit detected");
        car_park.remove_vehicle(&plate)?;
        Ok(Some(plate))
    }
}

/// Sign showing a fixed message alongside the latest occupancy.
#[derive(Debug)]
pub struct MessageDisplay {
    id: u32,
    message: String,
    is_active: bool,
    last: Mutex<Option<DisplayData>>,
}

impl MessageDisplay {
    /// Create a display with a greeting message.
    pub fn new(id: u32, message: impl Into<String>, is_active: bool) -> Self {
        Self {
            id,
            message: message.into(),
            is_active,
            last: Mutex::new(None),
        }
    }

    /// Greeting message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the display accepts updates.
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Most recent snapshot shown, if any.
    pub fn last_shown(&self) -> Option<DisplayData> {
        *self.last.lock()
    }
}

impl Display for MessageDisplay {
    fn id(&self) -> u32 {
        self.id
    }

    fn update(&self, data: &DisplayData) -> Result<()> {
        if !self.is_active {
            return Ok(());
        }
        tracing::info!(
            display_id = self.id,
            message = %self.message,
            available_bays = data.available_bays,
            temperature = data.temperature,
            "display updated"
        );
        *self.last.lock() = Some(*data);
        Ok(())
    }
}
