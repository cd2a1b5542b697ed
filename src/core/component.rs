//! Capability contracts for the devices a car park talks to.
//!
//! Sensors push occupancy changes into a [`CarPark`]; displays receive a
//! [`DisplayData`] snapshot after every change. Both are registered through
//! the [`Component`] tagged variant.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{CarPark, CarParkError, Result};
use crate::infra::devices::{EntrySensor, ExitSensor, MessageDisplay};

/// Placeholder temperature pushed with every display update.
pub const DEFAULT_TEMPERATURE: i32 = 25;

/// Occupancy snapshot pushed to displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayData {
    /// Bays currently free, floored at zero.
    pub available_bays: u64,
    /// Ambient temperature in degrees Celsius.
    pub temperature: i32,
}

/// An entry or exit detector bound to one car park.
pub trait Sensor: Send + Sync {
    /// Sensor identifier.
    fn id(&self) -> u32;
    /// Whether the sensor is currently reporting.
    fn is_active(&self) -> bool;
    /// Scan for a vehicle and report it to `car_park`.
    ///
    /// The caller already holds the car park, so implementations must not
    /// lock it again. Returns the plate that was reported, or `None` when
    /// nothing was detected.
    fn detect_vehicle(&self, car_park: &mut CarPark) -> Result<Option<String>>;
}

/// A sign that renders occupancy snapshots.
pub trait Display: Send + Sync {
    /// Display identifier.
    fn id(&self) -> u32;
    /// Receive a new occupancy snapshot.
    fn update(&self, data: &DisplayData) -> Result<()>;
}

/// Anything that can be registered with a car park.
#[derive(Clone)]
pub enum Component {
    /// Entry or exit sensor.
    Sensor(Arc<dyn Sensor>),
    /// Occupancy display.
    Display(Arc<dyn Display>),
}

type Untyped = Box<dyn Any>;

// Accepts `T` or `Arc<T>`.
fn take_arc<T: Any>(value: Untyped) -> std::result::Result<Arc<T>, Untyped> {
    let value = match value.downcast::<Arc<T>>() {
        Ok(shared) => return Ok(*shared),
        Err(value) => value,
    };
    value.downcast::<T>().map(Arc::from)
}

impl Component {
    /// Classify a dynamically typed value.
    ///
    /// Accepts a `Component`, an `Arc<dyn Sensor>`, an `Arc<dyn Display>`, or
    /// one of the bundled devices either bare or in an `Arc`. Anything else
    /// is a [`CarParkError::TypeMismatch`].
    pub fn from_any(value: Untyped) -> Result<Self> {
        let value = match value.downcast::<Self>() {
            Ok(component) => return Ok(*component),
            Err(value) => value,
        };
        let value = match value.downcast::<Arc<dyn Sensor>>() {
            Ok(sensor) => return Ok(Self::Sensor(*sensor)),
            Err(value) => value,
        };
        let value = match value.downcast::<Arc<dyn Display>>() {
            Ok(display) => return Ok(Self::Display(*display)),
            Err(value) => value,
        };
        let value = match take_arc::<EntrySensor>(value) {
            Ok(sensor) => return Ok(Self::Sensor(sensor)),
            Err(value) => value,
        };
        let value = match take_arc::<ExitSensor>(value) {
            Ok(sensor) => return Ok(Self::Sensor(sensor)),
            Err(value) => value,
        };
        match take_arc::<MessageDisplay>(value) {
            Ok(display) => Ok(Self::Display(display)),
            Err(_) => Err(CarParkError::TypeMismatch(
                "object must be a Sensor or Display".into(),
            )),
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(s) => f.debug_tuple("Sensor").field(&s.id()).finish(),
            Self::Display(d) => f.debug_tuple("Display").field(&d.id()).finish(),
        }
    }
}

impl From<Arc<dyn Sensor>> for Component {
    fn from(sensor: Arc<dyn Sensor>) -> Self {
        Self::Sensor(sensor)
    }
}

impl From<Arc<dyn Display>> for Component {
    fn from(display: Arc<dyn Display>) -> Self {
        Self::Display(display)
    }
}
