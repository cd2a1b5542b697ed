//! Infrastructure adapters: file-backed activity log and reference devices.

pub mod activity_log;
pub mod devices;

pub use activity_log::FileActivityLog;
pub use devices::{EntrySensor, ExitSensor, MessageDisplay};
