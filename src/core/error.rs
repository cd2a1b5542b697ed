//! Error types for car park operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the car park and its persistence layers.
#[derive(Debug, Error)]
pub enum CarParkError {
    /// An argument was outside its valid range (e.g. negative capacity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A value offered for registration is neither a sensor nor a display.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// The plate is not currently parked.
    #[error("vehicle not found: {0}")]
    NotFound(String),
    /// The configuration source could not be parsed.
    #[error("malformed configuration: {0}")]
    ConfigMalformed(String),
    /// Underlying file system failure.
    #[error("i/o failure on {}: {source}", .path.display())]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Source error.
        #[source]
        source: std::io::Error,
    },
    /// A registered display rejected an occupancy update.
    #[error("display {display_id} failed: {reason}")]
    DisplayFailed {
        /// Identifier of the failing display.
        display_id: u32,
        /// Reason reported by the display.
        reason: String,
    },
    /// A sensor fired after its car park was dropped.
    #[error("sensor is detached from its car park")]
    Detached,
}

impl CarParkError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CarParkError>;
