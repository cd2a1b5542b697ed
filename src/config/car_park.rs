//! Persisted car park identity.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{CarParkError, Result};

/// Default activity log destination.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// The minimal identity needed to rebuild a car park.
///
/// Occupancy and device registrations are deliberately absent: a reloaded
/// car park always starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarParkConfig {
    /// Free-text site identifier.
    pub location: String,
    /// Maximum simultaneous vehicles. Signed so that a bad file can be reported.
    pub capacity: i64,
    /// Activity log destination.
    pub log_file: PathBuf,
}

impl CarParkConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.capacity < 0 {
            return Err(CarParkError::InvalidArgument(format!(
                "capacity must be non-negative, got {}",
                self.capacity
            )));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(input).map_err(malformed)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Render configuration as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(malformed)
    }

    /// Overwrite `path` with this configuration.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?).map_err(|e| CarParkError::io(path, e))?;
        tracing::info!(path = %path.display(), location = %self.location, "configuration saved");
        Ok(())
    }

    /// Read configuration from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|e| CarParkError::io(path, e))?;
        let cfg = Self::from_json_str(&input)?;
        tracing::info!(path = %path.display(), location = %cfg.location, "configuration loaded");
        Ok(cfg)
    }
}

fn malformed(err: serde_json::Error) -> CarParkError {
    CarParkError::ConfigMalformed(err.to_string())
}

/// Site-specific default configuration file name, e.g. `moondalup_config.json`.
pub fn default_config_file(location: &str) -> PathBuf {
    let mut slug = String::with_capacity(location.len());
    for c in location.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        PathBuf::from("car_park_config.json")
    } else {
        PathBuf::from(format!("{slug}_config.json"))
    }
}
