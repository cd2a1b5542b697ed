//! File-backed activity log.
//!
//! Every append is an independent open/append/close cycle, so a crash mid-write
//! can only affect the line being written.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{ActivityRecord, ActivitySink, CarParkError, Result};

/// Plain-text activity log, one line per event.
#[derive(Debug, Clone)]
pub struct FileActivityLog {
    path: PathBuf,
}

impl FileActivityLog {
    /// Bind to `path`, creating an empty file if absent. Existing content is kept.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        touch(&path)?;
        Ok(Self { path })
    }

    /// Log destination.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse every line currently in the log.
    pub fn read_records(&self) -> Result<Vec<ActivityRecord>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| CarParkError::io(&self.path, e))?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::parse)
            .collect()
    }
}

impl ActivitySink for FileActivityLog {
    fn append(&mut self, record: &ActivityRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CarParkError::io(&self.path, e))?;
        file.write_all(record.to_line().as_bytes())
            .map_err(|e| CarParkError::io(&self.path, e))
    }
}

/// Create `path` if it does not exist without truncating it.
pub(crate) fn touch(path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "touching file");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|e| CarParkError::io(path, e))
}
