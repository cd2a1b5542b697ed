//! Activity records and the sink abstraction they are appended to.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::core::{CarParkError, Result};
use crate::util::clock::{now_local, TIMESTAMP_FORMAT};

/// Occupancy change recorded in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// A vehicle entered the car park.
    Entered,
    /// A vehicle left the car park.
    Exited,
}

impl Action {
    /// Word written to the log for this action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entered => "entered",
            Self::Exited => "exited",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = CarParkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "entered" => Ok(Self::Entered),
            "exited" => Ok(Self::Exited),
            other => Err(CarParkError::InvalidArgument(format!(
                "unknown action `{other}`"
            ))),
        }
    }
}

/// One logged entry or exit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    /// Vehicle plate.
    pub plate: String,
    /// What happened.
    pub action: Action,
    /// Local wall-clock time, second precision.
    pub timestamp: NaiveDateTime,
}

impl ActivityRecord {
    /// Build a record stamped with the current local time.
    pub fn now(plate: impl Into<String>, action: Action) -> Self {
        Self {
            plate: plate.into(),
            action,
            timestamp: now_local(),
        }
    }

    /// Render the record as one newline-terminated log line.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for ActivityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}",
            escape_plate(&self.plate),
            self.action,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

impl FromStr for ActivityRecord {
    type Err = CarParkError;

    /// Parses `"<plate> <action> at <YYYY-MM-DD HH:MM:SS>"`.
    ///
    /// Plates may contain spaces, so the line is split from the right.
    fn from_str(line: &str) -> Result<Self> {
        let malformed =
            || CarParkError::InvalidArgument(format!("malformed activity line `{line}`"));
        let line = line.trim_end_matches(['\r', '\n']);

        let (head, stamp) = line.rsplit_once(" at ").ok_or_else(malformed)?;
        let (plate, action) = head.rsplit_once(' ').ok_or_else(malformed)?;
        let timestamp =
            NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).map_err(|_| malformed())?;

        Ok(Self {
            plate: unescape_plate(plate),
            action: action.parse()?,
            timestamp,
        })
    }
}

// Line breaks would split one event across lines.
fn escape_plate(plate: &str) -> String {
    let mut out = String::with_capacity(plate.len());
    for c in plate.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn unescape_plate(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Destination for activity records.
pub trait ActivitySink: Send {
    /// Append one record. Prior records must never be rewritten.
    fn append(&mut self, record: &ActivityRecord) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_matches_log_format() {
        let record = ActivityRecord {
            plate: "FAKE-001".into(),
            action: Action::Entered,
            timestamp: NaiveDateTime::parse_from_str("2024-03-01 08:15:30", TIMESTAMP_FORMAT)
                .expect("timestamp"),
        };
        assert_eq!(record.to_line(), "FAKE-001 entered at 2024-03-01 08:15:30\n");
    }

    #[test]
    fn parse_keeps_spaces_in_plate() {
        let record: ActivityRecord = "AB 12 CD exited at 2024-03-01 08:15:30\n"
            .parse()
            .expect("parse");
        assert_eq!(record.plate, "AB 12 CD");
        assert_eq!(record.action, Action::Exited);
    }

    #[test]
    fn line_breaks_in_plate_stay_on_one_line() {
        let record = ActivityRecord {
            plate: "A\nB\\C".into(),
            action: Action::Entered,
            timestamp: NaiveDateTime::parse_from_str("2024-03-01 08:15:30", TIMESTAMP_FORMAT)
                .expect("timestamp"),
        };
        let line = record.to_line();
        assert_eq!(line, "A\\nB\\\\C entered at 2024-03-01 08:15:30\n");
        assert_eq!(line.parse::<ActivityRecord>().expect("parse"), record);
    }

    #[test]
    fn parse_rejects_unknown_action() {
        let err = "X parked at 2024-03-01 08:15:30"
            .parse::<ActivityRecord>()
            .unwrap_err();
        assert!(matches!(err, CarParkError::InvalidArgument(_)));
    }
}
