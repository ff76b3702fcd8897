//! Configuration types for a calendar conversion run.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files and overridden from the
//! command line.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::CalendarYear;

/// Which derived counts are attached to employee records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountFlags {
    /// Attach `holidays`, the number of approved holiday days.
    pub approved_holiday: bool,
    /// Attach `sick`, the number of sick days.
    pub sick_leave: bool,
    /// Attach `special-leave`, the number of special leave days.
    pub special_leave: bool,
    /// Attach `national-holiday`, the number of national holiday days.
    pub national_holiday: bool,
}

impl Default for CountFlags {
    fn default() -> Self {
        Self {
            approved_holiday: true,
            sick_leave: true,
            special_leave: true,
            national_holiday: false,
        }
    }
}

impl CountFlags {
    /// All counts disabled.
    pub fn none() -> Self {
        Self {
            approved_holiday: false,
            sick_leave: false,
            special_leave: false,
            national_holiday: false,
        }
    }

    /// All four counts enabled.
    pub fn all() -> Self {
        Self {
            approved_holiday: true,
            sick_leave: true,
            special_leave: true,
            national_holiday: true,
        }
    }
}

/// Which artifacts a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitTargets {
    /// Write one JSON document per calendar file.
    pub json: bool,
    /// Write one SQL batch per calendar year.
    pub sql: bool,
}

impl Default for EmitTargets {
    fn default() -> Self {
        Self {
            json: true,
            sql: false,
        }
    }
}

/// The complete configuration of a run.
///
/// # Example
///
/// ```
/// use leave_calendar::config::RunConfig;
///
/// let config: RunConfig = serde_yaml::from_str("source: calendars\nemit:\n  sql: true\n").unwrap();
/// assert_eq!(config.source.to_str(), Some("calendars"));
/// assert!(config.emit.json);
/// assert!(config.emit.sql);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// A CSV calendar file or a directory of them.
    pub source: PathBuf,
    /// Directory receiving JSON and SQL artifacts.
    pub output_dir: PathBuf,
    /// Year applied to every calendar instead of the one in its file name.
    pub year: Option<CalendarYear>,
    /// Derived counts to attach.
    pub counts: CountFlags,
    /// Artifacts to write.
    pub emit: EmitTargets,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("files"),
            output_dir: PathBuf::from("results"),
            year: None,
            counts: CountFlags::default(),
            emit: EmitTargets::default(),
        }
    }
}
