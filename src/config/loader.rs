//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading a
//! [`RunConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{CalendarError, CalendarResult};

use super::types::RunConfig;

/// Loads run configuration from YAML.
///
/// Every key is optional; anything left out keeps its default value.
///
/// ```yaml
/// source: files
/// output_dir: results
/// year: "2024"
/// counts:
///   approved_holiday: true
///   sick_leave: true
///   special_leave: true
///   national_holiday: false
/// emit:
///   json: true
///   sql: true
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_calendar::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./leave-calendar.yaml")?;
/// println!("Reading calendars from {}", config.source.display());
/// # Ok::<(), leave_calendar::error::CalendarError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` when the file cannot be read and
    /// `ConfigParseError` when it is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> CalendarResult<RunConfig> {
        Self::load_yaml(path.as_ref())
    }

    /// Loads the file when a path is given, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> CalendarResult<RunConfig> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(RunConfig::default()),
        }
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str, origin: &str) -> CalendarResult<RunConfig> {
        serde_yaml::from_str(content).map_err(|e| CalendarError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    fn load_yaml(path: &Path) -> CalendarResult<RunConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalendarError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_load_valid_configuration() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "source: calendars/2024_team.csv\noutput_dir: out\nemit:\n  json: false\n  sql: true"
        )
        .unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.source, PathBuf::from("calendars/2024_team.csv"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(!config.emit.json);
        assert!(config.emit.sql);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/leave-calendar.yaml");
        match result {
            Err(CalendarError::ConfigNotFound { path }) => {
                assert!(path.contains("leave-calendar.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("counts: [1, 2", "inline");
        match result {
            Err(CalendarError::ConfigParseError { path, message }) => {
                assert_eq!(path, "inline");
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = ConfigLoader::load_or_default(None).unwrap();
        assert_eq!(config, RunConfig::default());
    }
}
