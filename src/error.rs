//! Error types for the leave calendar parser.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a run or a single calendar file.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for calendar parsing and emission.
///
/// Variants are split in two groups: configuration-level errors that abort
/// a run before any file is touched, and per-file errors that only skip the
/// affected calendar (see [`CalendarError::is_fatal_for_run`]).
///
/// # Example
///
/// ```
/// use leave_calendar::error::CalendarError;
///
/// let error = CalendarError::AnchorNotFound {
///     path: "files/2024_team.csv".into(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No 'Date' anchor cell found in files/2024_team.csv"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CalendarError {
    /// The configured source is neither a CSV file nor a directory.
    #[error("Wrong file or directory format: {path}")]
    InputShape {
        /// The path that was rejected.
        path: PathBuf,
    },

    /// A calendar file name does not carry a `<year>_` prefix.
    #[error("Cannot derive a year from file name '{path}': expected '<year>_<name>.csv'")]
    InvalidFileName {
        /// The offending file.
        path: PathBuf,
    },

    /// A year value is not a four-digit number.
    #[error("Invalid year '{year}': expected four digits")]
    InvalidYear {
        /// The rejected year text.
        year: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The grid contains no cell equal to `"Date"`.
    #[error("No 'Date' anchor cell found in {path}")]
    AnchorNotFound {
        /// The calendar file that was searched.
        path: PathBuf,
    },

    /// A day-axis label could not be turned into a calendar date.
    #[error("Malformed day label '{label}': {reason}")]
    MalformedDateLabel {
        /// The label as it appears in the header row.
        label: String,
        /// Why the label was rejected.
        reason: String,
    },

    /// A leave entry points past the end of the day axis.
    #[error("Day index {index} is out of range for a day axis of {len} labels")]
    DayIndexOutOfRange {
        /// The offending day index.
        index: usize,
        /// Number of labels in the axis.
        len: usize,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input.
    #[error("Failed to read CSV {path}: {source}")]
    Csv {
        /// The calendar file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    /// Serializing the employee mapping failed.
    #[error("Failed to serialize {path}: {source}")]
    Json {
        /// The JSON file being written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
}

impl CalendarError {
    /// Returns true for configuration-level errors that abort the whole run.
    pub fn is_fatal_for_run(&self) -> bool {
        matches!(
            self,
            CalendarError::InputShape { .. }
                | CalendarError::InvalidFileName { .. }
                | CalendarError::InvalidYear { .. }
                | CalendarError::ConfigNotFound { .. }
                | CalendarError::ConfigParseError { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CalendarError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A type alias for Results that return CalendarError.
pub type CalendarResult<T> = Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_shape_displays_path() {
        let error = CalendarError::InputShape {
            path: "files/notes.txt".into(),
        };
        assert_eq!(
            error.to_string(),
            "Wrong file or directory format: files/notes.txt"
        );
    }

    #[test]
    fn test_malformed_label_displays_label_and_reason() {
        let error = CalendarError::MalformedDateLabel {
            label: "5-Foo".to_string(),
            reason: "unknown month abbreviation 'Foo'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed day label '5-Foo': unknown month abbreviation 'Foo'"
        );
    }

    #[test]
    fn test_day_index_out_of_range_displays_bounds() {
        let error = CalendarError::DayIndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            error.to_string(),
            "Day index 7 is out of range for a day axis of 3 labels"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = CalendarError::io(
            "results/out.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(error.to_string().starts_with("I/O error on results/out.json"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_configuration_errors_are_fatal_for_run() {
        assert!(
            CalendarError::InputShape {
                path: "x".into()
            }
            .is_fatal_for_run()
        );
        assert!(
            CalendarError::InvalidYear {
                year: "24".to_string()
            }
            .is_fatal_for_run()
        );
        assert!(
            !CalendarError::AnchorNotFound {
                path: "x.csv".into()
            }
            .is_fatal_for_run()
        );
        assert!(!CalendarError::DayIndexOutOfRange { index: 1, len: 0 }.is_fatal_for_run());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CalendarError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_anchor_not_found() -> CalendarResult<()> {
            Err(CalendarError::AnchorNotFound {
                path: "empty.csv".into(),
            })
        }

        fn propagates_error() -> CalendarResult<()> {
            returns_anchor_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
