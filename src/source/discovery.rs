//! Calendar file discovery.
//!
//! Resolves the configured source path into the list of calendar files to
//! process, each paired with the year it is interpreted under.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CalendarError, CalendarResult};
use crate::models::CalendarYear;

/// Extension of calendar exports.
pub const CSV_EXTENSION: &str = "csv";

/// Separator between the year prefix and the rest of a calendar file name.
pub const YEAR_SEPARATOR: char = '_';

/// One calendar file and the year its day labels belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSource {
    /// Path of the CSV export.
    pub path: PathBuf,
    /// Year applied to every day label of the file.
    pub year: CalendarYear,
}

/// Lists the calendars to process.
///
/// A file source must have the `.csv` extension. A directory source yields
/// every `.csv` file directly inside it, sorted by path. Each file's year
/// comes from `year_override` when given, otherwise from its file name.
///
/// # Errors
///
/// `InputShape` when `source` is neither a CSV file nor a directory,
/// `InvalidFileName` / `InvalidYear` when a file name carries no usable
/// year and no override is set, `Io` when the directory cannot be listed.
pub fn discover_sources(
    source: &Path,
    year_override: Option<CalendarYear>,
) -> CalendarResult<Vec<CalendarSource>> {
    let paths = if source.is_dir() {
        list_csv_files(source)?
    } else if source.is_file() && has_csv_extension(source) {
        vec![source.to_path_buf()]
    } else {
        return Err(CalendarError::InputShape {
            path: source.to_path_buf(),
        });
    };

    paths
        .into_iter()
        .map(|path| {
            let year = match year_override {
                Some(year) => year,
                None => year_from_file_name(&path)?,
            };
            Ok(CalendarSource { path, year })
        })
        .collect()
}

/// Extracts the year from a `<year>_<anything>.csv` file name.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use leave_calendar::source::year_from_file_name;
///
/// let year = year_from_file_name(Path::new("files/2022_MPO_Holiday_Planner.csv")).unwrap();
/// assert_eq!(year.value(), 2022);
/// ```
pub fn year_from_file_name(path: &Path) -> CalendarResult<CalendarYear> {
    let invalid = || CalendarError::InvalidFileName {
        path: path.to_path_buf(),
    };

    let file_name = path.file_name().and_then(|name| name.to_str()).ok_or_else(invalid)?;
    let (prefix, _) = file_name.split_once(YEAR_SEPARATOR).ok_or_else(invalid)?;
    prefix.parse()
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}

fn list_csv_files(dir: &Path) -> CalendarResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| CalendarError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CalendarError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && has_csv_extension(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}
