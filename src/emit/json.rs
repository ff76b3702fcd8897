//! JSON document emission.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{CalendarError, CalendarResult};
use crate::models::EmployeeMap;

/// Indentation of emitted documents.
pub const JSON_INDENT: &[u8] = b"    ";

/// Serializes an employee mapping with four-space indentation.
///
/// # Example
///
/// ```
/// use leave_calendar::emit::render_json;
/// use leave_calendar::models::EmployeeMap;
///
/// let mut employees = EmployeeMap::<usize>::new();
/// employees.entry_or_insert("Alice");
/// let text = String::from_utf8(render_json(&employees).unwrap()).unwrap();
/// assert!(text.starts_with("{\n    \"Alice\": {\n        \"requested_holiday\": []"));
/// ```
pub fn render_json<D: Serialize>(employees: &EmployeeMap<D>) -> serde_json::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    employees.serialize(&mut serializer)?;
    Ok(buffer)
}

/// The JSON path for a calendar: the file name up to its first `.`, with a
/// `.json` extension, inside `output_dir`.
pub fn json_output_path(source: &Path, output_dir: &Path) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or_default();
    output_dir.join(format!("{}.json", base))
}

/// Writes the employee mapping of one calendar, creating `output_dir` if
/// needed. Returns the written path.
pub fn write_json<D: Serialize>(
    employees: &EmployeeMap<D>,
    source: &Path,
    output_dir: &Path,
) -> CalendarResult<PathBuf> {
    let path = json_output_path(source, output_dir);

    let content = render_json(employees).map_err(|e| CalendarError::Json {
        path: path.clone(),
        source: e,
    })?;

    fs::create_dir_all(output_dir).map_err(|e| CalendarError::io(output_dir, e))?;
    fs::write(&path, content).map_err(|e| CalendarError::io(&path, e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveCategory;
    use chrono::NaiveDate;
    use serde_json::{Value, json};

    fn sample() -> EmployeeMap<NaiveDate> {
        let mut employees = EmployeeMap::new();
        let alice = employees.entry_or_insert("Alice");
        alice.push(
            LeaveCategory::RequestedHoliday,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        alice.counts.approved_holiday = Some(0);
        employees
    }

    #[test]
    fn test_json_output_path_uses_text_before_first_dot() {
        assert_eq!(
            json_output_path(Path::new("files/2022_MPO.v2.csv"), Path::new("results")),
            PathBuf::from("results/2022_MPO.json")
        );
    }

    #[test]
    fn test_rendered_document_shape() {
        let bytes = render_json(&sample()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({
                "Alice": {
                    "requested_holiday": ["2024-01-01"],
                    "approved_holiday": [],
                    "national_holiday": [],
                    "special_leave": [],
                    "sick_leave": [],
                    "holidays": 0
                }
            })
        );
    }

    #[test]
    fn test_rendered_document_uses_four_space_indent() {
        let text = String::from_utf8(render_json(&sample()).unwrap()).unwrap();
        assert!(text.contains("\n    \"Alice\": {\n        \"requested_holiday\": [\n            \"2024-01-01\"\n        ],"));
    }

    #[test]
    fn test_write_json_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("results");

        let path = write_json(&sample(), Path::new("2024_team.csv"), &output_dir).unwrap();
        assert_eq!(path, output_dir.join("2024_team.json"));

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["Alice"]["requested_holiday"][0], "2024-01-01");
    }
}
