//! Conversion of day-axis labels into calendar dates.
//!
//! Header labels look like `"25-Sep"`: a day number and an English month
//! abbreviation. Together with the calendar's year they name one date. All
//! dates leave this crate formatted as [`DATE_FORMAT`] (`YYYY-mm-dd`), both
//! in JSON documents and in SQL statements.

use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};
use crate::models::{CalendarYear, DayAxis, EmployeeMap};

/// The single date format used for every emitted date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month abbreviations accepted in day labels.
const MONTHS: [(&str, u32); 13] = [
    ("Jan", 1),
    ("Feb", 2),
    ("Mar", 3),
    ("Apr", 4),
    ("May", 5),
    ("Jun", 6),
    ("Jul", 7),
    ("Aug", 8),
    ("Sep", 9),
    ("Sept", 9),
    ("Oct", 10),
    ("Nov", 11),
    ("Dec", 12),
];

/// Looks up a month abbreviation (case-sensitive, as exported).
pub fn month_number(abbreviation: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == abbreviation)
        .map(|(_, number)| *number)
}

/// Parses a `"<day>-<month>"` label into a date in `year`.
///
/// # Errors
///
/// Returns `MalformedDateLabel` when the label does not have exactly one
/// `-` separator, the day is not a number, the month abbreviation is not in
/// the table, or the day does not exist in that month of that year.
///
/// # Example
///
/// ```
/// use leave_calendar::calendar::{format_date, parse_day_label};
///
/// let date = parse_day_label("5-Sept", "2024".parse().unwrap()).unwrap();
/// assert_eq!(format_date(date), "2024-09-05");
/// ```
pub fn parse_day_label(label: &str, year: CalendarYear) -> CalendarResult<NaiveDate> {
    let malformed = |reason: String| CalendarError::MalformedDateLabel {
        label: label.to_string(),
        reason,
    };

    let (day, month) = match label.split_once('-') {
        Some((day, month)) if !month.contains('-') => (day.trim(), month.trim()),
        _ => {
            return Err(malformed(
                "expected '<day>-<month abbreviation>'".to_string(),
            ));
        }
    };

    let day: u32 = day
        .parse()
        .map_err(|_| malformed(format!("day '{}' is not a number", day)))?;
    let month_value = month_number(month)
        .ok_or_else(|| malformed(format!("unknown month abbreviation '{}'", month)))?;

    NaiveDate::from_ymd_opt(year.value(), month_value, day).ok_or_else(|| {
        malformed(format!(
            "day {:02} does not exist in {} {}",
            day, month, year
        ))
    })
}

/// Formats a date with [`DATE_FORMAT`].
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Replaces every day index with the date its label names.
///
/// Only labels referenced by at least one entry are parsed, each at most
/// once. Any failure aborts normalization of the whole calendar.
///
/// # Errors
///
/// `DayIndexOutOfRange` when an index has no label, `MalformedDateLabel`
/// when a referenced label cannot be parsed.
pub fn normalize_dates(
    employees: EmployeeMap<usize>,
    axis: &DayAxis,
    year: CalendarYear,
) -> CalendarResult<EmployeeMap<NaiveDate>> {
    let mut resolved: Vec<Option<NaiveDate>> = vec![None; axis.len()];

    employees.try_map_entries(|index| {
        if let Some(Some(date)) = resolved.get(index) {
            return Ok(*date);
        }

        let label = axis
            .label(index)
            .ok_or(CalendarError::DayIndexOutOfRange {
                index,
                len: axis.len(),
            })?;
        let date = parse_day_label(label, year)?;
        resolved[index] = Some(date);
        Ok(date)
    })
}
