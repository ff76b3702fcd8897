//! SQL statement batch emission.
//!
//! Each leave entry becomes one `INSERT` into `day_statuses`. User and
//! category ids are resolved by name inside the statement, and every
//! statement ends with `ON CONFLICT DO NOTHING` so a batch can be replayed
//! against a populated database.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::calendar::{format_date, is_weekend};
use crate::error::{CalendarError, CalendarResult};
use crate::models::{CalendarYear, DatedEmployeeRecord, EmployeeMap, LeaveCategory};

const BANNER_RULE: &str = "-- ==================================================";

/// Renders one `INSERT` statement.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_calendar::emit::insert_statement;
/// use leave_calendar::models::LeaveCategory;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// let sql = insert_statement("Alice", date, LeaveCategory::SickLeave);
/// assert!(sql.contains("'2024-01-06', true,"));
/// assert!(sql.ends_with("ON CONFLICT DO NOTHING;"));
/// ```
pub fn insert_statement(employee: &str, date: NaiveDate, category: LeaveCategory) -> String {
    format!(
        "INSERT INTO day_statuses (user_id, date, is_weekend, status_category_id) \
         VALUES ((SELECT id FROM users WHERE name = '{}'), '{}', {}, \
         (SELECT id FROM status_categories WHERE name = '{}')) ON CONFLICT DO NOTHING;",
        escape_literal(employee),
        format_date(date),
        is_weekend(date),
        escape_literal(category.as_str()),
    )
}

/// Escapes a value for use inside a single-quoted SQL string literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Renders the comment banner and statements for one employee.
pub fn render_employee_block(employee: &str, record: &DatedEmployeeRecord) -> String {
    let banner = [
        BANNER_RULE.to_string(),
        format!("-- {}", employee.replace(['\r', '\n'], " ")),
        BANNER_RULE.to_string(),
    ];
    let statements = record
        .iter_entries()
        .map(|(category, date)| insert_statement(employee, *date, category));

    banner
        .into_iter()
        .chain(statements)
        .map(|line| line + "\n")
        .collect()
}

/// The SQL file name for a year.
pub fn sql_file_name(year: CalendarYear) -> String {
    format!("employees_data_{}.sql", year)
}

/// Statements accumulated per year across the calendars of one run.
#[derive(Debug, Clone, Default)]
pub struct SqlBatch {
    years: BTreeMap<CalendarYear, Vec<String>>,
}

impl SqlBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one employee block per employee of a calendar.
    pub fn add_calendar(&mut self, year: CalendarYear, employees: &EmployeeMap<NaiveDate>) {
        let blocks = self.years.entry(year).or_default();
        for (name, record) in employees.iter() {
            blocks.push(render_employee_block(name, record));
        }
    }

    /// Returns true when no calendar has been added.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Years with at least one calendar, ascending.
    pub fn years(&self) -> impl Iterator<Item = CalendarYear> + '_ {
        self.years.keys().copied()
    }

    /// The complete batch text for a year.
    pub fn render(&self, year: CalendarYear) -> Option<String> {
        self.years.get(&year).map(|blocks| blocks.join("\n"))
    }

    /// Writes one file per year into `output_dir`.
    ///
    /// A failure on one year does not prevent the others from being written.
    pub fn write_all(&self, output_dir: &Path) -> Vec<(CalendarYear, CalendarResult<PathBuf>)> {
        if let Err(e) = fs::create_dir_all(output_dir) {
            let message = e.to_string();
            return self
                .years()
                .map(|year| {
                    let error = std::io::Error::new(e.kind(), message.clone());
                    (year, Err(CalendarError::io(output_dir, error)))
                })
                .collect();
        }

        self.years()
            .filter_map(|year| self.render(year).map(|text| (year, text)))
            .map(|(year, text)| {
                let path = output_dir.join(sql_file_name(year));
                let result = fs::write(&path, text)
                    .map(|()| path.clone())
                    .map_err(|e| CalendarError::io(&path, e));
                (year, result)
            })
            .collect()
    }
}
