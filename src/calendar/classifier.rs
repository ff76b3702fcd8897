//! Employee row classification.
//!
//! Turns the rows below the header into [`EmployeeMap`] records whose
//! entries are day indices into the calendar's [`DayAxis`].

use tracing::warn;

use crate::config::CountFlags;
use crate::models::{Anchor, DayAxis, EmployeeMap, Grid, LeaveCategory};

use super::aggregator::apply_counts;

/// Column holding the employee display name.
pub const EMPLOYEE_NAME_COLUMN: usize = 1;

/// Classifies every employee row of the calendar.
///
/// Rows are read from [`Anchor::employee_start_row`] to the end of the grid.
/// A row whose name cell is empty or missing is skipped. Day cells are read
/// from [`Anchor::first_day_column`]; a cell's day index is the axis index of
/// the label heading its column. Rows with the same name accumulate into the
/// same record, and the enabled counts are recomputed after every row.
///
/// A recognized code in a column without a day label (a blank header cell or
/// a column past the last label) is logged and dropped, so every index in
/// the result has a label.
///
/// # Example
///
/// ```
/// use leave_calendar::calendar::{classify_employees, locate_anchor, parse_day_axis};
/// use leave_calendar::config::CountFlags;
/// use leave_calendar::models::Grid;
///
/// let grid = Grid::from_cells([
///     vec!["", "Date", "1-Jan", "2-Jan"],
///     vec![],
///     vec!["", "Alice", "r", "z"],
/// ]);
/// let anchor = locate_anchor(&grid).unwrap();
/// let axis = parse_day_axis(&grid, anchor);
/// let employees = classify_employees(&grid, anchor, &axis, &CountFlags::none());
///
/// let alice = employees.get("Alice").unwrap();
/// assert_eq!(alice.requested_holiday, vec![0]);
/// assert_eq!(alice.sick_leave, vec![1]);
/// ```
pub fn classify_employees(
    grid: &Grid,
    anchor: Anchor,
    axis: &DayAxis,
    counts: &CountFlags,
) -> EmployeeMap<usize> {
    let mut employees = EmployeeMap::new();

    for (row_index, cells) in grid
        .rows()
        .iter()
        .enumerate()
        .skip(anchor.employee_start_row())
    {
        let name = match cells.get(EMPLOYEE_NAME_COLUMN) {
            Some(name) if !name.is_empty() => name.as_str(),
            _ => continue,
        };

        let record = employees.entry_or_insert(name);

        for (column, cell) in cells.iter().enumerate().skip(anchor.first_day_column()) {
            let Some(category) = LeaveCategory::from_code(cell) else {
                continue;
            };

            let Some(day_index) = axis.index_of_column(column) else {
                warn!(
                    row = row_index,
                    column,
                    employee = %name,
                    code = %cell,
                    "Leave code has no day label, ignoring"
                );
                continue;
            };

            record.push(category, day_index);
        }

        apply_counts(record, counts);
    }

    employees
}
