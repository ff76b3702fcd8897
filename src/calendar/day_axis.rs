//! Day-axis parsing from the header row.

use crate::models::{Anchor, DayAxis, Grid};

/// Reads the day labels from the anchor row.
///
/// Cells from the first day column (the one right after the anchor cell)
/// to the end of the row are kept in order together with their column.
/// Empty cells get no day index, so the columns they head carry no dates.
/// A row index past the end of the grid yields an empty axis.
///
/// # Example
///
/// ```
/// use leave_calendar::calendar::{locate_anchor, parse_day_axis};
/// use leave_calendar::models::Grid;
///
/// let grid = Grid::from_cells([["", "Date", "1-Jan", "", "2-Jan"]]);
/// let anchor = locate_anchor(&grid).unwrap();
/// let axis = parse_day_axis(&grid, anchor);
/// assert_eq!(axis.labels().collect::<Vec<_>>(), ["1-Jan", "2-Jan"]);
/// assert_eq!(axis.index_of_column(4), Some(1));
/// ```
pub fn parse_day_axis(grid: &Grid, anchor: Anchor) -> DayAxis {
    let days = grid
        .row(anchor.row)
        .map(|cells| {
            cells
                .iter()
                .enumerate()
                .skip(anchor.first_day_column())
                .filter(|(_, cell)| !cell.is_empty())
                .map(|(column, cell)| (column, cell.clone()))
                .collect()
        })
        .unwrap_or_default();

    DayAxis::new(days)
}
