//! Header anchor location.

use crate::models::{Anchor, Grid};

/// The literal header text that marks where day labels begin.
pub const ANCHOR_TEXT: &str = "Date";

/// Finds the first cell whose text equals [`ANCHOR_TEXT`].
///
/// Rows are scanned top to bottom and cells left to right, so the earliest
/// row containing the anchor wins. Cells that merely contain the word
/// (`"Date of birth"`) do not match.
///
/// Returns `None` when no cell matches; callers treat that as fatal for the
/// calendar file.
///
/// # Example
///
/// ```
/// use leave_calendar::calendar::locate_anchor;
/// use leave_calendar::models::{Anchor, Grid};
///
/// let grid = Grid::from_cells([vec!["Team"], vec!["", "Date", "1-Jan"]]);
/// assert_eq!(locate_anchor(&grid), Some(Anchor { row: 1, column: 1 }));
/// ```
pub fn locate_anchor(grid: &Grid) -> Option<Anchor> {
    grid.rows().iter().enumerate().find_map(|(row, cells)| {
        cells
            .iter()
            .position(|cell| cell == ANCHOR_TEXT)
            .map(|column| Anchor { row, column })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_in_first_row() {
        let grid = Grid::from_cells([["", "Date", "1-Jan", "2-Jan"]]);
        assert_eq!(locate_anchor(&grid), Some(Anchor { row: 0, column: 1 }));
    }

    #[test]
    fn test_first_row_wins() {
        let grid = Grid::from_cells([
            vec!["Holiday planner"],
            vec!["", "", "Date"],
            vec!["Date"],
        ]);
        assert_eq!(locate_anchor(&grid), Some(Anchor { row: 1, column: 2 }));
    }

    #[test]
    fn test_leftmost_match_within_row() {
        let grid = Grid::from_cells([["x", "Date", "Date"]]);
        assert_eq!(locate_anchor(&grid), Some(Anchor { row: 0, column: 1 }));
    }

    #[test]
    fn test_substring_matches_are_ignored() {
        let grid = Grid::from_cells([
            vec!["Date of export", "Dates"],
            vec!["", "date"],
            vec!["", "", "Date"],
        ]);
        assert_eq!(locate_anchor(&grid), Some(Anchor { row: 2, column: 2 }));
    }

    #[test]
    fn test_missing_anchor_is_none() {
        let grid = Grid::from_cells([["Name", "1-Jan"], ["Alice", "r"]]);
        assert_eq!(locate_anchor(&grid), None);
        assert_eq!(locate_anchor(&Grid::default()), None);
    }
}
