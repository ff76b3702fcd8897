//! Calendar grid and its header landmarks.
//!
//! A [`Grid`] is the untyped cell matrix read from a calendar export.
//! Positions only gain meaning relative to the [`Anchor`], and the
//! [`DayAxis`] read from the anchor row defines the day-index space.

/// Number of rows between the anchor row and the first employee row: the
/// header row itself plus one legend row.
pub const EMPLOYEE_ROW_OFFSET: usize = 2;

/// Rows of text cells. Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Wraps already-loaded rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Builds a grid from anything that yields rows of string-like cells.
    ///
    /// ```
    /// use leave_calendar::models::Grid;
    ///
    /// let grid = Grid::from_cells([["", "Date", "1-Jan"], ["", "", ""]]);
    /// assert_eq!(grid.cell(0, 1), Some("Date"));
    /// ```
    pub fn from_cells<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A single row, if it exists.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// A single cell, if both coordinates are in range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true for a grid without rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Coordinates of the `"Date"` header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Zero-based row of the header.
    pub row: usize,
    /// Zero-based column where day labels start.
    pub column: usize,
}

impl Anchor {
    /// The first row holding employee data.
    pub fn employee_start_row(&self) -> usize {
        self.row + EMPLOYEE_ROW_OFFSET
    }

    /// The column of day index 0, in the header row and in employee rows.
    pub fn first_day_column(&self) -> usize {
        self.column + 1
    }
}

/// Day labels such as `"25-Sep"`, each tied to the grid column it heads.
///
/// A label's position on the axis is its day index. Columns with an empty
/// header cell have no day index.
///
/// # Example
///
/// ```
/// use leave_calendar::models::DayAxis;
///
/// let axis = DayAxis::new(vec![(2, "1-Feb".to_string()), (4, "3-Feb".to_string())]);
/// assert_eq!(axis.index_of_column(4), Some(1));
/// assert_eq!(axis.index_of_column(3), None);
/// assert_eq!(axis.label(1), Some("3-Feb"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayAxis {
    days: Vec<(usize, String)>,
}

impl DayAxis {
    /// Creates an axis from `(column, label)` pairs in ascending column order.
    pub fn new(days: Vec<(usize, String)>) -> Self {
        Self { days }
    }

    /// The label for a day index.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.days.get(index).map(|(_, label)| label.as_str())
    }

    /// The grid column headed by a day index.
    pub fn column(&self, index: usize) -> Option<usize> {
        self.days.get(index).map(|(column, _)| *column)
    }

    /// The day index of the label heading `column`, if any.
    pub fn index_of_column(&self, column: usize) -> Option<usize> {
        self.days
            .binary_search_by_key(&column, |(column, _)| *column)
            .ok()
    }

    /// All labels in day-index order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|(_, label)| label.as_str())
    }

    /// Number of days on the axis.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true when the header row yielded no labels.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
