//! CSV grid loading.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{CalendarError, CalendarResult};
use crate::models::Grid;

const UTF8_BOM: char = '\u{feff}';

/// Reads a calendar export into a [`Grid`].
///
/// The file is read in one call and closed before parsing starts.
pub fn load_grid(path: &Path) -> CalendarResult<Grid> {
    let text = fs::read_to_string(path).map_err(|e| CalendarError::io(path, e))?;
    read_grid(&text, path)
}

/// Parses CSV text into a [`Grid`].
///
/// Every record becomes a row, including the first, and rows keep their own
/// length. Blank lines stay in the grid as rows with a single empty cell, so
/// row offsets match the spreadsheet. A UTF-8 byte-order mark in front of
/// the first cell is removed. `origin` names the input in error messages.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use leave_calendar::source::read_grid;
///
/// let csv = ",Date,1-Jan\n\n,Alice,r\n";
/// let grid = read_grid(csv, Path::new("inline.csv")).unwrap();
/// assert_eq!(grid.cell(0, 1), Some("Date"));
/// assert_eq!(grid.cell(1, 0), Some(""));
/// assert_eq!(grid.cell(2, 1), Some("Alice"));
/// ```
pub fn read_grid(text: &str, origin: &Path) -> CalendarResult<Grid> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    // Byte offset and line number reached by the previous record.
    let mut cursor = 0;
    let mut line = 0;
    let mut next_line = 0;

    while reader
        .read_record(&mut record)
        .map_err(|e| CalendarError::Csv {
            path: origin.to_path_buf(),
            source: e,
        })?
    {
        let start = record
            .position()
            .map_or(cursor, |position| position.byte() as usize);
        let end = reader.position().byte() as usize;
        let (content_start, content_end) = record_content(text, start.max(cursor), end);

        let first_line = line + count_line_breaks(text, cursor, content_start);
        // The CSV reader skips blank lines; they stay in the grid as rows.
        rows.extend((next_line..first_line).map(|_| vec![String::new()]));
        rows.push(record.iter().map(str::to_string).collect());

        line = first_line + count_line_breaks(text, content_start, content_end);
        next_line = line + 1;
        cursor = content_end;
    }

    Ok(Grid::new(rows))
}

/// Narrows the bytes consumed for one record to the record itself, without
/// the blank lines before it and the line terminator after it.
fn record_content(text: &str, start: usize, end: usize) -> (usize, usize) {
    let start = start.min(text.len());
    let end = end.clamp(start, text.len());
    let consumed = text.get(start..end).unwrap_or_default();
    let leading = consumed.len() - consumed.trim_start_matches(['\r', '\n']).len();
    let content = consumed.trim_matches(['\r', '\n']);
    (start + leading, start + leading + content.len())
}

/// Counts `\n`, `\r\n` and lone `\r` line breaks in `text[start..end]`.
fn count_line_breaks(text: &str, start: usize, end: usize) -> usize {
    let bytes = text.as_bytes().get(start..end).unwrap_or_default();
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count()
}
