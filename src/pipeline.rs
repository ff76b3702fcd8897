//! The conversion pipeline.
//!
//! [`parse_calendar`] runs the parsing stages over one loaded grid;
//! [`run`] drives a whole batch: discovery, per-file parsing and JSON
//! output, then one SQL file per year. Files are processed strictly one
//! after another, and a failing file never stops the batch.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::calendar::{classify_employees, locate_anchor, normalize_dates, parse_day_axis};
use crate::config::{CountFlags, RunConfig};
use crate::emit::{SqlBatch, write_json};
use crate::error::{CalendarError, CalendarResult};
use crate::models::{Anchor, CalendarYear, DayAxis, EmployeeMap, Grid};
use crate::source::{CalendarSource, discover_sources, load_grid};

/// A fully parsed calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCalendar {
    /// Position of the `"Date"` header cell.
    pub anchor: Anchor,
    /// Day labels read from the header row.
    pub axis: DayAxis,
    /// Dated leave records per employee.
    pub employees: EmployeeMap<NaiveDate>,
}

/// Parses a loaded grid into dated employee records.
///
/// `origin` names the calendar in errors.
///
/// # Errors
///
/// `AnchorNotFound` when the grid has no `"Date"` cell, and the date
/// normalization errors (`MalformedDateLabel`, `DayIndexOutOfRange`).
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use leave_calendar::config::CountFlags;
/// use leave_calendar::models::Grid;
/// use leave_calendar::pipeline::parse_calendar;
///
/// let grid = Grid::from_cells([
///     vec!["", "Date", "1-Jan", "2-Jan"],
///     vec![],
///     vec!["", "Alice", "r", "z"],
/// ]);
/// let parsed = parse_calendar(
///     &grid,
///     "2024".parse().unwrap(),
///     &CountFlags::none(),
///     Path::new("2024_team.csv"),
/// )
/// .unwrap();
///
/// let alice = parsed.employees.get("Alice").unwrap();
/// assert_eq!(alice.requested_holiday[0].to_string(), "2024-01-01");
/// assert_eq!(alice.sick_leave[0].to_string(), "2024-01-02");
/// ```
pub fn parse_calendar(
    grid: &Grid,
    year: CalendarYear,
    counts: &CountFlags,
    origin: &Path,
) -> CalendarResult<ParsedCalendar> {
    let anchor = locate_anchor(grid).ok_or_else(|| CalendarError::AnchorNotFound {
        path: origin.to_path_buf(),
    })?;
    let axis = parse_day_axis(grid, anchor);
    debug!(
        file = %origin.display(),
        row = anchor.row,
        column = anchor.column,
        days = axis.len(),
        "Located header"
    );

    let raw = classify_employees(grid, anchor, &axis, counts);
    let employees = normalize_dates(raw, &axis, year)?;

    Ok(ParsedCalendar {
        anchor,
        axis,
        employees,
    })
}

/// Loads and parses one calendar file.
pub fn parse_calendar_file(
    source: &CalendarSource,
    counts: &CountFlags,
) -> CalendarResult<ParsedCalendar> {
    let grid = load_grid(&source.path)?;
    parse_calendar(&grid, source.year, counts, &source.path)
}

/// What a successfully processed calendar produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// Number of employees found.
    pub employees: usize,
    /// Number of leave entries across all employees.
    pub entries: usize,
    /// Number of labels on the day axis.
    pub days: usize,
    /// The JSON document written, when JSON output is enabled.
    pub json_path: Option<PathBuf>,
}

/// The outcome of one calendar file.
#[derive(Debug)]
pub struct FileReport {
    /// The calendar file.
    pub path: PathBuf,
    /// The year it was interpreted under.
    pub year: CalendarYear,
    /// What it produced, or why it was skipped.
    pub outcome: CalendarResult<FileSummary>,
}

/// The outcome of a whole run.
#[derive(Debug)]
pub struct BatchReport {
    /// Correlation id attached to every log line of the run.
    pub run_id: Uuid,
    /// One entry per discovered calendar, in processing order.
    pub files: Vec<FileReport>,
    /// One entry per year written to SQL.
    pub sql_files: Vec<(CalendarYear, CalendarResult<PathBuf>)>,
}

impl BatchReport {
    /// Number of calendars processed without error.
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_ok()).count()
    }

    /// Calendars that were skipped, with the reason.
    pub fn failed_files(&self) -> impl Iterator<Item = (&Path, &CalendarError)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            Ok(_) => None,
            Err(e) => Some((f.path.as_path(), e)),
        })
    }

    /// Returns true when any calendar or SQL file failed.
    pub fn has_failures(&self) -> bool {
        self.files.iter().any(|f| f.outcome.is_err())
            || self.sql_files.iter().any(|(_, result)| result.is_err())
    }

    /// Logs the end-of-run summary.
    pub fn log_summary(&self) {
        for (path, error) in self.failed_files() {
            warn!(run_id = %self.run_id, file = %path.display(), error = %error, "Skipped calendar");
        }
        for (year, result) in &self.sql_files {
            if let Err(error) = result {
                warn!(run_id = %self.run_id, year = %year, error = %error, "SQL batch not written");
            }
        }
        info!(
            run_id = %self.run_id,
            processed = self.succeeded(),
            failed = self.files.len() - self.succeeded(),
            sql_files = self.sql_files.iter().filter(|(_, r)| r.is_ok()).count(),
            "Run finished"
        );
    }
}

/// Runs a full conversion batch.
///
/// # Errors
///
/// Only configuration-level errors are returned (an unusable source path or
/// a file name without a year); they abort the run before any calendar is
/// read. Per-file failures are recorded in the [`BatchReport`].
pub fn run(config: &RunConfig) -> CalendarResult<BatchReport> {
    let run_id = Uuid::new_v4();
    let span = info_span!("run", run_id = %run_id);
    let _guard = span.enter();

    let sources = discover_sources(&config.source, config.year)?;
    info!(
        source = %config.source.display(),
        files = sources.len(),
        "Discovered calendar files"
    );

    let mut sql_batch = SqlBatch::new();
    let mut files = Vec::with_capacity(sources.len());

    for source in sources {
        let outcome = process_calendar(&source, config, &mut sql_batch);
        match &outcome {
            Ok(summary) => info!(
                file = %source.path.display(),
                year = %source.year,
                employees = summary.employees,
                entries = summary.entries,
                "Processed calendar"
            ),
            Err(error) => warn!(
                file = %source.path.display(),
                year = %source.year,
                error = %error,
                "Failed to process calendar"
            ),
        }
        files.push(FileReport {
            path: source.path,
            year: source.year,
            outcome,
        });
    }

    let sql_files = if config.emit.sql {
        let written = sql_batch.write_all(&config.output_dir);
        for (year, result) in &written {
            if let Ok(path) = result {
                info!(year = %year, file = %path.display(), "Wrote SQL batch");
            }
        }
        written
    } else {
        Vec::new()
    };

    Ok(BatchReport {
        run_id,
        files,
        sql_files,
    })
}

fn process_calendar(
    source: &CalendarSource,
    config: &RunConfig,
    sql_batch: &mut SqlBatch,
) -> CalendarResult<FileSummary> {
    let parsed = parse_calendar_file(source, &config.counts)?;

    let json_path = if config.emit.json {
        Some(write_json(
            &parsed.employees,
            &source.path,
            &config.output_dir,
        )?)
    } else {
        None
    };

    if config.emit.sql {
        sql_batch.add_calendar(source.year, &parsed.employees);
    }

    Ok(FileSummary {
        employees: parsed.employees.len(),
        entries: parsed.employees.total_entries(),
        days: parsed.axis.len(),
        json_path,
    })
}
