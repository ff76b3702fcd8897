//! Property-Based Tests
//!
//! Invariants of the parsing stages, checked over generated grids:
//! - The anchor is the first exact `"Date"` cell in row-major order
//! - The day axis holds exactly the non-empty header cells after the anchor
//! - Each recognized code in the day range becomes exactly one entry
//! - Codes keep the date of the column they sit in
//! - Day labels resolve to the date they name

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use leave_calendar::calendar::{
    ANCHOR_TEXT, classify_employees, locate_anchor, parse_day_axis, parse_day_label,
};
use leave_calendar::config::CountFlags;
use leave_calendar::models::{Anchor, CalendarYear, Grid, LeaveCategory};

fn filler_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("date".to_string()),
        Just("Dates".to_string()),
        Just(" Date".to_string()),
        Just("r".to_string()),
        "[a-z]{1,6}",
    ]
}

fn code_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("r".to_string()),
        Just("R".to_string()),
        Just("a".to_string()),
        Just("A".to_string()),
        Just("n".to_string()),
        Just("s".to_string()),
        Just("z".to_string()),
        Just("Z".to_string()),
        Just(String::new()),
        Just("x".to_string()),
        Just("rr".to_string()),
        Just("?".to_string()),
    ]
}

// ============================================================================
// Anchor Properties
// ============================================================================

/// Property: the first exact "Date" cell wins, whatever follows it
#[test]
fn proptest_anchor_is_first_exact_match() {
    proptest!(|(
        mut rows in prop::collection::vec(prop::collection::vec(filler_cell(), 1..8), 1..8),
        row_pick in any::<prop::sample::Index>(),
        column_pick in any::<prop::sample::Index>(),
        extra in any::<bool>(),
    )| {
        let row = row_pick.index(rows.len());
        let column = column_pick.index(rows[row].len());
        rows[row][column] = ANCHOR_TEXT.to_string();
        if extra {
            if let Some(last) = rows.last_mut() {
                last.push(ANCHOR_TEXT.to_string());
            }
        }

        let grid = Grid::new(rows);
        prop_assert_eq!(locate_anchor(&grid), Some(Anchor { row, column }));
    });
}

/// Property: grids without an exact "Date" cell have no anchor
#[test]
fn proptest_no_exact_match_no_anchor() {
    proptest!(|(rows in prop::collection::vec(prop::collection::vec(filler_cell(), 0..8), 0..8))| {
        let grid = Grid::new(rows);
        prop_assert_eq!(locate_anchor(&grid), None);
    });
}

// ============================================================================
// Day Axis Properties
// ============================================================================

/// Property: axis length equals the non-empty header cells after the anchor
#[test]
fn proptest_axis_length_matches_non_empty_headers() {
    proptest!(|(
        leading in prop::collection::vec(Just(String::new()), 0..4),
        labels in prop::collection::vec(prop_oneof![Just(String::new()), "[0-9]{1,2}-[A-Z][a-z]{2}"], 0..40),
    )| {
        let mut header = leading.clone();
        header.push(ANCHOR_TEXT.to_string());
        header.extend(labels.iter().cloned());
        let grid = Grid::new(vec![header]);

        let anchor = locate_anchor(&grid).unwrap();
        prop_assert_eq!(anchor.column, leading.len());

        let axis = parse_day_axis(&grid, anchor);
        let expected: Vec<&String> = labels.iter().filter(|l| !l.is_empty()).collect();
        prop_assert_eq!(axis.len(), expected.len());
        prop_assert!(axis.labels().all(|l| !l.is_empty()));
    });
}

// ============================================================================
// Classifier Properties
// ============================================================================

/// Property: every recognized code within the day range becomes one entry
#[test]
fn proptest_entries_match_recognized_codes() {
    proptest!(|(cells in prop::collection::vec(code_cell(), 0..30), days in 0usize..30)| {
        let mut header = vec![String::new(), ANCHOR_TEXT.to_string()];
        header.extend((1..=days).map(|d| format!("{}-Jan", d)));
        let mut row = vec![String::new(), "Alice".to_string()];
        row.extend(cells.iter().cloned());
        let grid = Grid::new(vec![header, Vec::new(), row]);

        let anchor = locate_anchor(&grid).unwrap();
        let axis = parse_day_axis(&grid, anchor);
        let employees = classify_employees(&grid, anchor, &axis, &CountFlags::none());

        let expected = cells
            .iter()
            .take(days)
            .filter(|c| LeaveCategory::from_code(c).is_some())
            .count();
        let alice = employees.get("Alice").unwrap();
        prop_assert_eq!(alice.total_entries(), expected);
        prop_assert!(alice.iter_entries().all(|(_, index)| *index < axis.len()));
    });
}

/// Property: an entry's day index names the label heading the code's column
#[test]
fn proptest_entries_keep_column_alignment() {
    proptest!(|(
        columns in prop::collection::vec((any::<bool>(), code_cell()), 0..30),
    )| {
        let mut header = vec![String::new(), ANCHOR_TEXT.to_string()];
        let mut row = vec![String::new(), "Alice".to_string()];
        for (offset, (labelled, code)) in columns.iter().enumerate() {
            header.push(if *labelled { format!("{}-Mar", offset + 1) } else { String::new() });
            row.push(code.clone());
        }
        let grid = Grid::new(vec![header, Vec::new(), row]);

        let anchor = locate_anchor(&grid).unwrap();
        let axis = parse_day_axis(&grid, anchor);
        let employees = classify_employees(&grid, anchor, &axis, &CountFlags::none());
        let alice = employees.get("Alice").unwrap();

        let expected = columns
            .iter()
            .filter(|(labelled, code)| *labelled && LeaveCategory::from_code(code).is_some())
            .count();
        prop_assert_eq!(alice.total_entries(), expected);

        for (category, index) in alice.iter_entries() {
            let column = axis.column(*index).unwrap();
            let offset = column - anchor.first_day_column();
            let expected_label = format!("{}-Mar", offset + 1);
            prop_assert_eq!(axis.label(*index), Some(expected_label.as_str()));
            prop_assert_eq!(LeaveCategory::from_code(&columns[offset].1), Some(category));
        }
    });
}

// ============================================================================
// Date Label Properties
// ============================================================================

/// Property: "<day>-<Mon>" labels resolve to the date they name
#[test]
fn proptest_day_label_names_its_date() {
    proptest!(|(year in 1900i32..2100, offset in 0i64..366)| {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let date = start + Duration::days(offset);
        prop_assume!(date.year() == year);

        let label = date.format("%-d-%b").to_string();
        let calendar_year: CalendarYear = format!("{:04}", year).parse().unwrap();
        prop_assert_eq!(parse_day_label(&label, calendar_year).unwrap(), date);
    });
}
