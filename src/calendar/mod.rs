//! Calendar parsing and normalization.
//!
//! This module contains the stages that turn a loaded [`Grid`] into dated
//! employee records: anchor location, day-axis parsing, employee
//! classification, date normalization and count aggregation, plus the
//! weekend detection used by the SQL emitter.
//!
//! [`Grid`]: crate::models::Grid

mod aggregator;
mod anchor;
mod classifier;
mod date_normalizer;
mod day_axis;
mod day_detection;

pub use aggregator::apply_counts;
pub use anchor::{ANCHOR_TEXT, locate_anchor};
pub use classifier::{EMPLOYEE_NAME_COLUMN, classify_employees};
pub use date_normalizer::{DATE_FORMAT, format_date, month_number, normalize_dates, parse_day_label};
pub use day_axis::parse_day_axis;
pub use day_detection::{DayType, get_day_type, is_weekend};
