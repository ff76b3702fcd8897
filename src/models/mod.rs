//! Core data models for the leave calendar parser.
//!
//! This module contains the grid, leave and employee types shared by the
//! parsing pipeline and the emitters.

mod employee;
mod grid;
mod leave;
mod year;

pub use employee::{
    DatedEmployeeRecord, EmployeeMap, EmployeeRecord, LeaveCounts, RawEmployeeRecord,
};
pub use grid::{Anchor, DayAxis, EMPLOYEE_ROW_OFFSET, Grid};
pub use leave::LeaveCategory;
pub use year::CalendarYear;
