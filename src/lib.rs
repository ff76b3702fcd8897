//! Leave calendar conversion
//!
//! This crate reads spreadsheet-exported leave calendars (CSV grids with a
//! `"Date"` header row followed by one row per employee) and converts them
//! into per-employee leave records, written as JSON documents and SQL insert
//! batches.

#![warn(missing_docs)]

pub mod calendar;
pub mod config;
pub mod emit;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod source;
