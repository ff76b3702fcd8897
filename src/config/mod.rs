//! Configuration loading and management for calendar conversion runs.
//!
//! This module provides functionality to load run settings from YAML files:
//! the calendar source, the output directory, the count flags and the
//! emission targets.
//!
//! # Example
//!
//! ```no_run
//! use leave_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./leave-calendar.yaml").unwrap();
//! println!("Writing results to {}", config.output_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CountFlags, EmitTargets, RunConfig};
