//! Calendar input: locating CSV exports and loading them into grids.

mod discovery;
mod grid_loader;

pub use discovery::{
    CSV_EXTENSION, CalendarSource, YEAR_SEPARATOR, discover_sources, year_from_file_name,
};
pub use grid_loader::{load_grid, read_grid};
