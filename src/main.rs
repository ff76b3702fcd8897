//! leave-calendar - leave calendar converter
//!
//! Usage:
//!   leave-calendar [SOURCE]                 Convert a CSV calendar or a directory of them
//!   leave-calendar --config run.yaml        Read settings from YAML
//!   leave-calendar files --sql --year 2024  Override settings on the command line

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use leave_calendar::config::{ConfigLoader, CountFlags, RunConfig};
use leave_calendar::models::CalendarYear;
use leave_calendar::pipeline;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "leave-calendar")]
#[command(about = "Convert leave calendar CSV exports into JSON and SQL")]
#[command(version)]
struct Cli {
    /// CSV calendar file or directory of calendars
    source: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory receiving the JSON and SQL output
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Year applied to every calendar instead of the file name prefix
    #[arg(short, long, value_name = "YYYY")]
    year: Option<CalendarYear>,

    /// Write one JSON document per calendar
    #[arg(long, overrides_with = "no_json")]
    json: bool,

    /// Skip JSON output
    #[arg(long = "no-json", overrides_with = "json")]
    no_json: bool,

    /// Write one SQL batch per year
    #[arg(long, overrides_with = "no_sql")]
    sql: bool,

    /// Skip SQL output
    #[arg(long = "no-sql", overrides_with = "sql")]
    no_sql: bool,

    /// Counts attached to each employee (replaces the configured set)
    #[arg(long, value_enum, value_delimiter = ',', value_name = "COUNT")]
    counts: Option<Vec<CountKind>>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CountKind {
    /// Approved holiday days (`holidays`)
    Holidays,
    /// Sick days (`sick`)
    Sick,
    /// Special leave days (`special-leave`)
    SpecialLeave,
    /// National holiday days (`national-holiday`)
    NationalHoliday,
    /// No counts
    None,
}

fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn count_flags(kinds: &[CountKind]) -> CountFlags {
    let mut flags = CountFlags::none();
    for kind in kinds {
        match kind {
            CountKind::Holidays => flags.approved_holiday = true,
            CountKind::Sick => flags.sick_leave = true,
            CountKind::SpecialLeave => flags.special_leave = true,
            CountKind::NationalHoliday => flags.national_holiday = true,
            CountKind::None => {}
        }
    }
    flags
}

impl Cli {
    fn resolve_config(&self) -> Result<RunConfig> {
        let mut config = ConfigLoader::load_or_default(self.config.as_deref())
            .context("Failed to load configuration")?;

        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if self.year.is_some() {
            config.year = self.year;
        }
        if let Some(json) = flag_override(self.json, self.no_json) {
            config.emit.json = json;
        }
        if let Some(sql) = flag_override(self.sql, self.no_sql) {
            config.emit.sql = sql;
        }
        if let Some(kinds) = &self.counts {
            config.counts = count_flags(kinds);
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let config = cli.resolve_config()?;
    let report = pipeline::run(&config).with_context(|| {
        format!("Failed to start run for {}", config.source.display())
    })?;
    report.log_summary();
    Ok(!report.has_failures())
}

/// `RUST_LOG` when set and valid, `info` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> ExitCode {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
