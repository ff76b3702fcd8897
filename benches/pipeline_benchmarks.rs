//! Performance benchmarks for the leave calendar pipeline.
//!
//! This benchmark suite measures the parse stages on synthetic full-year
//! calendars:
//! - Loading a calendar export from CSV text
//! - Parsing a 50-employee calendar into dated records
//! - Rendering the JSON document and SQL batch
//! - Scaling with the number of employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use leave_calendar::config::CountFlags;
use leave_calendar::emit::{SqlBatch, render_json};
use leave_calendar::models::CalendarYear;
use leave_calendar::pipeline::parse_calendar;
use leave_calendar::source::read_grid;

const CODES: [&str; 8] = ["", "", "", "r", "a", "n", "s", "z"];

fn year() -> CalendarYear {
    "2024".parse().expect("valid year")
}

/// Builds a full-year calendar export with `employees` rows.
fn synthetic_calendar(employees: usize) -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let labels: Vec<String> = (0..366)
        .map(|offset| (start + Duration::days(offset)).format("%-d-%b").to_string())
        .collect();

    let mut text = format!(",Date,{}\n,Legend\n", labels.join(","));
    for employee in 0..employees {
        let cells: Vec<&str> = (0..labels.len())
            .map(|day| CODES[(day * 7 + employee * 3) % CODES.len()])
            .collect();
        text.push_str(&format!(",Employee {:03},{}\n", employee, cells.join(",")));
    }
    text
}

/// Benchmark: CSV text into a grid.
fn bench_read_grid(c: &mut Criterion) {
    let text = synthetic_calendar(50);

    c.bench_function("read_grid_50_employees", |b| {
        b.iter(|| read_grid(black_box(&text), Path::new("2024_bench.csv")))
    });
}

/// Benchmark: grid into dated employee records.
fn bench_parse_calendar(c: &mut Criterion) {
    let grid = read_grid(&synthetic_calendar(50), Path::new("2024_bench.csv")).expect("grid");
    let origin = Path::new("2024_bench.csv");

    c.bench_function("parse_calendar_50_employees", |b| {
        b.iter(|| parse_calendar(black_box(&grid), year(), &CountFlags::default(), origin))
    });
}

/// Benchmark: JSON and SQL rendering of a parsed calendar.
fn bench_emit(c: &mut Criterion) {
    let grid = read_grid(&synthetic_calendar(50), Path::new("2024_bench.csv")).expect("grid");
    let parsed = parse_calendar(&grid, year(), &CountFlags::default(), Path::new("bench"))
        .expect("parsed calendar");

    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(parsed.employees.total_entries() as u64));

    group.bench_function("json", |b| b.iter(|| render_json(black_box(&parsed.employees))));
    group.bench_function("sql", |b| {
        b.iter(|| {
            let mut batch = SqlBatch::new();
            batch.add_calendar(year(), black_box(&parsed.employees));
            batch.render(year())
        })
    });

    group.finish();
}

/// Benchmark: parse time against employee count.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for employees in [10, 50, 200] {
        let grid =
            read_grid(&synthetic_calendar(employees), Path::new("2024_bench.csv")).expect("grid");
        group.throughput(Throughput::Elements(employees as u64));
        group.bench_with_input(BenchmarkId::from_parameter(employees), &grid, |b, grid| {
            b.iter(|| parse_calendar(grid, year(), &CountFlags::default(), Path::new("bench")))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_read_grid,
    bench_parse_calendar,
    bench_emit,
    bench_scaling,
);
criterion_main!(benches);
