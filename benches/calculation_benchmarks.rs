//! Performance benchmarks for the register filler.
//!
//! This benchmark suite covers the pure planning path:
//! - Worked-period calculation for a single day
//! - Worked-period calculation with many overlapping windows
//! - Planning a full month with incidences
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::BTreeSet;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use jornada_register::calculation::calculate_worked_periods;
use jornada_register::models::{BaseSchedule, IncidenceEntry, IncidenceRecord, Period, TimeWindowSpec};
use jornada_register::register::{RegisterRequest, build_register_plan};

fn schedule() -> BaseSchedule {
    "08:00-20:00".parse().expect("valid schedule")
}

/// Creates `count` partial incidences spread across the schedule, half of
/// them overlapping their neighbour.
fn create_entries(count: usize) -> Vec<IncidenceEntry> {
    (0..count)
        .map(|i| {
            let start = 8 * 60 + (i * 600 / count.max(1)) as u32;
            let end = start + 20 + (i % 2) as u32 * 15;
            let window = format!(
                "{:02}:{:02}-{:02}:{:02}",
                start / 60,
                start % 60,
                (end / 60).min(23),
                end % 60
            );
            IncidenceEntry {
                label: format!("Incidencia {i}"),
                time_window: TimeWindowSpec::new(&window),
            }
        })
        .collect()
}

/// Creates a July 2024 request with a mix of whole-day and partial incidences.
fn create_month_request() -> RegisterRequest {
    let period = Period::new(7, 2024).expect("valid period");
    RegisterRequest::new(period, schedule())
        .with_incidence(IncidenceRecord::new("Vacaciones", "15-19", None))
        .with_incidence(IncidenceRecord::new("Médico", "2-2", Some("09:00-10:30 # Revisión")))
        .with_incidence(IncidenceRecord::new("Formación", "3-11", Some("16:00-18:00")))
        .with_incidence(IncidenceRecord::new("Gestión", "8-8", Some("17:30-19:00")))
}

/// Benchmark: worked periods for a day with a single partial incidence.
fn bench_single_incidence(c: &mut Criterion) {
    let schedule = schedule();
    let entries = create_entries(1);

    c.bench_function("worked_periods_single_incidence", |b| {
        b.iter(|| black_box(calculate_worked_periods(black_box(&schedule), black_box(&entries))))
    });
}

/// Benchmark: how worked-period calculation scales with incidences per day.
fn bench_scaling(c: &mut Criterion) {
    let schedule = schedule();
    let mut group = c.benchmark_group("worked_periods_scaling");

    for count in [2, 8, 32, 128] {
        let entries = create_entries(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| black_box(calculate_worked_periods(&schedule, entries)))
        });
    }

    group.finish();
}

/// Benchmark: planning a full month.
fn bench_month_plan(c: &mut Criterion) {
    let request = create_month_request();
    let holidays = BTreeSet::from([25]);

    c.bench_function("register_plan_month", |b| {
        b.iter(|| black_box(build_register_plan(black_box(&request), black_box(&holidays))))
    });
}

criterion_group!(benches, bench_single_incidence, bench_scaling, bench_month_plan);
criterion_main!(benches);
