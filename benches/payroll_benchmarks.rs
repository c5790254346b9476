//! Performance benchmarks for the Payroll Calculation Engine.
//!
//! This benchmark suite covers the two hot paths of the surrounding system:
//! - Single-employee master calculation (simulator request path)
//! - Batch payroll generation over many employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    calculate_complete_payroll, calculate_weekends, simulate_scenarios, SimulationInputs,
};
use payroll_engine::models::{AttendanceWindow, SalaryStructure};

fn bench_master_calculation(c: &mut Criterion) {
    let salary = SalaryStructure::default_structure();
    let window = AttendanceWindow::new(18, 8, 2, 28).unwrap();

    c.bench_function("master_calculation", |b| {
        b.iter(|| {
            calculate_complete_payroll(
                black_box(&salary),
                black_box(&window),
                black_box(Decimal::ZERO),
            )
        })
    });
}

fn bench_weekend_counting(c: &mut Criterion) {
    let month_start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let joining_date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();

    c.bench_function("weekend_counting", |b| {
        b.iter(|| calculate_weekends(black_box(month_start), black_box(28), black_box(joining_date)))
    });
}

fn bench_simulator(c: &mut Criterion) {
    let salary = SalaryStructure::default_structure();
    let inputs = SimulationInputs {
        attendance_count: 8,
        approved_leave_days: 1,
        weekends_so_far: 3,
        working_days_so_far: 10,
        remaining_working_days: 10,
        remaining_weekends: 5,
        days_in_month: 28,
    };

    c.bench_function("simulate_scenarios", |b| {
        b.iter(|| simulate_scenarios(black_box(&salary), black_box(&inputs), black_box(Decimal::ZERO)))
    });
}

fn bench_batch_generation(c: &mut Criterion) {
    let salary = SalaryStructure::default_structure();

    let mut group = c.benchmark_group("batch_generation");
    for employee_count in [100u32, 1000] {
        // Vary the counts a little so every employee is not the same input.
        let windows: Vec<AttendanceWindow> = (0..employee_count)
            .map(|i| AttendanceWindow::new(10 + (i % 11), 8, i % 4, 28).unwrap())
            .collect();

        group.throughput(Throughput::Elements(u64::from(employee_count)));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &windows,
            |b, windows| {
                b.iter(|| {
                    windows
                        .iter()
                        .map(|window| {
                            calculate_complete_payroll(
                                black_box(&salary),
                                black_box(window),
                                Decimal::ZERO,
                            )
                        })
                        .count()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_master_calculation,
    bench_weekend_counting,
    bench_simulator,
    bench_batch_generation
);
criterion_main!(benches);
