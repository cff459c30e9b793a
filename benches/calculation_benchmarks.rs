//! Performance benchmarks for the payroll engine.
//!
//! Covers the pure engine (day rate and period aggregation) and the full
//! `/calculate` request path through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use planilla_engine::api::{AppState, create_router};
use planilla_engine::calculation::{PeriodInput, aggregate_period, calculate_day_rate};
use planilla_engine::config::{ConfigLoader, PayrollRules};
use planilla_engine::models::{
    DisabilityKind, DisabilityOverride, Employee, HolidaySet, ShiftType, WorkDay,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/costa_rica").expect("Failed to load config");
    AppState::new(config)
}

fn bench_employee(shift_type: ShiftType) -> Employee {
    Employee {
        id: "emp_bench_001".to_string(),
        name: None,
        hourly_rate: Decimal::new(2_750, 0),
        shift_type,
        hire_date: NaiveDate::from_ymd_opt(2020, 1, 1),
    }
}

/// Consecutive days from a Monday, alternating 8 and 10 hours.
fn create_days(day_count: usize) -> Vec<WorkDay> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    (0..day_count)
        .map(|i| {
            let hours = if i % 2 == 0 { 8 } else { 10 };
            WorkDay::new(start + Duration::days(i as i64), Decimal::new(hours, 0))
        })
        .collect()
}

/// Creates a `/calculate` body with a specified number of days.
fn create_request_body(employee_id: &str, shift_type: &str, day_count: usize) -> String {
    let days: Vec<serde_json::Value> = create_days(day_count)
        .iter()
        .map(|day| {
            serde_json::json!({
                "date": day.date,
                "hours_worked": day.hours_worked.to_string()
            })
        })
        .collect();

    serde_json::json!({
        "employee": {
            "id": employee_id,
            "hourly_rate": "2750",
            "shift_type": shift_type,
            "hire_date": "2020-01-01"
        },
        "days": days,
        "holidays": ["2024-03-28", "2024-03-29"],
        "extras": [{ "kind": "bonus", "amount": "15000" }],
        "as_of": "2024-04-01"
    })
    .to_string()
}

/// Benchmark: a single day under each jornada.
fn bench_day_rate(c: &mut Criterion) {
    let rules = PayrollRules::default();
    let mut group = c.benchmark_group("day_rate");

    for shift_type in [
        ShiftType::Diurna,
        ShiftType::Nocturna,
        ShiftType::Mixta,
        ShiftType::Acumulativa,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(shift_type),
            &shift_type,
            |b, &shift_type| {
                b.iter(|| {
                    calculate_day_rate(
                        black_box(shift_type),
                        black_box(2),
                        black_box(Decimal::new(95, 1)),
                        black_box(Decimal::new(2_750, 0)),
                        &rules,
                    )
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: a month aggregated with feriados and incapacidades.
fn bench_aggregate_month(c: &mut Criterion) {
    let rules = PayrollRules::default();
    let employee = bench_employee(ShiftType::Diurna);
    let days = create_days(31);
    let holidays = HolidaySet::from_dates([
        NaiveDate::from_ymd_opt(2024, 3, 28).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 29).unwrap(),
    ]);
    let disabilities = vec![
        DisabilityOverride {
            date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            kind: DisabilityKind::SocialSecurity,
        },
        DisabilityOverride {
            date: NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
            kind: DisabilityKind::InsuranceBoard,
        },
    ];

    c.bench_function("aggregate_month", |b| {
        b.iter(|| {
            aggregate_period(
                black_box(&PeriodInput {
                    employee: &employee,
                    days: &days,
                    disabilities: &disabilities,
                    holidays: &holidays,
                    extras_total: Decimal::new(15_000, 0),
                    deductions_total: Decimal::ZERO,
                }),
                &rules,
            )
        })
    });
}

/// Benchmark: a two-week `/calculate` request through the router.
fn bench_request_14_days(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_request_body("emp_bench_001", "diurna", 14);

    c.bench_function("request_14_days", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 payrolls across all jornadas.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let shift_types = ["diurna", "nocturna", "mixta", "acumulativa"];

    let requests: Vec<String> = (0..100)
        .map(|i| {
            create_request_body(&format!("emp_batch_{:03}", i), shift_types[i % 4], 14)
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Various period lengths to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rules = PayrollRules::default();
    let employee = bench_employee(ShiftType::Mixta);
    let holidays = HolidaySet::default();

    let mut group = c.benchmark_group("scaling");

    for day_count in [1, 7, 14, 31, 62].iter() {
        let days = create_days(*day_count);

        group.throughput(Throughput::Elements(*day_count as u64));
        group.bench_with_input(BenchmarkId::new("days", day_count), &days, |b, days| {
            b.iter(|| {
                aggregate_period(
                    &PeriodInput {
                        employee: &employee,
                        days,
                        disabilities: &[],
                        holidays: &holidays,
                        extras_total: Decimal::ZERO,
                        deductions_total: Decimal::ZERO,
                    },
                    &rules,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_day_rate,
    bench_aggregate_month,
    bench_request_14_days,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
