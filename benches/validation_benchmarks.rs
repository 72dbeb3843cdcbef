//! Performance benchmarks for the Vacation Allocation Engine.
//!
//! The validator sits on the submission path of every vacation request, so
//! it must stay cheap: a single validation is expected well under 1μs, and
//! an end-to-end HTTP submission under 1ms.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use axum::{Router, body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

use vacation_engine::api::{AppState, create_router};
use vacation_engine::models::VacationPeriod;
use vacation_engine::validation::{duration_in_days, validate_allocation};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pending(user_id: &str, year: i32, duration: i64) -> VacationPeriod {
    let start = date(year, 2, 1);
    let end = start + chrono::Duration::days(duration - 1);
    VacationPeriod::new(user_id, start, end).unwrap()
}

fn bench_duration_calculator(c: &mut Criterion) {
    c.bench_function("duration_in_days", |b| {
        let start = date(2025, 7, 1);
        let end = date(2025, 7, 30);
        b.iter(|| duration_in_days(black_box(start), black_box(end)))
    });
}

fn bench_validator(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_allocation");

    let active_sets: Vec<(usize, Vec<VacationPeriod>)> = vec![
        (0, vec![]),
        (1, vec![pending("emp_001", 2025, 5)]),
        (
            2,
            vec![pending("emp_001", 2025, 5), pending("emp_001", 2025, 10)],
        ),
    ];

    for (count, existing) in &active_sets {
        group.bench_with_input(
            BenchmarkId::new("existing_periods", count),
            existing,
            |b, existing| {
                b.iter(|| {
                    validate_allocation(black_box(existing), black_box(15), "emp_001", 2025)
                })
            },
        );
    }

    group.finish();
}

fn bench_http_submission(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("http_submit_period", |b| {
        b.to_async(&rt).iter(|| async {
            // Fresh state per iteration so the submission is always a
            // first period for its user.
            let router: Router = create_router(AppState::new());
            let body = serde_json::json!({
                "user_id": "emp_001",
                "start_date": "2025-07-01",
                "end_date": "2025-07-15",
            });
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/vacation-periods")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response.status())
        })
    });
}

criterion_group!(
    benches,
    bench_duration_calculator,
    bench_validator,
    bench_http_submission
);
criterion_main!(benches);
