use amortization_engine::core::request::LoanRequest;
use amortization_engine::core::units::Duration;
use amortization_engine::schedule::dispatch::compute_amortization_schedule;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn mortgage(tag: &str) -> LoanRequest {
    LoanRequest::new(
        350_000.0,
        4.25,
        12,
        Duration::years(30.0),
        tag,
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    )
    .with_grace_period(Duration::months(12.0))
    .with_dead_period_semesters(1.0)
}

fn bench_french_30_years(c: &mut Criterion) {
    let request = mortgage("french");
    c.bench_function("french_360_periods", |b| {
        b.iter(|| compute_amortization_schedule(black_box(&request)))
    });
}

fn bench_german_30_years(c: &mut Criterion) {
    let request = mortgage("german");
    c.bench_function("german_360_periods", |b| {
        b.iter(|| compute_amortization_schedule(black_box(&request)))
    });
}

fn bench_american_30_years(c: &mut Criterion) {
    let request = mortgage("american");
    c.bench_function("american_360_periods", |b| {
        b.iter(|| compute_amortization_schedule(black_box(&request)))
    });
}

criterion_group!(
    benches,
    bench_french_30_years,
    bench_german_30_years,
    bench_american_30_years
);
criterion_main!(benches);
