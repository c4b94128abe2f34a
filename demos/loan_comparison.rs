//! Same loan, four repayment conventions.
//!
//! Demonstrates how the choice of convention shifts the total interest
//! paid, and how grace and dead phases delay amortization.

use amortization_engine::core::request::LoanRequest;
use amortization_engine::core::units::{Duration, DurationUnit};
use amortization_engine::report::summary::{render_table, ScheduleSummary};
use amortization_engine::schedule::dispatch::compute_amortization_schedule;
use chrono::NaiveDate;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  amortization-engine: Loan Comparison Demo   ║");
    println!("╚══════════════════════════════════════════════╝\n");

    let start = NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date");
    let base = LoanRequest::new(
        20_000.0,
        7.5,
        4,
        Duration::years(3.0),
        "french",
        start,
    )
    .with_opening_fee_percent(1.0);

    // --- Scenario 1: Four conventions side by side ---
    println!("━━━ Scenario 1: Conventions ━━━\n");

    for tag in ["french", "german", "american", "single"] {
        let request = base.clone().with_convention(tag);
        let rows = compute_amortization_schedule(&request).expect("known convention");
        let summary = ScheduleSummary::from_rows(&rows, &request);
        println!("{}", summary);
    }

    // --- Scenario 2: Grace and dead phases ---
    println!("━━━ Scenario 2: One dead semester, then 26 weeks of grace ━━━\n");

    let delayed = base
        .clone()
        .with_convention("german")
        .with_dead_period_semesters(1.0)
        .with_grace_period(Duration::new(26.0, DurationUnit::Weeks));
    let rows = compute_amortization_schedule(&delayed).expect("known convention");
    println!("{}", render_table(&rows));

    // --- Scenario 3: Unsupported convention ---
    println!("━━━ Scenario 3: Unsupported convention ━━━\n");

    match compute_amortization_schedule(&base.with_convention("balloon")) {
        Ok(_) => println!("unexpectedly computed a balloon schedule"),
        Err(e) => println!("Rejected: {}", e),
    }
}
