//! amortization-engine CLI
//!
//! Compute loan repayment schedules from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Print the amortization table for a loan
//! amortization-engine schedule --input loan.json
//!
//! # Output as JSON
//! amortization-engine schedule --input loan.json --format json
//!
//! # Compare French, German and American repayment of the same loan
//! amortization-engine compare --input loan.json
//!
//! # Write a sample loan file to start from
//! amortization-engine template --convention german --output loan.json
//! ```

use amortization_engine::core::request::{Convention, LoanRequest};
use amortization_engine::core::units::Duration;
use amortization_engine::report::summary::{render_table, round_money, RenderedRow, ScheduleSummary};
use amortization_engine::schedule::dispatch::compute_amortization_schedule;
use chrono::{Datelike, NaiveDate};
use log::info;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"amortization-engine — loan repayment schedules

USAGE:
    amortization-engine <COMMAND> [OPTIONS]

COMMANDS:
    schedule    Compute the amortization table for a loan
    compare     Compare french, german and american repayment of a loan
    template    Print a sample loan request
    help        Show this message

OPTIONS (schedule, compare):
    --input <FILE>      Path to JSON loan request
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (template):
    --convention <TAG>  french (default), german, american or single
    --output <FILE>     Write to file instead of stdout

Set RUST_LOG=debug to trace normalization and engine selection.

EXAMPLES:
    amortization-engine schedule --input loan.json
    amortization-engine schedule --input loan.json --format json
    amortization-engine compare --input loan.json
    amortization-engine template --convention american --output loan.json"#
    );
}

/// JSON output schema for a computed schedule.
#[derive(serde::Serialize)]
struct ScheduleOutput {
    summary: SummaryOutput,
    rows: Vec<RenderedRow>,
}

#[derive(serde::Serialize)]
struct SummaryOutput {
    convention: String,
    principal: String,
    periods: usize,
    total_interest: String,
    total_paid: String,
    opening_fee: String,
    total_cost: String,
    final_balance: String,
}

impl From<&ScheduleSummary> for SummaryOutput {
    fn from(s: &ScheduleSummary) -> Self {
        SummaryOutput {
            convention: s.convention.clone(),
            principal: money(s.principal),
            periods: s.period_count,
            total_interest: money(s.total_interest),
            total_paid: money(s.total_paid),
            opening_fee: money(s.opening_fee),
            total_cost: money(s.total_cost()),
            final_balance: money(s.final_balance),
        }
    }
}

fn money(value: f64) -> String {
    round_money(value)
        .map(|d| d.to_string())
        .unwrap_or_else(|| value.to_string())
}

fn load_request(path: &str) -> LoanRequest {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "principal": 10000,
  "nominal_annual_rate_percent": 10,
  "payments_per_year": 12,
  "duration": {{ "value": 5, "unit": "years" }},
  "repayment_convention": "french",
  "start_date": "2025-01-15"
}}"#
        );
        process::exit(1);
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        process::exit(1);
    })
}

/// Parse `--input` / `--format`, shared by `schedule` and `compare`.
fn parse_input_args(args: &[String]) -> (String, String) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });
    (path, format)
}

fn cmd_schedule(args: &[String]) {
    let (path, format) = parse_input_args(args);
    let request = load_request(&path);

    let rows = compute_amortization_schedule(&request).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let summary = ScheduleSummary::from_rows(&rows, &request);
    info!("computed {} rows from {}", rows.len(), path);

    if format == "json" {
        let output = ScheduleOutput {
            summary: SummaryOutput::from(&summary),
            rows: rows.iter().map(RenderedRow::from).collect(),
        };
        println!("{}", to_json(&output));
    } else {
        println!("{}", summary);
        print!("{}", render_table(&rows));
    }
}

fn cmd_compare(args: &[String]) {
    let (path, format) = parse_input_args(args);
    let request = load_request(&path);

    let mut summaries = Vec::new();
    for convention in [Convention::French, Convention::German, Convention::American] {
        let variant = request.clone().with_convention(convention.tag());
        let rows = compute_amortization_schedule(&variant).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        });
        summaries.push(ScheduleSummary::from_rows(&rows, &variant));
    }

    if format == "json" {
        let output: Vec<SummaryOutput> = summaries.iter().map(SummaryOutput::from).collect();
        println!("{}", to_json(&output));
    } else {
        println!(
            "{:<10}  {:>8}  {:>16}  {:>16}  {:>16}",
            "Convention", "Periods", "Total Interest", "Total Paid", "Total Cost"
        );
        for s in &summaries {
            println!(
                "{:<10}  {:>8}  {:>16}  {:>16}  {:>16}",
                s.convention,
                s.period_count,
                money(s.total_interest),
                money(s.total_paid),
                money(s.total_cost())
            );
        }
    }
}

fn cmd_template(args: &[String]) {
    let mut tag = Convention::French.tag().to_string();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--convention" => {
                i += 1;
                tag = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--convention requires a tag");
                    process::exit(1);
                });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let convention: Convention = tag.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default();
    let mut request = LoanRequest::new(
        10_000.0,
        10.0,
        12,
        Duration::years(5.0),
        convention.tag(),
        start,
    );
    if convention == Convention::Single {
        request = request.with_single_payment_date(start.with_year(start.year() + 1).unwrap_or(start));
    }

    let json = to_json(&request);
    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Wrote {} loan request → {}", convention, path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "schedule" => cmd_schedule(rest),
        "compare" => cmd_compare(rest),
        "template" => cmd_template(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
