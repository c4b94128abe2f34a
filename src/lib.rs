//! # amortization-engine
//!
//! Loan amortization schedule engine.
//!
//! Given a principal, a nominal annual rate, a duration and a payment
//! frequency, this engine lays out the repayment table period by period,
//! including an optional non-accruing dead phase and an interest-only
//! grace phase.
//!
//! ## Architecture
//!
//! - **core**: Loan request, payment rows, duration units, date advancement, errors
//! - **schedule**: Unit normalization, French/German/American/single engines, dispatch
//! - **report**: Schedule totals and cent-rounded rendering
//!
//! All arithmetic is `f64`; nothing is rounded until rendering, apart from
//! the residue floor on the reported balance.

pub mod core;
pub mod report;
pub mod schedule;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::error::ScheduleError;
    pub use crate::core::request::{Convention, LoanRequest};
    pub use crate::core::row::PaymentRow;
    pub use crate::core::units::{Duration, DurationUnit};
    pub use crate::report::summary::ScheduleSummary;
    pub use crate::schedule::dispatch::compute_amortization_schedule;
    pub use crate::schedule::engine::ScheduleEngine;
    pub use crate::schedule::normalize::{NormalizedSchedule, ScheduleTerms};
}
