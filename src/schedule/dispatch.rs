use crate::core::error::ScheduleError;
use crate::core::request::{Convention, LoanRequest};
use crate::core::row::PaymentRow;
use crate::schedule::american::AmericanEngine;
use crate::schedule::engine::ScheduleEngine;
use crate::schedule::french::FrenchEngine;
use crate::schedule::german::GermanEngine;
use crate::schedule::normalize::ScheduleTerms;
use crate::schedule::single::SinglePaymentEngine;
use log::{debug, warn};

/// The engine implementing `convention`.
pub fn engine_for(convention: Convention) -> &'static dyn ScheduleEngine {
    match convention {
        Convention::French => &FrenchEngine,
        Convention::German => &GermanEngine,
        Convention::American => &AmericanEngine,
        Convention::Single => &SinglePaymentEngine,
    }
}

/// Compute the full amortization table for a loan.
///
/// Resolves the convention tag, normalizes units and delegates to the
/// matching engine. An unknown tag is the only rejected input; it fails
/// before any row is produced.
///
/// # Examples
///
/// ```
/// use amortization_engine::schedule::dispatch::compute_amortization_schedule;
/// use amortization_engine::core::request::LoanRequest;
/// use amortization_engine::core::units::Duration;
/// use chrono::NaiveDate;
///
/// let request = LoanRequest::new(
///     1200.0,
///     12.0,
///     1,
///     Duration::years(1.0),
///     "french",
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
/// );
/// let rows = compute_amortization_schedule(&request).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].remaining, 0.0);
/// ```
pub fn compute_amortization_schedule(
    request: &LoanRequest,
) -> Result<Vec<PaymentRow>, ScheduleError> {
    let convention = request.convention()?;
    let terms = ScheduleTerms::from_request(request);
    compute_with(convention, &terms)
}

/// Compute a schedule for already-normalized terms under a given convention.
pub fn compute_with(
    convention: Convention,
    terms: &ScheduleTerms,
) -> Result<Vec<PaymentRow>, ScheduleError> {
    let engine = engine_for(convention);
    debug!(
        "{} schedule: principal {}, {} periods from {}",
        engine.convention(),
        terms.principal,
        terms.schedule.total_periods,
        terms.start_date
    );

    let rows = engine.schedule(terms)?;

    if convention != Convention::American && convention != Convention::Single {
        let regular = terms.schedule.regular_periods();
        if regular <= 0.0 {
            warn!(
                "{} schedule has no amortizing periods ({} total, {} grace, {} dead)",
                convention,
                terms.schedule.total_periods,
                terms.schedule.grace_periods,
                terms.schedule.dead_periods
            );
        }
    }
    if let Some(last) = rows.last() {
        if last.remaining != 0.0 {
            warn!(
                "{} schedule ends with outstanding balance {} after period {}",
                convention, last.remaining, last.period
            );
        }
    }

    Ok(rows)
}
