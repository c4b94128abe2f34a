use crate::core::request::LoanRequest;
use chrono::NaiveDate;
use log::{debug, warn};

/// Period counts and per-period rate derived from a [`LoanRequest`].
///
/// `total_periods >= grace_periods + dead_periods` is not enforced; when it
/// does not hold the regular phase is empty or truncated.
///
/// `dead_periods` stays fractional: the semester conversion is not rounded,
/// unlike the other two durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedSchedule {
    pub total_periods: i64,
    pub rate_per_period: f64,
    pub grace_periods: i64,
    pub dead_periods: f64,
}

impl NormalizedSchedule {
    /// Convert the request's mixed units into payment periods.
    pub fn from_request(request: &LoanRequest) -> Self {
        let payments_per_year = request.payments_per_year();
        let ppy = f64::from(payments_per_year);
        let months_per_payment = 12.0 / ppy;

        let normalized = Self {
            total_periods: request.duration().in_periods(payments_per_year),
            rate_per_period: request.nominal_annual_rate_percent() / 100.0 / ppy,
            grace_periods: request.grace_period().in_periods(payments_per_year),
            dead_periods: request.dead_period_semesters() * (6.0 / months_per_payment),
        };

        debug!(
            "normalized {} over {} at {}/yr: {} periods ({} dead, {} grace), rate {}",
            request.repayment_convention(),
            request.duration(),
            payments_per_year,
            normalized.total_periods,
            normalized.dead_periods,
            normalized.grace_periods,
            normalized.rate_per_period
        );
        if !normalized.rate_per_period.is_finite() {
            warn!(
                "rate per period is {} (payments per year = {})",
                normalized.rate_per_period, payments_per_year
            );
        }

        normalized
    }

    /// Length of the amortizing phase: total minus grace minus dead.
    pub fn regular_periods(&self) -> f64 {
        self.total_periods as f64 - self.grace_periods as f64 - self.dead_periods
    }
}

/// Everything an engine needs to lay out a schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleTerms {
    pub principal: f64,
    pub schedule: NormalizedSchedule,
    pub start_date: NaiveDate,
    pub payments_per_year: u32,
    pub nominal_annual_rate_percent: f64,
    pub single_payment_date: Option<NaiveDate>,
}

impl ScheduleTerms {
    pub fn from_request(request: &LoanRequest) -> Self {
        Self {
            principal: request.principal(),
            schedule: NormalizedSchedule::from_request(request),
            start_date: request.start_date(),
            payments_per_year: request.payments_per_year(),
            nominal_annual_rate_percent: request.nominal_annual_rate_percent(),
            single_payment_date: request.single_payment_date(),
        }
    }
}
