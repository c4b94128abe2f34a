use crate::core::error::ScheduleError;
use crate::core::request::Convention;
use crate::core::row::PaymentRow;
use crate::schedule::engine::{floor_residue, phase_len, ScheduleBuilder, ScheduleEngine};
use crate::schedule::normalize::ScheduleTerms;

/// Level payment that retires `principal` over `periods` at `rate` per period.
///
/// `principal · r(1+r)^n / ((1+r)^n − 1)`. Zero when `periods <= 0`; at a
/// zero rate the limit `principal / n` is used.
///
/// # Examples
///
/// ```
/// use amortization_engine::schedule::french::level_payment;
///
/// let payment = level_payment(1000.0, 0.10, 2.0);
/// assert!((payment - 576.190476).abs() < 1e-6);
/// ```
pub fn level_payment(principal: f64, rate: f64, periods: f64) -> f64 {
    if periods <= 0.0 {
        return 0.0;
    }
    if rate == 0.0 {
        return principal / periods;
    }
    let growth = (1.0 + rate).powf(periods);
    principal * (rate * growth) / (growth - 1.0)
}

/// Annuity amortization: every regular payment is the same amount, with the
/// interest share shrinking as the balance falls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchEngine;

impl ScheduleEngine for FrenchEngine {
    fn convention(&self) -> Convention {
        Convention::French
    }

    fn schedule(&self, terms: &ScheduleTerms) -> Result<Vec<PaymentRow>, ScheduleError> {
        let plan = terms.schedule;
        let rate = plan.rate_per_period;
        let regular = plan.regular_periods();
        let payment = level_payment(terms.principal, rate, regular);

        let rows = ScheduleBuilder::new(terms)
            .dead_phase(plan.dead_periods)?
            .grace_phase(plan.grace_periods, rate)?
            .phase(phase_len(regular), |cursor, date| {
                let interest = cursor.balance * rate;
                let principal = payment - interest;
                let balance = cursor.balance - principal;
                let row = PaymentRow {
                    period: cursor.period,
                    payment_date: date,
                    payment,
                    interest,
                    principal,
                    remaining: floor_residue(balance),
                };
                (row, balance)
            })?
            .finish();

        Ok(rows)
    }
}
