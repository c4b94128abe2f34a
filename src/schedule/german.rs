use crate::core::error::ScheduleError;
use crate::core::request::Convention;
use crate::core::row::PaymentRow;
use crate::schedule::engine::{floor_residue, phase_len, ScheduleBuilder, ScheduleEngine};
use crate::schedule::normalize::ScheduleTerms;

/// Linear amortization: the same principal portion every regular period,
/// so the total payment falls along with the interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanEngine;

impl ScheduleEngine for GermanEngine {
    fn convention(&self) -> Convention {
        Convention::German
    }

    fn schedule(&self, terms: &ScheduleTerms) -> Result<Vec<PaymentRow>, ScheduleError> {
        let plan = terms.schedule;
        let rate = plan.rate_per_period;
        let regular = plan.regular_periods();

        let builder = ScheduleBuilder::new(terms)
            .dead_phase(plan.dead_periods)?
            .grace_phase(plan.grace_periods, rate)?;

        if regular <= 0.0 {
            return Ok(builder.finish());
        }

        let principal = terms.principal / regular;
        let rows = builder
            .phase(phase_len(regular), |cursor, date| {
                let interest = cursor.balance * rate;
                let balance = cursor.balance - principal;
                let row = PaymentRow {
                    period: cursor.period,
                    payment_date: date,
                    payment: principal + interest,
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
