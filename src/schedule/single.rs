use crate::core::dates::advance;
use crate::core::error::ScheduleError;
use crate::core::request::Convention;
use crate::core::row::PaymentRow;
use crate::schedule::engine::ScheduleEngine;
use crate::schedule::normalize::ScheduleTerms;
use chrono::NaiveDate;

/// Days in the simple-interest year.
const DAYS_PER_YEAR: f64 = 365.0;

/// One-shot repayment: principal plus actual/365 simple interest, paid on a
/// single date. Dead and grace phases do not apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePaymentEngine;

impl SinglePaymentEngine {
    /// The repayment date: the explicit one if set, otherwise the end of the term.
    fn payment_date(terms: &ScheduleTerms) -> Result<NaiveDate, ScheduleError> {
        match terms.single_payment_date {
            Some(date) => Ok(date),
            None => {
                let periods = terms.schedule.total_periods.max(0);
                (0..periods).try_fold(terms.start_date, |date, _| {
                    advance(date, terms.payments_per_year)
                })
            }
        }
    }
}

impl ScheduleEngine for SinglePaymentEngine {
    fn convention(&self) -> Convention {
        Convention::Single
    }

    fn schedule(&self, terms: &ScheduleTerms) -> Result<Vec<PaymentRow>, ScheduleError> {
        let payment_date = Self::payment_date(terms)?;
        let days = (payment_date - terms.start_date).num_days() as f64;
        let interest =
            terms.principal * terms.nominal_annual_rate_percent / 100.0 * days / DAYS_PER_YEAR;

        Ok(vec![PaymentRow {
            period: 1,
            payment_date,
            payment: terms.principal + interest,
            interest,
            principal: terms.principal,
            remaining: 0.0,
        }])
    }
}
