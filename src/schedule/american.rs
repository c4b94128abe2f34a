use crate::core::error::ScheduleError;
use crate::core::request::Convention;
use crate::core::row::PaymentRow;
use crate::schedule::engine::{phase_len_before, ScheduleBuilder, ScheduleEngine};
use crate::schedule::normalize::ScheduleTerms;
use log::debug;

/// Bullet amortization: interest only every period, with the whole
/// principal returned alongside the last interest payment.
///
/// Every period before the last is already interest-only, so a grace
/// phase has nothing to change and is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmericanEngine;

impl ScheduleEngine for AmericanEngine {
    fn convention(&self) -> Convention {
        Convention::American
    }

    fn schedule(&self, terms: &ScheduleTerms) -> Result<Vec<PaymentRow>, ScheduleError> {
        let plan = terms.schedule;
        let principal = terms.principal;
        let interest = principal * plan.rate_per_period;
        let span = plan.total_periods as f64 - plan.dead_periods;

        if plan.grace_periods > 0 {
            debug!("{} grace periods have no effect on a bullet schedule", plan.grace_periods);
        }

        let builder = ScheduleBuilder::new(terms)
            .dead_phase(plan.dead_periods)?
            .phase(phase_len_before(span), |cursor, date| {
                (
                    PaymentRow::interest_only(cursor.period, date, interest, cursor.balance),
                    cursor.balance,
                )
            })?;

        if span <= 0.0 {
            return Ok(builder.finish());
        }

        let rows = builder
            .phase(1, |cursor, date| {
                let row = PaymentRow {
                    period: cursor.period,
                    payment_date: date,
                    payment: interest + principal,
                    interest,
                    principal,
                    remaining: 0.0,
                };
                (row, 0.0)
            })?
            .finish();

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::normalize::NormalizedSchedule;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn terms(principal: f64, total: i64, rate: f64, grace: i64, dead: f64) -> ScheduleTerms {
        ScheduleTerms {
            principal,
            schedule: NormalizedSchedule {
                total_periods: total,
                rate_per_period: rate,
                grace_periods: grace,
                dead_periods: dead,
            },
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            payments_per_year: 2,
            nominal_annual_rate_percent: rate * 200.0,
            single_payment_date: None,
        }
    }

    #[test]
    fn test_two_period_bullet() {
        let rows = AmericanEngine.schedule(&terms(1000.0, 2, 0.10, 0, 0.0)).unwrap();
        assert_eq!(rows.len(), 2);

        assert_relative_eq!(rows[0].payment, 100.0);
        assert_relative_eq!(rows[0].interest, 100.0);
        assert_eq!(rows[0].principal, 0.0);
        assert_eq!(rows[0].remaining, 1000.0);

        assert_relative_eq!(rows[1].payment, 1100.0);
        assert_relative_eq!(rows[1].interest, 100.0);
        assert_eq!(rows[1].principal, 1000.0);
        assert_eq!(rows[1].remaining, 0.0);
    }

    #[test]
    fn test_grace_is_ignored() {
        let with_grace = AmericanEngine.schedule(&terms(1000.0, 4, 0.05, 2, 0.0)).unwrap();
        let without = AmericanEngine.schedule(&terms(1000.0, 4, 0.05, 0, 0.0)).unwrap();
        assert_eq!(with_grace, without);
    }

    #[test]
    fn test_dead_prefix_then_bullet() {
        let rows = AmericanEngine.schedule(&terms(1000.0, 4, 0.05, 0, 1.0)).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].payment, 0.0);
        assert_eq!(rows[0].remaining, 1000.0);
        assert_relative_eq!(rows[1].interest, 50.0);
        assert_eq!(rows[3].principal, 1000.0);
        assert_eq!(rows[3].period, 4);
        assert_eq!(rows[3].payment_date, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    }

    #[test]
    fn test_no_final_row_when_span_empty() {
        let rows = AmericanEngine.schedule(&terms(1000.0, 2, 0.05, 0, 2.0)).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.payment == 0.0));
        assert_eq!(rows.last().unwrap().remaining, 1000.0);
    }

    #[test]
    fn test_fractional_dead_keeps_every_interest_period() {
        // Annual payments with one dead semester: half a period of dead time.
        let mut t = terms(1000.0, 3, 0.10, 0, 0.5);
        t.payments_per_year = 1;
        let rows = AmericanEngine.schedule(&t).unwrap();

        assert_eq!(rows.len(), 3);
        assert_relative_eq!(rows[0].payment, 100.0);
        assert_eq!(rows[0].principal, 0.0);
        assert_eq!(rows[0].payment_date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_relative_eq!(rows[1].payment, 100.0);
        assert_eq!(rows[1].principal, 0.0);
        assert_eq!(rows[1].payment_date, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
        assert_relative_eq!(rows[2].payment, 1100.0);
        assert_eq!(rows[2].principal, 1000.0);
        assert_eq!(rows[2].remaining, 0.0);
        assert_eq!(rows[2].period, 3);
        assert_eq!(rows[2].payment_date, NaiveDate::from_ymd_opt(2028, 1, 1).unwrap());
    }

    #[test]
    fn test_zero_periods() {
        let rows = AmericanEngine.schedule(&terms(1000.0, 0, 0.05, 0, 0.0)).unwrap();
        assert!(rows.is_empty());
    }
}
