use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of an amortization table.
///
/// `payment == interest + principal` for every row except dead-phase rows,
/// which are all zero. `remaining` is the balance after this period's
/// principal has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    /// 1-based period index.
    pub period: u32,
    pub payment_date: NaiveDate,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub remaining: f64,
}

impl PaymentRow {
    /// A row in which nothing is paid and nothing accrues.
    pub fn dead(period: u32, payment_date: NaiveDate, remaining: f64) -> Self {
        Self {
            period,
            payment_date,
            payment: 0.0,
            interest: 0.0,
            principal: 0.0,
            remaining,
        }
    }

    /// A row that pays interest only, leaving the balance untouched.
    pub fn interest_only(period: u32, payment_date: NaiveDate, interest: f64, remaining: f64) -> Self {
        Self {
            period,
            payment_date,
            payment: interest,
            interest,
            principal: 0.0,
            remaining,
        }
    }
}
