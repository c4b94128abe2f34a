use crate::core::request::LoanRequest;
use crate::core::row::PaymentRow;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round a computed amount to cents for display.
///
/// Returns `None` for non-finite values, which the engine lets through
/// unchecked.
pub fn round_money(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|d| d.round_dp(2))
}

/// Totals over a computed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Convention tag the schedule was computed under.
    pub convention: String,
    pub principal: f64,
    pub period_count: usize,
    /// Sum of interest across all rows.
    pub total_interest: f64,
    /// Sum of principal repaid across all rows.
    pub total_principal: f64,
    /// Sum of payments across all rows.
    pub total_paid: f64,
    /// Up-front fee charged on the principal.
    pub opening_fee: f64,
    /// Balance after the last row (principal if there are no rows).
    pub final_balance: f64,
}

impl ScheduleSummary {
    /// Derive totals from a schedule and the request it was computed for.
    pub fn from_rows(rows: &[PaymentRow], request: &LoanRequest) -> Self {
        let principal = request.principal();
        ScheduleSummary {
            convention: request.repayment_convention().to_string(),
            principal,
            period_count: rows.len(),
            total_interest: rows.iter().map(|r| r.interest).sum(),
            total_principal: rows.iter().map(|r| r.principal).sum(),
            total_paid: rows.iter().map(|r| r.payment).sum(),
            opening_fee: principal * request.opening_fee_percent() / 100.0,
            final_balance: rows.last().map_or(principal, |r| r.remaining),
        }
    }

    /// Everything the borrower pays, fee included.
    pub fn total_cost(&self) -> f64 {
        self.total_paid + self.opening_fee
    }

    /// True when the schedule retires the loan.
    pub fn is_fully_repaid(&self) -> bool {
        self.final_balance == 0.0
    }
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Loan Summary ({}) ===", self.convention)?;
        writeln!(f, "Principal:      {}", money(self.principal))?;
        writeln!(f, "Periods:        {}", self.period_count)?;
        writeln!(f, "Total Interest: {}", money(self.total_interest))?;
        writeln!(f, "Total Paid:     {}", money(self.total_paid))?;
        writeln!(f, "Opening Fee:    {}", money(self.opening_fee))?;
        writeln!(f, "Total Cost:     {}", money(self.total_cost()))?;
        if !self.is_fully_repaid() {
            writeln!(f, "Outstanding:    {}", money(self.final_balance))?;
        }
        Ok(())
    }
}

/// A payment row with amounts rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedRow {
    pub period: u32,
    pub payment_date: NaiveDate,
    pub payment: Option<Decimal>,
    pub interest: Option<Decimal>,
    pub principal: Option<Decimal>,
    pub remaining: Option<Decimal>,
}

impl From<&PaymentRow> for RenderedRow {
    fn from(row: &PaymentRow) -> Self {
        RenderedRow {
            period: row.period,
            payment_date: row.payment_date,
            payment: round_money(row.payment),
            interest: round_money(row.interest),
            principal: round_money(row.principal),
            remaining: round_money(row.remaining),
        }
    }
}

/// Plain-text amortization table, one line per row.
pub fn render_table(rows: &[PaymentRow]) -> String {
    let mut out = format!(
        "{:>6}  {:<10}  {:>14}  {:>14}  {:>14}  {:>16}\n",
        "Period", "Date", "Payment", "Interest", "Principal", "Remaining"
    );
    for row in rows {
        out.push_str(&format!(
            "{:>6}  {:<10}  {:>14}  {:>14}  {:>14}  {:>16}\n",
            row.period,
            row.payment_date,
            money(row.payment),
            money(row.interest),
            money(row.principal),
            money(row.remaining),
        ));
    }
    out
}

fn money(value: f64) -> String {
    match round_money(value) {
        Some(d) => format!("{:.2}", d),
        None => value.to_string(),
    }
}
