//! Shared machinery for the recurrence engines.
//!
//! A schedule is laid out as consecutive phases (dead, grace, regular).
//! Each phase is a fold over its period indices: every step sees the
//! previous balance and date and yields one row plus the next balance.

use crate::core::dates::advance;
use crate::core::error::ScheduleError;
use crate::core::request::Convention;
use crate::core::row::PaymentRow;
use crate::schedule::normalize::ScheduleTerms;
use chrono::NaiveDate;

/// Balances below this are reported as fully repaid.
pub const RESIDUE_THRESHOLD: f64 = 0.01;

/// A repayment convention's schedule generator.
pub trait ScheduleEngine {
    /// The convention this engine implements.
    fn convention(&self) -> Convention;

    /// Lay out the full payment table for the given terms.
    fn schedule(&self, terms: &ScheduleTerms) -> Result<Vec<PaymentRow>, ScheduleError>;
}

/// Report a post-payment balance, zeroing floating-point residue.
///
/// Anything below [`RESIDUE_THRESHOLD`] becomes zero, including negative
/// overshoot and genuinely small positive leftovers.
pub fn floor_residue(balance: f64) -> f64 {
    if balance < RESIDUE_THRESHOLD {
        0.0
    } else {
        balance
    }
}

/// Rows emitted by a phase of (possibly fractional) length `length`.
///
/// Counts `i = 1, 2, ...` while `i <= length`, so fractional lengths round
/// down and anything below one emits nothing.
pub fn phase_len(length: f64) -> usize {
    if length >= 1.0 {
        length.floor() as usize
    } else {
        0
    }
}

/// Rows emitted while `i = 1, 2, ...` stays strictly below `length`.
///
/// Unlike [`phase_len`], a fractional length rounds up before the last
/// index is excluded: both `2.5` and `3.0` yield two rows.
pub fn phase_len_before(length: f64) -> usize {
    if length > 1.0 {
        length.ceil() as usize - 1
    } else {
        0
    }
}

/// Position carried from one period to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// Index the next emitted row will carry.
    pub period: u32,
    /// Outstanding balance before the next period.
    pub balance: f64,
    /// Date of the previous payment (or the start date).
    pub date: NaiveDate,
}

/// Fold `length` periods starting from `start`.
///
/// `step` receives the previous cursor and this period's payment date and
/// returns the row together with the balance carried forward.
pub fn fold_phase<F>(
    length: usize,
    start: Cursor,
    payments_per_year: u32,
    step: F,
) -> Result<(Vec<PaymentRow>, Cursor), ScheduleError>
where
    F: Fn(&Cursor, NaiveDate) -> (PaymentRow, f64),
{
    (0..length).try_fold((Vec::new(), start), |(mut rows, cursor), _| -> Result<_, ScheduleError> {
        let date = advance(cursor.date, payments_per_year)?;
        let (row, balance) = step(&cursor, date);
        rows.push(row);
        let next = Cursor {
            period: cursor.period + 1,
            balance,
            date,
        };
        Ok((rows, next))
    })
}

/// Accumulates the phases of one schedule.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    rows: Vec<PaymentRow>,
    cursor: Cursor,
    payments_per_year: u32,
}

impl ScheduleBuilder {
    pub fn new(terms: &ScheduleTerms) -> Self {
        Self {
            rows: Vec::new(),
            cursor: Cursor {
                period: 1,
                balance: terms.principal,
                date: terms.start_date,
            },
            payments_per_year: terms.payments_per_year,
        }
    }

    /// Append a phase of `length` periods.
    pub fn phase<F>(mut self, length: usize, step: F) -> Result<Self, ScheduleError>
    where
        F: Fn(&Cursor, NaiveDate) -> (PaymentRow, f64),
    {
        let (rows, cursor) = fold_phase(length, self.cursor, self.payments_per_year, step)?;
        self.rows.extend(rows);
        self.cursor = cursor;
        Ok(self)
    }

    /// Periods with no payment and no accrual; the balance is frozen.
    pub fn dead_phase(self, dead_periods: f64) -> Result<Self, ScheduleError> {
        self.phase(phase_len(dead_periods), |cursor, date| {
            (PaymentRow::dead(cursor.period, date, cursor.balance), cursor.balance)
        })
    }

    /// Interest-only periods on the outstanding balance.
    pub fn grace_phase(self, grace_periods: i64, rate: f64) -> Result<Self, ScheduleError> {
        let length = usize::try_from(grace_periods).unwrap_or(0);
        self.phase(length, |cursor, date| {
            let interest = cursor.balance * rate;
            (
                PaymentRow::interest_only(cursor.period, date, interest, cursor.balance),
                cursor.balance,
            )
        })
    }

    pub fn finish(self) -> Vec<PaymentRow> {
        self.rows
    }
}
