//! Payment date arithmetic.

use crate::core::error::ScheduleError;
use chrono::{Months, NaiveDate};

/// Whole calendar months between two consecutive payments.
///
/// Truncating division: frequencies above twelve per year yield zero months,
/// so their payment dates do not move.
pub fn months_per_payment(payments_per_year: u32) -> Option<u32> {
    12u32.checked_div(payments_per_year)
}

/// Next payment date after `date` at the given frequency.
///
/// Month-end overflow follows chrono and clamps to the last day of the
/// target month (Jan 31 + 1 month = Feb 28).
///
/// # Examples
///
/// ```
/// use amortization_engine::core::dates::advance;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(advance(d, 4).unwrap(), NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
/// ```
pub fn advance(date: NaiveDate, payments_per_year: u32) -> Result<NaiveDate, ScheduleError> {
    months_per_payment(payments_per_year)
        .and_then(|months| date.checked_add_months(Months::new(months)))
        .ok_or(ScheduleError::DateOutOfRange {
            date,
            payments_per_year,
        })
}
