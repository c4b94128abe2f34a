use chrono::NaiveDate;
use thiserror::Error;

/// Errors arising from schedule computation.
///
/// Degenerate schedules (empty regular phase, residual balance) are not
/// errors; they come back as ordinary, possibly short, row sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The repayment convention tag is not one the engine knows.
    #[error("unsupported repayment convention: {0}")]
    UnsupportedConvention(String),
    /// The next payment date cannot be represented.
    #[error("cannot advance {date} by one payment interval at {payments_per_year} payments per year")]
    DateOutOfRange {
        date: NaiveDate,
        payments_per_year: u32,
    },
}
