use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar unit in which a loan or grace-phase duration is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    /// How many of this unit make up one year.
    pub fn per_year(&self) -> f64 {
        match self {
            DurationUnit::Days => 365.0,
            DurationUnit::Weeks => 52.0,
            DurationUnit::Months => 12.0,
            DurationUnit::Years => 1.0,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        };
        write!(f, "{}", name)
    }
}

/// A length of time as entered by the borrower, e.g. `18 months`.
///
/// No bounds are enforced: zero or negative values pass straight through
/// and simply yield empty phases downstream.
///
/// # Examples
///
/// ```
/// use amortization_engine::core::units::{Duration, DurationUnit};
///
/// let d = Duration::new(18.0, DurationUnit::Months);
/// assert_eq!(d.in_years(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Duration {
    pub value: f64,
    pub unit: DurationUnit,
}

impl Duration {
    pub fn new(value: f64, unit: DurationUnit) -> Self {
        Self { value, unit }
    }

    pub fn years(value: f64) -> Self {
        Self::new(value, DurationUnit::Years)
    }

    pub fn months(value: f64) -> Self {
        Self::new(value, DurationUnit::Months)
    }

    /// Zero-length duration, used as the default grace phase.
    pub fn zero() -> Self {
        Self::new(0.0, DurationUnit::Months)
    }

    /// Fractional years using fixed divisors (365 days, 52 weeks, 12 months).
    pub fn in_years(&self) -> f64 {
        self.value / self.unit.per_year()
    }

    /// Number of payment periods this duration spans, rounded to the nearest integer.
    pub fn in_periods(&self, payments_per_year: u32) -> i64 {
        (self.in_years() * f64::from(payments_per_year)).round() as i64
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
