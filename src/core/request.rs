use crate::core::error::ScheduleError;
use crate::core::units::Duration;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Repayment convention used to split each payment into interest and principal.
///
/// # Examples
///
/// ```
/// use amortization_engine::core::request::Convention;
///
/// let c: Convention = "german".parse().unwrap();
/// assert_eq!(c, Convention::German);
/// assert!("balloon".parse::<Convention>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Level total payment (annuity).
    French,
    /// Level principal payment (linear).
    German,
    /// Interest only, principal repaid in full with the last payment (bullet).
    American,
    /// Interest and principal repaid together on one date.
    Single,
}

impl Convention {
    pub const ALL: [Convention; 4] = [
        Convention::French,
        Convention::German,
        Convention::American,
        Convention::Single,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Convention::French => "french",
            Convention::German => "german",
            Convention::American => "american",
            Convention::Single => "single",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Convention {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Convention::ALL
            .into_iter()
            .find(|c| c.tag() == s)
            .ok_or_else(|| ScheduleError::UnsupportedConvention(s.to_string()))
    }
}

/// A loan as submitted for schedule computation.
///
/// The repayment convention is held as the raw tag supplied by the caller;
/// it is resolved (and rejected if unknown) only when a schedule is computed.
/// Nothing else is validated.
///
/// # Examples
///
/// ```
/// use amortization_engine::core::request::LoanRequest;
/// use amortization_engine::core::units::Duration;
/// use chrono::NaiveDate;
///
/// let request = LoanRequest::new(
///     200_000.0,
///     3.5,
///     12,
///     Duration::years(25.0),
///     "french",
///     NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
/// )
/// .with_grace_period(Duration::months(6.0));
///
/// assert_eq!(request.principal(), 200_000.0);
/// assert_eq!(request.repayment_convention(), "french");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed.
    principal: f64,
    /// Nominal annual rate in percent (12 means 12%).
    nominal_annual_rate_percent: f64,
    /// Payments per year (1, 2, 4, 12, ...).
    payments_per_year: u32,
    /// Total loan duration.
    duration: Duration,
    /// Interest-only phase length.
    #[serde(default)]
    grace_period: Duration,
    /// Non-accruing phase length, in semesters.
    #[serde(default)]
    dead_period_semesters: f64,
    /// Raw convention tag, e.g. "french".
    repayment_convention: String,
    /// Anchor from which the first payment date is computed.
    start_date: NaiveDate,
    /// Repayment date for the single-payment convention.
    #[serde(default)]
    single_payment_date: Option<NaiveDate>,
    /// Up-front fee as a percentage of principal; reported, never amortized.
    #[serde(default)]
    opening_fee_percent: f64,
}

impl LoanRequest {
    pub fn new(
        principal: f64,
        nominal_annual_rate_percent: f64,
        payments_per_year: u32,
        duration: Duration,
        repayment_convention: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            principal,
            nominal_annual_rate_percent,
            payments_per_year,
            duration,
            grace_period: Duration::zero(),
            dead_period_semesters: 0.0,
            repayment_convention: repayment_convention.into(),
            start_date,
            single_payment_date: None,
            opening_fee_percent: 0.0,
        }
    }

    /// Set the interest-only phase.
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Set the non-accruing phase, measured in semesters.
    pub fn with_dead_period_semesters(mut self, semesters: f64) -> Self {
        self.dead_period_semesters = semesters;
        self
    }

    /// Set the repayment date used by the single-payment convention.
    pub fn with_single_payment_date(mut self, date: NaiveDate) -> Self {
        self.single_payment_date = Some(date);
        self
    }

    pub fn with_opening_fee_percent(mut self, percent: f64) -> Self {
        self.opening_fee_percent = percent;
        self
    }

    /// Same loan under a different convention tag.
    pub fn with_convention(mut self, tag: impl Into<String>) -> Self {
        self.repayment_convention = tag.into();
        self
    }

    // --- Accessors ---

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn nominal_annual_rate_percent(&self) -> f64 {
        self.nominal_annual_rate_percent
    }

    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    pub fn dead_period_semesters(&self) -> f64 {
        self.dead_period_semesters
    }

    pub fn repayment_convention(&self) -> &str {
        &self.repayment_convention
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn single_payment_date(&self) -> Option<NaiveDate> {
        self.single_payment_date
    }

    pub fn opening_fee_percent(&self) -> f64 {
        self.opening_fee_percent
    }

    /// Resolve the convention tag.
    pub fn convention(&self) -> Result<Convention, ScheduleError> {
        self.repayment_convention.parse()
    }
}
