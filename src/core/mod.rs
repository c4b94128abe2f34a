//! Loan inputs, payment rows and the leaf helpers the engines build on.

pub mod dates;
pub mod error;
pub mod request;
pub mod row;
pub mod units;
