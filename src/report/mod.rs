//! Totals and 2-dp rendering for computed schedules.

pub mod summary;
