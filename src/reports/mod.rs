//! Reports module for Spendora
//!
//! Aggregates expense totals by category or by month.

pub mod summary;

pub use summary::{ReportKind, ReportPeriod, SummaryReport, SummaryRow};
