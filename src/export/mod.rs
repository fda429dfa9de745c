//! Export module for Spendora
//!
//! Provides data export in multiple formats:
//! - CSV: transactions only (spreadsheet-compatible)
//! - JSON: categories and transactions, machine-readable
//! - YAML: categories and transactions, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
