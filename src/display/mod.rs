//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models as plain text tables and
//! lists.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use report::truncate;
pub use transaction::{format_added, format_transaction_table};
