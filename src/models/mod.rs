//! Core data models for Spendora
//!
//! This module contains the data structures that represent the expense
//! domain: categories, transactions, money amounts, and calendar periods.

pub mod category;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::Category;
pub use money::Money;
pub use period::{Month, Year};
pub use transaction::{NewTransaction, Transaction};
