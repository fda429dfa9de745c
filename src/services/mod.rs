//! Service layer for Spendora
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, defaults, and cross-entity operations.

pub mod category;
pub mod transaction;

pub use category::CategoryService;
pub use transaction::{CreateTransactionInput, TransactionService};
