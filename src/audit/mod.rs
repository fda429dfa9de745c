//! Audit logging system for Spendora
//!
//! Records every category and transaction written to the store in an
//! append-only, line-delimited JSON log next to the database.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information, and a snapshot of the entity.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
