//! JSON Export functionality
//!
//! Exports every category and transaction as a single JSON document with
//! schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SpendoraError, SpendoraResult};
use crate::models::{Category, Money, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All categories, in creation order
    pub categories: Vec<Category>,

    /// All transactions, newest first
    pub transactions: Vec<Transaction>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub category_count: usize,
    pub transaction_count: usize,
    /// Sum of all transaction amounts, in cents
    pub total_cents: i64,
}

impl FullExport {
    /// Snapshot the whole store
    pub fn from_storage(storage: &Storage) -> SpendoraResult<Self> {
        let categories = storage.categories().get_all()?;
        let transactions = storage.transactions().get_all()?;
        let total: Money = transactions.iter().map(|t| t.amount).sum();

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                category_count: categories.len(),
                transaction_count: transactions.len(),
                total_cents: total.cents(),
            },
            categories,
            transactions,
        })
    }
}

/// Export the full database as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> SpendoraResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| SpendoraError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| SpendoraError::Export(e.to_string()))?;
    Ok(())
}
