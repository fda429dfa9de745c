//! CSV Export functionality
//!
//! Exports transactions to a spreadsheet-compatible CSV file.

use std::io::Write;

use crate::error::{SpendoraError, SpendoraResult};
use crate::storage::Storage;

/// Export all transactions to CSV, newest first
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> SpendoraResult<()> {
    let transactions = storage.transactions().get_all()?;
    let to_export_err = |e: csv::Error| SpendoraError::Export(e.to_string());

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["ID", "Date", "Category", "Description", "Amount"])
        .map_err(to_export_err)?;

    for txn in &transactions {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.category.clone(),
                txn.description.clone(),
                txn.amount.to_decimal_string(),
            ])
            .map_err(to_export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendoraError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendoraPaths;
    use crate::models::Money;
    use crate::services::{CreateTransactionInput, TransactionService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        TransactionService::new(&storage)
            .add(CreateTransactionInput {
                amount: Money::from_cents(4000),
                description: "Gas, premium".into(),
                category: "Transport".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 10),
            })
            .unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "ID,Date,Category,Description,Amount");
        assert_eq!(lines[1], "1,2024-01-10,Transport,\"Gas, premium\",40.00");
    }
}
