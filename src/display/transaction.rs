//! Transaction display formatting
//!
//! Formats expenses as a fixed-width table for terminal output.

use super::report::truncate;
use crate::models::Transaction;

/// Message printed when a listing matches nothing
pub const NO_TRANSACTIONS: &str = "No transactions found matching your criteria.";

/// Format a single transaction as a table row
pub fn format_transaction_row(
    txn: &Transaction,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    format!(
        "{:<12}{:<15}{:<11}{}",
        txn.date.format(date_format).to_string(),
        truncate(&txn.category, 14),
        txn.amount.format_with_symbol(currency_symbol),
        truncate(&txn.description, 30)
    )
}

/// Format a list of transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return format!("{}\n", NO_TRANSACTIONS);
    }

    let mut output = String::new();
    output.push_str("Transaction List:\n");
    output.push_str(&"-".repeat(70));
    output.push('\n');
    output.push_str(&format!(
        "{:<12}{:<15}{:<11}{}\n",
        "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for txn in transactions {
        output.push_str(format_transaction_row(txn, currency_symbol, date_format).trim_end());
        output.push('\n');
    }

    output
}

/// One-line confirmation after an expense is recorded
pub fn format_added(txn: &Transaction, currency_symbol: &str, date_format: &str) -> String {
    format!(
        "Added expense: {} for {} in category '{}' on {}",
        txn.amount.format_with_symbol(currency_symbol),
        txn.description,
        txn.category,
        txn.date.format(date_format)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{NaiveDate, Utc};

    const ISO: &str = "%Y-%m-%d";

    fn coffee() -> Transaction {
        Transaction {
            id: 1,
            amount: Money::from_cents(1250),
            description: "Coffee".into(),
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row() {
        let row = format_transaction_row(&coffee(), "$", ISO);
        assert!(row.starts_with("2024-01-05  Food"));
        assert!(row.contains("$12.50"));
        assert!(row.ends_with("Coffee"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], "$", ISO),
            "No transactions found matching your criteria.\n"
        );
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = format_transaction_table(&[coffee(), coffee()], "$", ISO);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with("Date"));
    }

    #[test]
    fn test_format_added() {
        assert_eq!(
            format_added(&coffee(), "$", ISO),
            "Added expense: $12.50 for Coffee in category 'Food' on 2024-01-05"
        );
    }

    #[test]
    fn test_custom_date_format() {
        let row = format_transaction_row(&coffee(), "€", "%d/%m/%Y");
        assert!(row.starts_with("05/01/2024  Food"));
        assert!(row.contains("€12.50"));

        assert_eq!(
            format_added(&coffee(), "$", "%b %d, %Y"),
            "Added expense: $12.50 for Coffee in category 'Food' on Jan 05, 2024"
        );
    }
}
