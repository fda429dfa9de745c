//! Transaction CLI commands
//!
//! Implements the `add` and `list` commands for recording and browsing
//! expenses.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_added, format_transaction_table};
use crate::error::{SpendoraError, SpendoraResult};
use crate::models::period::parse_date;
use crate::models::{Money, Month};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g., "12.50" or "$12.50")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// What the money was spent on
    #[arg(short, long)]
    pub description: String,

    /// Category name (created if it does not exist)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short = 't', long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only show expenses in this month (MM-YYYY)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Maximum number of expenses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle the `add` command
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> SpendoraResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| SpendoraError::Validation(format!("Invalid amount: {}", e)))?;

    let date = args
        .date
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(|e| SpendoraError::Validation(e.to_string()))?;

    let category = args
        .category
        .unwrap_or_else(|| settings.default_category.clone());

    let service = TransactionService::new(storage);
    let txn = service.add(CreateTransactionInput {
        amount,
        description: args.description,
        category,
        date,
    })?;

    println!(
        "{}",
        format_added(&txn, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

/// Handle the `list` command
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> SpendoraResult<()> {
    let month = args
        .month
        .as_deref()
        .map(Month::parse)
        .transpose()
        .map_err(|e| SpendoraError::Validation(e.to_string()))?;
    let limit = args.limit.unwrap_or(settings.default_list_limit);

    let service = TransactionService::new(storage);
    let transactions = service.list(args.category.as_deref(), month, limit)?;

    print!(
        "{}",
        format_transaction_table(
            &transactions,
            &settings.currency_symbol,
            &settings.date_format
        )
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendoraPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn add_args(amount: &str, category: Option<&str>, date: Option<&str>) -> AddArgs {
        AddArgs {
            amount: amount.to_string(),
            description: "Coffee".to_string(),
            category: category.map(String::from),
            date: date.map(String::from),
        }
    }

    #[test]
    fn test_add_uses_default_category() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        handle_add_command(&storage, &settings, add_args("4.25", None, Some("2024-02-01")))
            .unwrap();

        let all = storage.transactions().get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category, "Miscellaneous");
        assert_eq!(all[0].amount, Money::from_cents(425));
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let err = handle_add_command(&storage, &settings, add_args("abc", Some("Food"), None))
            .unwrap_err();
        assert!(err.is_validation());

        let err = handle_add_command(&storage, &settings, add_args("-5", Some("Food"), None))
            .unwrap_err();
        assert!(err.is_validation());

        let err = handle_add_command(
            &storage,
            &settings,
            add_args("5", Some("Food"), Some("2024-13-01")),
        )
        .unwrap_err();
        assert!(err.is_validation());

        assert_eq!(storage.transactions().count().unwrap(), 0);
    }

    #[test]
    fn test_list_rejects_bad_month() {
        let (_temp_dir, storage) = create_test_storage();
        let args = ListArgs {
            category: None,
            month: Some("2024/01".to_string()),
            limit: None,
        };

        let err = handle_list_command(&storage, &Settings::default(), args).unwrap_err();
        assert!(err.is_validation());
    }
}
