//! Transaction service
//!
//! Provides business logic for recording and listing expenses. Adding an
//! expense ensures its category exists and inserts the record inside one
//! store transaction, so a failed insert never leaves a stray category.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{SpendoraError, SpendoraResult};
use crate::models::{Category, Money, Month, NewTransaction, Transaction};
use crate::storage::{Storage, TransactionFilter, TransactionRepository};

use super::category::CategoryService;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub amount: Money,
    pub description: String,
    pub category: String,
    /// Defaults to today when `None`
    pub date: Option<NaiveDate>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// The category and the expense are stored in one store transaction.
    /// Audit entries are written after it commits, so an audit failure
    /// reports an error even though the expense was kept.
    pub fn add(&self, input: CreateTransactionInput) -> SpendoraResult<Transaction> {
        let date = input
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let new_txn = NewTransaction::new(input.amount, input.description, input.category, date);

        new_txn
            .validate()
            .map_err(|e| SpendoraError::Validation(e.to_string()))?;

        let (txn, created_category) = self.storage.in_transaction(|conn| {
            let (category, created) =
                CategoryService::ensure_exists_in(conn, &new_txn.category)?;
            let txn = TransactionRepository::new(conn).insert(&new_txn)?;
            Ok((txn, created.then_some(category)))
        })?;

        // Committed from here on
        self.log_added(&txn, created_category.as_ref()).map_err(|e| {
            SpendoraError::Io(format!(
                "Expense #{} was saved, but the audit log could not be written: {}",
                txn.id, e
            ))
        })?;

        Ok(txn)
    }

    fn log_added(&self, txn: &Transaction, category: Option<&Category>) -> SpendoraResult<()> {
        if let Some(category) = category {
            CategoryService::new(self.storage).log_created(category)?;
        }
        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            txn,
        )
    }

    /// List expenses, newest first
    ///
    /// `category` matches exactly; `month` keeps only dates inside that
    /// calendar month. An empty result is not an error.
    pub fn list(
        &self,
        category: Option<&str>,
        month: Option<Month>,
        limit: usize,
    ) -> SpendoraResult<Vec<Transaction>> {
        let mut filter = TransactionFilter::new().limit(limit);
        if let Some(category) = category {
            filter = filter.category(category.trim());
        }
        if let Some(month) = month {
            filter = filter.month(month);
        }
        self.list_filtered(&filter)
    }

    /// List expenses matching an arbitrary filter, newest first
    pub fn list_filtered(&self, filter: &TransactionFilter) -> SpendoraResult<Vec<Transaction>> {
        self.storage.transactions().query(filter)
    }

    /// Count all stored expenses
    pub fn count(&self) -> SpendoraResult<usize> {
        self.storage.transactions().count()
    }
}
