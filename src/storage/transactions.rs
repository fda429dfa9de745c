//! Transaction repository
//!
//! Reads and writes the `transactions` table. Filtering, ordering and
//! aggregation are done by SQLite; amounts are summed as integer cents.

use chrono::{NaiveDate, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

use crate::error::SpendoraResult;
use crate::models::{Money, Month, NewTransaction, Transaction};

const SELECT_COLUMNS: &str =
    "SELECT id, amount_cents, description, category, date, created_at FROM transactions";

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only transactions in this category (exact match)
    pub category: Option<String>,
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Filter to a calendar month
    pub fn month(self, month: Month) -> Self {
        self.date_range(month.start_date(), month.end_date())
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build the WHERE clause and its bound values
    fn where_clause(&self) -> (String, Vec<Value>) {
        let mut conditions = Vec::new();
        let mut values = Vec::new();

        if let Some(category) = &self.category {
            conditions.push("category = ?");
            values.push(Value::Text(category.clone()));
        }
        if let Some(start) = self.start_date {
            conditions.push("date >= ?");
            values.push(Value::Text(start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            conditions.push("date <= ?");
            values.push(Value::Text(end.format("%Y-%m-%d").to_string()));
        }

        if conditions.is_empty() {
            (String::new(), values)
        } else {
            (format!(" WHERE {}", conditions.join(" AND ")), values)
        }
    }
}

/// Total and count for one group of an aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTotal {
    /// Category name or `YYYY-MM` month key
    pub key: String,
    pub total: Money,
    pub count: usize,
}

/// Repository for transaction persistence
pub struct TransactionRepository<'c> {
    conn: &'c Connection,
}

impl<'c> TransactionRepository<'c> {
    /// Create a repository over an open connection (or an open store transaction)
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Insert a transaction and return the stored record
    pub fn insert(&self, txn: &NewTransaction) -> SpendoraResult<Transaction> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO transactions (amount_cents, description, category, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                txn.amount.cents(),
                txn.description,
                txn.category,
                txn.date,
                created_at
            ],
        )?;

        Ok(Transaction {
            id: self.conn.last_insert_rowid(),
            amount: txn.amount,
            description: txn.description.clone(),
            category: txn.category.clone(),
            date: txn.date,
            created_at,
        })
    }

    /// Query transactions, newest date first
    ///
    /// Transactions on the same date are returned most recently added first.
    pub fn query(&self, filter: &TransactionFilter) -> SpendoraResult<Vec<Transaction>> {
        let (where_clause, mut values) = filter.where_clause();
        let limit = filter
            .limit
            .map(|l| i64::try_from(l).unwrap_or(i64::MAX))
            .unwrap_or(-1);
        values.push(Value::Integer(limit));

        let sql = format!(
            "{}{} ORDER BY date DESC, id DESC LIMIT ?",
            SELECT_COLUMNS, where_clause
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let transactions = stmt
            .query_map(params_from_iter(values), transaction_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(transactions)
    }

    /// Get all transactions, newest date first
    pub fn get_all(&self) -> SpendoraResult<Vec<Transaction>> {
        self.query(&TransactionFilter::new())
    }

    /// Count transactions
    pub fn count(&self) -> SpendoraResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Sum amounts grouped by category for the transactions matching `filter`
    pub fn sum_by_category(&self, filter: &TransactionFilter) -> SpendoraResult<Vec<GroupTotal>> {
        self.sum_grouped("category", filter)
    }

    /// Sum amounts grouped by `YYYY-MM` month for the transactions matching `filter`
    pub fn sum_by_month(&self, filter: &TransactionFilter) -> SpendoraResult<Vec<GroupTotal>> {
        self.sum_grouped("substr(date, 1, 7)", filter)
    }

    fn sum_grouped(
        &self,
        key_expr: &str,
        filter: &TransactionFilter,
    ) -> SpendoraResult<Vec<GroupTotal>> {
        let (where_clause, values) = filter.where_clause();
        let sql = format!(
            "SELECT {key} AS group_key, SUM(amount_cents), COUNT(*) FROM transactions{where_clause}
             GROUP BY group_key ORDER BY group_key",
            key = key_expr,
            where_clause = where_clause
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let totals = stmt
            .query_map(params_from_iter(values), |row| {
                let count: i64 = row.get(2)?;
                Ok(GroupTotal {
                    key: row.get(0)?,
                    total: Money::from_cents(row.get(1)?),
                    count: count as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(totals)
    }
}

fn transaction_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: row.get(0)?,
        amount: Money::from_cents(row.get(1)?),
        description: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
        created_at: row.get(5)?,
    })
}
