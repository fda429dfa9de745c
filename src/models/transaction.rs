//! Transaction model
//!
//! An expense record. Transactions are immutable once stored; the store
//! assigns the `id`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{validate_name, CategoryValidationError};
use super::money::Money;

/// Largest amount a single expense may carry ($1,000,000,000.00)
///
/// Keeps every grand total comfortably inside `i64` cents.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// A stored expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned identifier
    pub id: i64,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Free-text description
    pub description: String,

    /// Name of the category this expense belongs to
    pub category: String,

    /// Date the expense occurred
    pub date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// An expense that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    /// Create a new unsaved transaction, trimming text fields
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into().trim().to_string(),
            category: category.into().trim().to_string(),
            date,
        }
    }

    /// Validate the transaction before insert
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.description.is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        validate_name(&self.category).map_err(TransactionValidationError::Category)?;

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.description,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyDescription,
    Category(CategoryValidationError),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::Category(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_trims_fields() {
        let txn = NewTransaction::new(
            Money::from_cents(1250),
            "  Coffee ",
            " Food ",
            date(2024, 1, 5),
        );
        assert_eq!(txn.description, "Coffee");
        assert_eq!(txn.category, "Food");
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let zero = NewTransaction::new(Money::zero(), "Nothing", "Food", date(2024, 1, 5));
        assert!(matches!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        let negative =
            NewTransaction::new(Money::from_cents(-100), "Refund", "Food", date(2024, 1, 5));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_rejects_amount_above_maximum() {
        let at_max = NewTransaction::new(MAX_AMOUNT, "House", "Home", date(2024, 1, 5));
        assert!(at_max.validate().is_ok());

        let huge = NewTransaction::new(
            Money::parse("50000000000000000").unwrap(),
            "Yacht",
            "Food",
            date(2024, 1, 5),
        );
        assert!(matches!(
            huge.validate(),
            Err(TransactionValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_rejects_empty_description_and_category() {
        let txn = NewTransaction::new(Money::from_cents(100), " ", "Food", date(2024, 1, 5));
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );

        let txn = NewTransaction::new(Money::from_cents(100), "Lunch", "", date(2024, 1, 5));
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::Category(
                CategoryValidationError::EmptyName
            ))
        );
    }

    #[test]
    fn test_display() {
        let txn = Transaction {
            id: 1,
            amount: Money::from_cents(4000),
            description: "Gas".into(),
            category: "Transport".into(),
            date: date(2024, 1, 10),
            created_at: Utc::now(),
        };
        assert_eq!(txn.to_string(), "2024-01-10 $40.00 Gas (Transport)");
    }
}
