//! Category model
//!
//! A category is a flat, user-defined label identified by its name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest category name accepted
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category name
    pub name: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_name(&self.name)
    }
}

/// Validate a category name as it would be stored
pub fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_CATEGORY_NAME_LEN {
        return Err(CategoryValidationError::NameTooLong(len));
    }

    Ok(())
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} chars, max {})",
                len, MAX_CATEGORY_NAME_LEN
            ),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Food");
        assert_eq!(category.name, "Food");
        assert_eq!(category.to_string(), "Food");
    }

    #[test]
    fn test_category_validation() {
        assert!(Category::new("Transport").validate().is_ok());
        assert_eq!(
            Category::new("   ").validate(),
            Err(CategoryValidationError::EmptyName)
        );
        assert!(matches!(
            Category::new("a".repeat(51)).validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }
}
