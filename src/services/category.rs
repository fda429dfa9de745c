//! Category service
//!
//! Provides business logic for category management: validation, duplicate
//! detection, implicit creation, and audit logging.

use rusqlite::Connection;

use crate::audit::EntityType;
use crate::error::{SpendoraError, SpendoraResult};
use crate::models::Category;
use crate::storage::{CategoryRepository, Storage};

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a category, failing if one with the same name exists
    pub fn add(&self, name: &str) -> SpendoraResult<Category> {
        let category = Category::new(name.trim());
        category
            .validate()
            .map_err(|e| SpendoraError::Validation(e.to_string()))?;

        let repo = self.storage.categories();
        if repo.exists(&category.name)? {
            return Err(SpendoraError::duplicate_category(&category.name));
        }

        repo.insert(&category)?;
        self.log_created(&category)?;

        Ok(category)
    }

    /// Make sure a category exists, creating it if needed
    ///
    /// Idempotent: calling it again with the same name returns the stored
    /// category and writes nothing.
    pub fn ensure_exists(&self, name: &str) -> SpendoraResult<Category> {
        let (category, created) = self
            .storage
            .in_transaction(|conn| Self::ensure_exists_in(conn, name))?;

        if created {
            self.log_created(&category)?;
        }

        Ok(category)
    }

    /// Ensure a category exists on an open connection or store transaction
    ///
    /// Returns the stored category and whether this call created it. The
    /// caller writes the audit entry once its transaction has committed.
    pub(crate) fn ensure_exists_in(
        conn: &Connection,
        name: &str,
    ) -> SpendoraResult<(Category, bool)> {
        let candidate = Category::new(name.trim());
        candidate
            .validate()
            .map_err(|e| SpendoraError::Validation(e.to_string()))?;

        let repo = CategoryRepository::new(conn);
        let created = repo.insert_if_absent(&candidate)?;
        let stored = repo
            .get(&candidate.name)?
            .ok_or_else(|| SpendoraError::category_not_found(&candidate.name))?;

        Ok((stored, created))
    }

    /// Get a category by exact name
    pub fn get(&self, name: &str) -> SpendoraResult<Option<Category>> {
        self.storage.categories().get(name.trim())
    }

    /// List all categories in the order they were created
    pub fn list_all(&self) -> SpendoraResult<Vec<Category>> {
        self.storage.categories().get_all()
    }

    pub(crate) fn log_created(&self, category: &Category) -> SpendoraResult<()> {
        self.storage.log_create(
            EntityType::Category,
            category.name.clone(),
            Some(category.name.clone()),
            category,
        )
    }
}
