//! Storage layer for Spendora
//!
//! Owns the single SQLite connection used for the lifetime of the process and
//! hands out repositories that borrow it. Also owns the audit logger so every
//! write can be recorded next to the store.

pub mod categories;
pub mod schema;
pub mod transactions;

pub use categories::CategoryRepository;
pub use transactions::{GroupTotal, TransactionFilter, TransactionRepository};

use rusqlite::Connection;
use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SpendoraPaths;
use crate::error::{SpendoraError, SpendoraResult};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendoraPaths,
    conn: Connection,
    audit: AuditLogger,
}

impl Storage {
    /// Open (creating if needed) the database under `paths`
    pub fn new(paths: SpendoraPaths) -> SpendoraResult<Self> {
        paths.ensure_directories()?;

        let db_path = paths.database_file();
        let conn = Connection::open(&db_path).map_err(|e| {
            SpendoraError::Storage(format!("Failed to open {}: {}", db_path.display(), e))
        })?;
        schema::initialize(&conn)?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            conn,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendoraPaths {
        &self.paths
    }

    /// Category repository over the store connection
    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.conn)
    }

    /// Transaction repository over the store connection
    pub fn transactions(&self) -> TransactionRepository<'_> {
        TransactionRepository::new(&self.conn)
    }

    /// Run `f` inside a single store transaction.
    ///
    /// Commits when `f` succeeds; any error rolls back every write made by `f`.
    pub fn in_transaction<T, F>(&self, f: F) -> SpendoraResult<T>
    where
        F: FnOnce(&Connection) -> SpendoraResult<T>,
    {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(&*tx)?;
        tx.commit()?;
        Ok(value)
    }

    /// The audit logger for this store
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> SpendoraResult<()> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.paths().database_file().exists());
        assert_eq!(storage.categories().count().unwrap(), 0);
    }

    #[test]
    fn test_data_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let storage = Storage::new(paths.clone()).unwrap();
            storage.categories().insert(&Category::new("Food")).unwrap();
        }

        let storage = Storage::new(paths).unwrap();
        assert!(storage.categories().exists("Food").unwrap());
    }

    #[test]
    fn test_in_transaction_rolls_back_on_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let result: SpendoraResult<()> = storage.in_transaction(|conn| {
            CategoryRepository::new(conn).insert(&Category::new("Food"))?;
            Err(SpendoraError::Validation("abort".into()))
        });

        assert!(result.is_err());
        assert!(!storage.categories().exists("Food").unwrap());
    }

    #[test]
    fn test_log_create_appends_entry() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let category = Category::new("Food");
        storage
            .log_create(EntityType::Category, "Food", Some("Food".into()), &category)
            .unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }
}
