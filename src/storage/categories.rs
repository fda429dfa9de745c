//! Category repository
//!
//! Reads and writes the `categories` table.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::SpendoraResult;
use crate::models::Category;

/// Repository for category persistence
pub struct CategoryRepository<'c> {
    conn: &'c Connection,
}

impl<'c> CategoryRepository<'c> {
    /// Create a repository over an open connection (or an open store transaction)
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Get a category by exact name
    pub fn get(&self, name: &str) -> SpendoraResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT name, created_at FROM categories WHERE name = ?1",
                [name],
                category_from_row,
            )
            .optional()?;
        Ok(category)
    }

    /// Check whether a category exists
    pub fn exists(&self, name: &str) -> SpendoraResult<bool> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE name = ?1)",
            [name],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Insert a category. Fails if the name is already taken.
    pub fn insert(&self, category: &Category) -> SpendoraResult<()> {
        self.conn.execute(
            "INSERT INTO categories (name, created_at) VALUES (?1, ?2)",
            params![category.name, category.created_at],
        )?;
        Ok(())
    }

    /// Insert a category unless one with the same name exists.
    ///
    /// Returns `true` if a row was inserted.
    pub fn insert_if_absent(&self, category: &Category) -> SpendoraResult<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO categories (name, created_at) VALUES (?1, ?2)",
            params![category.name, category.created_at],
        )?;
        Ok(inserted > 0)
    }

    /// Get all categories in insertion order
    pub fn get_all(&self) -> SpendoraResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, created_at FROM categories ORDER BY id")?;
        let categories = stmt
            .query_map([], category_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// Count categories
    pub fn count(&self) -> SpendoraResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        name: row.get(0)?,
        created_at: row.get(1)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::schema;

    fn create_test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        schema::initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn test_empty() {
        let conn = create_test_conn();
        let repo = CategoryRepository::new(&conn);
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_all().unwrap().is_empty());
        assert!(repo.get("Food").unwrap().is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let conn = create_test_conn();
        let repo = CategoryRepository::new(&conn);

        repo.insert(&Category::new("Food")).unwrap();

        let found = repo.get("Food").unwrap().unwrap();
        assert_eq!(found.name, "Food");
        assert!(repo.exists("Food").unwrap());
        // Lookups are exact
        assert!(!repo.exists("food").unwrap());
    }

    #[test]
    fn test_insert_duplicate_fails() {
        let conn = create_test_conn();
        let repo = CategoryRepository::new(&conn);

        repo.insert(&Category::new("Food")).unwrap();
        assert!(repo.insert(&Category::new("Food")).is_err());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_insert_if_absent() {
        let conn = create_test_conn();
        let repo = CategoryRepository::new(&conn);

        assert!(repo.insert_if_absent(&Category::new("Food")).unwrap());
        assert!(!repo.insert_if_absent(&Category::new("Food")).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_get_all_in_insertion_order() {
        let conn = create_test_conn();
        let repo = CategoryRepository::new(&conn);

        for name in ["Transport", "Food", "Bills"] {
            repo.insert(&Category::new(name)).unwrap();
        }

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Transport", "Food", "Bills"]);
    }
}
