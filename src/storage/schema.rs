//! Database schema
//!
//! Creates the tables and indexes on open. Every statement is idempotent so
//! opening an existing database is a no-op.

use rusqlite::Connection;

use crate::error::SpendoraResult;

/// Current schema version, stored in `PRAGMA user_version`
pub const SCHEMA_VERSION: i32 = 1;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS categories (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT NOT NULL UNIQUE,
        created_at  TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS transactions (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        amount_cents  INTEGER NOT NULL CHECK (amount_cents > 0),
        description   TEXT NOT NULL,
        category      TEXT NOT NULL REFERENCES categories(name),
        date          TEXT NOT NULL,
        created_at    TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category);
";

/// Set connection pragmas and create the schema
pub fn initialize(conn: &Connection) -> SpendoraResult<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.execute_batch(SCHEMA)?;

    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    if version == 0 {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        initialize(&conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'transactions')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 2);

        let version: i32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_foreign_key_enforced() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO transactions (amount_cents, description, category, date, created_at)
             VALUES (100, 'Orphan', 'Nowhere', '2024-01-01', '2024-01-01T00:00:00Z')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn.execute(
            "INSERT INTO categories (name, created_at) VALUES ('Food', '2024-01-01T00:00:00Z')",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO transactions (amount_cents, description, category, date, created_at)
             VALUES (0, 'Free', 'Food', '2024-01-01', '2024-01-01T00:00:00Z')",
            [],
        );
        assert!(result.is_err());
    }
}
