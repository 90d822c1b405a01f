//! Database access layer with connection pooling and migrations
//!
//! This module is organized by domain:
//! - `categories` - Category CRUD with cascading delete
//! - `transactions` - Transaction insert/update and range queries
//! - `budgets` - Per-category budget upsert and lookup
//! - `reports` - Per-category summary aggregation

use chrono::{DateTime, SecondsFormat, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::debug;

use crate::error::{Error, Result};

mod budgets;
mod categories;
mod reports;
mod transactions;


pub use transactions::TransactionQuery;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Format an instant for storage.
///
/// RFC 3339 in UTC with second precision and a `Z` suffix, so lexicographic
/// comparison of stored values matches chronological order and BETWEEN range
/// queries are well-defined.
pub(crate) fn format_instant(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a stored instant back into a DateTime<Utc>
pub(crate) fn parse_instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Map a SQLite constraint failure to the typed error taxonomy.
///
/// UNIQUE violations become `Conflict`, FOREIGN KEY violations become
/// `NotFound` (the referenced row does not exist); everything else stays a
/// storage error.
pub(crate) fn map_constraint(err: rusqlite::Error, conflict: &str, missing: &str) -> Error {
    if let rusqlite::Error::SqliteFailure(e, _) = &err {
        match e.extended_code {
            rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                return Error::conflict(conflict);
            }
            rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                return Error::not_found(missing);
            }
            _ => {}
        }
    }
    Error::Database(err)
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Create a new database connection pool and run migrations.
    ///
    /// Creates the parent directory if it does not exist. Migrations are
    /// idempotent: opening an already-initialized file changes nothing.
    pub fn new(path: &str) -> Result<Self> {
        if let Some(dir) = std::path::Path::new(path).parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        // Foreign keys are per-connection in SQLite, so they are enabled in
        // the pool's init hook rather than in migrations. The busy timeout
        // keeps concurrent writers from failing fast on a locked database.
        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.execute_batch(
                "PRAGMA foreign_keys = ON;
                 PRAGMA busy_timeout = 5000;",
            )
        });

        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Uses a temporary file rather than `:memory:` because each pooled
    /// connection would otherwise get its own private in-memory database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!("tally_test_{}_{}.db", std::process::id(), id));

        let _ = std::fs::remove_file(&path);

        Self::new(path.to_str().expect("temp path is valid UTF-8"))
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- WAL mode: better concurrency, readers don't block writers
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: safe for most power-loss scenarios, faster than FULL
            PRAGMA synchronous = NORMAL;

            -- Categories (user-defined transaction labels)
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            );

            -- Budgets (at most one spending ceiling per category)
            CREATE TABLE IF NOT EXISTS budgets (
                category_id INTEGER PRIMARY KEY REFERENCES categories(id) ON DELETE CASCADE,
                limit_minor INTEGER NOT NULL
            );

            -- Transactions (signed minor-unit amounts; occurred_at is RFC 3339 UTC)
            CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
                amount_minor INTEGER NOT NULL,
                occurred_at TEXT NOT NULL,
                note TEXT NOT NULL DEFAULT ''
            );

            CREATE INDEX IF NOT EXISTS idx_transactions_occurred ON transactions(occurred_at);
            CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category_id);
            "#,
        )?;

        debug!(path = %self.db_path, "Database migrations complete");
        Ok(())
    }
}
