//! Budget operations

use rusqlite::{params, OptionalExtension};

use super::{map_constraint, Database};
use crate::error::{Error, Result};
use crate::models::Budget;

impl Database {
    /// Insert or replace the budget for a category.
    ///
    /// Keyed by the category's primary-key constraint, so a second upsert
    /// replaces the limit rather than creating a second row. The foreign
    /// key on category_id rejects a nonexistent category instead of
    /// silently creating an orphan, mapped to `NotFound`.
    pub fn upsert_budget(&self, category_id: i64, limit_minor: i64) -> Result<Budget> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO budgets (category_id, limit_minor)
             VALUES (?1, ?2)
             ON CONFLICT(category_id) DO UPDATE SET limit_minor = excluded.limit_minor",
            params![category_id, limit_minor],
        )
        .map_err(|e| {
            map_constraint(
                e,
                &format!("Budget for category {} already exists", category_id),
                &format!("Category {} not found", category_id),
            )
        })?;

        self.get_budget(category_id)?
            .ok_or_else(|| Error::not_found(format!("Budget for category {} not found", category_id)))
    }

    /// Fetch the budget for one category, joined with its name
    pub fn get_budget(&self, category_id: i64) -> Result<Option<Budget>> {
        let conn = self.conn()?;

        conn.query_row(
            "SELECT b.category_id, b.limit_minor, c.name
             FROM budgets b
             JOIN categories c ON c.id = b.category_id
             WHERE b.category_id = ?1",
            params![category_id],
            |row| {
                Ok(Budget {
                    category_id: row.get(0)?,
                    limit_minor: row.get(1)?,
                    category_name: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(Into::into)
    }

    /// List all budgets with their category names, ordered by name
    pub fn list_budgets(&self) -> Result<Vec<Budget>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT b.category_id, b.limit_minor, c.name
             FROM budgets b
             JOIN categories c ON c.id = b.category_id
             ORDER BY c.name",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Budget {
                category_id: row.get(0)?,
                limit_minor: row.get(1)?,
                category_name: row.get(2)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }
}
