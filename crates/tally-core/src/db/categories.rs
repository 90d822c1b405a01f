//! Category operations

use rusqlite::params;

use super::{map_constraint, Database};
use crate::error::{Error, Result};
use crate::models::Category;

impl Database {
    /// Insert a new category; duplicate names map to `Conflict`
    pub fn insert_category(&self, name: &str) -> Result<Category> {
        let conn = self.conn()?;

        conn.execute("INSERT INTO categories (name) VALUES (?1)", params![name])
            .map_err(|e| {
                map_constraint(
                    e,
                    &format!("Category '{}' already exists", name),
                    &format!("Category '{}' not found", name),
                )
            })?;

        Ok(Category {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Delete a category.
    ///
    /// Foreign keys cascade: all of its transactions and its budget go with
    /// it. Returns `NotFound` when no row was deleted.
    pub fn delete_category(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;

        let affected = conn.execute("DELETE FROM categories WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::not_found(format!("Category {} not found", id)));
        }
        Ok(())
    }

    /// List all categories ordered by name
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY name")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }
}
