//! Transaction operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use super::{format_instant, parse_instant, Database};
use crate::error::{Error, Result};
use crate::models::Transaction;

/// Range + category filter with pagination for transaction listings
#[derive(Debug, Clone)]
pub struct TransactionQuery {
    /// Inclusive lower bound of the occurrence range
    pub from: DateTime<Utc>,
    /// Inclusive upper bound of the occurrence range
    pub to: DateTime<Utc>,
    pub category_id: Option<i64>,
    pub limit: i64,
    pub offset: i64,
}

impl Database {
    /// Insert a transaction after verifying its category exists.
    ///
    /// The existence check and the insert run inside one SQLite transaction,
    /// so a concurrent category deletion cannot interleave between them and
    /// a dangling-category row can never be observed.
    pub fn insert_transaction(
        &self,
        category_id: i64,
        amount_minor: i64,
        occurred_at: DateTime<Utc>,
        note: &str,
    ) -> Result<Transaction> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let exists: Option<i64> = tx
            .query_row(
                "SELECT 1 FROM categories WHERE id = ?1",
                params![category_id],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Err(Error::not_found(format!("Category {} not found", category_id)));
        }

        tx.execute(
            "INSERT INTO transactions (category_id, amount_minor, occurred_at, note)
             VALUES (?1, ?2, ?3, ?4)",
            params![category_id, amount_minor, format_instant(occurred_at), note],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;

        Ok(Transaction {
            id,
            category_id,
            amount_minor,
            occurred_at,
            note: note.to_string(),
        })
    }

    /// Replace every field of an existing transaction.
    ///
    /// Full-replace semantics, never a partial patch. Same atomic shape as
    /// `insert_transaction`: the category check and the update share one
    /// SQLite transaction.
    pub fn update_transaction(
        &self,
        id: i64,
        category_id: i64,
        amount_minor: i64,
        occurred_at: DateTime<Utc>,
        note: &str,
    ) -> Result<Transaction> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let exists: Option<i64> = tx
            .query_row(
                "SELECT 1 FROM categories WHERE id = ?1",
                params![category_id],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Err(Error::not_found(format!("Category {} not found", category_id)));
        }

        let affected = tx.execute(
            "UPDATE transactions
             SET category_id = ?2, amount_minor = ?3, occurred_at = ?4, note = ?5
             WHERE id = ?1",
            params![id, category_id, amount_minor, format_instant(occurred_at), note],
        )?;
        if affected == 0 {
            return Err(Error::not_found(format!("Transaction {} not found", id)));
        }

        tx.commit()?;

        Ok(Transaction {
            id,
            category_id,
            amount_minor,
            occurred_at,
            note: note.to_string(),
        })
    }

    /// List transactions in an inclusive occurrence range, optionally
    /// filtered by category, newest first with a stable id tie-break.
    pub fn list_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, category_id, amount_minor, occurred_at, note
             FROM transactions
             WHERE occurred_at BETWEEN ?1 AND ?2
               AND (?3 IS NULL OR category_id = ?3)
             ORDER BY occurred_at DESC, id DESC
             LIMIT ?4 OFFSET ?5",
        )?;

        let rows = stmt.query_map(
            params![
                format_instant(query.from),
                format_instant(query.to),
                query.category_id,
                query.limit,
                query.offset,
            ],
            |row| {
                Ok(Transaction {
                    id: row.get(0)?,
                    category_id: row.get(1)?,
                    amount_minor: row.get(2)?,
                    occurred_at: parse_instant(&row.get::<_, String>(3)?),
                    note: row.get(4)?,
                })
            },
        )?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }
}
