//! Ledger operations
//!
//! Business layer over the store: input validation, range normalization,
//! and the budget exceedance computation. The `Ledger` holds its own
//! `Database` handle, passed at construction; it keeps no in-memory
//! authoritative copies, so every operation reads and writes through the
//! store and summaries are always freshly recomputed.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::db::{Database, TransactionQuery};
use crate::error::{Error, Result};
use crate::models::{Budget, BudgetAlert, Category, CategorySummary, Transaction};

#[derive(Clone)]
pub struct Ledger {
    db: Database,
}

impl Ledger {
    /// Build a ledger over an initialized database
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Access the underlying store (primarily for tests)
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Create a category from a trimmed, non-empty name
    pub fn create_category(&self, name: &str) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("Category name is empty"));
        }
        self.db.insert_category(name)
    }

    /// Delete a category, cascading to its transactions and budget
    pub fn delete_category(&self, id: i64) -> Result<()> {
        self.db.delete_category(id)
    }

    pub fn list_categories(&self) -> Result<Vec<Category>> {
        self.db.list_categories()
    }

    /// Record a transaction against an existing category.
    ///
    /// The occurrence timestamp is normalized to UTC before storage; the
    /// category-existence check runs atomically with the insert.
    pub fn add_transaction(
        &self,
        category_id: i64,
        amount_minor: i64,
        occurred_at: DateTime<Utc>,
        note: &str,
    ) -> Result<Transaction> {
        if category_id <= 0 {
            return Err(Error::validation("category_id is required"));
        }
        self.db
            .insert_transaction(category_id, amount_minor, occurred_at, note)
    }

    /// Replace all fields of an existing transaction
    pub fn update_transaction(
        &self,
        id: i64,
        category_id: i64,
        amount_minor: i64,
        occurred_at: DateTime<Utc>,
        note: &str,
    ) -> Result<Transaction> {
        if category_id <= 0 {
            return Err(Error::validation("category_id is required"));
        }
        self.db
            .update_transaction(id, category_id, amount_minor, occurred_at, note)
    }

    /// List transactions over a normalized range with optional category
    /// filter and limit/offset pagination.
    pub fn list_transactions(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        category_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transaction>> {
        if limit <= 0 {
            return Err(Error::validation("limit must be positive"));
        }
        if offset < 0 {
            return Err(Error::validation("offset must not be negative"));
        }
        let (from, to) = normalize_range(from, to);
        self.db.list_transactions(&TransactionQuery {
            from,
            to,
            category_id,
            limit,
            offset,
        })
    }

    /// Aggregate income, expense, net, and count per category over
    /// `[from, to]`, inclusive on both ends.
    ///
    /// A missing `from` defaults to the Unix epoch and a missing `to` to
    /// now; reversed bounds are swapped rather than rejected. Grouping
    /// order is unspecified.
    pub fn summary(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<CategorySummary>> {
        let (from, to) = normalize_range(from, to);
        debug!(%from, %to, "Computing category summary");
        self.db.category_summaries(from, to)
    }

    /// Set or replace the spending ceiling for a category
    pub fn upsert_budget(&self, category_id: i64, limit_minor: i64) -> Result<Budget> {
        if category_id <= 0 {
            return Err(Error::validation("category_id is required"));
        }
        if limit_minor <= 0 {
            return Err(Error::validation("Budget limit must be greater than 0"));
        }
        self.db.upsert_budget(category_id, limit_minor)
    }

    pub fn list_budgets(&self) -> Result<Vec<Budget>> {
        self.db.list_budgets()
    }

    /// Compare spending against budgets over a range.
    ///
    /// Spent is the positive magnitude of the expense sum; a category with
    /// no transactions in range spent 0 and can never exceed a positive
    /// limit. An alert is emitted only on strict exceedance: spent equal to
    /// the limit produces none. Emission order is unspecified.
    pub fn exceeded_budgets(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<BudgetAlert>> {
        let summary = self.summary(from, to)?;
        let by_category: HashMap<i64, &CategorySummary> =
            summary.iter().map(|s| (s.category_id, s)).collect();

        let mut alerts = Vec::new();
        for budget in self.db.list_budgets()? {
            let spent = by_category
                .get(&budget.category_id)
                .map(|s| -s.expense_minor)
                .unwrap_or(0);
            if spent > budget.limit_minor {
                alerts.push(BudgetAlert {
                    category_id: budget.category_id,
                    category_name: budget.category_name,
                    limit_minor: budget.limit_minor,
                    spent_minor: spent,
                    exceeded_by_minor: spent - budget.limit_minor,
                });
            }
        }
        Ok(alerts)
    }
}

/// Resolve optional range bounds and swap them when reversed.
///
/// Callers never have to pre-order the bounds; reversed ranges are
/// reordered, not rejected.
fn normalize_range(
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let from = from.unwrap_or(DateTime::UNIX_EPOCH);
    let to = to.unwrap_or_else(Utc::now);
    if to < from {
        (to, from)
    } else {
        (from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn normalize_range_swaps_reversed_bounds() {
        let a = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap();
        assert_eq!(normalize_range(Some(b), Some(a)), (a, b));
        assert_eq!(normalize_range(Some(a), Some(b)), (a, b));
    }

    #[test]
    fn normalize_range_defaults_missing_bounds() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        let (from, to) = normalize_range(None, None);
        assert_eq!(from, epoch);
        assert!(to > epoch);
    }
}
