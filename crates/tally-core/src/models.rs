//! Domain models for Tally

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-defined label for transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A single monetary event attributed to one category
///
/// Positive amounts are income, negative amounts are expenses; zero is
/// permitted. Amounts are in minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub category_id: i64,
    pub amount_minor: i64,
    pub occurred_at: DateTime<Utc>,
    pub note: String,
}

/// Per-category spending ceiling in minor units; at most one per category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub category_id: i64,
    pub limit_minor: i64,
    pub category_name: String,
}

/// Per-category aggregate over a queried date range
///
/// Derived on demand, never persisted. `expense_minor` is the sum of
/// negative amounts and is itself non-positive; callers negate it for
/// display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category_id: i64,
    pub income_minor: i64,
    pub expense_minor: i64,
    pub net_minor: i64,
    pub count: i64,
}

/// Signal that spending in a category exceeded its budget limit in range
///
/// `exceeded_by_minor` is always strictly positive in an emitted alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAlert {
    pub category_id: i64,
    pub category_name: String,
    pub limit_minor: i64,
    pub spent_minor: i64,
    pub exceeded_by_minor: i64,
}
