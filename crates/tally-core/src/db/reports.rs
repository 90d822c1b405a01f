//! Per-category summary aggregation

use chrono::{DateTime, Utc};
use rusqlite::params;

use super::{format_instant, Database};
use crate::error::Result;
use crate::models::CategorySummary;

impl Database {
    /// Aggregate income, expense, net, and count per category over an
    /// inclusive occurrence range.
    ///
    /// Categories with no transactions in range produce no row. The
    /// aggregate always covers the full matching set; pagination never
    /// applies here.
    pub fn category_summaries(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<CategorySummary>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT
                 category_id,
                 SUM(CASE WHEN amount_minor >= 0 THEN amount_minor ELSE 0 END) AS income,
                 SUM(CASE WHEN amount_minor < 0 THEN amount_minor ELSE 0 END) AS expense,
                 SUM(amount_minor) AS net,
                 COUNT(*) AS cnt
             FROM transactions
             WHERE occurred_at BETWEEN ?1 AND ?2
             GROUP BY category_id",
        )?;

        let rows = stmt.query_map(
            params![format_instant(from), format_instant(to)],
            |row| {
                Ok(CategorySummary {
                    category_id: row.get(0)?,
                    income_minor: row.get(1)?,
                    expense_minor: row.get(2)?,
                    net_minor: row.get(3)?,
                    count: row.get(4)?,
                })
            },
        )?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }
}
