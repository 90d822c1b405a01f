//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `categories` - Category management (list, add, rm)
//! - `transactions` - Recording and listing transactions
//! - `budgets` - Budget management (list, set)
//! - `reports` - Summary and alert reports
//! - `serve` - Web server command
//!
//! Shared utilities (`open_db`, date and amount parsing) live here.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use tally_core::{money, Database};

pub mod budgets;
pub mod categories;
pub mod reports;
pub mod serve;
pub mod transactions;

// Re-export command functions for main.rs
pub use budgets::*;
pub use categories::*;
pub use reports::*;
pub use serve::*;
pub use transactions::*;

/// Open the database, creating and migrating it if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow!("Database path is not valid UTF-8"))?;
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("Initializing database at {}...", db_path.display());

    let _db = open_db(db_path)?;

    println!("Database ready.");
    println!();
    println!("Next steps:");
    println!("  1. Create a category:    tally categories add Food");
    println!("  2. Record a transaction: tally add -c 1 -a -23.00 -d 2024-03-10");
    println!("  3. Start the web UI:     tally serve");

    Ok(())
}

/// Parse a YYYY-MM-DD argument
pub(crate) fn parse_date_arg(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Date '{}' must be in YYYY-MM-DD format", s))
}

/// Resolve an optional `--from` date to the start of that day in UTC
pub(crate) fn parse_from_arg(s: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    s.map(|s| {
        let date = parse_date_arg(s)?;
        Ok(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight is valid")))
    })
    .transpose()
}

/// Resolve an optional `--to` date to the end of that day in UTC
pub(crate) fn parse_to_arg(s: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    s.map(|s| {
        let date = parse_date_arg(s)?;
        Ok(Utc.from_utc_datetime(&date.and_hms_opt(23, 59, 59).expect("end of day is valid")))
    })
    .transpose()
}

/// Parse a decimal amount argument into minor units
pub(crate) fn parse_amount_arg(s: &str) -> Result<i64> {
    let s = s.trim().replace(',', ".");
    let value: f64 = s
        .parse()
        .with_context(|| format!("Amount '{}' must be a decimal number", s))?;
    Ok(money::to_minor_units(value))
}

/// Format minor units for display
pub(crate) fn format_amount(minor: i64) -> String {
    format!("{:.2}", money::to_major_units(minor))
}
