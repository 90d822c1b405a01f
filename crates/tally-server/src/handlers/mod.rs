//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for one API area. Shared input parsing
//! (decimal amounts, YYYY-MM-DD dates) lives here: the ledger core never
//! sees raw user input.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::AppError;
use tally_core::money;

pub mod budgets;
pub mod categories;
pub mod reports;
pub mod transactions;

// Re-export all handlers for use in the router
pub use budgets::*;
pub use categories::*;
pub use reports::*;
pub use transactions::*;

/// Parse a YYYY-MM-DD date parameter
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("Date must be in YYYY-MM-DD format"))
}

/// Resolve an optional `from` date param to the start of that day in UTC
pub(crate) fn parse_from_param(s: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    s.map(|s| {
        let date = parse_date(s)?;
        Ok(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight is valid")))
    })
    .transpose()
}

/// Resolve an optional `to` date param to the end of that day in UTC.
///
/// The range contract is inclusive at date granularity, so a `to` of
/// 2024-03-31 must cover transactions occurring any time that day.
pub(crate) fn parse_to_param(s: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    s.map(|s| {
        let date = parse_date(s)?;
        Ok(Utc.from_utc_datetime(&date.and_hms_opt(23, 59, 59).expect("end of day is valid")))
    })
    .transpose()
}

/// Parse a human decimal amount string into minor units.
///
/// Tolerates a comma as the decimal separator.
pub(crate) fn parse_amount(s: &str) -> Result<i64, AppError> {
    let s = s.trim().replace(',', ".");
    if s.is_empty() {
        return Err(AppError::bad_request("Amount is required"));
    }
    let value: f64 = s
        .parse()
        .map_err(|_| AppError::bad_request("Amount must be a decimal number"))?;
    Ok(money::to_minor_units(value))
}
