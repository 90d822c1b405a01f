//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance ledger:
//! - Money representation (minor-unit integers)
//! - Database access and migrations
//! - Ledger operations: categories, transactions, budgets, summaries,
//!   and budget exceedance alerts

pub mod db;
pub mod error;
pub mod ledger;
pub mod models;
pub mod money;

pub use db::{Database, TransactionQuery};
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use models::{Budget, BudgetAlert, Category, CategorySummary, Transaction};
