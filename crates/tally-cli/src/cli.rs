//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Personal finance ledger
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Record transactions, track budgets, and get exceedance alerts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory of static files for the browser UI
        #[arg(long, default_value = "web")]
        static_dir: PathBuf,
    },

    /// Manage categories (lists by default)
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Record a transaction
    Add {
        /// Category to attribute the transaction to
        #[arg(short, long)]
        category_id: i64,

        /// Decimal amount; positive = income, negative = expense
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Occurrence date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Free-text note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List transactions
    Transactions {
        /// Start of the date range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End of the date range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Only show one category
        #[arg(short, long)]
        category_id: Option<i64>,

        /// Maximum number of rows
        #[arg(short, long, default_value = "20")]
        limit: i64,

        /// Number of rows to skip
        #[arg(short, long, default_value = "0")]
        offset: i64,
    },

    /// Manage budgets (lists by default)
    Budgets {
        #[command(subcommand)]
        action: Option<BudgetsAction>,
    },

    /// Per-category income/expense summary over a date range
    Summary {
        /// Start of the date range (YYYY-MM-DD), defaults to the epoch
        #[arg(long)]
        from: Option<String>,

        /// End of the date range (YYYY-MM-DD), defaults to today
        #[arg(long)]
        to: Option<String>,
    },

    /// Show categories whose spending exceeds their budget
    Alerts {
        /// Start of the date range (YYYY-MM-DD), defaults to the epoch
        #[arg(long)]
        from: Option<String>,

        /// End of the date range (YYYY-MM-DD), defaults to today
        #[arg(long)]
        to: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// Create a category
    Add {
        /// Category name (unique)
        name: String,
    },

    /// Delete a category, its transactions, and its budget
    Rm {
        /// Category id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum BudgetsAction {
    /// Set or replace the budget for a category
    Set {
        /// Category to limit
        #[arg(short, long)]
        category_id: i64,

        /// Decimal spending limit, must be positive
        #[arg(short, long)]
        limit: String,
    },
}
