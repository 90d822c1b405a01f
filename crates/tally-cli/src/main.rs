//! Tally CLI - Personal finance ledger
//!
//! Usage:
//!   tally init                                 Initialize the database
//!   tally categories add Food                  Create a category
//!   tally add -c 1 -a -23.00 -d 2024-03-10     Record a transaction
//!   tally summary --from 2024-03-01            Per-category aggregates
//!   tally alerts                               Budget exceedances
//!   tally serve --port 8080                    Start the web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tally_core::Ledger;

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(&cli.db, &host, port, &static_dir).await,
        Commands::Categories { action } => {
            let ledger = Ledger::new(commands::open_db(&cli.db)?);
            match action {
                None => commands::cmd_categories_list(&ledger),
                Some(CategoriesAction::Add { name }) => {
                    commands::cmd_categories_add(&ledger, &name)
                }
                Some(CategoriesAction::Rm { id }) => commands::cmd_categories_rm(&ledger, id),
            }
        }
        Commands::Add {
            category_id,
            amount,
            date,
            note,
        } => {
            let ledger = Ledger::new(commands::open_db(&cli.db)?);
            commands::cmd_add(&ledger, category_id, &amount, &date, &note)
        }
        Commands::Transactions {
            from,
            to,
            category_id,
            limit,
            offset,
        } => {
            let ledger = Ledger::new(commands::open_db(&cli.db)?);
            commands::cmd_transactions_list(
                &ledger,
                from.as_deref(),
                to.as_deref(),
                category_id,
                limit,
                offset,
            )
        }
        Commands::Budgets { action } => {
            let ledger = Ledger::new(commands::open_db(&cli.db)?);
            match action {
                None => commands::cmd_budgets_list(&ledger),
                Some(BudgetsAction::Set { category_id, limit }) => {
                    commands::cmd_budgets_set(&ledger, category_id, &limit)
                }
            }
        }
        Commands::Summary { from, to } => {
            let ledger = Ledger::new(commands::open_db(&cli.db)?);
            commands::cmd_summary(&ledger, from.as_deref(), to.as_deref())
        }
        Commands::Alerts { from, to } => {
            let ledger = Ledger::new(commands::open_db(&cli.db)?);
            commands::cmd_alerts(&ledger, from.as_deref(), to.as_deref())
        }
    }
}
