//! Budget management commands

use anyhow::Result;

use tally_core::Ledger;

use super::{format_amount, parse_amount_arg};

pub fn cmd_budgets_list(ledger: &Ledger) -> Result<()> {
    let budgets = ledger.list_budgets()?;

    if budgets.is_empty() {
        println!("No budgets yet. Set one with: tally budgets set -c <ID> -l <LIMIT>");
        return Ok(());
    }

    println!("{:>6}  {:>12}  CATEGORY", "CAT", "LIMIT");
    for budget in budgets {
        println!(
            "{:>6}  {:>12}  {}",
            budget.category_id,
            format_amount(budget.limit_minor),
            budget.category_name,
        );
    }

    Ok(())
}

pub fn cmd_budgets_set(ledger: &Ledger, category_id: i64, limit: &str) -> Result<()> {
    let limit_minor = parse_amount_arg(limit)?;
    let budget = ledger.upsert_budget(category_id, limit_minor)?;

    println!(
        "Budget for '{}' set to {}",
        budget.category_name,
        format_amount(budget.limit_minor),
    );
    Ok(())
}
