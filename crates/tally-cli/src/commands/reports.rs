//! Summary and alert report commands

use std::collections::HashMap;

use anyhow::Result;

use tally_core::Ledger;

use super::{format_amount, parse_from_arg, parse_to_arg};

pub fn cmd_summary(ledger: &Ledger, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let from = parse_from_arg(from)?;
    let to = parse_to_arg(to)?;

    let summary = ledger.summary(from, to)?;

    if summary.is_empty() {
        println!("No transactions in range.");
        return Ok(());
    }

    let names: HashMap<i64, String> = ledger
        .list_categories()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    println!(
        "{:<20}  {:>12}  {:>12}  {:>12}  {:>5}",
        "CATEGORY", "INCOME", "EXPENSE", "NET", "COUNT"
    );
    for row in summary {
        let name = names
            .get(&row.category_id)
            .cloned()
            .unwrap_or_else(|| format!("#{}", row.category_id));
        println!(
            "{:<20}  {:>12}  {:>12}  {:>12}  {:>5}",
            name,
            format_amount(row.income_minor),
            format_amount(-row.expense_minor),
            format_amount(row.net_minor),
            row.count,
        );
    }

    Ok(())
}

pub fn cmd_alerts(ledger: &Ledger, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let from = parse_from_arg(from)?;
    let to = parse_to_arg(to)?;

    let alerts = ledger.exceeded_budgets(from, to)?;

    if alerts.is_empty() {
        println!("All budgets are within their limits.");
        return Ok(());
    }

    for alert in alerts {
        println!(
            "'{}' is over budget: spent {} of {} (over by {})",
            alert.category_name,
            format_amount(alert.spent_minor),
            format_amount(alert.limit_minor),
            format_amount(alert.exceeded_by_minor),
        );
    }

    Ok(())
}
