//! Transaction commands

use anyhow::Result;
use chrono::{TimeZone, Utc};

use tally_core::Ledger;

use super::{format_amount, parse_amount_arg, parse_date_arg, parse_from_arg, parse_to_arg};

pub fn cmd_add(
    ledger: &Ledger,
    category_id: i64,
    amount: &str,
    date: &str,
    note: &str,
) -> Result<()> {
    let amount_minor = parse_amount_arg(amount)?;
    let date = parse_date_arg(date)?;
    let occurred_at = Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).expect("noon is valid"));

    let tx = ledger.add_transaction(category_id, amount_minor, occurred_at, note)?;

    println!(
        "Recorded transaction {} in category {}: {} on {}",
        tx.id,
        tx.category_id,
        format_amount(tx.amount_minor),
        tx.occurred_at.format("%Y-%m-%d"),
    );
    Ok(())
}

pub fn cmd_transactions_list(
    ledger: &Ledger,
    from: Option<&str>,
    to: Option<&str>,
    category_id: Option<i64>,
    limit: i64,
    offset: i64,
) -> Result<()> {
    let from = parse_from_arg(from)?;
    let to = parse_to_arg(to)?;

    let transactions = ledger.list_transactions(from, to, category_id, limit, offset)?;

    if transactions.is_empty() {
        println!("No transactions in range.");
        return Ok(());
    }

    println!("{:>6}  {:>6}  {:>12}  DATE        NOTE", "ID", "CAT", "AMOUNT");
    for tx in transactions {
        println!(
            "{:>6}  {:>6}  {:>12}  {}  {}",
            tx.id,
            tx.category_id,
            format_amount(tx.amount_minor),
            tx.occurred_at.format("%Y-%m-%d"),
            tx.note,
        );
    }

    Ok(())
}
