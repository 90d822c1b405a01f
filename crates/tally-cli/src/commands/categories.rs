//! Category management commands

use anyhow::Result;

use tally_core::Ledger;

pub fn cmd_categories_list(ledger: &Ledger) -> Result<()> {
    let categories = ledger.list_categories()?;

    if categories.is_empty() {
        println!("No categories yet. Create one with: tally categories add <NAME>");
        return Ok(());
    }

    println!("{:>6}  NAME", "ID");
    for category in categories {
        println!("{:>6}  {}", category.id, category.name);
    }

    Ok(())
}

pub fn cmd_categories_add(ledger: &Ledger, name: &str) -> Result<()> {
    let category = ledger.create_category(name)?;
    println!("Created category '{}' (id {})", category.name, category.id);
    Ok(())
}

pub fn cmd_categories_rm(ledger: &Ledger, id: i64) -> Result<()> {
    ledger.delete_category(id)?;
    println!("Deleted category {} with its transactions and budget", id);
    Ok(())
}
