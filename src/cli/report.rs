//! CLI commands for summaries and reports

use crate::config::Settings;
use crate::display::{format_balance_summary, format_monthly_summary, format_transaction_table};
use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;
use crate::models::{Category, Money, Month};

use super::transaction::parse_category;

/// Handle `tally balance`
pub fn handle_balance_command(ledger: &Ledger, settings: &Settings) -> TallyResult<()> {
    print!(
        "{}",
        format_balance_summary(ledger, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `tally month`
///
/// With no argument, summarizes the current month.
pub fn handle_month_command(
    ledger: &Ledger,
    settings: &Settings,
    month: Option<String>,
) -> TallyResult<()> {
    let month = match month {
        Some(s) => Month::parse(&s).map_err(|e| TallyError::Validation(e.to_string()))?,
        None => Month::current(),
    };

    let summary = ledger.monthly_summary(month);
    print!(
        "{}",
        format_monthly_summary(&summary, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `tally category`
///
/// With a label, lists that category's transactions and their total. Without
/// one, prints the available labels.
pub fn handle_category_command(
    ledger: &Ledger,
    settings: &Settings,
    label: Option<String>,
) -> TallyResult<()> {
    let Some(label) = label else {
        println!("Available categories:");
        for category in Category::ALL {
            println!("  {}", category);
        }
        return Ok(());
    };

    let category = parse_category(&label)?;
    let transactions = ledger.by_category(category);
    let total: Money = transactions.iter().map(|t| t.amount).sum();

    println!(
        "Transactions for {} (total {})",
        category,
        total.format_with_symbol(&settings.currency_symbol)
    );
    print!(
        "{}",
        format_transaction_table(&transactions, &settings.currency_symbol)
    );
    Ok(())
}
