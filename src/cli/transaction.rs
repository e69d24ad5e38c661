//! CLI commands for transaction management

use chrono::NaiveDate;
use clap::Args;

use crate::audit::{HistoryEntry, HistoryLog};
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;
use crate::models::category::LabelParseError;
use crate::models::{Category, Money, NewTransaction, Transaction, TransactionId, TransactionType};

/// Arguments for `tally add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction name, e.g. "Groceries"
    pub name: String,

    /// Amount, e.g. "12.50"
    pub amount: String,

    /// Category label, e.g. "Food & Dining"
    #[arg(short, long)]
    pub category: String,

    /// Transaction type: "expense" or "income"
    #[arg(short = 't', long = "type", default_value = "expense")]
    pub transaction_type: String,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

/// Arguments for `tally list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show transactions in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Start of date range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End of date range (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// Handle `tally add`
pub fn handle_add_command(
    ledger: &mut Ledger,
    history: &HistoryLog,
    settings: &Settings,
    args: AddArgs,
) -> TallyResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| TallyError::Validation(e.to_string()))?;
    let category = parse_category(&args.category)?;
    let transaction_type: TransactionType = args
        .transaction_type
        .parse()
        .map_err(|e: LabelParseError| TallyError::Validation(e.to_string()))?;

    let mut input = NewTransaction::new(args.name, amount, category, transaction_type);

    if let Some(date_str) = args.date {
        input = input.date(parse_date(&date_str)?);
    }
    if let Some(description) = args.description {
        input = input.description(description);
    }
    if let Some(tags) = args.tags {
        input = input.tags(parse_tags(&tags));
    }

    let txn = ledger.add(input)?;
    history.append(&HistoryEntry::added(&txn))?;

    println!("Added transaction {}", txn.id);
    print!(
        "{}",
        format_transaction_details(&txn, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `tally list`
pub fn handle_list_command(
    ledger: &Ledger,
    settings: &Settings,
    args: ListArgs,
) -> TallyResult<()> {
    let mut transactions: Vec<&Transaction> = match &args.category {
        Some(label) => ledger.by_category(parse_category(label)?),
        None => ledger.transactions().iter().collect(),
    };

    if let Some(from) = &args.from {
        let from = parse_date(from)?;
        transactions.retain(|t| t.date >= from);
    }
    if let Some(to) = &args.to {
        let to = parse_date(to)?;
        transactions.retain(|t| t.date <= to);
    }

    print!(
        "{}",
        format_transaction_table(&transactions, &settings.currency_symbol)
    );
    println!("{} transaction(s)", transactions.len());
    Ok(())
}

/// Handle `tally show`
pub fn handle_show_command(ledger: &Ledger, settings: &Settings, id: &str) -> TallyResult<()> {
    let id = TransactionId::from(id.trim());
    match ledger.get(&id) {
        Some(txn) => {
            print!(
                "{}",
                format_transaction_details(txn, &settings.currency_symbol)
            );
            Ok(())
        }
        None => Err(TallyError::transaction_not_found(id.to_string())),
    }
}

/// Handle `tally remove`
pub fn handle_remove_command(
    ledger: &mut Ledger,
    history: &HistoryLog,
    id: &str,
) -> TallyResult<()> {
    let id = TransactionId::from(id.trim());

    // Snapshot first: the history entry needs the fields of what is removed
    let snapshot = ledger.get(&id).cloned();

    if ledger.remove(&id)? {
        if let Some(txn) = snapshot {
            history.append(&HistoryEntry::removed(&txn))?;
        }
        println!("Removed transaction {}", id);
        Ok(())
    } else {
        Err(TallyError::transaction_not_found(id.to_string()))
    }
}

pub(crate) fn parse_category(label: &str) -> TallyResult<Category> {
    label
        .parse()
        .map_err(|e: LabelParseError| TallyError::Validation(e.to_string()))
}

pub(crate) fn parse_date(s: &str) -> TallyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TallyError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

fn parse_tags(s: &str) -> Vec<String> {
    s.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
