//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl TransactionRow {
    fn from_transaction(txn: &Transaction, currency_symbol: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.transaction_type.label().to_string(),
            category: txn.category.label().to_string(),
            amount: txn.amount.format_with_symbol(currency_symbol),
            name: txn.name.clone(),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[&Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::from_transaction(t, currency_symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format full transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Name:        {}\n", txn.name));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));

    if let Some(description) = &txn.description {
        output.push_str(&format!("Description: {}\n", description));
    }

    if !txn.tags.is_empty() {
        output.push_str(&format!("Tags:        {}\n", txn.tags.join(", ")));
    }

    output
}
