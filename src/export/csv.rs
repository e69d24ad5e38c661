//! CSV export functionality
//!
//! Writes every transaction as one row, in current in-memory order, with a
//! fixed column layout. Amounts are plain decimal strings; quoting and
//! escaping are the csv crate's problem.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;

/// Column order of the export file
const HEADER: [&str; 8] = [
    "ID",
    "Name",
    "Amount",
    "Category",
    "Type",
    "Date",
    "Description",
    "Tags",
];

/// Export all transactions to CSV
///
/// An empty ledger produces only the header row.
pub fn export_transactions_csv<W: Write>(ledger: &Ledger, writer: W) -> TallyResult<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for txn in ledger.transactions() {
        let amount = txn.amount.to_decimal_string();
        let date = txn.date.format("%Y-%m-%d").to_string();
        let tags = txn.tags.join(", ");

        csv_writer
            .write_record([
                txn.id.as_str(),
                txn.name.as_str(),
                amount.as_str(),
                txn.category.label(),
                txn.transaction_type.label(),
                date.as_str(),
                txn.description.as_deref().unwrap_or(""),
                tags.as_str(),
            ])
            .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}
