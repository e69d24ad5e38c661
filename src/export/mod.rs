//! Export module for tally-cli
//!
//! The ledger exports as CSV only: a one-way, spreadsheet-compatible
//! projection of the transaction list. There is no import path back.

pub mod csv;

pub use csv::export_transactions_csv;
