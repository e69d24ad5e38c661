//! Change history for tally-cli
//!
//! Records every add and remove in an append-only line-delimited JSON log.
//! The history is a convenience record for the user, not a recovery
//! mechanism; the ledger file remains the source of truth.

pub mod entry;
pub mod logger;

pub use entry::{HistoryEntry, Operation};
pub use logger::HistoryLog;
