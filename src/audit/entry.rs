//! History entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Types of operations recorded in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction was added
    Added,
    /// Transaction was removed
    Removed,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Added => write!(f, "ADDED"),
            Operation::Removed => write!(f, "REMOVED"),
        }
    }
}

/// A single history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub operation: Operation,

    /// Id of the affected transaction
    pub transaction_id: String,

    /// Transaction name at the time of the operation
    pub name: String,

    /// Amount in cents at the time of the operation
    pub amount_cents: i64,
}

impl HistoryEntry {
    /// Record an added transaction
    pub fn added(txn: &Transaction) -> Self {
        Self::record(Operation::Added, txn)
    }

    /// Record a removed transaction
    pub fn removed(txn: &Transaction) -> Self {
        Self::record(Operation::Removed, txn)
    }

    fn record(operation: Operation, txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            transaction_id: txn.id.to_string(),
            name: txn.name.clone(),
            amount_cents: txn.amount.cents(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} ({}, {} cents)",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.transaction_id,
            self.name,
            self.amount_cents
        )
    }
}
