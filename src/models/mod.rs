//! Core data models for tally-cli
//!
//! This module contains the value types that make up the ledger domain:
//! transactions, the fixed category set, monetary amounts, and calendar
//! months.

pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use category::{Category, TransactionType};
pub use ids::TransactionId;
pub use money::Money;
pub use month::Month;
pub use transaction::{NewTransaction, Transaction};
