//! Display formatting for terminal output
//!
//! Formats ledger data for the terminal. All amounts arrive as unformatted
//! magnitudes; applying the currency symbol happens here and only here.

pub mod summary;
pub mod transaction;

pub use summary::{format_balance_summary, format_monthly_summary};
pub use transaction::{format_transaction_details, format_transaction_table};
