//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger core. Handlers own all user-input
//! parsing (labels, dates, amounts) so the core only ever sees typed values.

pub mod export;
pub mod history;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs};
pub use history::{handle_history_command, HistoryArgs};
pub use report::{handle_balance_command, handle_category_command, handle_month_command};
pub use transaction::{
    handle_add_command, handle_list_command, handle_remove_command, handle_show_command, AddArgs,
    ListArgs,
};
