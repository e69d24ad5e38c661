//! CLI command for the change history

use clap::Args;

use crate::audit::HistoryLog;
use crate::error::TallyResult;

/// Arguments for `tally history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `tally history`
pub fn handle_history_command(history: &HistoryLog, args: HistoryArgs) -> TallyResult<()> {
    let entries = history.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
