//! CLI command for CSV export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::error::{TallyError, TallyResult};
use crate::export::export_transactions_csv;
use crate::ledger::Ledger;

/// Arguments for `tally export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,
}

/// Handle `tally export`
pub fn handle_export_command(ledger: &Ledger, args: ExportArgs) -> TallyResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        TallyError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let writer = BufWriter::new(file);

    export_transactions_csv(ledger, writer)?;

    println!(
        "Exported {} transaction(s) to: {}",
        ledger.len(),
        args.output.display()
    );
    Ok(())
}
