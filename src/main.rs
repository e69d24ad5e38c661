use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::audit::HistoryLog;
use tally::cli::{
    handle_add_command, handle_balance_command, handle_category_command, handle_export_command,
    handle_history_command, handle_list_command, handle_month_command, handle_remove_command,
    handle_show_command, AddArgs, ExportArgs, HistoryArgs, ListArgs,
};
use tally::config::{Settings, TallyPaths};
use tally::ledger::Ledger;

#[derive(Parser)]
#[command(
    name = "tally",
    author = "Kaylee Beyene",
    version,
    about = "Command-line personal finance ledger",
    long_about = "tally records income and expense transactions in a single \
                  JSON ledger file and derives summaries from it: balance, \
                  monthly totals, and category breakdowns."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a transaction
    Add(AddArgs),

    /// List transactions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one transaction in full
    Show {
        /// Transaction id
        id: String,
    },

    /// Remove a transaction by id
    #[command(alias = "rm")]
    Remove {
        /// Transaction id
        id: String,
    },

    /// Show the overall balance summary
    Balance,

    /// Show a monthly summary
    Month {
        /// Month to summarize (YYYY-MM), defaults to the current month
        month: Option<String>,
    },

    /// List categories, or the transactions in one category
    Category {
        /// Category label, e.g. "Food & Dining"
        label: Option<String>,
    },

    /// Export all transactions to CSV
    Export(ExportArgs),

    /// Show recent ledger changes
    History(HistoryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut ledger = Ledger::open(paths.ledger_file(), settings.corrupt_file_policy)?;
    if let Some(warning) = ledger.load_warning() {
        eprintln!("warning: {}", warning);
    }

    let history = HistoryLog::new(paths.history_log());

    match cli.command {
        Commands::Add(args) => handle_add_command(&mut ledger, &history, &settings, args)?,
        Commands::List(args) => handle_list_command(&ledger, &settings, args)?,
        Commands::Show { id } => handle_show_command(&ledger, &settings, &id)?,
        Commands::Remove { id } => handle_remove_command(&mut ledger, &history, &id)?,
        Commands::Balance => handle_balance_command(&ledger, &settings)?,
        Commands::Month { month } => handle_month_command(&ledger, &settings, month)?,
        Commands::Category { label } => handle_category_command(&ledger, &settings, label)?,
        Commands::Export(args) => handle_export_command(&ledger, args)?,
        Commands::History(args) => handle_history_command(&history, args)?,
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("History log:    {}", paths.history_log().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!("Date format:    {}", settings.date_format);
            println!("Corrupt policy: {:?}", settings.corrupt_file_policy);
            println!("Transactions:   {}", ledger.len());
        }
    }

    Ok(())
}
