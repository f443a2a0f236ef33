use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::audit::AuditLogger;
use pocket_ledger::cli::{
    handle_add_command, handle_balance_command, handle_delete_command, handle_history_command,
    handle_list_command, handle_report_command,
};
use pocket_ledger::config::{paths::LedgerPaths, settings::Settings};
use pocket_ledger::services::Ledger;
use pocket_ledger::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Personal income and expense ledger",
    long_about = "pocket records income and expense entries, keeps a running \
                  balance with income and expense totals, and reports on any \
                  calendar month. Every change is saved immediately."
)]
struct Cli {
    /// Base directory for settings, data and the audit log
    #[arg(long, global = true, env = "POCKET_LEDGER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or expense entry
    Add {
        /// Entry type (income or expense)
        kind: String,
        /// What the entry is for
        note: String,
        /// Amount (e.g., "1500", "12.50" or "₹1,23,456")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List transactions in the order they were added
    #[command(alias = "ls")]
    List {
        /// Show only the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete a transaction by ID
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
    },

    /// Show the balance with income and expense totals
    Balance,

    /// Show income, expense and net for a month
    Report {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show recent entries from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    pocket_ledger::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }
    let audit = AuditLogger::new(paths.audit_log());

    let store = open_file_store(&paths)?;
    let mut ledger = Ledger::load(store).with_calendar_zone(settings.month_zone);
    if settings.audit_enabled {
        ledger = ledger.with_audit_log(audit.clone());
    }

    match cli.command {
        Some(Commands::Add { kind, note, amount }) => {
            handle_add_command(&mut ledger, &settings, &kind, &note, &amount)?;
        }
        Some(Commands::List { limit }) => {
            handle_list_command(&ledger, &settings, limit)?;
        }
        Some(Commands::Delete { id }) => {
            handle_delete_command(&mut ledger, &settings, &id)?;
        }
        Some(Commands::Balance) => {
            handle_balance_command(&ledger, &settings)?;
        }
        Some(Commands::Report { month }) => {
            handle_report_command(&ledger, &settings, month)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&audit, limit)?;
        }
        Some(Commands::Config) => {
            println!("pocket-ledger Configuration");
            println!("===========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Month calendar:  {}", settings.month_zone);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("pocket - personal income and expense ledger");
            println!();
            println!("Run 'pocket --help' for usage information.");
        }
    }

    Ok(())
}
