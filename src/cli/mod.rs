//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod report;
pub mod transaction;

pub use report::{handle_history_command, handle_report_command};
pub use transaction::{
    handle_add_command, handle_balance_command, handle_delete_command, handle_list_command,
};
