//! pocket-ledger - personal income and expense ledger
//!
//! Records income and expense entries, keeps a running balance with
//! per-kind totals, and summarizes any calendar month. Every change is
//! written through to a key-value store before the call returns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Money, transactions, months and derived totals
//! - `storage`: Key-value stores and the transaction codec
//! - `services`: The ledger and its thread-safe wrapper
//! - `audit`: Audit logging of adds and deletes
//! - `reports`: Monthly report
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::models::TransactionKind;
//! use pocket_ledger::services::Ledger;
//! use pocket_ledger::storage::MemoryStore;
//!
//! let mut ledger = Ledger::load(MemoryStore::new());
//! ledger.add("Salary", 50000.0, TransactionKind::Income)?;
//! ledger.add("Rent", 15000.0, TransactionKind::Expense)?;
//! assert_eq!(ledger.balance().major(), 35000);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber. Filtering comes from `RUST_LOG`,
/// defaulting to `warn`; output goes to stderr.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
