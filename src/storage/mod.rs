//! Storage layer for pocket-ledger
//!
//! Provides the key-value store abstraction the ledger persists through,
//! a JSON-file implementation with atomic writes, and the codec for the
//! persisted transaction list.

pub mod file_io;
pub mod kv;
pub mod transactions;

pub use file_io::{read_json, read_text, write_atomic, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use transactions::{TransactionRepository, TRANSACTIONS_KEY};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Open the file store under the data directory, creating directories
pub fn open_file_store(paths: &LedgerPaths) -> Result<FileStore, LedgerError> {
    paths.ensure_directories()?;
    Ok(FileStore::new(paths.data_dir()))
}
