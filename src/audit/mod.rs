//! Audit logging for pocket-ledger
//!
//! Every add and delete is appended to `audit.log` as one JSON line holding
//! the affected transaction. The log is never rewritten, so it keeps the
//! history that the transaction list itself forgets once an entry is
//! deleted.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&txn))?;
//! for entry in logger.read_recent(10)? {
//!     println!("{}", entry.format_human_readable());
//! }
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
