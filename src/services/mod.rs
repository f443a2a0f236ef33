//! Service layer for pocket-ledger
//!
//! The ledger owns the transaction list and its totals and is the only
//! component that mutates them. `SharedLedger` wraps it for use across
//! threads.

pub mod ledger;
pub mod shared;

pub use ledger::Ledger;
pub use shared::SharedLedger;
