//! Core data models for pocket-ledger
//!
//! This module contains the data structures of the ledger domain:
//! transactions, money amounts, ids, calendar months and the aggregates
//! derived from a transaction list.

pub mod ids;
pub mod money;
pub mod month;
pub mod summary;
pub mod transaction;

pub use ids::{IdGenerator, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{CalendarZone, Month, MonthParseError};
pub use summary::{MonthlySummary, Totals};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
