//! Transaction model
//!
//! A transaction is a single income or expense entry. Transactions are never
//! edited after creation; the only way to change the ledger is to add a new
//! one or delete an existing one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Lowercase name as stored on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        })
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}'. Use 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A recorded income or expense entry
///
/// Field names on disk follow the long-standing format
/// `{ id, note, amount, type, date }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Description entered by the user (trimmed, never empty)
    pub note: String,

    /// Amount, always strictly positive; the kind decides the direction
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Creation time, used for date display and month bucketing
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Build a transaction, checking the note and amount rules
    pub fn new(
        id: TransactionId,
        note: &str,
        amount: Money,
        kind: TransactionKind,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, TransactionValidationError> {
        let txn = Self {
            id,
            note: note.trim().to_string(),
            amount,
            kind,
            timestamp,
        };
        txn.validate()?;
        Ok(txn)
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.note.trim().is_empty() {
            return Err(TransactionValidationError::EmptyNote);
        }
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        if !self.id.is_valid() {
            return Err(TransactionValidationError::InvalidId(self.id));
        }
        Ok(())
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Effect of this transaction on the running balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.timestamp.format("%Y-%m-%d"),
            self.note,
            self.kind,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyNote,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    InvalidId(TransactionId),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNote => write!(f, "Note must not be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must not exceed {} (got {})", Money::MAX, amount)
            }
            Self::InvalidId(id) => write!(f, "Transaction id {} is out of range", id),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
