//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction was added
    Create,
    /// Transaction was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one change to the ledger together with the full transaction as
/// it was before (deletes) or after (creates) the change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// ID of the affected transaction
    pub transaction_id: TransactionId,

    /// Note of the affected transaction, for quick reading
    pub note: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Transaction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Transaction>,
}

impl AuditEntry {
    /// Entry for a newly added transaction
    pub fn create(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            transaction_id: txn.id,
            note: txn.note.clone(),
            before: None,
            after: Some(txn.clone()),
        }
    }

    /// Entry for a deleted transaction
    pub fn delete(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            transaction_id: txn.id,
            note: txn.note.clone(),
            before: Some(txn.clone()),
            after: None,
        }
    }

    /// The transaction this entry describes
    pub fn transaction(&self) -> Option<&Transaction> {
        self.after.as_ref().or(self.before.as_ref())
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.transaction_id,
            self.note
        );

        if let Some(txn) = self.transaction() {
            output.push_str(&format!(" {} {}", txn.kind, txn.amount));
        }

        output
    }
}
