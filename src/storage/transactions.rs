//! Transaction list persistence
//!
//! The whole list lives under a single key as a JSON array, oldest first.
//! Loading fails open: a missing, unreadable or unparseable value yields an
//! empty list so that a damaged file never prevents startup.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

use super::kv::KeyValueStore;

/// Key holding the serialized transaction list
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Reads and writes the transaction list of a key-value store
pub struct TransactionRepository;

impl TransactionRepository {
    /// Load the persisted transaction list, falling back to an empty list
    ///
    /// Records that break the transaction rules (blank note, non-positive
    /// amount) and repeated ids are dropped; the first occurrence of an id
    /// wins.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Transaction> {
        let raw = match store.get(TRANSACTIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no persisted transactions, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "could not read persisted transactions, starting empty");
                return Vec::new();
            }
        };

        let decoded = match Self::decode(&raw) {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "persisted transactions are corrupt, discarding them");
                return Vec::new();
            }
        };

        let total = decoded.len();
        let mut seen = HashSet::with_capacity(total);
        let transactions: Vec<Transaction> = decoded
            .into_iter()
            .filter(|txn| match txn.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(id = %txn.id, error = %e, "dropping invalid persisted transaction");
                    false
                }
            })
            .filter(|txn| {
                let fresh = seen.insert(txn.id);
                if !fresh {
                    warn!(id = %txn.id, "dropping persisted transaction with duplicate id");
                }
                fresh
            })
            .collect();

        debug!(loaded = transactions.len(), total, "loaded persisted transactions");
        transactions
    }

    /// Persist the full list, replacing whatever was stored before
    pub fn save<S: KeyValueStore + ?Sized>(
        store: &mut S,
        transactions: &[Transaction],
    ) -> LedgerResult<()> {
        let encoded = Self::encode(transactions)?;
        store.set(TRANSACTIONS_KEY, &encoded)?;
        debug!(count = transactions.len(), "persisted transactions");
        Ok(())
    }

    /// Parse a stored value
    pub fn decode(raw: &str) -> Result<Vec<Transaction>, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serialize a list for storage
    pub fn encode(transactions: &[Transaction]) -> LedgerResult<String> {
        serde_json::to_string(transactions)
            .map_err(|e| LedgerError::Json(format!("Failed to serialize transactions: {}", e)))
    }
}
