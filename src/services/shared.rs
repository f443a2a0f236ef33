//! Thread-safe handle to a ledger
//!
//! One `RwLock` guards the transaction list and its totals together. Writers
//! (`add`, `delete`) hold the write lock for the whole operation, including
//! the store write, so readers never observe a list and totals that disagree.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthlySummary, Totals, Transaction, TransactionId, TransactionKind};
use crate::storage::KeyValueStore;

use super::ledger::Ledger;

/// Cloneable, lock-protected ledger
pub struct SharedLedger<S: KeyValueStore> {
    inner: Arc<RwLock<Ledger<S>>>,
}

impl<S: KeyValueStore> Clone for SharedLedger<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> SharedLedger<S> {
    pub fn new(ledger: Ledger<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    pub fn add(&self, note: &str, amount: f64, kind: TransactionKind) -> LedgerResult<Transaction> {
        self.write()?.add(note, amount, kind)
    }

    pub fn add_money(
        &self,
        note: &str,
        amount: Money,
        kind: TransactionKind,
    ) -> LedgerResult<Transaction> {
        self.write()?.add_money(note, amount, kind)
    }

    pub fn delete(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.write()?.delete(id)
    }

    pub fn monthly_summary(&self, year: i32, month: u32) -> LedgerResult<MonthlySummary> {
        Ok(self.read()?.monthly_summary(year, month))
    }

    pub fn totals(&self) -> LedgerResult<Totals> {
        Ok(self.read()?.totals())
    }

    /// Snapshot of the transaction list
    pub fn transactions(&self) -> LedgerResult<Vec<Transaction>> {
        Ok(self.read()?.transactions().to_vec())
    }

    /// Run a read-only closure against the ledger under the read lock
    pub fn with_ledger<T>(&self, f: impl FnOnce(&Ledger<S>) -> T) -> LedgerResult<T> {
        Ok(f(&*self.read()?))
    }

    fn read(&self) -> LedgerResult<RwLockReadGuard<'_, Ledger<S>>> {
        self.inner
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, Ledger<S>>> {
        self.inner
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
