//! The ledger: transaction list, running totals and persistence
//!
//! The transaction list is the single source of truth. Totals are folded
//! from it at load time and then kept up to date incrementally by `add` and
//! `delete`; `recompute_totals` gives the from-scratch fold for comparison.
//!
//! Every successful mutation writes the full list back to the store. If that
//! write fails the error is returned, but the in-memory change stays: the
//! in-memory ledger remains authoritative for the rest of the session.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    CalendarZone, IdGenerator, Money, Month, MonthlySummary, Totals, Transaction, TransactionId,
    TransactionKind,
};
use crate::storage::{KeyValueStore, TransactionRepository};

/// Ordered transactions plus their derived totals, backed by a store
#[derive(Debug)]
pub struct Ledger<S: KeyValueStore> {
    store: S,
    transactions: Vec<Transaction>,
    totals: Totals,
    ids: IdGenerator,
    zone: CalendarZone,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Load the persisted transactions and fold them into fresh totals
    ///
    /// Never fails: absent or corrupt data gives an empty ledger.
    pub fn load(store: S) -> Self {
        let mut totals = Totals::default();
        let transactions: Vec<Transaction> = TransactionRepository::load(&store)
            .into_iter()
            .filter(|txn| match totals.checked_apply(txn) {
                Some(next) => {
                    totals = next;
                    true
                }
                None => {
                    warn!(id = %txn.id, "dropping persisted transaction that overflows the totals");
                    false
                }
            })
            .collect();

        let mut ids = IdGenerator::new();
        for txn in &transactions {
            ids.observe(txn.id);
        }

        info!(
            count = transactions.len(),
            balance = %totals.balance,
            "ledger loaded"
        );

        Self {
            store,
            transactions,
            totals,
            ids,
            zone: CalendarZone::default(),
            audit: None,
        }
    }

    /// Use the given calendar for monthly summaries
    pub fn with_calendar_zone(mut self, zone: CalendarZone) -> Self {
        self.zone = zone;
        self
    }

    /// Record every add and delete in an audit log
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Record a new transaction dated now
    ///
    /// `amount` must be finite, greater than zero (after rounding to the
    /// smallest currency unit) and at most `Money::MAX`; `note` must not be
    /// blank. Invalid input
    /// returns `LedgerError::Validation` and leaves the ledger untouched.
    pub fn add(&mut self, note: &str, amount: f64, kind: TransactionKind) -> LedgerResult<Transaction> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "Amount must be a positive number (got {})",
                amount
            )));
        }
        let amount = Money::from_f64(amount).ok_or_else(|| {
            LedgerError::Validation(format!("Amount is out of range (got {})", amount))
        })?;
        self.add_money(note, amount, kind)
    }

    /// Record a new transaction dated now, for an amount already in `Money`
    pub fn add_money(
        &mut self,
        note: &str,
        amount: Money,
        kind: TransactionKind,
    ) -> LedgerResult<Transaction> {
        self.add_dated(note, amount, kind, Utc::now())
    }

    /// Record a new transaction with an explicit timestamp
    pub fn add_dated(
        &mut self,
        note: &str,
        amount: Money,
        kind: TransactionKind,
        timestamp: DateTime<Utc>,
    ) -> LedgerResult<Transaction> {
        if note.trim().is_empty() {
            return Err(LedgerError::Validation("Note must not be empty".into()));
        }
        if !amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "Amount must be greater than zero (got {})",
                amount
            )));
        }
        if !amount.is_within_limit() {
            return Err(LedgerError::Validation(format!(
                "Amount must not exceed {} (got {})",
                Money::MAX,
                amount
            )));
        }

        let id = self
            .ids
            .next_id()
            .ok_or_else(|| LedgerError::Storage("No transaction ids left to issue".into()))?;
        let txn = Transaction::new(id, note, amount, kind, timestamp)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.totals = self.totals.checked_apply(&txn).ok_or_else(|| {
            LedgerError::Validation(format!("Adding {} would overflow the ledger totals", amount))
        })?;
        self.transactions.push(txn.clone());
        debug!(id = %txn.id, kind = txn.kind.as_str(), amount = %txn.amount, "transaction added");

        self.persist()?;
        self.record(AuditEntry::create(&txn))?;

        Ok(txn)
    }

    /// Remove a transaction by id
    ///
    /// Deleting an id that is not present is a no-op and returns `Ok(None)`
    /// without touching the store.
    pub fn delete(&mut self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        let Some(position) = self.transactions.iter().position(|t| t.id == id) else {
            debug!(%id, "delete of unknown transaction ignored");
            return Ok(None);
        };

        let txn = self.transactions.remove(position);
        self.totals.revert(&txn);
        debug!(id = %txn.id, kind = txn.kind.as_str(), amount = %txn.amount, "transaction deleted");

        self.persist()?;
        self.record(AuditEntry::delete(&txn))?;

        Ok(Some(txn))
    }

    /// Income, expense and net of the given calendar month
    ///
    /// A month outside 1-12 matches no transactions.
    pub fn monthly_summary(&self, year: i32, month: u32) -> MonthlySummary {
        match Month::new(year, month) {
            Some(month) => self.summary_for(month),
            None => MonthlySummary::default(),
        }
    }

    /// Income, expense and net of `month` in the ledger's calendar
    pub fn summary_for(&self, month: Month) -> MonthlySummary {
        MonthlySummary::for_month(&self.transactions, month, self.zone)
    }

    /// Transactions in insertion order, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by id
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Running balance and per-kind totals, kept up to date incrementally
    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn balance(&self) -> Money {
        self.totals.balance
    }

    pub fn total_income(&self) -> Money {
        self.totals.total_income
    }

    pub fn total_expense(&self) -> Money {
        self.totals.total_expense
    }

    /// Fold the current transaction list from scratch
    pub fn recompute_totals(&self) -> Totals {
        Totals::from_transactions(&self.transactions)
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Calendar used to bucket transactions into months
    pub fn calendar_zone(&self) -> CalendarZone {
        self.zone
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> LedgerResult<()> {
        TransactionRepository::save(&mut self.store, &self.transactions).map_err(|e| match e {
            LedgerError::Io(_) => e,
            other => LedgerError::Io(format!("Failed to persist transactions: {}", other)),
        })
    }

    fn record(&self, entry: AuditEntry) -> LedgerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}
