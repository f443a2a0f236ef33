//! Aggregates derived from the transaction list
//!
//! `Totals` is the running projection the ledger keeps up to date on every
//! add and delete. `MonthlySummary` is always computed on demand.

use serde::{Deserialize, Serialize};

use super::month::{CalendarZone, Month};
use super::money::Money;
use super::transaction::{Transaction, TransactionKind};

/// Running balance and per-kind totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub balance: Money,
    pub total_income: Money,
    pub total_expense: Money,
}

impl Totals {
    /// Fold a transaction sequence into totals, in order
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions.into_iter().fold(Self::default(), |mut totals, txn| {
            totals.apply(txn);
            totals
        })
    }

    /// Accumulate a newly recorded transaction
    pub fn apply(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => {
                self.balance += txn.amount;
                self.total_income += txn.amount;
            }
            TransactionKind::Expense => {
                self.balance -= txn.amount;
                self.total_expense += txn.amount;
            }
        }
    }

    /// Totals after applying `txn`, or `None` if any figure would overflow
    pub fn checked_apply(&self, txn: &Transaction) -> Option<Self> {
        let mut next = *self;
        match txn.kind {
            TransactionKind::Income => {
                next.balance = self.balance.checked_add(txn.amount)?;
                next.total_income = self.total_income.checked_add(txn.amount)?;
            }
            TransactionKind::Expense => {
                next.balance = self.balance.checked_sub(txn.amount)?;
                next.total_expense = self.total_expense.checked_add(txn.amount)?;
            }
        }
        Some(next)
    }

    /// Undo the effect of a transaction that is being removed
    pub fn revert(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => {
                self.balance -= txn.amount;
                self.total_income -= txn.amount;
            }
            TransactionKind::Expense => {
                self.balance += txn.amount;
                self.total_expense -= txn.amount;
            }
        }
    }

    /// `balance == total_income - total_expense`
    pub fn is_consistent(&self) -> bool {
        self.balance == self.total_income - self.total_expense
    }
}

/// Income, expense and net for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub income: Money,
    pub expense: Money,
    pub net: Money,
}

impl MonthlySummary {
    /// Sum the transactions whose timestamp falls in `month`
    pub fn for_month<'a, I>(transactions: I, month: Month, zone: CalendarZone) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for txn in transactions
            .into_iter()
            .filter(|t| month.contains(&t.timestamp, zone))
        {
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => expense += txn.amount,
            }
        }

        Self {
            income,
            expense,
            net: income - expense,
        }
    }
}
