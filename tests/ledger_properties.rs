//! Property tests for ledger invariants over random operation sequences

use pocket_ledger::models::{Money, Totals, TransactionKind};
use pocket_ledger::services::Ledger;
use pocket_ledger::storage::MemoryStore;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add { income: bool, minor: i64 },
    Delete { pick: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<bool>(), amount_minor())
            .prop_map(|(income, minor)| Op::Add { income, minor }),
        1 => any::<usize>().prop_map(|pick| Op::Delete { pick }),
    ]
}

/// Everyday amounts plus amounts right at the per-transaction ceiling
fn amount_minor() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => 1i64..10_000_000i64,
        1 => (Money::MAX.minor() - 1_000_000)..=Money::MAX.minor(),
    ]
}

fn kind(income: bool) -> TransactionKind {
    if income {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    }
}

fn apply(ledger: &mut Ledger<MemoryStore>, op: &Op) {
    match op {
        Op::Add { income, minor } => {
            ledger
                .add_money("entry", Money::from_minor(*minor), kind(*income))
                .unwrap();
        }
        Op::Delete { pick } => {
            if !ledger.is_empty() {
                let id = ledger.transactions()[pick % ledger.len()].id;
                assert!(ledger.delete(id).unwrap().is_some());
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Running totals always equal the fold over the transaction list, and
    /// the balance is always income minus expense.
    #[test]
    fn totals_track_transactions(ops in prop::collection::vec(op(), 0..40)) {
        let mut ledger = Ledger::load(MemoryStore::new());

        for op in &ops {
            apply(&mut ledger, op);
            let totals = ledger.totals();
            prop_assert_eq!(totals, ledger.recompute_totals());
            prop_assert_eq!(totals, Totals::from_transactions(ledger.transactions()));
            prop_assert!(totals.is_consistent());
        }
    }

    /// Reloading from the store reproduces the list and totals exactly.
    #[test]
    fn reload_round_trip(ops in prop::collection::vec(op(), 0..30)) {
        let mut ledger = Ledger::load(MemoryStore::new());
        for op in &ops {
            apply(&mut ledger, op);
        }

        let transactions = ledger.transactions().to_vec();
        let totals = ledger.totals();

        let reloaded = Ledger::load(ledger.into_store());
        prop_assert_eq!(reloaded.transactions(), transactions.as_slice());
        prop_assert_eq!(reloaded.totals(), totals);
    }

    /// Adding then deleting a transaction leaves the ledger as it was, and a
    /// second delete of the same id changes nothing.
    #[test]
    fn add_delete_restores_state(
        ops in prop::collection::vec(op(), 0..20),
        income in any::<bool>(),
        minor in amount_minor(),
    ) {
        let mut ledger = Ledger::load(MemoryStore::new());
        for op in &ops {
            apply(&mut ledger, op);
        }

        let before = ledger.transactions().to_vec();
        let totals = ledger.totals();

        let txn = ledger.add_money("temp", Money::from_minor(minor), kind(income)).unwrap();
        prop_assert!(ledger.delete(txn.id).unwrap().is_some());
        prop_assert_eq!(ledger.transactions(), before.as_slice());
        prop_assert_eq!(ledger.totals(), totals);

        prop_assert!(ledger.delete(txn.id).unwrap().is_none());
        prop_assert_eq!(ledger.transactions(), before.as_slice());
        prop_assert_eq!(ledger.totals(), totals);
    }

    /// Amounts at the ceiling reload exactly, fraction included.
    #[test]
    fn ceiling_amounts_reload_exactly(
        minors in prop::collection::vec((Money::MAX.minor() - 10_000)..=Money::MAX.minor(), 1..8),
        income in any::<bool>(),
    ) {
        let mut ledger = Ledger::load(MemoryStore::new());
        for minor in &minors {
            ledger.add_money("big", Money::from_minor(*minor), kind(income)).unwrap();
        }
        let totals = ledger.totals();
        let transactions = ledger.transactions().to_vec();

        let reloaded = Ledger::load(ledger.into_store());
        prop_assert_eq!(reloaded.transactions(), transactions.as_slice());
        prop_assert_eq!(reloaded.totals(), totals);
    }

    /// Amounts above the ceiling are rejected and leave the ledger unchanged.
    #[test]
    fn oversized_amounts_are_rejected(excess in 1i64..1_000_000_000i64) {
        let mut ledger = Ledger::load(MemoryStore::new());
        let result = ledger.add_money(
            "huge",
            Money::from_minor(Money::MAX.minor() + excess),
            TransactionKind::Income,
        );
        prop_assert!(result.unwrap_err().is_validation());
        prop_assert!(ledger.is_empty());
    }

    /// Ids issued in quick succession are distinct and increasing.
    #[test]
    fn ids_increase(count in 1usize..50) {
        let mut ledger = Ledger::load(MemoryStore::new());
        for _ in 0..count {
            ledger.add("entry", 1.0, TransactionKind::Income).unwrap();
        }
        let ids: Vec<_> = ledger.transactions().iter().map(|t| t.id).collect();
        for pair in ids.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
