//! Transaction CLI commands
//!
//! Add, list and delete entries, and show the running totals.

use crate::config::Settings;
use crate::display::{format_totals, format_transaction_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionId, TransactionKind};
use crate::services::Ledger;
use crate::storage::KeyValueStore;

/// Handle `add <kind> <note> <amount>`
pub fn handle_add_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    kind: &str,
    note: &str,
    amount: &str,
) -> LedgerResult<()> {
    let kind: TransactionKind = kind.parse().map_err(LedgerError::Validation)?;
    let amount = Money::parse(amount).map_err(|e| LedgerError::Validation(e.to_string()))?;

    let txn = ledger.add_money(note, amount, kind)?;

    println!(
        "Added {} '{}' {} (id {})",
        txn.kind.as_str(),
        txn.note,
        txn.amount.format_with_symbol(&settings.currency_symbol),
        txn.id
    );
    println!(
        "Balance: {}",
        ledger.balance().format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle `list [--limit N]`: the most recent entries, oldest first
pub fn handle_list_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    limit: Option<usize>,
) -> LedgerResult<()> {
    let transactions = ledger.transactions();
    let start = match limit {
        Some(n) => transactions.len().saturating_sub(n),
        None => 0,
    };

    print!("{}", format_transaction_list(&transactions[start..], settings));
    if start > 0 {
        println!("({} older transactions not shown)", start);
    }
    Ok(())
}

/// Handle `delete <id>`
pub fn handle_delete_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    id: &str,
) -> LedgerResult<()> {
    let id: TransactionId = id
        .parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid transaction id: '{}'", id)))?;

    match ledger.delete(id)? {
        Some(txn) => {
            println!(
                "Deleted '{}' {} (id {})",
                txn.note,
                txn.amount.format_with_symbol(&settings.currency_symbol),
                txn.id
            );
            println!(
                "Balance: {}",
                ledger.balance().format_with_symbol(&settings.currency_symbol)
            );
        }
        None => println!("No transaction with id {}", id),
    }
    Ok(())
}

/// Handle `balance`
pub fn handle_balance_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
) -> LedgerResult<()> {
    print!("{}", format_totals(&ledger.totals(), settings));
    Ok(())
}
