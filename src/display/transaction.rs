//! Transaction display formatting
//!
//! Rows for the transaction list and the running totals block.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{Totals, Transaction, TransactionKind};

use super::report::{labeled_row, separator, truncate};

const NOTE_WIDTH: usize = 28;
const LIST_WIDTH: usize = 78;

/// Format a single transaction as a list row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let date = settings.month_zone.date(&txn.timestamp);
    let marker = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    format!(
        "{:>13}  {:<10}  {:<7}  {:<width$}  {}{:>13}",
        txn.id,
        format_date(date, &settings.date_format),
        txn.kind,
        truncate(&txn.note, NOTE_WIDTH),
        marker,
        txn.amount.format_with_symbol(&settings.currency_symbol),
        width = NOTE_WIDTH
    )
}

/// Format a date, falling back to ISO format if `fmt` is not a valid
/// strftime pattern
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return date.format("%Y-%m-%d").to_string();
    }
    date.format(fmt).to_string()
}

/// Format transactions as a list, in the order given
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>13}  {:<10}  {:<7}  {:<width$}  {:>14}\n",
        "ID",
        "Date",
        "Type",
        "Note",
        "Amount",
        width = NOTE_WIDTH
    ));
    output.push_str(&separator(LIST_WIDTH));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

/// Format the running balance and totals
pub fn format_totals(totals: &Totals, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    for (label, amount) in [
        ("Balance", totals.balance),
        ("Income", totals.total_income),
        ("Expense", totals.total_expense),
    ] {
        output.push_str(&labeled_row(label, &amount.format_with_symbol(symbol), 30));
        output.push('\n');
    }
    output
}
