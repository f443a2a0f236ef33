//! CLI commands for reports
//!
//! The monthly report and the audit history.

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Month;
use crate::reports::MonthlyReport;
use crate::services::Ledger;
use crate::storage::KeyValueStore;

/// Handle `report [--month YYYY-MM]`
pub fn handle_report_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    month: Option<String>,
) -> LedgerResult<()> {
    let month = resolve_month(month.as_deref(), ledger)?;
    let report = MonthlyReport::generate(ledger, month);
    print!("{}", report.format_terminal(settings));
    Ok(())
}

/// Handle `history [--limit N]`
pub fn handle_history_command(logger: &AuditLogger, limit: usize) -> LedgerResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

fn resolve_month<S: KeyValueStore>(month: Option<&str>, ledger: &Ledger<S>) -> LedgerResult<Month> {
    match month {
        Some(text) => Month::parse(text).map_err(|e| {
            LedgerError::Validation(format!("{}. Use YYYY-MM (e.g., 2025-01)", e))
        }),
        None => Ok(Month::current(ledger.calendar_zone())),
    }
}
