//! Monthly Report
//!
//! Income, expense and net for one calendar month.

use crate::config::Settings;
use crate::display::report::{double_separator, format_header, labeled_row};
use crate::models::{Month, MonthlySummary};
use crate::services::Ledger;
use crate::storage::KeyValueStore;

const REPORT_WIDTH: usize = 40;

/// Monthly Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    /// Month covered by the report
    pub month: Month,
    /// Income, expense and net for the month
    pub summary: MonthlySummary,
    /// Number of transactions that fell in the month
    pub transaction_count: usize,
}

impl MonthlyReport {
    /// Generate the report for `month` using the ledger's calendar
    pub fn generate<S: KeyValueStore>(ledger: &Ledger<S>, month: Month) -> Self {
        let zone = ledger.calendar_zone();
        let transaction_count = ledger
            .transactions()
            .iter()
            .filter(|txn| month.contains(&txn.timestamp, zone))
            .count();

        Self {
            month,
            summary: ledger.summary_for(month),
            transaction_count,
        }
    }

    /// Format for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = &settings.currency_symbol;
        let mut output = String::new();

        output.push_str(&format_header(
            &format!("Monthly Report: {}", self.month.long_name()),
            REPORT_WIDTH,
        ));
        output.push('\n');
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');

        for (label, amount) in [
            ("Income", self.summary.income),
            ("Expense", self.summary.expense),
            ("Net", self.summary.net),
        ] {
            output.push_str(&labeled_row(
                label,
                &amount.format_with_symbol(symbol),
                REPORT_WIDTH,
            ));
            output.push('\n');
        }

        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&labeled_row(
            "Transactions",
            &self.transaction_count.to_string(),
            REPORT_WIDTH,
        ));
        output.push('\n');

        output
    }
}
