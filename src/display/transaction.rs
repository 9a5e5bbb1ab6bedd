//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::PreferencesStore;
use crate::models::{Transaction, TransactionSummary};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    store: &PreferencesStore,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            date: store.format_date(txn.created_at.date_naive()),
            kind: txn.kind.as_str().to_string(),
            category: txn.category.clone(),
            description: truncate(&txn.description, 30),
            amount: store.format_money(txn.amount),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format the period summary panel
pub fn format_summary_panel(summary: &TransactionSummary, store: &PreferencesStore) -> String {
    let mut out = String::new();
    out.push_str(&format!("Period:       {}\n", summary.period));
    out.push_str(&format!(
        "Expenses:     {} ({} transactions)\n",
        store.format_money(summary.total_expenses),
        summary.expense_count
    ));
    out.push_str(&format!(
        "Revenue:      {} ({} transactions)\n",
        store.format_money(summary.total_revenue),
        summary.revenue_count
    ));
    out.push_str(&format!("Net:          {}\n", store.format_money(summary.net())));
    out
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
