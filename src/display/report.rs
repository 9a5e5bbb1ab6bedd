//! Report display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::PreferencesStore;
use crate::models::{CustomReport, TrendReport};

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Trend")]
    trend: String,
}

/// Format a trend report as a table with its totals
pub fn format_trend_table(report: &TrendReport, store: &PreferencesStore) -> String {
    if report.points.is_empty() {
        return format!("{}\n\nNo data for this range.\n", report.title);
    }

    let rows: Vec<TrendRow> = report
        .points
        .iter()
        .map(|point| TrendRow {
            period: point.period.clone(),
            amount: store.format_money(point.amount),
            change: format!("{:+.1}%", point.change_pct),
            trend: point.trend.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    format!(
        "{}\n\n{}\n\nTotal: {}   Average: {}\n",
        report.title,
        table,
        store.format_money(report.total()),
        store.format_money(report.average())
    )
}

/// Format a custom report header and totals
pub fn format_custom_report(report: &CustomReport, store: &PreferencesStore) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", report.title));
    out.push_str(&format!(
        "Range: {} to {}\n\n",
        store.format_date(report.from),
        store.format_date(report.to)
    ));
    out.push_str(&format!(
        "Expenses: {}\n",
        store.format_money(report.total_expenses())
    ));
    out.push_str(&format!(
        "Revenue:  {}\n",
        store.format_money(report.total_revenue())
    ));
    out.push_str(&format!("Net:      {}\n", store.format_money(report.net())));
    out.push_str(&format!("Entries:  {}\n", report.entries.len()));
    out
}
