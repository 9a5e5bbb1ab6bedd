//! Category breakdown display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::PreferencesStore;
use crate::models::{CategoryDetail, CategorySummary, Trend};

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Trend")]
    trend: &'static str,
}

/// Format the per-category breakdown as a table
pub fn format_category_table(summaries: &[CategorySummary], store: &PreferencesStore) -> String {
    if summaries.is_empty() {
        return "No category data.\n".to_string();
    }

    let rows: Vec<CategoryRow> = summaries
        .iter()
        .map(|cat| CategoryRow {
            category: cat.category.clone(),
            amount: store.format_money(cat.amount),
            share: format!("{:.1}%", cat.percentage),
            trend: trend_arrow(cat.trend),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a category drill-down with its monthly history
pub fn format_category_detail(detail: &CategoryDetail, store: &PreferencesStore) -> String {
    let mut out = String::new();
    out.push_str(&format!("Category:  {}\n", detail.summary.category));
    out.push_str(&format!(
        "Total:     {} ({:.1}% of period)\n",
        store.format_money(detail.summary.amount),
        detail.summary.percentage
    ));
    out.push_str(&format!(
        "Trend:     {} {}\n",
        trend_arrow(detail.summary.trend),
        detail.summary.trend
    ));

    if !detail.monthly.is_empty() {
        out.push('\n');
        for month in &detail.monthly {
            out.push_str(&format!(
                "  {}  {}\n",
                month.month,
                store.format_money(month.amount)
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BoardPaths;
    use crate::models::{Money, MonthlyAmount};
    use tempfile::TempDir;

    fn test_store() -> (TempDir, PreferencesStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = PreferencesStore::load(paths);
        (temp_dir, store)
    }

    #[test]
    fn test_empty_breakdown() {
        let (_temp_dir, store) = test_store();
        assert!(format_category_table(&[], &store).contains("No category data"));
    }

    #[test]
    fn test_breakdown_rows() {
        let (_temp_dir, store) = test_store();
        let summaries = vec![
            CategorySummary {
                category: "Groceries".into(),
                amount: Money::from_cents(33_000),
                percentage: 30.0,
                trend: Trend::Up,
            },
            CategorySummary {
                category: "Rent".into(),
                amount: Money::from_cents(70_000),
                percentage: 63.6,
                trend: Trend::Stable,
            },
        ];

        let out = format_category_table(&summaries, &store);
        assert!(out.contains("Groceries"));
        assert!(out.contains("$330.00"));
        assert!(out.contains("30.0%"));
        assert!(out.contains("↑"));
        assert!(out.contains("→"));
    }

    #[test]
    fn test_detail_includes_monthly_history() {
        let (_temp_dir, store) = test_store();
        let detail = CategoryDetail {
            summary: CategorySummary {
                category: "Groceries".into(),
                amount: Money::from_cents(33_000),
                percentage: 30.0,
                trend: Trend::Up,
            },
            monthly: vec![
                MonthlyAmount {
                    month: "2026-02".into(),
                    amount: Money::from_cents(30_000),
                },
                MonthlyAmount {
                    month: "2026-03".into(),
                    amount: Money::from_cents(33_000),
                },
            ],
        };

        let out = format_category_detail(&detail, &store);
        assert!(out.contains("Category:  Groceries"));
        assert!(out.contains("2026-02  $300.00"));
        assert!(out.contains("↑ up"));
    }
}
