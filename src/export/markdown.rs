//! Markdown export
//!
//! A fixed textual template: title, summary statistics, and the full data
//! table. Purely presentational and deterministic for a given payload.

use std::fmt::Write;

use crate::format::currency_symbol;
use crate::models::Report;

/// Render a report as Markdown text
pub fn render(report: &Report) -> String {
    match report {
        Report::Trend(r) => {
            let symbol = currency_symbol(&r.currency);
            let mut out = String::new();
            let _ = writeln!(out, "# {}\n", r.title);
            let _ = writeln!(out, "- Periods: {}", r.points.len());
            let _ = writeln!(out, "- Total: {}", r.total().format_with_symbol(&symbol));
            let _ = writeln!(out, "- Average: {}", r.average().format_with_symbol(&symbol));
            let _ = writeln!(out, "\n| Period | Amount | Change % | Trend |");
            let _ = writeln!(out, "|--------|--------|----------|-------|");
            for point in &r.points {
                let _ = writeln!(
                    out,
                    "| {} | {} | {:.2} | {} |",
                    point.period,
                    point.amount.format_with_symbol(&symbol),
                    point.change_pct,
                    point.trend
                );
            }
            out
        }
        Report::Custom(r) => {
            let symbol = currency_symbol(&r.currency);
            let mut out = String::new();
            let _ = writeln!(out, "# {}\n", r.title);
            let _ = writeln!(out, "Range: {} to {}\n", r.from, r.to);
            let _ = writeln!(
                out,
                "- Total expenses: {}",
                r.total_expenses().format_with_symbol(&symbol)
            );
            let _ = writeln!(
                out,
                "- Total revenue: {}",
                r.total_revenue().format_with_symbol(&symbol)
            );
            let _ = writeln!(out, "- Net: {}", r.net().format_with_symbol(&symbol));
            let _ = writeln!(out, "\n| Type | Date | Category | Description | Amount |");
            let _ = writeln!(out, "|------|------|----------|-------------|--------|");
            for entry in &r.entries {
                let _ = writeln!(
                    out,
                    "| {} | {} | {} | {} | {} |",
                    entry.kind,
                    entry.date.format("%Y-%m-%d"),
                    entry.category,
                    entry.description,
                    entry.amount.format_with_symbol(&symbol)
                );
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures::{custom_report, trend_report};

    #[test]
    fn test_trend_markdown_structure() {
        let text = render(&trend_report());
        assert!(text.starts_with("# Spending Trend\n"));
        assert!(text.contains("- Total: $2100.00"));
        assert!(text.contains("- Average: $1050.00"));
        assert!(text.contains("| 2026-02 | $1100.00 | 10.00 | up |"));
    }

    #[test]
    fn test_custom_markdown_structure() {
        let text = render(&custom_report());
        assert!(text.contains("Range: 2026-03-01 to 2026-03-31"));
        assert!(text.contains("- Total expenses: $131.50"));
        assert!(text.contains("- Net: $3068.50"));
        assert!(text.contains("| Expense | 2026-03-05 | Groceries | Weekly shop | $82.50 |"));
    }
}
