//! HTML export
//!
//! A fixed, self-contained HTML template embedding summary statistics and
//! the full data table. Deterministic for a given payload.

use std::fmt::Write;

use crate::format::currency_symbol;
use crate::models::Report;

/// Render a report as a standalone HTML document
pub fn render(report: &Report) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n",
    );
    let _ = writeln!(out, "<title>{}</title>", escape(report.title()));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:2em}table{border-collapse:collapse}\
         td,th{border:1px solid #ccc;padding:4px 8px}</style>\n</head>\n<body>\n",
    );
    let _ = writeln!(out, "<h1>{}</h1>", escape(report.title()));

    match report {
        Report::Trend(r) => {
            let symbol = currency_symbol(&r.currency);
            let _ = writeln!(
                out,
                "<ul>\n<li>Periods: {}</li>\n<li>Total: {}</li>\n<li>Average: {}</li>\n</ul>",
                r.points.len(),
                r.total().format_with_symbol(&symbol),
                r.average().format_with_symbol(&symbol)
            );
            out.push_str(
                "<table>\n<tr><th>Period</th><th>Amount</th><th>Change %</th><th>Trend</th></tr>\n",
            );
            for point in &r.points {
                let _ = writeln!(
                    out,
                    "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td></tr>",
                    escape(&point.period),
                    point.amount.format_with_symbol(&symbol),
                    point.change_pct,
                    point.trend
                );
            }
            out.push_str("</table>\n");
        }
        Report::Custom(r) => {
            let symbol = currency_symbol(&r.currency);
            let _ = writeln!(
                out,
                "<p>Range: {} to {}</p>",
                r.from, r.to
            );
            let _ = writeln!(
                out,
                "<ul>\n<li>Total expenses: {}</li>\n<li>Total revenue: {}</li>\n<li>Net: {}</li>\n</ul>",
                r.total_expenses().format_with_symbol(&symbol),
                r.total_revenue().format_with_symbol(&symbol),
                r.net().format_with_symbol(&symbol)
            );
            out.push_str(
                "<table>\n<tr><th>Type</th><th>Date</th><th>Category</th>\
                 <th>Description</th><th>Amount</th></tr>\n",
            );
            for entry in &r.entries {
                let _ = writeln!(
                    out,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    entry.kind,
                    entry.date.format("%Y-%m-%d"),
                    escape(&entry.category),
                    escape(&entry.description),
                    entry.amount.format_with_symbol(&symbol)
                );
            }
            out.push_str("</table>\n");
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// Minimal HTML escaping for user-provided strings
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures::{custom_report, trend_report};

    #[test]
    fn test_html_document_shape() {
        let text = render(&trend_report());
        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(text.contains("<h1>Spending Trend</h1>"));
        assert!(text.contains("<li>Total: $2100.00</li>"));
        assert!(text.ends_with("</html>\n"));
    }

    #[test]
    fn test_custom_table_rows() {
        let text = render(&custom_report());
        assert!(text.contains("<td>Groceries</td>"));
        assert!(text.contains("<td>$82.50</td>"));
        assert!(text.contains("<li>Net: $3068.50</li>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&c"), "a&lt;b&gt;&amp;c");
    }
}
