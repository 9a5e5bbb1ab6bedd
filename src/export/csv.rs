//! CSV export
//!
//! Fixed column schema per report kind, one row per data point. The only
//! quoting applied is around the description field; the remaining columns
//! are plain values.

use std::fmt::Write;

use crate::models::Report;

/// Render a report as CSV text
pub fn render(report: &Report) -> String {
    match report {
        Report::Trend(r) => {
            let mut out = String::from("Period,Amount,Change %,Trend,Currency\n");
            for point in &r.points {
                let _ = writeln!(
                    out,
                    "{},{},{:.2},{},{}",
                    point.period, point.amount, point.change_pct, point.trend, r.currency
                );
            }
            out
        }
        Report::Custom(r) => {
            let mut out = String::from("Type,Date,Category,Description,Amount,Currency\n");
            for entry in &r.entries {
                let _ = writeln!(
                    out,
                    "{},{},{},\"{}\",{},{}",
                    entry.kind.as_str(),
                    entry.date.format("%Y-%m-%d"),
                    entry.category,
                    entry.description,
                    entry.amount,
                    r.currency
                );
            }
            out
        }
    }
}
