//! Report payloads handed to the export engine
//!
//! Reports are a tagged union so every export format matches exhaustively on
//! the two shapes instead of poking at loosely-typed maps.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::summary::Trend;
use super::transaction::TransactionKind;

/// One period in a trend analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Period label (e.g. "2026-03")
    pub period: String,

    /// Amount for the period
    pub amount: Money,

    /// Change against the previous period, in percent
    pub change_pct: f64,

    /// Direction classified from the change
    pub trend: Trend,
}

/// A trend analysis report fetched from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    /// Report title (becomes the exported file name stem)
    pub title: String,

    /// Currency the amounts are denominated in
    pub currency: String,

    /// One point per period, oldest first
    pub points: Vec<TrendPoint>,
}

impl TrendReport {
    /// Sum of all period amounts
    pub fn total(&self) -> Money {
        self.points.iter().map(|p| p.amount).sum()
    }

    /// Average period amount, zero for an empty report
    pub fn average(&self) -> Money {
        if self.points.is_empty() {
            Money::zero()
        } else {
            Money::from_cents(self.total().cents() / self.points.len() as i64)
        }
    }
}

/// One line of a custom expense/revenue report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Expense or revenue
    pub kind: TransactionKind,

    /// Transaction date
    pub date: NaiveDate,

    /// Category label
    pub category: String,

    /// Description/memo
    #[serde(default)]
    pub description: String,

    /// Amount (positive)
    pub amount: Money,
}

/// A custom expense/revenue report over a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomReport {
    /// Report title (becomes the exported file name stem)
    pub title: String,

    /// Currency the amounts are denominated in
    pub currency: String,

    /// Start of the covered range
    pub from: NaiveDate,

    /// End of the covered range
    pub to: NaiveDate,

    /// One entry per transaction
    pub entries: Vec<ReportEntry>,
}

impl CustomReport {
    /// Sum of expense entries
    pub fn total_expenses(&self) -> Money {
        self.entries
            .iter()
            .filter(|e| e.kind == TransactionKind::Expense)
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of revenue entries
    pub fn total_revenue(&self) -> Money {
        self.entries
            .iter()
            .filter(|e| e.kind == TransactionKind::Revenue)
            .map(|e| e.amount)
            .sum()
    }

    /// Net amount (revenue minus expenses)
    pub fn net(&self) -> Money {
        self.total_revenue() - self.total_expenses()
    }
}

/// Any report the export engine can serialize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "report_type", rename_all = "lowercase")]
pub enum Report {
    Trend(TrendReport),
    Custom(CustomReport),
}

impl Report {
    /// Title of the underlying report
    pub fn title(&self) -> &str {
        match self {
            Self::Trend(r) => &r.title,
            Self::Custom(r) => &r.title,
        }
    }

    /// Currency of the underlying report
    pub fn currency(&self) -> &str {
        match self {
            Self::Trend(r) => &r.currency,
            Self::Custom(r) => &r.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend_report() -> TrendReport {
        TrendReport {
            title: "Spending Trend".into(),
            currency: "USD".into(),
            points: vec![
                TrendPoint {
                    period: "2026-01".into(),
                    amount: Money::from_cents(100_000),
                    change_pct: 0.0,
                    trend: Trend::Stable,
                },
                TrendPoint {
                    period: "2026-02".into(),
                    amount: Money::from_cents(110_000),
                    change_pct: 10.0,
                    trend: Trend::Up,
                },
            ],
        }
    }

    #[test]
    fn test_trend_totals() {
        let report = trend_report();
        assert_eq!(report.total().cents(), 210_000);
        assert_eq!(report.average().cents(), 105_000);
    }

    #[test]
    fn test_empty_trend_average() {
        let report = TrendReport {
            title: "Empty".into(),
            currency: "USD".into(),
            points: vec![],
        };
        assert!(report.average().is_zero());
    }

    #[test]
    fn test_custom_totals() {
        let report = CustomReport {
            title: "Q1".into(),
            currency: "USD".into(),
            from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            entries: vec![
                ReportEntry {
                    kind: TransactionKind::Expense,
                    date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                    category: "Food".into(),
                    description: String::new(),
                    amount: Money::from_cents(4_000),
                },
                ReportEntry {
                    kind: TransactionKind::Revenue,
                    date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
                    category: "Salary".into(),
                    description: String::new(),
                    amount: Money::from_cents(300_000),
                },
            ],
        };

        assert_eq!(report.total_expenses().cents(), 4_000);
        assert_eq!(report.total_revenue().cents(), 300_000);
        assert_eq!(report.net().cents(), 296_000);
    }

    #[test]
    fn test_report_tag_serialization() {
        let report = Report::Trend(trend_report());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"report_type\":\"trend\""));

        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title(), "Spending Trend");
        assert_eq!(back.currency(), "USD");
    }
}
