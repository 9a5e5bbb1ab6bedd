//! Aggregate views of transaction data
//!
//! Summaries are derived server-side and normalized by the gateway; they are
//! never mutated in place, only recomputed per request.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Period-over-period direction of a category's spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

/// Percentage-change band inside which a trend counts as stable
pub const TREND_STABLE_BAND: f64 = 2.0;

impl Trend {
    /// Classify a percentage change into up/down/stable
    ///
    /// Changes within ±2% are stable.
    pub fn classify(change_pct: f64) -> Self {
        if change_pct > TREND_STABLE_BAND {
            Self::Up
        } else if change_pct < -TREND_STABLE_BAND {
            Self::Down
        } else {
            Self::Stable
        }
    }

    /// Parse a backend value, defaulting to stable for anything unrecognized
    pub fn parse_or_default(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "up" => Self::Up,
            "down" => Self::Down,
            _ => Self::Stable,
        }
    }

    /// Wire/display representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expense/revenue totals for a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// Human-readable period label (e.g. "March 2026")
    pub period: String,

    /// Sum of expense amounts
    pub total_expenses: Money,

    /// Sum of revenue amounts
    pub total_revenue: Money,

    /// Number of expense transactions
    pub expense_count: usize,

    /// Number of revenue transactions
    pub revenue_count: usize,

    /// Currency code the totals are denominated in
    pub currency: String,
}

impl TransactionSummary {
    /// An all-zero summary, used as the read-path fallback
    pub fn empty(period: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            total_expenses: Money::zero(),
            total_revenue: Money::zero(),
            expense_count: 0,
            revenue_count: 0,
            currency: currency.into(),
        }
    }

    /// Net amount (revenue minus expenses)
    pub fn net(&self) -> Money {
        self.total_revenue - self.total_expenses
    }

    /// Total number of transactions in the period
    pub fn transaction_count(&self) -> usize {
        self.expense_count + self.revenue_count
    }
}

/// Per-category aggregate for a period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category label
    pub category: String,

    /// Total spent/earned in this category
    pub amount: Money,

    /// Share of the period total, in percent
    pub percentage: f64,

    /// Period-over-period direction
    #[serde(default)]
    pub trend: Trend,
}

/// One month of a category's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAmount {
    /// Month label (e.g. "2026-03")
    pub month: String,

    /// Amount for that month
    pub amount: Money,
}

/// A category aggregate with its monthly breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetail {
    /// The headline aggregate
    pub summary: CategorySummary,

    /// Month-by-month history, oldest first
    #[serde(default)]
    pub monthly: Vec<MonthlyAmount>,
}

impl CategoryDetail {
    /// Percentage change of the latest month against the one before it
    ///
    /// Returns None with fewer than two months of history or a zero base.
    pub fn latest_change_pct(&self) -> Option<f64> {
        let len = self.monthly.len();
        if len < 2 {
            return None;
        }
        let prev = self.monthly[len - 2].amount;
        let latest = self.monthly[len - 1].amount;
        if prev.is_zero() {
            return None;
        }
        Some((latest - prev).percent_of(prev.abs()))
    }

    /// Recompute the trend from the monthly history
    pub fn derived_trend(&self) -> Trend {
        self.latest_change_pct()
            .map(Trend::classify)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_classify() {
        assert_eq!(Trend::classify(5.0), Trend::Up);
        assert_eq!(Trend::classify(2.1), Trend::Up);
        assert_eq!(Trend::classify(2.0), Trend::Stable);
        assert_eq!(Trend::classify(0.0), Trend::Stable);
        assert_eq!(Trend::classify(-2.0), Trend::Stable);
        assert_eq!(Trend::classify(-2.1), Trend::Down);
        assert_eq!(Trend::classify(-15.0), Trend::Down);
    }

    #[test]
    fn test_trend_parse_or_default() {
        assert_eq!(Trend::parse_or_default("up"), Trend::Up);
        assert_eq!(Trend::parse_or_default("DOWN"), Trend::Down);
        assert_eq!(Trend::parse_or_default("sideways"), Trend::Stable);
    }

    #[test]
    fn test_summary_net() {
        let summary = TransactionSummary {
            period: "March 2026".into(),
            total_expenses: Money::from_cents(150_000),
            total_revenue: Money::from_cents(400_000),
            expense_count: 12,
            revenue_count: 2,
            currency: "USD".into(),
        };

        assert_eq!(summary.net().cents(), 250_000);
        assert_eq!(summary.transaction_count(), 14);
    }

    #[test]
    fn test_empty_summary() {
        let summary = TransactionSummary::empty("all", "USD");
        assert!(summary.net().is_zero());
        assert_eq!(summary.transaction_count(), 0);
    }

    #[test]
    fn test_detail_latest_change() {
        let detail = CategoryDetail {
            summary: CategorySummary {
                category: "Groceries".into(),
                amount: Money::from_cents(42_000),
                percentage: 30.0,
                trend: Trend::Stable,
            },
            monthly: vec![
                MonthlyAmount {
                    month: "2026-02".into(),
                    amount: Money::from_cents(40_000),
                },
                MonthlyAmount {
                    month: "2026-03".into(),
                    amount: Money::from_cents(42_000),
                },
            ],
        };

        let change = detail.latest_change_pct().unwrap();
        assert!((change - 5.0).abs() < 0.001);
        assert_eq!(detail.derived_trend(), Trend::Up);
    }

    #[test]
    fn test_detail_short_history() {
        let detail = CategoryDetail {
            summary: CategorySummary {
                category: "Rent".into(),
                amount: Money::from_cents(100_000),
                percentage: 50.0,
                trend: Trend::Stable,
            },
            monthly: vec![MonthlyAmount {
                month: "2026-03".into(),
                amount: Money::from_cents(100_000),
            }],
        };

        assert!(detail.latest_change_pct().is_none());
        assert_eq!(detail.derived_trend(), Trend::Stable);
    }
}
