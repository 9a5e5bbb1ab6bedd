//! Backend payload normalization
//!
//! Backend responses are rebuilt field-by-field into typed records with an
//! explicit fallback per field, so a partially-shaped payload never leaks
//! past this module: missing amount becomes 0, missing category becomes
//! "Uncategorized", an invalid timestamp becomes now, and unrecognized enum
//! values take their safe default.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{
    CategoryDetail, CategorySummary, CustomReport, Money, MonthlyAmount, ReportEntry, Transaction,
    TransactionKind, TransactionSummary, Trend, TrendPoint, TrendReport,
};

/// Fallback category label for records missing one
pub const UNCATEGORIZED: &str = "Uncategorized";

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn money_field(value: &Value, key: &str) -> Money {
    value
        .get(key)
        .and_then(Value::as_f64)
        .map(Money::from_major)
        .unwrap_or_default()
}

fn f64_field(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn count_field(value: &Value, key: &str) -> usize {
    value.get(key).and_then(Value::as_u64).unwrap_or(0) as usize
}

fn timestamp_field(value: &Value, key: &str) -> DateTime<Utc> {
    value
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

fn date_field(value: &Value, key: &str) -> NaiveDate {
    value
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive())
}

/// Rebuild a transaction record from a backend payload
pub fn transaction(value: &Value) -> Transaction {
    Transaction {
        id: str_field(value, "id").unwrap_or_else(|| Uuid::new_v4().to_string()),
        amount: money_field(value, "amount"),
        kind: str_field(value, "type")
            .map(|s| TransactionKind::parse_or_default(&s))
            .unwrap_or_default(),
        category: str_field(value, "category").unwrap_or_else(|| UNCATEGORIZED.to_string()),
        description: str_field(value, "description").unwrap_or_default(),
        created_at: timestamp_field(value, "created_at"),
        updated_at: timestamp_field(value, "updated_at"),
    }
}

/// Rebuild a list of transactions; non-array payloads become an empty list
pub fn transactions(value: &Value) -> Vec<Transaction> {
    value
        .as_array()
        .map(|items| items.iter().map(transaction).collect())
        .unwrap_or_default()
}

/// Rebuild a period summary from a backend payload
pub fn summary(value: &Value, fallback_currency: &str) -> TransactionSummary {
    TransactionSummary {
        period: str_field(value, "period").unwrap_or_else(|| "all".to_string()),
        total_expenses: money_field(value, "total_expenses"),
        total_revenue: money_field(value, "total_revenue"),
        expense_count: count_field(value, "expense_count"),
        revenue_count: count_field(value, "revenue_count"),
        currency: str_field(value, "currency").unwrap_or_else(|| fallback_currency.to_string()),
    }
}

/// Rebuild a category aggregate from a backend payload
pub fn category_summary(value: &Value) -> CategorySummary {
    CategorySummary {
        category: str_field(value, "category").unwrap_or_else(|| UNCATEGORIZED.to_string()),
        amount: money_field(value, "amount"),
        percentage: f64_field(value, "percentage"),
        trend: str_field(value, "trend")
            .map(|s| Trend::parse_or_default(&s))
            .unwrap_or_default(),
    }
}

/// Rebuild a list of category aggregates
pub fn category_summaries(value: &Value) -> Vec<CategorySummary> {
    value
        .as_array()
        .map(|items| items.iter().map(category_summary).collect())
        .unwrap_or_default()
}

/// Rebuild a category detail (aggregate plus monthly breakdown)
pub fn category_detail(value: &Value) -> CategoryDetail {
    let monthly = value
        .get("monthly")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|m| MonthlyAmount {
                    month: str_field(m, "month").unwrap_or_default(),
                    amount: money_field(m, "amount"),
                })
                .collect()
        })
        .unwrap_or_default();

    CategoryDetail {
        summary: category_summary(value),
        monthly,
    }
}

/// Rebuild a trend report from a backend payload
pub fn trend_report(value: &Value, fallback_currency: &str) -> TrendReport {
    let points = value
        .get("points")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|p| TrendPoint {
                    period: str_field(p, "period").unwrap_or_default(),
                    amount: money_field(p, "amount"),
                    change_pct: f64_field(p, "change_pct"),
                    trend: str_field(p, "trend")
                        .map(|s| Trend::parse_or_default(&s))
                        .unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();

    TrendReport {
        title: str_field(value, "title").unwrap_or_else(|| "Trend Analysis".to_string()),
        currency: str_field(value, "currency").unwrap_or_else(|| fallback_currency.to_string()),
        points,
    }
}

/// Rebuild a custom expense/revenue report from a backend payload
pub fn custom_report(value: &Value, fallback_currency: &str) -> CustomReport {
    let entries = value
        .get("entries")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|e| ReportEntry {
                    kind: str_field(e, "type")
                        .map(|s| TransactionKind::parse_or_default(&s))
                        .unwrap_or_default(),
                    date: date_field(e, "date"),
                    category: str_field(e, "category")
                        .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                    description: str_field(e, "description").unwrap_or_default(),
                    amount: money_field(e, "amount"),
                })
                .collect()
        })
        .unwrap_or_default();

    CustomReport {
        title: str_field(value, "title").unwrap_or_else(|| "Custom Report".to_string()),
        currency: str_field(value, "currency").unwrap_or_else(|| fallback_currency.to_string()),
        from: date_field(value, "from"),
        to: date_field(value, "to"),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_full_payload() {
        let payload = json!({
            "id": "t-1",
            "amount": 42.5,
            "type": "revenue",
            "category": "Salary",
            "description": "March",
            "created_at": "2026-03-01T09:00:00Z",
            "updated_at": "2026-03-02T09:00:00Z"
        });

        let txn = transaction(&payload);
        assert_eq!(txn.id, "t-1");
        assert_eq!(txn.amount.cents(), 4250);
        assert_eq!(txn.kind, TransactionKind::Revenue);
        assert_eq!(txn.category, "Salary");
        assert_eq!(txn.created_at.to_rfc3339(), "2026-03-01T09:00:00+00:00");
    }

    #[test]
    fn test_transaction_malformed_payload() {
        // Missing amount, category, and type take their documented fallbacks
        let payload = json!({ "description": "mystery" });

        let txn = transaction(&payload);
        assert!(txn.amount.is_zero());
        assert_eq!(txn.category, UNCATEGORIZED);
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert!(!txn.id.is_empty());
    }

    #[test]
    fn test_transaction_bad_timestamp_becomes_now() {
        let payload = json!({ "created_at": "yesterday-ish" });
        let before = Utc::now();
        let txn = transaction(&payload);
        assert!(txn.created_at >= before);
    }

    #[test]
    fn test_unknown_kind_defaults_to_expense() {
        let payload = json!({ "type": "transfer", "amount": 5.0 });
        assert_eq!(transaction(&payload).kind, TransactionKind::Expense);
    }

    #[test]
    fn test_transactions_non_array() {
        assert!(transactions(&json!({"oops": 1})).is_empty());
        assert_eq!(transactions(&json!([{}, {}])).len(), 2);
    }

    #[test]
    fn test_summary_fallbacks() {
        let s = summary(&json!({}), "USD");
        assert_eq!(s.period, "all");
        assert!(s.total_expenses.is_zero());
        assert_eq!(s.currency, "USD");
    }

    #[test]
    fn test_category_summary_unknown_trend() {
        let payload = json!({
            "category": "Food",
            "amount": 120.0,
            "percentage": 35.5,
            "trend": "sideways"
        });

        let cat = category_summary(&payload);
        assert_eq!(cat.category, "Food");
        assert_eq!(cat.amount.cents(), 12_000);
        assert_eq!(cat.trend, Trend::Stable);
    }

    #[test]
    fn test_category_detail_monthly() {
        let payload = json!({
            "category": "Food",
            "amount": 120.0,
            "percentage": 35.5,
            "trend": "up",
            "monthly": [
                {"month": "2026-02", "amount": 100.0},
                {"month": "2026-03", "amount": 120.0}
            ]
        });

        let detail = category_detail(&payload);
        assert_eq!(detail.monthly.len(), 2);
        assert_eq!(detail.monthly[1].amount.cents(), 12_000);
    }

    #[test]
    fn test_trend_report_normalization() {
        let payload = json!({
            "title": "Spending",
            "points": [
                {"period": "2026-01", "amount": 900.0, "change_pct": -3.0, "trend": "down"}
            ]
        });

        let report = trend_report(&payload, "EUR");
        assert_eq!(report.title, "Spending");
        assert_eq!(report.currency, "EUR");
        assert_eq!(report.points.len(), 1);
        assert_eq!(report.points[0].trend, Trend::Down);
    }

    #[test]
    fn test_custom_report_normalization() {
        let payload = json!({
            "title": "Q1",
            "currency": "USD",
            "from": "2026-01-01",
            "to": "2026-03-31",
            "entries": [
                {"type": "expense", "date": "2026-01-05", "category": "Food", "amount": 40.0},
                {"type": "revenue", "date": "2026-01-31", "amount": 3000.0}
            ]
        });

        let report = custom_report(&payload, "USD");
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[1].category, UNCATEGORIZED);
        assert_eq!(report.total_expenses().cents(), 4_000);
        assert_eq!(report.total_revenue().cents(), 300_000);
    }
}
