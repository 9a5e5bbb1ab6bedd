//! Transaction model
//!
//! Client-side view of a backend transaction record. Amounts are always
//! positive; the kind decides whether they count as spending or income.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::money::Money;

/// Whether a transaction is money going out or coming in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent
    #[default]
    Expense,
    /// Money earned
    Revenue,
}

impl TransactionKind {
    /// Parse a backend value, defaulting to expense for anything unrecognized
    pub fn parse_or_default(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "revenue" | "income" => Self::Revenue,
            _ => Self::Expense,
        }
    }

    /// Wire representation used in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Revenue => "revenue",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Revenue => write!(f, "Revenue"),
        }
    }
}

/// A named period filter applied to transaction queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    Week,
    #[default]
    Month,
    Year,
    All,
}

impl Timeframe {
    /// Query-string value the backend expects
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            other => Err(format!("unknown timeframe: {}", other)),
        }
    }
}

/// A financial transaction as held by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Backend identifier
    pub id: String,

    /// Amount (always positive; the kind gives it direction)
    pub amount: Money,

    /// Expense or revenue
    #[serde(default)]
    pub kind: TransactionKind,

    /// Free-form category label
    pub category: String,

    /// Description/memo
    #[serde(default)]
    pub description: String,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a fresh client-generated id
    ///
    /// The backend assigns the real id on create; this one only exists so a
    /// record is addressable before the write round-trips.
    pub fn new(amount: Money, kind: TransactionKind, category: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            kind,
            category: category.into(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transaction with all common fields
    pub fn with_description(
        amount: Money,
        kind: TransactionKind,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(amount, kind, category);
        txn.description = description.into();
        txn
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check if this is revenue
    pub fn is_revenue(&self) -> bool {
        self.kind == TransactionKind::Revenue
    }

    /// Signed amount: negative for expenses, positive for revenue
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Expense => -self.amount,
            TransactionKind::Revenue => self.amount,
        }
    }

    /// Validate the transaction before sending it to the backend
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.created_at.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Transaction category must not be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(Money::from_cents(5000), TransactionKind::Expense, "Food");
        assert_eq!(txn.amount.cents(), 5000);
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.category, "Food");
        assert!(!txn.id.is_empty());
    }

    #[test]
    fn test_kind_parse_or_default() {
        assert_eq!(
            TransactionKind::parse_or_default("revenue"),
            TransactionKind::Revenue
        );
        assert_eq!(
            TransactionKind::parse_or_default("INCOME"),
            TransactionKind::Revenue
        );
        assert_eq!(
            TransactionKind::parse_or_default("expense"),
            TransactionKind::Expense
        );
        // Unrecognized backend values fall back to expense
        assert_eq!(
            TransactionKind::parse_or_default("transfer"),
            TransactionKind::Expense
        );
        assert_eq!(
            TransactionKind::parse_or_default(""),
            TransactionKind::Expense
        );
    }

    #[test]
    fn test_signed_amount() {
        let expense = Transaction::new(Money::from_cents(1000), TransactionKind::Expense, "Food");
        assert_eq!(expense.signed_amount().cents(), -1000);

        let revenue = Transaction::new(Money::from_cents(1000), TransactionKind::Revenue, "Salary");
        assert_eq!(revenue.signed_amount().cents(), 1000);
    }

    #[test]
    fn test_validation() {
        let txn = Transaction::new(Money::from_cents(1000), TransactionKind::Expense, "Food");
        assert!(txn.validate().is_ok());

        let mut bad = txn.clone();
        bad.amount = Money::zero();
        assert_eq!(
            bad.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        let mut bad = txn;
        bad.category = "  ".into();
        assert_eq!(bad.validate(), Err(TransactionValidationError::EmptyCategory));
    }

    #[test]
    fn test_timeframe_round_trip() {
        for tf in [
            Timeframe::Day,
            Timeframe::Week,
            Timeframe::Month,
            Timeframe::Year,
            Timeframe::All,
        ] {
            assert_eq!(tf.as_query().parse::<Timeframe>().unwrap(), tf);
        }
        assert!("fortnight".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::with_description(
            Money::from_cents(5000),
            TransactionKind::Revenue,
            "Salary",
            "March payout",
        );

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"revenue\""));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.amount, deserialized.amount);
        assert_eq!(txn.kind, deserialized.kind);
    }
}
