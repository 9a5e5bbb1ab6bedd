//! Budget alert evaluation
//!
//! Compares accumulated period spend against the configured budget and
//! classifies severity. Levels are recomputed from scratch on every data
//! reload; there is no persisted alert history. Notification dispatch goes
//! through a port trait so the platform-specific side (desktop notification,
//! browser toast) stays out of the core.

use std::fmt;

use crate::config::settings::BudgetSettings;
use crate::models::Money;

/// Severity of a period's spend against its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertLevel {
    /// Spend below the warning threshold
    UnderBudget,
    /// Spend at or past the warning threshold but under the budget
    NearBudget,
    /// Spend at or past the full budget
    OverBudget,
}

impl AlertLevel {
    /// Classify spend against a budget and a warning threshold (percent)
    pub fn classify(spend: Money, budget: Money, threshold_pct: u8) -> Self {
        if budget.is_zero() {
            // No budget configured means nothing to alert on
            return Self::UnderBudget;
        }
        let used = spend.percent_of(budget);
        if used >= 100.0 {
            Self::OverBudget
        } else if used >= threshold_pct as f64 {
            Self::NearBudget
        } else {
            Self::UnderBudget
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderBudget => write!(f, "under-budget"),
            Self::NearBudget => write!(f, "near-budget"),
            Self::OverBudget => write!(f, "over-budget"),
        }
    }
}

/// A fully evaluated alert for the current period
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub level: AlertLevel,
    pub spend: Money,
    pub budget: Money,
    /// Spend as a percentage of the budget
    pub percent_used: f64,
}

impl BudgetAlert {
    /// Human-readable banner text
    pub fn message(&self) -> String {
        match self.level {
            AlertLevel::UnderBudget => format!(
                "Spending at {:.1}% of budget",
                self.percent_used
            ),
            AlertLevel::NearBudget => format!(
                "Approaching budget: {:.1}% used",
                self.percent_used
            ),
            AlertLevel::OverBudget => format!(
                "Over budget: {:.1}% used",
                self.percent_used
            ),
        }
    }
}

/// Destination for user-facing alert notifications
///
/// Dispatch is best-effort; implementations must not block or fail the
/// caller.
pub trait NotificationPort {
    fn notify(&self, title: &str, body: &str);
}

/// Port that logs notifications instead of displaying them
pub struct LogNotifier;

impl NotificationPort for LogNotifier {
    fn notify(&self, title: &str, body: &str) {
        tracing::info!(title, body, "notification");
    }
}

/// Evaluate the current period's spend against the configured budget
///
/// When the level is at least near-budget and notifications are enabled,
/// a notification is dispatched through the port.
pub fn evaluate(
    spend: Money,
    settings: &BudgetSettings,
    port: &dyn NotificationPort,
) -> BudgetAlert {
    let budget = settings.active_budget();
    let level = AlertLevel::classify(spend, budget, settings.alert_threshold_pct);
    let alert = BudgetAlert {
        level,
        spend,
        budget,
        percent_used: spend.percent_of(budget),
    };

    if settings.notifications_enabled && level >= AlertLevel::NearBudget {
        port.notify("Budget alert", &alert.message());
    }

    alert
}
