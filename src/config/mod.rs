//! Configuration and preferences
//!
//! Persisted user preferences (currency, date format, budget thresholds)
//! plus the reactive store that broadcasts changes to subscribed views.

pub mod paths;
pub mod settings;
pub mod store;

pub use paths::BoardPaths;
pub use settings::{AppSettings, BudgetPeriod, BudgetSettings};
pub use store::PreferencesStore;
