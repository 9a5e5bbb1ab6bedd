//! User settings for ledgerboard
//!
//! Two preference singletons persisted as JSON: general app settings
//! (currency, date format, theme) and budget settings (limits, alert
//! threshold). Every field carries a serde default so loading an older or
//! partially written file shallow-merges with defaults instead of failing.

use serde::{Deserialize, Serialize};

use super::paths::BoardPaths;
use crate::error::BoardError;
use crate::format::DateFormat;
use crate::models::Money;

/// Which period a budget limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Weekly,
}

/// General app preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Preferred currency code (ISO, e.g. "USD")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Date pattern key
    #[serde(default)]
    pub date_format: DateFormat,

    /// UI theme name
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            date_format: DateFormat::default(),
            theme: default_theme(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or fall back to defaults if the file is
    /// missing. A file that fails to parse is also replaced by defaults so a
    /// corrupt preference file never blocks startup.
    pub fn load_or_default(paths: &BoardPaths) -> Self {
        load_json(paths.settings_file())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BoardPaths) -> Result<(), BoardError> {
        save_json(self, paths.settings_file(), paths)
    }
}

/// Budget limits and alerting preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSettings {
    /// Which period the primary budget applies to
    #[serde(default)]
    pub period: BudgetPeriod,

    /// Monthly spending limit
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Weekly spending limit
    #[serde(default = "default_weekly_budget")]
    pub weekly_budget: Money,

    /// Percentage of the budget at which the near-budget warning fires
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold_pct: u8,

    /// Whether platform notifications should be attempted
    #[serde(default)]
    pub notifications_enabled: bool,
}

fn default_monthly_budget() -> Money {
    Money::from_cents(300_000)
}

fn default_weekly_budget() -> Money {
    Money::from_cents(75_000)
}

fn default_alert_threshold() -> u8 {
    80
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            period: BudgetPeriod::default(),
            monthly_budget: default_monthly_budget(),
            weekly_budget: default_weekly_budget(),
            alert_threshold_pct: default_alert_threshold(),
            notifications_enabled: false,
        }
    }
}

impl BudgetSettings {
    /// The limit for the configured period
    pub fn active_budget(&self) -> Money {
        match self.period {
            BudgetPeriod::Monthly => self.monthly_budget,
            BudgetPeriod::Weekly => self.weekly_budget,
        }
    }

    /// Load budget settings from disk, or fall back to defaults
    pub fn load_or_default(paths: &BoardPaths) -> Self {
        load_json(paths.budget_file())
    }

    /// Save budget settings to disk
    pub fn save(&self, paths: &BoardPaths) -> Result<(), BoardError> {
        save_json(self, paths.budget_file(), paths)
    }
}

fn load_json<T: Default + for<'de> Deserialize<'de>>(path: std::path::PathBuf) -> T {
    if !path.exists() {
        return T::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

fn save_json<T: Serialize>(
    value: &T,
    path: std::path::PathBuf,
    paths: &BoardPaths,
) -> Result<(), BoardError> {
    paths.ensure_directories()?;

    let contents = serde_json::to_string_pretty(value)
        .map_err(|e| BoardError::Config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(&path, contents)
        .map_err(|e| BoardError::Io(format!("Failed to write settings file: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.date_format, DateFormat::MonthDayYear);
        assert_eq!(settings.theme, "light");
    }

    #[test]
    fn test_default_budget_settings() {
        let budget = BudgetSettings::default();
        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert_eq!(budget.monthly_budget.cents(), 300_000);
        assert_eq!(budget.alert_threshold_pct, 80);
        assert!(!budget.notifications_enabled);
    }

    #[test]
    fn test_active_budget() {
        let mut budget = BudgetSettings::default();
        assert_eq!(budget.active_budget(), budget.monthly_budget);

        budget.period = BudgetPeriod::Weekly;
        assert_eq!(budget.active_budget(), budget.weekly_budget);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = AppSettings::default();
        settings.currency = "EUR".to_string();
        settings.date_format = DateFormat::DayMonthYear;
        settings.save(&paths).unwrap();

        let loaded = AppSettings::load_or_default(&paths);
        assert_eq!(loaded.currency, "EUR");
        assert_eq!(loaded.date_format, DateFormat::DayMonthYear);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = AppSettings::load_or_default(&paths);
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_shallow_merge_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        // Only one known key; missing keys fall back, unknown keys are ignored
        std::fs::write(
            paths.settings_file(),
            r#"{"currency": "GBP", "future_key": 42}"#,
        )
        .unwrap();

        let loaded = AppSettings::load_or_default(&paths);
        assert_eq!(loaded.currency, "GBP");
        assert_eq!(loaded.date_format, DateFormat::MonthDayYear);
        assert_eq!(loaded.theme, "light");
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.budget_file(), "not json at all").unwrap();

        let loaded = BudgetSettings::load_or_default(&paths);
        assert_eq!(loaded, BudgetSettings::default());
    }
}
