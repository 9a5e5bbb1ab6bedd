//! Settings CLI commands

use clap::Subcommand;

use crate::config::{BudgetPeriod, PreferencesStore};
use crate::error::{BoardError, BoardResult};
use crate::format::DateFormat;
use crate::models::Money;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set the display currency (e.g. USD, EUR, GBP)
    Currency {
        /// ISO currency code
        code: String,
    },

    /// Set the date format
    DateFormat {
        /// One of: MM/DD/YYYY, DD/MM/YYYY, YYYY-MM-DD, DD-MMM-YYYY
        key: String,
    },

    /// Configure the budget and its alerts
    Budget {
        /// Monthly budget amount
        #[arg(long)]
        monthly: Option<String>,
        /// Weekly budget amount
        #[arg(long)]
        weekly: Option<String>,
        /// Which budget applies: monthly or weekly
        #[arg(long)]
        period: Option<String>,
        /// Warning threshold in percent (e.g. 80)
        #[arg(long)]
        threshold: Option<u8>,
        /// Enable or disable alert notifications
        #[arg(long)]
        notifications: Option<bool>,
    },
}

/// Handle a settings command
pub fn handle_settings_command(store: &PreferencesStore, cmd: SettingsCommands) -> BoardResult<()> {
    match cmd {
        SettingsCommands::Show => {
            let settings = store.settings();
            let budget = store.budget();

            println!("Currency:       {}", settings.currency);
            println!("Date format:    {}", settings.date_format.key());
            println!("Theme:          {}", settings.theme);
            println!();
            println!("Budget period:  {:?}", budget.period);
            println!("Monthly budget: {}", store.format_money(budget.monthly_budget));
            println!("Weekly budget:  {}", store.format_money(budget.weekly_budget));
            println!("Alert at:       {}%", budget.alert_threshold_pct);
            println!("Notifications:  {}", budget.notifications_enabled);
        }

        SettingsCommands::Currency { code } => {
            let code = code.to_uppercase();
            store.update_settings(|s| s.currency = code.clone())?;
            println!("Currency set to {}", code);
        }

        SettingsCommands::DateFormat { key } => {
            let format = DateFormat::from_key(&key).ok_or_else(|| {
                BoardError::Validation(format!("unknown date format: {}", key))
            })?;
            store.update_settings(|s| s.date_format = format)?;
            println!("Date format set to {}", format.key());
        }

        SettingsCommands::Budget {
            monthly,
            weekly,
            period,
            threshold,
            notifications,
        } => {
            let monthly = monthly
                .map(|s| Money::parse(&s))
                .transpose()
                .map_err(|e| BoardError::Validation(e.to_string()))?;
            let weekly = weekly
                .map(|s| Money::parse(&s))
                .transpose()
                .map_err(|e| BoardError::Validation(e.to_string()))?;
            let period = period
                .map(|s| match s.to_ascii_lowercase().as_str() {
                    "monthly" => Ok(BudgetPeriod::Monthly),
                    "weekly" => Ok(BudgetPeriod::Weekly),
                    other => Err(BoardError::Validation(format!(
                        "unknown budget period: {}",
                        other
                    ))),
                })
                .transpose()?;

            if let Some(pct) = threshold {
                if pct > 100 {
                    return Err(BoardError::Validation(
                        "threshold must be between 0 and 100".into(),
                    ));
                }
            }

            store.update_budget(|b| {
                if let Some(amount) = monthly {
                    b.monthly_budget = amount;
                }
                if let Some(amount) = weekly {
                    b.weekly_budget = amount;
                }
                if let Some(period) = period {
                    b.period = period;
                }
                if let Some(pct) = threshold {
                    b.alert_threshold_pct = pct;
                }
                if let Some(enabled) = notifications {
                    b.notifications_enabled = enabled;
                }
            })?;
            println!("Budget settings updated");
        }
    }

    Ok(())
}
