//! CLI command handlers
//!
//! Bridges clap argument parsing with the view controllers and the gateway.
//! Handlers print through the display module so all output follows the
//! configured currency and date format.

pub mod category;
pub mod dashboard;
pub mod report;
pub mod settings;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use dashboard::handle_dashboard_command;
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
