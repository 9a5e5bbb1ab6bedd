//! Display formatting for terminal output
//!
//! Renders view data as tables and panels. All money and date values go
//! through the preferences store so the output follows the configured
//! currency and date format.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{format_category_detail, format_category_table};
pub use report::{format_custom_report, format_trend_table};
pub use transaction::{format_summary_panel, format_transaction_table};
