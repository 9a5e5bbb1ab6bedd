//! Core data models for the dashboard client
//!
//! These are the typed records the rest of the crate works with. The gateway
//! builds them from backend payloads; views and exporters only ever see these
//! shapes, never raw JSON.

pub mod money;
pub mod report;
pub mod summary;
pub mod transaction;

pub use money::Money;
pub use report::{CustomReport, Report, ReportEntry, TrendPoint, TrendReport};
pub use summary::{CategoryDetail, CategorySummary, MonthlyAmount, TransactionSummary, Trend};
pub use transaction::{Timeframe, Transaction, TransactionKind};
