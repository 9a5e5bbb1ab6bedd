//! Preference-aware value formatting
//!
//! Renders monetary and date values using the user's configured currency and
//! date-format settings instead of hardcoded locale assumptions. Unknown
//! currency codes or pattern keys degrade to a readable default; formatting
//! never fails.

pub mod currency;
pub mod date;

pub use currency::{currency_symbol, format_currency, locale_for_currency, CurrencyStyle};
pub use date::DateFormat;
