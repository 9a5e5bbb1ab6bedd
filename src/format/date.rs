//! Date formatting over a fixed set of pattern keys
//!
//! Settings store one of four pattern keys. Anything else renders through a
//! readable default instead of erroring.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported date patterns, keyed by the strings the settings store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateFormat {
    /// "MM/DD/YYYY"
    #[serde(rename = "MM/DD/YYYY")]
    #[default]
    MonthDayYear,

    /// "DD/MM/YYYY"
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,

    /// "YYYY-MM-DD"
    #[serde(rename = "YYYY-MM-DD")]
    Iso,

    /// "DD-MMM-YYYY" (e.g. "15-Mar-2026")
    #[serde(rename = "DD-MMM-YYYY")]
    DayMonthNameYear,
}

impl DateFormat {
    /// Parse a pattern key, returning None for anything unrecognized
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "MM/DD/YYYY" => Some(Self::MonthDayYear),
            "DD/MM/YYYY" => Some(Self::DayMonthYear),
            "YYYY-MM-DD" => Some(Self::Iso),
            "DD-MMM-YYYY" => Some(Self::DayMonthNameYear),
            _ => None,
        }
    }

    /// The pattern key this variant serializes as
    pub fn key(&self) -> &'static str {
        match self {
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::Iso => "YYYY-MM-DD",
            Self::DayMonthNameYear => "DD-MMM-YYYY",
        }
    }

    /// Render a date in this pattern
    pub fn format(&self, date: NaiveDate) -> String {
        match self {
            Self::MonthDayYear => date.format("%m/%d/%Y").to_string(),
            Self::DayMonthYear => date.format("%d/%m/%Y").to_string(),
            Self::Iso => date.format("%Y-%m-%d").to_string(),
            Self::DayMonthNameYear => date.format("%d-%b-%Y").to_string(),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Format a date by pattern key, degrading to a readable default
///
/// Unrecognized keys render as "Mar 15, 2026" so a stale or hand-edited
/// settings file never breaks display.
pub fn format_date(date: NaiveDate, key: &str) -> String {
    match DateFormat::from_key(key) {
        Some(fmt) => fmt.format(date),
        None => date.format("%b %-d, %Y").to_string(),
    }
}
