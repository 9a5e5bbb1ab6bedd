//! CSV transaction import
//!
//! Parses bank-style CSV exports into transactions and posts them through
//! the gateway one row at a time. Row errors are collected, not fatal: a
//! malformed row or a rejected write skips that row and the import continues.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use csv::{Reader, StringRecord};

use crate::gateway::Gateway;
use crate::models::{Money, Transaction, TransactionKind};

/// Column mapping configuration for CSV import
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the signed amount column (negative for expenses)
    pub amount_column: usize,
    /// Index of the category column
    pub category_column: Option<usize>,
    /// Index of the description column
    pub description_column: Option<usize>,
    /// Primary date format (e.g. "%Y-%m-%d", "%m/%d/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Whether to flip amount signs (some banks use positive for debits)
    pub invert_amounts: bool,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            amount_column: 1,
            category_column: Some(2),
            description_column: Some(3),
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            invert_amounts: false,
        }
    }
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set whether the first row is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Guess a mapping from a header record
    pub fn detect_from_headers(headers: &StringRecord) -> Self {
        let mut mapping = Self::new();
        mapping.category_column = None;
        mapping.description_column = None;

        for (idx, header) in headers.iter().enumerate() {
            let h = header.to_lowercase();
            let h = h.trim();

            if h.contains("date") || h.contains("posted") {
                mapping.date_column = idx;
            } else if h.contains("amount") || h.contains("debit") {
                mapping.amount_column = idx;
            } else if h.contains("category") {
                mapping.category_column = Some(idx);
            } else if h.contains("description") || h.contains("payee") || h.contains("merchant") {
                mapping.description_column = Some(idx);
            }
        }

        mapping
    }
}

/// A parsed row awaiting import
#[derive(Debug, Clone)]
pub struct ParsedRow {
    /// Transaction date from the file
    pub date: NaiveDate,
    /// Unsigned amount
    pub amount: Money,
    /// Expense or revenue, from the amount's sign
    pub kind: TransactionKind,
    /// Category label; empty becomes the uncategorized fallback later
    pub category: String,
    /// Free-form description
    pub description: String,
    /// Row number in the file (0-indexed, excluding header)
    pub row_number: usize,
}

/// Outcome of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Number of transactions created
    pub imported: usize,
    /// Number of rows that failed
    pub errors: usize,
    /// Error messages by row number
    pub error_messages: HashMap<usize, String>,
}

/// Parse a CSV from a reader into rows
///
/// Each row parses independently; a bad row yields an Err entry and the rest
/// of the file is still read.
pub fn parse_reader<R: std::io::Read>(
    reader: &mut Reader<R>,
    mapping: &ColumnMapping,
) -> Vec<Result<ParsedRow, String>> {
    let mut results = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        match record {
            Ok(record) => results.push(parse_record(&record, idx, mapping)),
            Err(e) => results.push(Err(format!("could not read CSV record: {}", e))),
        }
    }
    results
}

fn parse_record(
    record: &StringRecord,
    row_number: usize,
    mapping: &ColumnMapping,
) -> Result<ParsedRow, String> {
    let date_str = record
        .get(mapping.date_column)
        .ok_or_else(|| "missing date column".to_string())?
        .trim();
    let date = parse_date(date_str, &mapping.date_format)?;

    let amount_str = record
        .get(mapping.amount_column)
        .ok_or_else(|| "missing amount column".to_string())?
        .trim();
    let mut signed = parse_amount(amount_str)?;
    if mapping.invert_amounts {
        signed = -signed;
    }

    // Sign convention follows bank exports: outflows are negative
    let kind = if signed.is_negative() {
        TransactionKind::Expense
    } else {
        TransactionKind::Revenue
    };

    let category = mapping
        .category_column
        .and_then(|col| record.get(col))
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let description = mapping
        .description_column
        .and_then(|col| record.get(col))
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    Ok(ParsedRow {
        date,
        amount: signed.abs(),
        kind,
        category,
        description,
        row_number,
    })
}

/// Parse a date string, trying the primary format then common alternatives
fn parse_date(s: &str, primary_format: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
        return Ok(date);
    }

    let formats = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y"];
    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    Err(format!("could not parse date: '{}'", s))
}

/// Parse an amount string, handling symbols and the accounting negative
fn parse_amount(s: &str) -> Result<Money, String> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '(' | ')'))
        .collect();

    let (is_negative, value) = if cleaned.starts_with('(') && cleaned.ends_with(')') {
        (true, &cleaned[1..cleaned.len() - 1])
    } else if let Some(stripped) = cleaned.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, cleaned.as_str())
    };

    Money::parse(value)
        .map(|m| if is_negative { -m } else { m })
        .map_err(|e| format!("could not parse amount '{}': {}", s, e))
}

/// Post parsed rows through the gateway
///
/// Rows that already failed to parse are counted as errors; a rejected write
/// records the backend's error against the row and the import continues.
pub fn import_rows(
    gateway: &Gateway,
    parsed: &[Result<ParsedRow, String>],
) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();

    for (idx, result) in parsed.iter().enumerate() {
        match result {
            Ok(row) => {
                let mut txn = Transaction::with_description(
                    row.amount,
                    row.kind,
                    row.category.clone(),
                    row.description.clone(),
                );
                let at = row.date.and_time(NaiveTime::MIN).and_utc();
                txn.created_at = at;
                txn.updated_at = at;

                match gateway.add_transaction(&txn) {
                    Ok(_) => outcome.imported += 1,
                    Err(e) => {
                        outcome.errors += 1;
                        outcome.error_messages.insert(row.row_number, e.to_string());
                    }
                }
            }
            Err(e) => {
                outcome.errors += 1;
                outcome.error_messages.insert(idx, e.clone());
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::MockTransport;
    use crate::gateway::Session;
    use serde_json::json;

    fn parse_str(data: &str, mapping: &ColumnMapping) -> Vec<Result<ParsedRow, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(mapping.has_header)
            .from_reader(data.as_bytes());
        parse_reader(&mut reader, mapping)
    }

    #[test]
    fn test_parse_simple_csv() {
        let data = "Date,Amount,Category,Description\n\
                    2026-03-05,-82.50,Groceries,Weekly shop\n\
                    2026-03-25,3200.00,Salary,March payout";
        let rows = parse_str(data, &ColumnMapping::new());
        assert_eq!(rows.len(), 2);

        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert_eq!(first.amount.cents(), 8250);
        assert_eq!(first.kind, TransactionKind::Expense);
        assert_eq!(first.category, "Groceries");

        let second = rows[1].as_ref().unwrap();
        assert_eq!(second.kind, TransactionKind::Revenue);
        assert_eq!(second.amount.cents(), 320_000);
    }

    #[test]
    fn test_parse_alternative_date_format() {
        let data = "Date,Amount,Category\n03/05/2026,-10.00,Food";
        let mapping = ColumnMapping::new().with_date_format("%m/%d/%Y");
        let rows = parse_str(data, &mapping);
        assert_eq!(
            rows[0].as_ref().unwrap().date,
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
        );
    }

    #[test]
    fn test_parse_accounting_negative() {
        let data = "Date,Amount,Category\n2026-03-05,(50.00),Food";
        let rows = parse_str(data, &ColumnMapping::new());
        let row = rows[0].as_ref().unwrap();
        assert_eq!(row.kind, TransactionKind::Expense);
        assert_eq!(row.amount.cents(), 5000);
    }

    #[test]
    fn test_bad_row_does_not_stop_parsing() {
        let data = "Date,Amount,Category\nnot-a-date,10.00,Food\n2026-03-05,-10.00,Food";
        let rows = parse_str(data, &ColumnMapping::new());
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_err());
        assert!(rows[1].is_ok());
    }

    #[test]
    fn test_detect_mapping() {
        let header = StringRecord::from(vec!["Posted Date", "Amount", "Merchant", "Category"]);
        let mapping = ColumnMapping::detect_from_headers(&header);

        assert_eq!(mapping.date_column, 0);
        assert_eq!(mapping.amount_column, 1);
        assert_eq!(mapping.description_column, Some(2));
        assert_eq!(mapping.category_column, Some(3));
    }

    #[test]
    fn test_import_counts_backend_rejections() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"id": "t-1", "amount": 82.5}));
        transport.push_json(500, json!({"error": "boom"}));
        let gateway = Gateway::new(Box::new(transport), Session::authenticated("u-1"));

        let data = "Date,Amount,Category\n2026-03-05,-82.50,Groceries\n2026-03-06,-10.00,Food";
        let parsed = parse_str(data, &ColumnMapping::new());
        let outcome = import_rows(&gateway, &parsed);

        assert_eq!(outcome.imported, 1);
        assert_eq!(outcome.errors, 1);
        assert!(outcome.error_messages.contains_key(&1));
    }

    #[test]
    fn test_import_counts_parse_failures() {
        let gateway = Gateway::new(
            Box::new(MockTransport::new()),
            Session::authenticated("u-1"),
        );
        let parsed = vec![Err("could not parse date: 'x'".to_string())];
        let outcome = import_rows(&gateway, &parsed);

        assert_eq!(outcome.imported, 0);
        assert_eq!(outcome.errors, 1);
    }
}
