//! Remote data gateway
//!
//! Translates view-level requests into backend calls scoped to the current
//! user and normalizes the responses. The contract is "fail soft on reads,
//! fail loud on writes": a read with no authenticated user or a failing
//! backend resolves to a default value (with the error noted for a soft
//! banner), while writes surface their errors to the caller. No call is
//! retried.

pub mod normalize;
pub mod transport;

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::error::{BoardError, BoardResult};
use crate::models::{
    CategoryDetail, CategorySummary, CustomReport, Report, Timeframe, Transaction,
    TransactionSummary, TrendReport,
};
use transport::{HttpTransport, Method};

/// The authenticated user's identity, as resolved by the session provider
#[derive(Debug, Clone, Default)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    /// A session for a signed-in user
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// A session with nobody signed in
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// The user id, if signed in
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Result of a read-path call: the data plus an optional soft error
///
/// Reads never fail outright. When the backend is unreachable or returns an
/// error the data is a default value and `soft_error` carries what happened,
/// so a view can render an empty state with an error banner.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub soft_error: Option<String>,
}

impl<T> Fetched<T> {
    /// A successful fetch
    pub fn ok(data: T) -> Self {
        Self {
            data,
            soft_error: None,
        }
    }

    /// A fallback value standing in for a failed fetch
    pub fn fallback(data: T, error: impl Into<String>) -> Self {
        Self {
            data,
            soft_error: Some(error.into()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.soft_error.is_some()
    }
}

/// The remote data gateway
pub struct Gateway {
    transport: Box<dyn HttpTransport>,
    session: Session,
}

impl Gateway {
    pub fn new(transport: Box<dyn HttpTransport>, session: Session) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build a path under the current user's scope; errors when nobody is
    /// signed in (the fail-loud half of the contract)
    fn user_path(&self, suffix: &str) -> BoardResult<String> {
        match self.session.user_id() {
            Some(id) => Ok(format!("/users/{}{}", id, suffix)),
            None => Err(BoardError::Unauthorized(
                "request requires a signed-in user".into(),
            )),
        }
    }

    /// Issue a read and parse the JSON body; errors here get mapped to
    /// fallbacks by the public read methods
    fn read_json(&self, suffix: &str) -> BoardResult<Value> {
        let path = self.user_path(suffix)?;
        let resp = self.transport.request(Method::Get, &path, None)?;
        if !resp.is_success() {
            return Err(BoardError::BackendStatus {
                status: resp.status,
                path,
            });
        }
        resp.json()
    }

    fn write_json(&self, method: Method, suffix: &str, body: &Value) -> BoardResult<Value> {
        let path = self.user_path(suffix)?;
        let resp = self.transport.request(method, &path, Some(body))?;
        if !resp.is_success() {
            return Err(BoardError::BackendStatus {
                status: resp.status,
                path,
            });
        }
        resp.json()
    }

    // ===== Read paths (fail soft) =====

    /// Transactions for a timeframe; empty list on any failure
    pub fn transactions(&self, timeframe: Timeframe) -> Fetched<Vec<Transaction>> {
        match self.read_json(&format!("/transactions?timeframe={}", timeframe.as_query())) {
            Ok(value) => Fetched::ok(normalize::transactions(&value)),
            Err(err) => {
                tracing::warn!(%err, "transactions fetch failed, serving empty list");
                Fetched::fallback(Vec::new(), err.to_string())
            }
        }
    }

    /// Period summary; all-zero summary on any failure
    pub fn summary(&self, timeframe: Timeframe, currency: &str) -> Fetched<TransactionSummary> {
        match self.read_json(&format!(
            "/transactions/summary?timeframe={}",
            timeframe.as_query()
        )) {
            Ok(value) => Fetched::ok(normalize::summary(&value, currency)),
            Err(err) => {
                tracing::warn!(%err, "summary fetch failed, serving empty summary");
                Fetched::fallback(
                    TransactionSummary::empty(timeframe.as_query(), currency),
                    err.to_string(),
                )
            }
        }
    }

    /// Per-category aggregates; empty list on any failure
    pub fn category_summaries(&self, timeframe: Timeframe) -> Fetched<Vec<CategorySummary>> {
        match self.read_json(&format!(
            "/analysis/categories?timeframe={}",
            timeframe.as_query()
        )) {
            Ok(value) => Fetched::ok(normalize::category_summaries(&value)),
            Err(err) => {
                tracing::warn!(%err, "category stats fetch failed, serving empty list");
                Fetched::fallback(Vec::new(), err.to_string())
            }
        }
    }

    /// One category's aggregate with monthly breakdown
    pub fn category_detail(&self, category: &str) -> Fetched<CategoryDetail> {
        let encoded = encode_path_segment(category);
        match self.read_json(&format!("/analysis/categories/{}", encoded)) {
            Ok(value) => Fetched::ok(normalize::category_detail(&value)),
            Err(err) => {
                tracing::warn!(%err, category, "category detail fetch failed");
                let empty = normalize::category_detail(&json!({ "category": category }));
                Fetched::fallback(empty, err.to_string())
            }
        }
    }

    /// Trend analysis over a date range
    pub fn trend_report(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        currency: &str,
    ) -> Fetched<TrendReport> {
        match self.read_json(&format!("/analysis/trend?from={}&to={}", from, to)) {
            Ok(value) => Fetched::ok(normalize::trend_report(&value, currency)),
            Err(err) => {
                tracing::warn!(%err, "trend report fetch failed, serving empty report");
                Fetched::fallback(
                    normalize::trend_report(&json!({}), currency),
                    err.to_string(),
                )
            }
        }
    }

    /// Custom expense/revenue report over a date range
    pub fn custom_report(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        currency: &str,
    ) -> Fetched<CustomReport> {
        match self.read_json(&format!("/reports/custom?from={}&to={}", from, to)) {
            Ok(value) => Fetched::ok(normalize::custom_report(&value, currency)),
            Err(err) => {
                tracing::warn!(%err, "custom report fetch failed, serving empty report");
                let empty = json!({ "from": from.to_string(), "to": to.to_string() });
                Fetched::fallback(
                    normalize::custom_report(&empty, currency),
                    err.to_string(),
                )
            }
        }
    }

    // ===== Write paths (fail loud) =====

    /// Create a transaction; returns the backend's canonical record
    pub fn add_transaction(&self, txn: &Transaction) -> BoardResult<Transaction> {
        txn.validate()
            .map_err(|e| BoardError::Validation(e.to_string()))?;

        let body = json!({
            "amount": txn.amount.to_major(),
            "type": txn.kind.as_str(),
            "category": txn.category,
            "description": txn.description,
        });

        let value = self.write_json(Method::Post, "/transactions", &body)?;
        Ok(normalize::transaction(&value))
    }

    /// Update a transaction; returns the backend's canonical record
    pub fn update_transaction(&self, txn: &Transaction) -> BoardResult<Transaction> {
        txn.validate()
            .map_err(|e| BoardError::Validation(e.to_string()))?;

        let body = json!({
            "amount": txn.amount.to_major(),
            "type": txn.kind.as_str(),
            "category": txn.category,
            "description": txn.description,
        });

        let path = format!("/transactions/{}", txn.id);
        let value = self.write_json(Method::Put, &path, &body)?;
        Ok(normalize::transaction(&value))
    }

    /// Delete a transaction by id
    pub fn delete_transaction(&self, id: &str) -> BoardResult<()> {
        let path = self.user_path(&format!("/transactions/{}", id))?;
        let resp = self.transport.request(Method::Delete, &path, None)?;
        if !resp.is_success() {
            return Err(BoardError::BackendStatus {
                status: resp.status,
                path,
            });
        }
        Ok(())
    }

    /// Ask the backend to render a report as PDF; returns the raw bytes.
    ///
    /// Fails loud: the export engine catches the error and downgrades to the
    /// JSON artifact.
    pub fn generate_pdf(&self, report: &Report) -> BoardResult<Vec<u8>> {
        let path = self.user_path("/reports/generate")?;
        let body = serde_json::to_value(report)?;
        let resp = self.transport.request(Method::Post, &path, Some(&body))?;
        if !resp.is_success() {
            return Err(BoardError::BackendStatus {
                status: resp.status,
                path,
            });
        }
        Ok(resp.body)
    }
}

/// Percent-encode a free-form value for use as a single path segment
///
/// Unreserved characters (RFC 3986) pass through; everything else, including
/// `/`, `?`, `&` and `#`, is escaped so a category name cannot alter the
/// request path.
fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
