//! Reports view controller
//!
//! Assembles a trend or custom report for a date range and hands it to the
//! export engine. Exporting without a loaded report is a caller error, not a
//! soft fallback.

use chrono::NaiveDate;

use crate::config::PreferencesStore;
use crate::error::{BoardError, BoardResult};
use crate::export::{self, ExportArtifact, ExportFormat};
use crate::gateway::Gateway;
use crate::models::Report;

use super::{LoadTracker, RequestSeq};

/// State owned by the reports view
pub struct ReportsView {
    pub report: Option<Report>,
    pub soft_error: Option<String>,
    loading: LoadTracker,
    seq: RequestSeq,
}

impl ReportsView {
    pub fn new() -> Self {
        Self {
            report: None,
            soft_error: None,
            loading: LoadTracker::default(),
            seq: RequestSeq::default(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loading.is_loaded()
    }

    /// Fetch a trend report for the range, in the configured currency
    pub fn load_trend(
        &mut self,
        gateway: &Gateway,
        store: &PreferencesStore,
        from: NaiveDate,
        to: NaiveDate,
    ) {
        let token = self.seq.next();
        self.loading.begin(1);
        let currency = store.settings().currency;

        let fetched = gateway.trend_report(from, to, &currency);
        if self.seq.is_current(token) {
            self.soft_error = fetched.soft_error;
            self.report = Some(Report::Trend(fetched.data));
            self.loading.complete();
        }
    }

    /// Fetch a custom expense/revenue report for the range
    pub fn load_custom(
        &mut self,
        gateway: &Gateway,
        store: &PreferencesStore,
        from: NaiveDate,
        to: NaiveDate,
    ) {
        let token = self.seq.next();
        self.loading.begin(1);
        let currency = store.settings().currency;

        let fetched = gateway.custom_report(from, to, &currency);
        if self.seq.is_current(token) {
            self.soft_error = fetched.soft_error;
            self.report = Some(Report::Custom(fetched.data));
            self.loading.complete();
        }
    }

    /// Export the loaded report in the requested format
    pub fn export(&self, format: ExportFormat, gateway: &Gateway) -> BoardResult<ExportArtifact> {
        let report = self
            .report
            .as_ref()
            .ok_or_else(|| BoardError::Export("no report loaded".into()))?;
        export::export(report, format, gateway)
    }
}

impl Default for ReportsView {
    fn default() -> Self {
        Self::new()
    }
}
