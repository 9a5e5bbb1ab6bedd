//! Category statistics view controller
//!
//! The per-category breakdown plus a drill-down detail panel. Selecting a
//! category issues its own fetch; clearing the selection is purely local.

use crate::gateway::Gateway;
use crate::models::{CategoryDetail, CategorySummary, Timeframe};

use super::{LoadTracker, RequestSeq};

/// State owned by the category statistics view
pub struct CategoryStatsView {
    timeframe: Timeframe,
    pub summaries: Vec<CategorySummary>,
    pub selected: Option<CategoryDetail>,
    pub soft_error: Option<String>,
    loading: LoadTracker,
    seq: RequestSeq,
}

impl CategoryStatsView {
    pub fn new() -> Self {
        Self {
            timeframe: Timeframe::Month,
            summaries: Vec::new(),
            selected: None,
            soft_error: None,
            loading: LoadTracker::default(),
            seq: RequestSeq::default(),
        }
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn is_loaded(&self) -> bool {
        self.loading.is_loaded()
    }

    /// Switch the timeframe, refetch the breakdown, and drop the selection
    pub fn set_timeframe(&mut self, timeframe: Timeframe, gateway: &Gateway) {
        self.timeframe = timeframe;
        self.selected = None;
        self.refresh(gateway);
    }

    /// Refetch the per-category breakdown
    pub fn refresh(&mut self, gateway: &Gateway) {
        let token = self.seq.next();
        self.loading.begin(1);

        let fetched = gateway.category_summaries(self.timeframe);
        if self.seq.is_current(token) {
            self.soft_error = fetched.soft_error;
            self.summaries = fetched.data;
            self.loading.complete();
        }
    }

    /// Drill into one category's monthly history
    pub fn select(&mut self, gateway: &Gateway, category: &str) {
        let token = self.seq.next();
        let fetched = gateway.category_detail(category);
        if self.seq.is_current(token) {
            if let Some(err) = fetched.soft_error {
                self.soft_error = Some(err);
            }
            self.selected = Some(fetched.data);
        }
    }

    /// Close the detail panel
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The largest category by amount, if any
    pub fn top_category(&self) -> Option<&CategorySummary> {
        self.summaries.iter().max_by_key(|c| c.amount)
    }
}

impl Default for CategoryStatsView {
    fn default() -> Self {
        Self::new()
    }
}
