//! View controllers
//!
//! Each view owns a slice of UI state, requests its data from the gateway,
//! and derives presentation values through the preferences store. A view
//! counts itself loaded once every outstanding call has resolved, success or
//! failure; there is no rollback. Stale responses are discarded via a
//! monotonic request generation.

pub mod categories;
pub mod dashboard;
pub mod reports;
pub mod transactions;

pub use categories::CategoryStatsView;
pub use dashboard::DashboardView;
pub use reports::ReportsView;
pub use transactions::TransactionsView;

/// Completion counter for a batch of independent fetches
///
/// Not a barrier: each call resolves on its own and the view is loaded when
/// the counter reaches zero, regardless of how many resolved as fallbacks.
#[derive(Debug, Default)]
pub struct LoadTracker {
    outstanding: usize,
}

impl LoadTracker {
    /// Begin a batch of `count` fetches
    pub fn begin(&mut self, count: usize) {
        self.outstanding = count;
    }

    /// Record one resolved call; returns true once the batch is done
    pub fn complete(&mut self) -> bool {
        self.outstanding = self.outstanding.saturating_sub(1);
        self.outstanding == 0
    }

    /// Whether every call in the current batch has resolved
    pub fn is_loaded(&self) -> bool {
        self.outstanding == 0
    }
}

/// Monotonic request generation guard
///
/// Rapid refreshes (switching timeframes twice in quick succession) can let
/// a stale response arrive after a newer one. Each refresh takes a new
/// generation; results are applied only if their generation is still the
/// latest.
#[derive(Debug, Default)]
pub struct RequestSeq {
    current: u64,
}

impl RequestSeq {
    /// Start a new generation, invalidating all earlier ones
    pub fn next(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether a generation token is still the latest
    pub fn is_current(&self, token: u64) -> bool {
        self.current == token
    }
}
