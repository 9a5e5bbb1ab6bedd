//! Dashboard view controller
//!
//! The landing view: period summary, recent transactions, category breakdown,
//! and the budget alert banner. The three fetches are issued independently;
//! a failing one leaves its slice at the fallback value while the others
//! render normally.

use crate::alerts::{self, BudgetAlert, NotificationPort};
use crate::config::{BudgetPeriod, BudgetSettings, PreferencesStore};
use crate::gateway::Gateway;
use crate::models::{CategorySummary, Money, Timeframe, Transaction, TransactionSummary};

use super::{LoadTracker, RequestSeq};

/// Number of recent transactions shown on the dashboard
const RECENT_LIMIT: usize = 5;

/// State owned by the dashboard
pub struct DashboardView {
    timeframe: Timeframe,
    pub summary: TransactionSummary,
    pub recent: Vec<Transaction>,
    pub categories: Vec<CategorySummary>,
    pub alert: Option<BudgetAlert>,
    pub soft_errors: Vec<String>,
    period_spend: Money,
    loading: LoadTracker,
    seq: RequestSeq,
}

/// The timeframe a budget period covers
fn budget_timeframe(period: BudgetPeriod) -> Timeframe {
    match period {
        BudgetPeriod::Monthly => Timeframe::Month,
        BudgetPeriod::Weekly => Timeframe::Week,
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            timeframe: Timeframe::Month,
            summary: TransactionSummary::empty("all", "USD"),
            recent: Vec::new(),
            categories: Vec::new(),
            alert: None,
            soft_errors: Vec::new(),
            period_spend: Money::zero(),
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

    /// Switch the timeframe and refetch everything
    pub fn set_timeframe(
        &mut self,
        timeframe: Timeframe,
        gateway: &Gateway,
        store: &PreferencesStore,
        port: &dyn NotificationPort,
    ) {
        self.timeframe = timeframe;
        self.refresh(gateway, store, port);
    }

    /// Refetch the summary, recent transactions, and category breakdown
    ///
    /// Each call resolves on its own and only current-generation results are
    /// applied; the view is loaded once every outstanding call has resolved.
    /// The budget alert always measures spend over the budget's own period,
    /// so a fourth summary fetch is issued when the selected timeframe
    /// differs from it.
    pub fn refresh(
        &mut self,
        gateway: &Gateway,
        store: &PreferencesStore,
        port: &dyn NotificationPort,
    ) {
        let token = self.seq.next();
        let budget = store.budget();
        let budget_timeframe = budget_timeframe(budget.period);
        let pinned_fetch = budget_timeframe != self.timeframe;
        self.loading.begin(if pinned_fetch { 4 } else { 3 });
        self.soft_errors.clear();
        let currency = store.settings().currency;

        let summary = gateway.summary(self.timeframe, &currency);
        if self.seq.is_current(token) {
            if let Some(err) = summary.soft_error.clone() {
                self.soft_errors.push(err);
            }
            self.summary = summary.data;
            self.loading.complete();
        }

        let transactions = gateway.transactions(self.timeframe);
        if self.seq.is_current(token) {
            if let Some(err) = transactions.soft_error.clone() {
                self.soft_errors.push(err);
            }
            self.recent = transactions.data;
            self.recent.truncate(RECENT_LIMIT);
            self.loading.complete();
        }

        let categories = gateway.category_summaries(self.timeframe);
        if self.seq.is_current(token) {
            if let Some(err) = categories.soft_error.clone() {
                self.soft_errors.push(err);
            }
            self.categories = categories.data;
            self.loading.complete();
        }

        if pinned_fetch {
            let period = gateway.summary(budget_timeframe, &currency);
            if self.seq.is_current(token) {
                if let Some(err) = period.soft_error.clone() {
                    self.soft_errors.push(err);
                }
                self.period_spend = period.data.total_expenses;
                self.loading.complete();
            }
        } else if self.seq.is_current(token) {
            self.period_spend = self.summary.total_expenses;
        }

        if self.seq.is_current(token) {
            self.alert = Some(alerts::evaluate(self.period_spend, &budget, port));
        }
    }

    /// Re-evaluate the budget alert against already-fetched data
    ///
    /// Hooked up to [`PreferencesStore::subscribe`] by the shell so a budget
    /// change updates the banner without a refetch. Uses the budget-period
    /// spend from the last refresh; a period switch takes full effect on the
    /// next one.
    pub fn apply_budget(&mut self, budget: &BudgetSettings, port: &dyn NotificationPort) {
        self.alert = Some(alerts::evaluate(self.period_spend, budget, port));
    }

    /// Headline line for the summary card, in the configured currency
    pub fn headline(&self, store: &PreferencesStore) -> String {
        format!(
            "{}: {} spent, {} received, net {}",
            self.summary.period,
            store.format_money(self.summary.total_expenses),
            store.format_money(self.summary.total_revenue),
            store.format_money(self.summary.net()),
        )
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}
