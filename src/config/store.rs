//! Reactive preferences store
//!
//! Owns the two preference singletons and an observer list. Views subscribe
//! to hear about changes; every update persists to disk (last write wins) and
//! then broadcasts to all subscribers, so formatted values follow a currency
//! or date-format switch without a reload.
//!
//! The store is passed around explicitly (by `Rc`) rather than living in a
//! module-level global. The client is single-threaded, so interior
//! mutability via `RefCell` is sufficient.

use std::cell::RefCell;

use super::paths::BoardPaths;
use super::settings::{AppSettings, BudgetSettings};
use crate::error::BoardResult;
use crate::format::{currency::format_currency, date::format_date};
use crate::models::Money;
use chrono::NaiveDate;

/// Callback invoked after every settings change.
///
/// Callbacks must not subscribe or unsubscribe from inside the callback.
pub type Subscriber = Box<dyn Fn(&AppSettings, &BudgetSettings)>;

/// Handle returned by [`PreferencesStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// The cross-view preferences store
pub struct PreferencesStore {
    paths: BoardPaths,
    settings: RefCell<AppSettings>,
    budget: RefCell<BudgetSettings>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: RefCell<usize>,
}

impl PreferencesStore {
    /// Load both preference files (or defaults) from the given paths
    pub fn load(paths: BoardPaths) -> Self {
        let settings = AppSettings::load_or_default(&paths);
        let budget = BudgetSettings::load_or_default(&paths);
        Self {
            paths,
            settings: RefCell::new(settings),
            budget: RefCell::new(budget),
            subscribers: RefCell::new(Vec::new()),
            next_id: RefCell::new(0),
        }
    }

    /// Current app settings (cloned snapshot)
    pub fn settings(&self) -> AppSettings {
        self.settings.borrow().clone()
    }

    /// Current budget settings (cloned snapshot)
    pub fn budget(&self) -> BudgetSettings {
        self.budget.borrow().clone()
    }

    /// Mutate app settings, persist, and broadcast
    pub fn update_settings(&self, f: impl FnOnce(&mut AppSettings)) -> BoardResult<()> {
        {
            let mut settings = self.settings.borrow_mut();
            f(&mut settings);
            settings.save(&self.paths)?;
        }
        self.notify();
        Ok(())
    }

    /// Mutate budget settings, persist, and broadcast
    pub fn update_budget(&self, f: impl FnOnce(&mut BudgetSettings)) -> BoardResult<()> {
        {
            let mut budget = self.budget.borrow_mut();
            f(&mut budget);
            budget.save(&self.paths)?;
        }
        self.notify();
        Ok(())
    }

    /// Re-read both files from disk and broadcast.
    ///
    /// Mirrors changes written by another process, the way a browser tab
    /// picks up storage-change events from its siblings.
    pub fn reload(&self) {
        *self.settings.borrow_mut() = AppSettings::load_or_default(&self.paths);
        *self.budget.borrow_mut() = BudgetSettings::load_or_default(&self.paths);
        self.notify();
    }

    /// Register a change callback; fires on every settings or budget update
    pub fn subscribe(&self, callback: Subscriber) -> SubscriptionId {
        let mut next = self.next_id.borrow_mut();
        let id = SubscriptionId(*next);
        *next += 1;
        self.subscribers.borrow_mut().push((id, callback));
        id
    }

    /// Remove a previously registered callback
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    /// Format an amount in the currently configured currency
    pub fn format_money(&self, amount: Money) -> String {
        format_currency(amount, &self.settings.borrow().currency)
    }

    /// Format a date in the currently configured pattern
    pub fn format_date(&self, date: NaiveDate) -> String {
        format_date(date, self.settings.borrow().date_format.key())
    }

    fn notify(&self) {
        let settings = self.settings.borrow().clone();
        let budget = self.budget.borrow().clone();
        for (_, callback) in self.subscribers.borrow().iter() {
            callback(&settings, &budget);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DateFormat;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, PreferencesStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = PreferencesStore::load(paths);
        (temp_dir, store)
    }

    #[test]
    fn test_update_persists_and_broadcasts() {
        let (_temp_dir, store) = test_store();

        let seen = Rc::new(Cell::new(0));
        let seen_clone = Rc::clone(&seen);
        store.subscribe(Box::new(move |_, _| {
            seen_clone.set(seen_clone.get() + 1);
        }));

        store
            .update_settings(|s| s.currency = "EUR".to_string())
            .unwrap();

        assert_eq!(seen.get(), 1);
        assert_eq!(store.settings().currency, "EUR");
    }

    #[test]
    fn test_currency_switch_changes_formatting() {
        let (_temp_dir, store) = test_store();

        let amount = Money::from_cents(1050);
        assert_eq!(store.format_money(amount), "$10.50");

        store
            .update_settings(|s| s.currency = "EUR".to_string())
            .unwrap();

        // New symbol and locale style, no reload needed
        assert_eq!(store.format_money(amount), "10,50 €");
    }

    #[test]
    fn test_date_format_follows_settings() {
        let (_temp_dir, store) = test_store();
        let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

        assert_eq!(store.format_date(date), "03/15/2026");

        store
            .update_settings(|s| s.date_format = DateFormat::Iso)
            .unwrap();

        assert_eq!(store.format_date(date), "2026-03-15");
    }

    #[test]
    fn test_unsubscribe() {
        let (_temp_dir, store) = test_store();

        let seen = Rc::new(Cell::new(0));
        let seen_clone = Rc::clone(&seen);
        let id = store.subscribe(Box::new(move |_, _| {
            seen_clone.set(seen_clone.get() + 1);
        }));

        store.update_budget(|b| b.alert_threshold_pct = 90).unwrap();
        store.unsubscribe(id);
        store.update_budget(|b| b.alert_threshold_pct = 95).unwrap();

        assert_eq!(seen.get(), 1);
        assert_eq!(store.budget().alert_threshold_pct, 95);
    }

    #[test]
    fn test_reload_mirrors_external_writes() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = PreferencesStore::load(paths.clone());

        // Another process rewrites the settings file
        let mut external = AppSettings::default();
        external.currency = "GBP".to_string();
        external.save(&paths).unwrap();

        assert_eq!(store.settings().currency, "USD");
        store.reload();
        assert_eq!(store.settings().currency, "GBP");
    }
}
