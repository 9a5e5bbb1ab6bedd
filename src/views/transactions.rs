//! Transactions view controller
//!
//! The transaction list plus its write operations. Reads follow the fail-soft
//! contract; writes surface their errors and leave the list untouched on
//! failure. A successful write folds the backend's canonical record into the
//! local list rather than refetching.

use crate::error::BoardResult;
use crate::gateway::Gateway;
use crate::models::{Timeframe, Transaction};

use super::{LoadTracker, RequestSeq};

/// State owned by the transaction list view
pub struct TransactionsView {
    timeframe: Timeframe,
    pub items: Vec<Transaction>,
    pub soft_error: Option<String>,
    loading: LoadTracker,
    seq: RequestSeq,
}

impl TransactionsView {
    pub fn new() -> Self {
        Self {
            timeframe: Timeframe::Month,
            items: Vec::new(),
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

    /// Switch the timeframe and refetch the list
    pub fn set_timeframe(&mut self, timeframe: Timeframe, gateway: &Gateway) {
        self.timeframe = timeframe;
        self.refresh(gateway);
    }

    /// Refetch the list for the current timeframe
    pub fn refresh(&mut self, gateway: &Gateway) {
        let token = self.seq.next();
        self.loading.begin(1);

        let fetched = gateway.transactions(self.timeframe);
        if self.seq.is_current(token) {
            self.soft_error = fetched.soft_error;
            self.items = fetched.data;
            self.loading.complete();
        }
    }

    /// Create a transaction and prepend the canonical record to the list
    pub fn add(&mut self, gateway: &Gateway, txn: &Transaction) -> BoardResult<()> {
        let created = gateway.add_transaction(txn)?;
        self.items.insert(0, created);
        Ok(())
    }

    /// Update a transaction and replace it in the list
    pub fn update(&mut self, gateway: &Gateway, txn: &Transaction) -> BoardResult<()> {
        let updated = gateway.update_transaction(txn)?;
        if let Some(existing) = self.items.iter_mut().find(|t| t.id == updated.id) {
            *existing = updated;
        }
        Ok(())
    }

    /// Delete a transaction and drop it from the list
    pub fn delete(&mut self, gateway: &Gateway, id: &str) -> BoardResult<()> {
        gateway.delete_transaction(id)?;
        self.items.retain(|t| t.id != id);
        Ok(())
    }
}

impl Default for TransactionsView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::gateway::testing::MockTransport;
    use crate::gateway::Session;
    use crate::models::{Money, TransactionKind};
    use serde_json::json;

    fn gateway_with(transport: MockTransport) -> Gateway {
        Gateway::new(Box::new(transport), Session::authenticated("u-1"))
    }

    fn loaded_view(gateway: &Gateway) -> TransactionsView {
        let mut view = TransactionsView::new();
        view.refresh(gateway);
        view
    }

    #[test]
    fn test_refresh_fills_list() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!([
                {"id": "t-1", "amount": 10.0, "category": "Food"},
                {"id": "t-2", "amount": 20.0, "category": "Transport"}
            ]),
        );
        let gateway = gateway_with(transport);

        let view = loaded_view(&gateway);
        assert!(view.is_loaded());
        assert!(view.soft_error.is_none());
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_refresh_failure_serves_empty_with_banner() {
        let transport = MockTransport::new();
        transport.push_error("connection refused");
        let gateway = gateway_with(transport);

        let view = loaded_view(&gateway);
        assert!(view.is_loaded());
        assert!(view.soft_error.is_some());
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_add_prepends_canonical_record() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([{"id": "t-1", "amount": 10.0}]));
        transport.push_json(
            200,
            json!({"id": "t-2", "amount": 20.0, "category": "Transport"}),
        );
        let gateway = gateway_with(transport);

        let mut view = loaded_view(&gateway);
        let txn = Transaction::new(Money::from_cents(2000), TransactionKind::Expense, "Transport");
        view.add(&gateway, &txn).unwrap();

        assert_eq!(view.items.len(), 2);
        // Backend id wins over the locally generated one
        assert_eq!(view.items[0].id, "t-2");
    }

    #[test]
    fn test_failed_write_leaves_list_unchanged() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([{"id": "t-1", "amount": 10.0}]));
        transport.push_json(500, json!({"error": "boom"}));
        let gateway = gateway_with(transport);

        let mut view = loaded_view(&gateway);
        let txn = Transaction::new(Money::from_cents(2000), TransactionKind::Expense, "Transport");
        let result = view.add(&gateway, &txn);

        assert!(matches!(
            result,
            Err(BoardError::BackendStatus { status: 500, .. })
        ));
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!([
                {"id": "t-1", "amount": 10.0, "category": "Food"},
                {"id": "t-2", "amount": 20.0, "category": "Transport"}
            ]),
        );
        transport.push_json(200, json!({"id": "t-2", "amount": 25.0, "category": "Transport"}));
        let gateway = gateway_with(transport);

        let mut view = loaded_view(&gateway);
        let mut txn = view.items[1].clone();
        txn.amount = Money::from_cents(2500);
        view.update(&gateway, &txn).unwrap();

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[1].amount.cents(), 2500);
    }

    #[test]
    fn test_delete_removes_from_list() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!([
                {"id": "t-1", "amount": 10.0},
                {"id": "t-2", "amount": 20.0}
            ]),
        );
        transport.push_json(204, json!(null));
        let gateway = gateway_with(transport);

        let mut view = loaded_view(&gateway);
        view.delete(&gateway, "t-1").unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, "t-2");
    }
}
