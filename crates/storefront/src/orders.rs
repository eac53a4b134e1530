//! Last placed order.
//!
//! Only the most recent order is kept, under [`LAST_ORDER_KEY`], so the
//! confirmation page can be reloaded. Writes are best-effort like the shop
//! store's: a failed save is logged and the order is still returned to the
//! shopper.

use std::sync::Arc;

use tracing::instrument;

use crate::models::Order;
use crate::storage::{StorageBackend, StorageError};

/// Storage key the last order is kept under.
pub const LAST_ORDER_KEY: &str = "last-order";

/// Reads and writes the last placed order.
#[derive(Debug, Clone)]
pub struct OrderStore {
    storage: Arc<dyn StorageBackend>,
}

impl OrderStore {
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Replace the last order with `order`. Failures are logged, not returned.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub fn save(&self, order: &Order) {
        let result = serde_json::to_string(order)
            .map_err(StorageError::from)
            .and_then(|raw| self.storage.set_item(LAST_ORDER_KEY, &raw));

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist last order");
        }
    }

    /// The last saved order, if one is stored and readable.
    #[must_use]
    pub fn last(&self) -> Option<Order> {
        let raw = match self.storage.get_item(LAST_ORDER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read last order");
                return None;
            }
        };

        serde_json::from_str(&raw)
            .inspect_err(|e| tracing::warn!(error = %e, "Discarding malformed last order"))
            .ok()
    }
}
