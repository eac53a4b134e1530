//! Cart/wishlist store.
//!
//! [`ShopStore`] owns the current [`ShopState`] and is the only way to mutate
//! it. It is created once by the application and injected wherever it is
//! needed (see [`AppState`](crate::state::AppState)); there is no global
//! instance.
//!
//! # Notification
//!
//! State lives in a `tokio::sync::watch` channel. Readers call
//! [`ShopStore::subscribe`] and are woken only when a mutation actually
//! changed something.
//!
//! # Persistence
//!
//! After every changing mutation the whole state is serialized and written
//! to the storage backend under [`STORAGE_KEY`]. The write happens while the
//! channel's write lock is held, so snapshots reach storage in mutation
//! order. Storage failures are logged and swallowed: the in-memory state
//! stays authoritative for the life of the process.

mod state;

pub use state::ShopState;

use std::sync::Arc;

use tokio::sync::watch;
use tracing::instrument;

use shopfront_core::{Price, ProductId};

use crate::models::{CartLine, CartProduct, WishlistEntry, WishlistItemInput};
use crate::storage::{StorageBackend, StorageError};

/// Storage key the state is persisted under.
pub const STORAGE_KEY: &str = "shop-store";

/// State container for the cart and wishlist.
#[derive(Debug)]
pub struct ShopStore {
    state: watch::Sender<ShopState>,
    storage: Arc<dyn StorageBackend>,
    key: String,
}

impl ShopStore {
    /// Open the store, rehydrating from `storage` under [`STORAGE_KEY`].
    #[must_use]
    pub fn open(storage: Arc<dyn StorageBackend>) -> Self {
        Self::open_with_key(storage, STORAGE_KEY)
    }

    /// Open the store using a custom storage key.
    ///
    /// A missing, unreadable, or malformed record starts the store empty.
    #[must_use]
    pub fn open_with_key(storage: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        let key = key.into();
        let initial = rehydrate(storage.as_ref(), &key);
        tracing::info!(
            key = %key,
            cart_lines = initial.cart.len(),
            wishlist_entries = initial.wishlist.len(),
            "Shop store opened"
        );
        let (state, _) = watch::channel(initial);
        Self {
            state,
            storage,
            key,
        }
    }

    /// Subscribe to state changes.
    ///
    /// The receiver starts with the current state marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ShopState> {
        self.state.subscribe()
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ShopState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn cart(&self) -> Vec<CartLine> {
        self.state.borrow().cart.clone()
    }

    #[must_use]
    pub fn wishlist(&self) -> Vec<WishlistEntry> {
        self.state.borrow().wishlist.clone()
    }

    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.state.borrow().cart_count()
    }

    #[must_use]
    pub fn cart_subtotal(&self) -> Price {
        self.state.borrow().cart_subtotal()
    }

    #[must_use]
    pub fn is_in_cart(&self, id: &ProductId) -> bool {
        self.state.borrow().is_in_cart(id)
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.state.borrow().is_in_wishlist(id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&self, product: CartProduct, quantity: u32) -> bool {
        self.update(|state| state.add_to_cart(product, quantity))
    }

    #[instrument(skip(self))]
    pub fn update_quantity(&self, id: &ProductId, quantity: i64) -> bool {
        self.update(|state| state.update_quantity(id, quantity))
    }

    #[instrument(skip(self))]
    pub fn remove_from_cart(&self, id: &ProductId) -> bool {
        self.update(|state| state.remove_from_cart(id))
    }

    #[instrument(skip(self))]
    pub fn clear_cart(&self) -> bool {
        self.update(ShopState::clear_cart)
    }

    /// Empty the cart and hand back the lines it held, in one transition.
    #[instrument(skip(self))]
    pub fn take_cart(&self) -> Vec<CartLine> {
        let mut taken = Vec::new();
        self.update(|state| {
            taken = std::mem::take(&mut state.cart);
            !taken.is_empty()
        });
        taken
    }

    #[instrument(skip(self, input), fields(product_id = %input.id))]
    pub fn add_to_wishlist(&self, input: WishlistItemInput) -> bool {
        self.update(|state| state.add_to_wishlist(input))
    }

    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&self, id: &ProductId) -> bool {
        self.update(|state| state.remove_from_wishlist(id))
    }

    #[instrument(skip(self))]
    pub fn move_cart_to_wishlist(&self, id: &ProductId) -> bool {
        self.update(|state| state.move_cart_to_wishlist(id))
    }

    #[instrument(skip(self))]
    pub fn move_wishlist_to_cart(&self, id: &ProductId) -> bool {
        self.update(|state| state.move_wishlist_to_cart(id))
    }

    /// Apply one transition. Persists and notifies only if it changed state.
    ///
    /// The storage write is synchronous and runs under the channel's write
    /// lock, so callers on the async runtime block for its duration. The
    /// record is a few kilobytes at most; moving it off-thread would need a
    /// queue to keep writes in mutation order.
    fn update(&self, transition: impl FnOnce(&mut ShopState) -> bool) -> bool {
        self.state.send_if_modified(|state| {
            let changed = transition(state);
            if changed {
                persist(self.storage.as_ref(), &self.key, state);
                tracing::debug!(
                    cart_lines = state.cart.len(),
                    wishlist_entries = state.wishlist.len(),
                    "Shop state updated"
                );
            }
            changed
        })
    }
}

fn rehydrate(storage: &dyn StorageBackend, key: &str) -> ShopState {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return ShopState::default(),
        Err(e) => {
            tracing::warn!(error = %e, key, "Failed to read persisted shop state");
            return ShopState::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, key, "Discarding malformed persisted shop state");
        ShopState::default()
    })
}

fn persist(storage: &dyn StorageBackend, key: &str, state: &ShopState) {
    let result = serde_json::to_string(state)
        .map_err(StorageError::from)
        .and_then(|raw| storage.set_item(key, &raw));

    if let Err(e) = result {
        tracing::warn!(error = %e, key, "Failed to persist shop state");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::cart::tests::tote;
    use crate::models::wishlist::tests::painting;
    use crate::storage::MemoryStorage;

    /// Backend whose every call fails.
    #[derive(Debug)]
    struct BrokenStorage;

    impl StorageBackend for BrokenStorage {
        fn get_item(&self, _key: &str) -> crate::storage::Result<Option<String>> {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        }

        fn set_item(&self, _key: &str, _value: &str) -> crate::storage::Result<()> {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        }

        fn remove_item(&self, _key: &str) -> crate::storage::Result<()> {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        }
    }

    fn memory_store() -> (Arc<MemoryStorage>, ShopStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = ShopStore::open(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_opens_empty() {
        let (_, store) = memory_store();
        assert!(store.cart().is_empty());
        assert!(store.wishlist().is_empty());
        assert_eq!(store.cart_subtotal(), Price::ZERO);
    }

    #[test]
    fn test_mutation_persists_state() {
        let (storage, store) = memory_store();
        store.add_to_cart(tote(), 2);

        let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
        let persisted: ShopState = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.snapshot());
    }

    #[test]
    fn test_noop_does_not_write() {
        let (storage, store) = memory_store();
        store.remove_from_wishlist(&ProductId::new("x"));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_rehydrates_from_storage() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let store = ShopStore::open(storage.clone());
            store.add_to_cart(tote(), 3);
            store.add_to_wishlist(painting());
        }

        let reopened = ShopStore::open(storage);
        assert_eq!(reopened.cart_count(), 3);
        assert!(reopened.is_in_wishlist(&ProductId::new("2")));
    }

    #[test]
    fn test_malformed_storage_starts_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(STORAGE_KEY, "{not json").unwrap();

        let store = ShopStore::open(storage);
        assert_eq!(store.snapshot(), ShopState::default());
    }

    #[test]
    fn test_oversized_price_is_rejected_on_rehydrate() {
        let storage = Arc::new(MemoryStorage::new());
        let record = r#"{"cart":[{"id":"1","name":"Tote","price":"79228162514264337593543950335","image":"/t.svg","category":"bags","quantity":2}],"wishlist":[]}"#;
        storage.set_item(STORAGE_KEY, record).unwrap();

        let store = ShopStore::open(storage);
        assert!(store.cart().is_empty());
        assert_eq!(store.cart_subtotal(), Price::ZERO);
    }

    #[test]
    fn test_subtotal_at_price_cap_does_not_overflow() {
        let (_, store) = memory_store();
        for id in ["a", "b", "c"] {
            let mut product = tote();
            product.id = ProductId::new(id);
            product.price = Price::MAX;
            store.add_to_cart(product, 10);
        }

        assert_eq!(store.cart_subtotal(), Price::MAX);
    }

    #[test]
    fn test_take_cart_returns_lines_and_empties() {
        let (storage, store) = memory_store();
        store.add_to_cart(tote(), 2);
        store.add_to_wishlist(painting());

        let taken = store.take_cart();
        assert_eq!(taken.len(), 1);
        assert_eq!(taken.first().unwrap().quantity.get(), 2);
        assert!(store.cart().is_empty());
        assert!(store.is_in_wishlist(&ProductId::new("2")));

        let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
        let persisted: ShopState = serde_json::from_str(&raw).unwrap();
        assert!(persisted.cart.is_empty());
    }

    #[test]
    fn test_take_empty_cart_is_noop() {
        let (storage, store) = memory_store();
        let mut rx = store.subscribe();

        assert!(store.take_cart().is_empty());
        assert!(!rx.has_changed().unwrap());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_concurrent_writers_persist_final_state() {
        let (storage, store) = memory_store();
        let store = Arc::new(store);

        let writers: Vec<_> = (0..8)
            .map(|n| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let mut product = tote();
                    product.id = ProductId::new(format!("p{n}"));
                    store.add_to_cart(product, 1);
                    store.update_quantity(&ProductId::new(format!("p{n}")), 4);
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
        let persisted: ShopState = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.snapshot());
        assert_eq!(store.cart_count(), 32);
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let store = ShopStore::open(Arc::new(BrokenStorage));
        assert!(store.add_to_cart(tote(), 1));
        assert_eq!(store.cart_count(), 1);
    }

    #[test]
    fn test_custom_key() {
        let storage = Arc::new(MemoryStorage::new());
        let store = ShopStore::open_with_key(storage.clone(), "guest-cart");
        store.add_to_cart(tote(), 1);

        assert!(storage.get_item("guest-cart").unwrap().is_some());
        assert!(storage.get_item(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_subscribers_see_changes_only() {
        let (_, store) = memory_store();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.update_quantity(&ProductId::new("missing"), 3);
        assert!(!rx.has_changed().unwrap());

        store.add_to_cart(tote(), 1);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().cart_count(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_change() {
        let (_, store) = memory_store();
        let store = Arc::new(store);
        let mut rx = store.subscribe();

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                store.add_to_cart(tote(), 2);
            })
        };

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().cart_count(), 2);
        writer.await.unwrap();
    }

    #[test]
    fn test_repeat_add_merges_into_one_line() {
        let (_, store) = memory_store();
        store.add_to_cart(tote(), 2);
        store.add_to_cart(tote(), 1);

        let cart = store.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.first().unwrap().quantity.get(), 3);
        assert_eq!(store.cart_subtotal(), Price::from_whole(267));
    }
}
