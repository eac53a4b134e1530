//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::orders::OrderStore;
use crate::storage::{FileStorage, MemoryStorage, StorageBackend};
use crate::store::ShopStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and owns the single
/// [`ShopStore`] instance; handlers reach the store only through here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: ShopStore,
    orders: OrderStore,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `store` - The cart/wishlist store, already rehydrated
    /// * `orders` - Where the last placed order is kept
    /// * `catalog` - Products available for adding to the cart
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        store: ShopStore,
        orders: OrderStore,
        catalog: Catalog,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                orders,
                catalog,
            }),
        }
    }

    /// Build state from configuration: open storage, rehydrate the store, and
    /// load the demo catalog.
    #[must_use]
    pub fn from_config(config: StorefrontConfig) -> Self {
        let storage = create_storage(&config);
        let store = ShopStore::open(storage.clone());
        let orders = OrderStore::new(storage);
        Self::new(config, store, orders, Catalog::mock())
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart/wishlist store.
    #[must_use]
    pub fn store(&self) -> &ShopStore {
        &self.inner.store
    }

    /// Get a reference to the last-order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}

/// Pick the storage backend named by the configuration.
#[must_use]
pub fn create_storage(config: &StorefrontConfig) -> Arc<dyn StorageBackend> {
    match &config.data_dir {
        Some(dir) => {
            let storage = FileStorage::new(dir.clone());
            tracing::info!(dir = %storage.dir().display(), "Using file storage");
            Arc::new(storage)
        }
        None => {
            tracing::info!("Using in-memory storage, state will not survive restarts");
            Arc::new(MemoryStorage::new())
        }
    }
}
