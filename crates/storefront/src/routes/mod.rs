//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                                - Health check
//!
//! # Products
//! GET    /api/products                          - Filtered, sorted listing
//! GET    /api/products/{id}                     - Product detail
//!
//! # Cart
//! GET    /api/cart                              - Cart lines and totals
//! DELETE /api/cart                              - Empty the cart
//! POST   /api/cart/items                        - Add a product
//! PATCH  /api/cart/items/{id}                   - Set quantity (clamped)
//! DELETE /api/cart/items/{id}                   - Remove a line
//! POST   /api/cart/items/{id}/move-to-wishlist  - Move a line to the wishlist
//! GET    /api/cart/summary                      - Delivery, tax, discount, total
//!
//! # Wishlist
//! GET    /api/wishlist                          - Saved items
//! POST   /api/wishlist/items                    - Save a product
//! DELETE /api/wishlist/items/{id}               - Remove an entry
//! POST   /api/wishlist/items/{id}/move-to-cart  - Move an entry to the cart
//!
//! # Orders
//! POST   /api/orders                            - Place an order from the cart
//! GET    /api/orders/last                       - Most recently placed order
//!
//! # Events
//! GET    /api/events                            - SSE stream of store snapshots
//! ```

pub mod cart;
pub mod events;
pub mod orders;
pub mod products;
pub mod wishlist;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use serde::Serialize;

use crate::state::AppState;
use crate::store::ShopState;

use self::cart::CartView;
use self::wishlist::WishlistView;

/// Both collections, returned by move operations and pushed over SSE.
#[derive(Debug, Clone, Serialize)]
pub struct ShopView {
    pub cart: CartView,
    pub wishlist: WishlistView,
}

impl ShopView {
    #[must_use]
    pub fn from_state(state: &ShopState) -> Self {
        Self {
            cart: CartView::from_state(state),
            wishlist: WishlistView::from_state(state),
        }
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route("/summary", get(cart::summary))
        .route("/items", post(cart::add))
        .route("/items/{id}", patch(cart::update).delete(cart::remove))
        .route("/items/{id}/move-to-wishlist", post(cart::move_to_wishlist))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/items", post(wishlist::add))
        .route("/items/{id}", delete(wishlist::remove))
        .route("/items/{id}/move-to-cart", post(wishlist::move_to_cart))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::place))
        .route("/last", get(orders::last))
}

/// Create the `/api` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/wishlist", wishlist_routes())
        .nest("/orders", order_routes())
        .route("/events", get(events::stream))
}
