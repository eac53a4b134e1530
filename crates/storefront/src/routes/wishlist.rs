//! Wishlist route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopfront_core::{ProductId, StockStatus};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::WishlistEntry;
use crate::routes::ShopView;
use crate::routes::cart::parse_product_id;
use crate::state::AppState;
use crate::store::ShopState;

/// Wishlist entry display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntryView {
    #[serde(flatten)]
    pub entry: WishlistEntry,
    pub stock_status: StockStatus,
    pub stock_label: &'static str,
    pub in_cart: bool,
}

/// Wishlist display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistView {
    pub items: Vec<WishlistEntryView>,
    pub count: usize,
}

impl WishlistView {
    #[must_use]
    pub fn from_state(state: &ShopState) -> Self {
        let items = state
            .wishlist
            .iter()
            .map(|entry| WishlistEntryView {
                entry: entry.clone(),
                stock_status: entry.stock_status(),
                stock_label: entry.stock_status().label(),
                in_cart: state.is_in_cart(&entry.id),
            })
            .collect();

        Self {
            items,
            count: state.wishlist.len(),
        }
    }
}

/// Add to wishlist request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWishlistRequest {
    pub product_id: String,
}

/// Display the wishlist.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<WishlistView> {
    Json(WishlistView::from_state(&state.store().snapshot()))
}

/// Save a catalog product to the wishlist. Saving twice is a no-op.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToWishlistRequest>,
) -> Result<Json<WishlistView>> {
    let product_id = parse_product_id(&request.product_id)?;
    let product = state
        .catalog()
        .get(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    if state.store().add_to_wishlist(product.to_wishlist_input()) {
        add_breadcrumb(
            "wishlist",
            "Saved to wishlist",
            Some(&[("product_id", product_id.as_str())]),
        );
    }

    Ok(Json(WishlistView::from_state(&state.store().snapshot())))
}

/// Remove an entry.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Json<WishlistView> {
    state.store().remove_from_wishlist(&ProductId::from(id));
    Json(WishlistView::from_state(&state.store().snapshot()))
}

/// Move an entry to the cart with quantity one. Returns both collections.
#[instrument(skip(state))]
pub async fn move_to_cart(State(state): State<AppState>, Path(id): Path<String>) -> Json<ShopView> {
    let id = ProductId::from(id);
    if state.store().move_wishlist_to_cart(&id) {
        add_breadcrumb(
            "wishlist",
            "Moved to cart",
            Some(&[("product_id", id.as_str())]),
        );
    }
    Json(ShopView::from_state(&state.store().snapshot()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::cart::tests::tote;
    use crate::models::wishlist::tests::painting;

    #[test]
    fn test_wishlist_view_marks_items_in_cart() {
        let mut state = ShopState::default();
        state.add_to_wishlist(painting());
        state.add_to_cart(tote(), 1);
        let mut tote_input = painting();
        tote_input.id = ProductId::new("1");
        state.add_to_wishlist(tote_input);

        let view = WishlistView::from_state(&state);
        assert_eq!(view.count, 2);
        assert!(!view.items[0].in_cart);
        assert!(view.items[1].in_cart);
    }

    #[test]
    fn test_wishlist_view_serializes_flat() {
        let mut state = ShopState::default();
        state.add_to_wishlist(painting());

        let json = serde_json::to_value(WishlistView::from_state(&state)).unwrap();
        let item = &json["items"][0];
        assert_eq!(item["id"], "2");
        assert_eq!(item["reviews"], 18);
        assert_eq!(item["inCart"], false);
        assert_eq!(item["stockLabel"], "In stock");
        assert_eq!(json["count"], 1);
    }
}
