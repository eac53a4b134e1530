//! Cart route handlers.
//!
//! Every mutating handler returns the updated cart so clients can re-render
//! without a second request. Operations on ids that are not in the cart are
//! no-ops, not errors.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopfront_core::{Price, ProductId, StockStatus};

use crate::checkout::{DeliveryOption, OrderSummary};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::CartLine;
use crate::routes::ShopView;
use crate::state::AppState;
use crate::store::ShopState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,
    pub line_total: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_savings: Option<Price>,
    pub stock_status: StockStatus,
    pub stock_label: &'static str,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let stock_status = line.stock_status();
        Self {
            line: line.clone(),
            line_total: line.line_total(),
            unit_savings: line.unit_savings(),
            stock_status,
            stock_label: stock_status.label(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: Price,
}

impl CartView {
    #[must_use]
    pub fn from_state(state: &ShopState) -> Self {
        Self {
            lines: state.cart.iter().map(CartLineView::from).collect(),
            item_count: state.cart_count(),
            subtotal: state.cart_subtotal(),
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update quantity request body. Any integer is accepted and clamped.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// Order summary query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    #[serde(default)]
    pub delivery: DeliveryOption,
    pub discount_code: Option<String>,
}

/// Display the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::from_state(&state.store().snapshot()))
}

/// Add a catalog product to the cart.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product_id = parse_product_id(&request.product_id)?;
    let product = state
        .catalog()
        .get(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let quantity = request.quantity.unwrap_or(1);
    if state.store().add_to_cart(product.to_cart_product(), quantity) {
        add_breadcrumb(
            "cart",
            "Added to cart",
            Some(&[("product_id", product_id.as_str())]),
        );
    }

    Ok(Json(CartView::from_state(&state.store().snapshot())))
}

/// Set a line's quantity (clamped to the allowed range).
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Json<CartView> {
    state
        .store()
        .update_quantity(&ProductId::from(id), request.quantity);
    Json(CartView::from_state(&state.store().snapshot()))
}

/// Remove a line.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Json<CartView> {
    let id = ProductId::from(id);
    if state.store().remove_from_cart(&id) {
        add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", id.as_str())]));
    }
    Json(CartView::from_state(&state.store().snapshot()))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    state.store().clear_cart();
    Json(CartView::from_state(&state.store().snapshot()))
}

/// Move a line to the wishlist. Returns both collections.
#[instrument(skip(state))]
pub async fn move_to_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ShopView> {
    state.store().move_cart_to_wishlist(&ProductId::from(id));
    Json(ShopView::from_state(&state.store().snapshot()))
}

/// Totals for the chosen delivery option, with an optional discount code.
#[instrument(skip(state))]
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Json<OrderSummary> {
    let snapshot = state.store().snapshot();
    Json(OrderSummary::compute(
        snapshot.cart_count(),
        snapshot.cart_subtotal(),
        query.delivery,
        query.discount_code.as_deref(),
    ))
}

/// Validate a product id from a request body.
pub(crate) fn parse_product_id(raw: &str) -> Result<ProductId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("productId is required".to_string()));
    }
    Ok(ProductId::new(trimmed))
}
