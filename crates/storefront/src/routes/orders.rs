//! Order route handlers.
//!
//! Placing an order freezes the cart into an [`Order`], keeps it as the last
//! order, and empties the cart. There is no payment step.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use crate::checkout::DeliveryOption;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::{Order, PaymentMethod, ShippingAddress};
use crate::state::AppState;

/// Place order request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub address: ShippingAddress,
    #[serde(default)]
    pub payment: PaymentMethod,
    #[serde(default)]
    pub delivery: DeliveryOption,
    pub discount_code: Option<String>,
}

/// Place an order from the current cart.
#[instrument(skip(state, request), fields(payment = ?request.payment, delivery = ?request.delivery))]
pub async fn place(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    let missing = request.address.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "address is missing: {}",
            missing.join(", ")
        )));
    }

    let items = state.store().take_cart();
    if items.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_string()));
    }

    let order = Order::place(
        items,
        request.address,
        request.payment,
        request.delivery,
        request.discount_code.as_deref(),
    );
    state.orders().save(&order);

    tracing::info!(order_id = %order.id, total = %order.total, "Order placed");
    add_breadcrumb("order", "Order placed", Some(&[("order_id", order.id.as_str())]));

    Ok((StatusCode::CREATED, Json(order)))
}

/// The most recently placed order.
#[instrument(skip(state))]
pub async fn last(State(state): State<AppState>) -> Result<Json<Order>> {
    state
        .orders()
        .last()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no order has been placed".to_string()))
}
