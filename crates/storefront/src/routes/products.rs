//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use tracing::instrument;

use shopfront_core::{ProductId, StockStatus};

use crate::catalog::{CatalogProduct, CatalogQuery};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::ShopState;

/// Product display data, annotated with the shopper's cart and wishlist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: CatalogProduct,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
    pub stock_status: StockStatus,
    pub stock_label: &'static str,
    pub in_cart: bool,
    pub in_wishlist: bool,
}

impl ProductView {
    #[must_use]
    pub fn new(product: &CatalogProduct, shop: &ShopState) -> Self {
        Self {
            product: product.clone(),
            discount_percent: product.discount_percent(),
            stock_status: product.stock_status(),
            stock_label: product.stock_status().label(),
            in_cart: shop.is_in_cart(&product.id),
            in_wishlist: shop.is_in_wishlist(&product.id),
        }
    }
}

/// Product listing response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListView {
    pub products: Vec<ProductView>,
    pub total: usize,
    pub categories: Vec<String>,
}

/// List products matching the query string filters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<ProductListView> {
    let shop = state.store().snapshot();
    let catalog = state.catalog();

    let products: Vec<ProductView> = catalog
        .search(&query)
        .into_iter()
        .map(|product| ProductView::new(product, &shop))
        .collect();

    tracing::debug!(count = products.len(), "Catalog search");

    Json(ProductListView {
        total: products.len(),
        products,
        categories: catalog.categories().into_iter().map(String::from).collect(),
    })
}

/// Display a single product.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ProductView>> {
    let id = ProductId::from(id);
    let product = state
        .catalog()
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ProductView::new(product, &state.store().snapshot())))
}
