//! Static product catalog.
//!
//! The catalog is a collaborator of the store, not part of it: the store
//! never validates against it, and cart lines keep the price captured when
//! they were added. Routes look products up here and hand the store a
//! [`CartProduct`] or [`WishlistItemInput`].

mod data;

use std::cmp::Ordering;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use shopfront_core::{Price, ProductId, StockStatus};

use crate::models::{CartProduct, WishlistItemInput};

/// A product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image: String,
    pub category: String,
    pub rating: f64,
    pub reviews: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock: Option<bool>,
}

impl CatalogProduct {
    /// Whether an original (higher) price is listed.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Whole-number discount percentage against the original price.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?.amount();
        if original.is_zero() || original <= self.price.amount() {
            return None;
        }
        let pct = (original - self.price.amount()) / original * Decimal::ONE_HUNDRED;
        pct.round().to_u32()
    }

    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        StockStatus::from_flags(self.in_stock, self.low_stock)
    }

    /// Product data for adding this product to the cart.
    #[must_use]
    pub fn to_cart_product(&self) -> CartProduct {
        CartProduct {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            original_price: self.original_price,
            image: self.image.clone(),
            category: self.category.clone(),
            in_stock: self.in_stock,
            low_stock: self.low_stock,
        }
    }

    /// Product data for saving this product to the wishlist.
    #[must_use]
    pub fn to_wishlist_input(&self) -> WishlistItemInput {
        WishlistItemInput {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            original_price: self.original_price,
            image: self.image.clone(),
            category: self.category.clone(),
            rating: Some(self.rating),
            reviews: Some(self.reviews),
            in_stock: self.in_stock,
            low_stock: self.low_stock,
        }
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// New arrivals first, otherwise catalog order.
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    /// Highest rated first.
    Rating,
}

/// Search and filter parameters.
///
/// Deserializes from a query string such as
/// `?q=bag&category=bags,totes&inStock=true&sort=price-low`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogQuery {
    /// Case-insensitive substring of the name or category.
    pub q: Option<String>,
    /// Comma-separated list of categories.
    pub category: Option<String>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub in_stock: bool,
    pub on_sale: bool,
    pub min_rating: Option<f64>,
    pub sort: SortOrder,
}

impl CatalogQuery {
    fn needle(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    fn categories(&self) -> Vec<&str> {
        self.category
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// In-memory product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    #[must_use]
    pub const fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn mock() -> Self {
        Self::new(data::mock_products())
    }

    #[must_use]
    pub fn all(&self) -> &[CatalogProduct] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CatalogProduct> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Filter and sort products.
    #[must_use]
    pub fn search(&self, query: &CatalogQuery) -> Vec<&CatalogProduct> {
        let needle = query.needle();
        let categories = query.categories();

        let mut results: Vec<&CatalogProduct> = self
            .products
            .iter()
            .filter(|p| needle.as_deref().is_none_or(|n| p.matches_text(n)))
            .filter(|p| categories.is_empty() || categories.contains(&p.category.as_str()))
            .filter(|p| query.min_price.is_none_or(|min| p.price >= min))
            .filter(|p| query.max_price.is_none_or(|max| p.price <= max))
            .filter(|p| !query.in_stock || p.in_stock == Some(true))
            .filter(|p| !query.on_sale || p.is_on_sale())
            .filter(|p| {
                query
                    .min_rating
                    .filter(|min| *min > 0.0)
                    .is_none_or(|min| p.rating >= min)
            })
            .collect();

        match query.sort {
            SortOrder::Newest => results.sort_by_key(|p| !p.is_new),
            SortOrder::PriceLow => results.sort_by_key(|p| p.price),
            SortOrder::PriceHigh => results.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Rating => results.sort_by(|a, b| compare_rating_desc(a, b)),
        }
        results
    }
}

fn compare_rating_desc(a: &CatalogProduct, b: &CatalogProduct) -> Ordering {
    b.rating.total_cmp(&a.rating)
}
