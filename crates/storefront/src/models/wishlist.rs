//! Wishlist entry types.

use serde::{Deserialize, Serialize};

use shopfront_core::{Price, ProductId, StockStatus};

use super::cart::CartLine;

/// Product data passed to `add_to_wishlist`.
///
/// `rating` and `reviews` may be omitted and default to zero on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemInput {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock: Option<bool>,
}

/// One product saved for later. Quantity is implicitly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock: Option<bool>,
}

impl WishlistEntry {
    /// Build an entry from input, defaulting missing rating/reviews to zero.
    #[must_use]
    pub fn from_input(input: WishlistItemInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
            price: input.price,
            original_price: input.original_price,
            image: input.image,
            category: input.category,
            rating: input.rating.unwrap_or(0.0),
            reviews: input.reviews.unwrap_or(0),
            in_stock: input.in_stock,
            low_stock: input.low_stock,
        }
    }

    /// Build an entry from a cart line. Rating and reviews are not known to
    /// the cart, so they reset to zero.
    #[must_use]
    pub fn from_cart_line(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            price: line.price,
            original_price: line.original_price,
            image: line.image.clone(),
            category: line.category.clone(),
            rating: 0.0,
            reviews: 0,
            in_stock: line.in_stock,
            low_stock: line.low_stock,
        }
    }

    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        StockStatus::from_flags(self.in_stock, self.low_stock)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    pub fn painting() -> WishlistItemInput {
        WishlistItemInput {
            id: ProductId::new("2"),
            name: "Abstract Canvas Painting".to_string(),
            price: Price::from_whole(150),
            original_price: None,
            image: "/placeholder.svg?text=Abstract+Art".to_string(),
            category: "paintings".to_string(),
            rating: Some(4.9),
            reviews: Some(18),
            in_stock: Some(true),
            low_stock: None,
        }
    }

    #[test]
    fn test_from_input_defaults_rating_and_reviews() {
        let mut input = painting();
        input.rating = None;
        input.reviews = None;

        let entry = WishlistEntry::from_input(input);
        assert!(entry.rating.abs() < f64::EPSILON);
        assert_eq!(entry.reviews, 0);
    }

    #[test]
    fn test_from_input_keeps_rating() {
        let entry = WishlistEntry::from_input(painting());
        assert!((entry.rating - 4.9).abs() < f64::EPSILON);
        assert_eq!(entry.reviews, 18);
    }

    #[test]
    fn test_deserialize_without_rating() {
        let json = r#"{"id":"9","name":"Mug","price":"12.50","image":"/m.svg","category":"home"}"#;
        let entry: WishlistEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.reviews, 0);
        assert_eq!(entry.price, Price::from_cents(1250));
    }
}
