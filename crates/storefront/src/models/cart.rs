//! Cart line types.
//!
//! Field names serialize in camelCase (`originalPrice`, `inStock`) to match
//! the persisted local-storage layout.

use serde::{Deserialize, Serialize};

use shopfront_core::{Price, ProductId, Quantity, StockStatus};

use super::wishlist::WishlistEntry;

/// Product data passed to `add_to_cart`.
///
/// This is a cart line without its quantity. The price is captured at the
/// moment of adding and never re-fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock: Option<bool>,
}

/// One product's quantity entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image: String,
    pub category: String,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock: Option<bool>,
}

impl CartLine {
    /// Build a new line from product data.
    #[must_use]
    pub fn from_product(product: CartProduct, quantity: Quantity) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            original_price: product.original_price,
            image: product.image,
            category: product.category,
            quantity,
            in_stock: product.in_stock,
            low_stock: product.low_stock,
        }
    }

    /// Build a single-unit line from a saved wishlist entry.
    #[must_use]
    pub fn from_wishlist_entry(entry: &WishlistEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            price: entry.price,
            original_price: entry.original_price,
            image: entry.image.clone(),
            category: entry.category.clone(),
            quantity: Quantity::MIN,
            in_stock: entry.in_stock,
            low_stock: entry.low_stock,
        }
    }

    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }

    /// Amount saved per unit against the original price, if discounted.
    #[must_use]
    pub fn unit_savings(&self) -> Option<Price> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original.saturating_sub(self.price))
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

    pub fn tote() -> CartProduct {
        CartProduct {
            id: ProductId::new("1"),
            name: "Handwoven Leather Tote Bag".to_string(),
            price: Price::from_whole(89),
            original_price: Some(Price::from_whole(120)),
            image: "/placeholder.svg?text=Leather+Tote".to_string(),
            category: "bags".to_string(),
            in_stock: Some(true),
            low_stock: None,
        }
    }

    #[test]
    fn test_line_total() {
        let line = CartLine::from_product(tote(), Quantity::clamped(3));
        assert_eq!(line.line_total(), Price::from_whole(267));
    }

    #[test]
    fn test_unit_savings() {
        let line = CartLine::from_product(tote(), Quantity::MIN);
        assert_eq!(line.unit_savings(), Some(Price::from_whole(31)));

        let mut full_price = tote();
        full_price.original_price = None;
        let line = CartLine::from_product(full_price, Quantity::MIN);
        assert_eq!(line.unit_savings(), None);
    }

    #[test]
    fn test_serialized_layout_is_camel_case() {
        let line = CartLine::from_product(tote(), Quantity::clamped(2));
        let json = serde_json::to_value(&line).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["originalPrice"], "120");
        assert_eq!(json["inStock"], true);
        assert!(json.get("lowStock").is_none());
    }

    #[test]
    fn test_deserialize_numeric_prices() {
        let json = r#"{
            "id": "3",
            "name": "Bohemian Crossbody Bag",
            "price": 65,
            "originalPrice": 85,
            "image": "/crossbody.svg",
            "category": "bags",
            "quantity": 2,
            "lowStock": true
        }"#;
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.price, Price::from_whole(65));
        assert_eq!(line.quantity.get(), 2);
        assert_eq!(line.in_stock, None);
        assert_eq!(line.stock_status(), StockStatus::LowStock);
    }
}
