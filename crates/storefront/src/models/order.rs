//! Placed order records.
//!
//! An order is a snapshot of the cart at the moment of placing it, together
//! with the shipping address, payment and delivery choices, and the totals
//! computed from them. Nothing is charged or fulfilled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{OrderId, Price};

use crate::checkout::{DeliveryOption, OrderSummary};

use super::cart::CartLine;

/// Kind of shipping address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

/// Where the order ships to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(rename = "type", default)]
    pub kind: AddressKind,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingAddress {
    /// Names of required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("street", &self.street),
            ("city", &self.city),
            ("zipCode", &self.zip_code),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Netbanking,
    /// Cash on delivery.
    Cod,
}

/// A placed order, as persisted and shown on the confirmation page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub address: ShippingAddress,
    pub payment: PaymentMethod,
    pub delivery: DeliveryOption,
    pub summary: OrderSummary,
    pub total: Price,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot `items` into an order placed now.
    #[must_use]
    pub fn place(
        items: Vec<CartLine>,
        address: ShippingAddress,
        payment: PaymentMethod,
        delivery: DeliveryOption,
        discount_code: Option<&str>,
    ) -> Self {
        let item_count = items.iter().map(|line| line.quantity.get()).sum();
        let subtotal = items.iter().map(CartLine::line_total).sum();
        let summary = OrderSummary::compute(item_count, subtotal, delivery, discount_code);

        Self {
            id: OrderId::new(uuid::Uuid::new_v4().to_string()),
            items,
            address,
            payment,
            delivery,
            total: summary.total,
            summary,
            placed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use shopfront_core::Quantity;

    use super::*;
    use crate::models::cart::tests::tote;

    pub fn home_address() -> ShippingAddress {
        ShippingAddress {
            kind: AddressKind::Home,
            name: "John Doe".to_string(),
            street: "123 Main Street, Apt 4B".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            country: "United States".to_string(),
        }
    }

    #[test]
    fn test_place_computes_totals_from_items() {
        let items = vec![CartLine::from_product(tote(), Quantity::clamped(3))];
        let order = Order::place(
            items,
            home_address(),
            PaymentMethod::Card,
            DeliveryOption::Express,
            None,
        );

        assert_eq!(order.summary.item_count, 3);
        assert_eq!(order.summary.subtotal, Price::from_whole(267));
        assert_eq!(order.summary.shipping, Price::from_whole(15));
        assert_eq!(order.total, Price::from_cents(30336));
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn test_order_ids_are_unique() {
        let place = || {
            Order::place(
                vec![],
                home_address(),
                PaymentMethod::Cod,
                DeliveryOption::Standard,
                None,
            )
        };
        assert_ne!(place().id, place().id);
    }

    #[test]
    fn test_missing_address_fields() {
        let mut address = home_address();
        assert!(address.missing_fields().is_empty());

        address.street = "  ".to_string();
        address.zip_code = String::new();
        assert_eq!(address.missing_fields(), vec!["street", "zipCode"]);
    }

    #[test]
    fn test_order_serialized_layout() {
        let order = Order::place(
            vec![CartLine::from_product(tote(), Quantity::MIN)],
            home_address(),
            PaymentMethod::Upi,
            DeliveryOption::Standard,
            Some("save10"),
        );

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["address"]["type"], "home");
        assert_eq!(json["address"]["zipCode"], "10001");
        assert_eq!(json["payment"], "upi");
        assert_eq!(json["delivery"], "standard");
        assert_eq!(json["summary"]["appliedCode"], "SAVE10");
        assert!(json["placedAt"].is_string());

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }
}
