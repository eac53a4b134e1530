//! Order summary shown alongside the cart and at checkout.
//!
//! Shipping, delivery options, tax, and discount codes are fixed demo rules;
//! nothing here talks to a payment or pricing service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopfront_core::Price;

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: u32 = 75;

/// Flat shipping charge below the threshold.
pub const FLAT_SHIPPING: u32 = 10;

/// Express delivery charge, regardless of subtotal.
pub const EXPRESS_SHIPPING: u32 = 15;

/// Sales tax rate applied to the subtotal (8%).
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// How the order is shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    /// 5-7 business days; free at or above the threshold.
    #[default]
    Standard,
    /// 2-3 business days; always charged.
    Express,
}

impl DeliveryOption {
    /// Shipping charge for this option at the given subtotal.
    #[must_use]
    pub fn shipping(self, subtotal: Price) -> Price {
        match self {
            Self::Standard if subtotal >= Price::from_whole(FREE_SHIPPING_THRESHOLD) => Price::ZERO,
            Self::Standard => Price::from_whole(FLAT_SHIPPING),
            Self::Express => Price::from_whole(EXPRESS_SHIPPING),
        }
    }
}

/// A recognised discount code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountCode {
    /// 10% off the subtotal.
    Save10,
    /// 20% off the subtotal.
    Welcome20,
    /// Waives the shipping charge.
    #[serde(rename = "FREESHIP")]
    FreeShip,
}

impl DiscountCode {
    /// Parse a code, ignoring case and surrounding whitespace.
    ///
    /// Unknown codes return `None`.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "SAVE10" => Some(Self::Save10),
            "WELCOME20" => Some(Self::Welcome20),
            "FREESHIP" => Some(Self::FreeShip),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Save10 => "SAVE10",
            Self::Welcome20 => "WELCOME20",
            Self::FreeShip => "FREESHIP",
        }
    }

    /// Amount taken off for the given subtotal and shipping charge.
    #[must_use]
    pub fn discount(self, subtotal: Price, shipping: Price) -> Price {
        match self {
            Self::Save10 => subtotal.scaled(Decimal::new(1, 1)),
            Self::Welcome20 => subtotal.scaled(Decimal::new(2, 1)),
            Self::FreeShip => shipping,
        }
    }
}

/// Cart totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub item_count: u32,
    pub subtotal: Price,
    pub delivery: DeliveryOption,
    pub shipping: Price,
    pub tax: Price,
    pub discount: Price,
    pub applied_code: Option<DiscountCode>,
    pub total: Price,
    /// How much more to spend for free shipping (zero once qualified).
    pub free_shipping_remaining: Price,
}

impl OrderSummary {
    /// Compute totals for a cart.
    ///
    /// `total = subtotal + shipping + tax - discount`, floored at zero.
    #[must_use]
    pub fn compute(
        item_count: u32,
        subtotal: Price,
        delivery: DeliveryOption,
        discount_code: Option<&str>,
    ) -> Self {
        let threshold = Price::from_whole(FREE_SHIPPING_THRESHOLD);
        let shipping = delivery.shipping(subtotal);
        let tax = subtotal.scaled(tax_rate());

        let applied_code = discount_code.and_then(DiscountCode::parse);
        let discount = applied_code.map_or(Price::ZERO, |code| code.discount(subtotal, shipping));

        let total = (subtotal + shipping + tax).saturating_sub(discount);

        Self {
            item_count,
            subtotal,
            delivery,
            shipping,
            tax,
            discount,
            applied_code,
            total,
            free_shipping_remaining: threshold.saturating_sub(subtotal),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_free_shipping_over_threshold() {
        let summary = OrderSummary::compute(3, Price::from_whole(267), DeliveryOption::Standard, None);
        assert_eq!(summary.shipping, Price::ZERO);
        assert_eq!(summary.tax, Price::from_cents(2136));
        assert_eq!(summary.total, Price::from_cents(28836));
        assert_eq!(summary.free_shipping_remaining, Price::ZERO);
        assert_eq!(summary.applied_code, None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let summary = OrderSummary::compute(1, Price::from_whole(75), DeliveryOption::Standard, None);
        assert_eq!(summary.shipping, Price::ZERO);
    }

    #[test]
    fn test_flat_shipping_under_threshold() {
        let summary = OrderSummary::compute(1, Price::from_whole(45), DeliveryOption::Standard, None);
        assert_eq!(summary.shipping, Price::from_whole(10));
        assert_eq!(summary.free_shipping_remaining, Price::from_whole(30));
        // 45 + 10 + 3.60
        assert_eq!(summary.total, Price::from_cents(5860));
    }

    #[test]
    fn test_freeship_code_waives_shipping() {
        let summary = OrderSummary::compute(1, Price::from_whole(45), DeliveryOption::Standard, Some(" freeship "));
        assert_eq!(summary.applied_code, Some(DiscountCode::FreeShip));
        assert_eq!(summary.discount, Price::from_whole(10));
        assert_eq!(summary.total, Price::from_cents(4860));
    }

    #[test]
    fn test_percentage_codes() {
        let summary = OrderSummary::compute(3, Price::from_whole(267), DeliveryOption::Standard, Some("SAVE10"));
        assert_eq!(summary.discount, Price::from_cents(2670));

        let summary = OrderSummary::compute(3, Price::from_whole(267), DeliveryOption::Standard, Some("welcome20"));
        assert_eq!(summary.discount, Price::from_cents(5340));
    }

    #[test]
    fn test_unknown_code_gives_no_discount() {
        let summary = OrderSummary::compute(1, Price::from_whole(45), DeliveryOption::Standard, Some("BOGUS"));
        assert_eq!(summary.applied_code, None);
        assert_eq!(summary.discount, Price::ZERO);

        let summary = OrderSummary::compute(1, Price::from_whole(45), DeliveryOption::Standard, Some("   "));
        assert_eq!(summary.applied_code, None);
    }

    #[test]
    fn test_empty_cart() {
        let summary = OrderSummary::compute(0, Price::ZERO, DeliveryOption::Standard, Some("FREESHIP"));
        assert_eq!(summary.shipping, Price::from_whole(10));
        assert_eq!(summary.total, Price::ZERO);
    }

    #[test]
    fn test_express_delivery_is_always_charged() {
        let summary =
            OrderSummary::compute(3, Price::from_whole(267), DeliveryOption::Express, None);
        assert_eq!(summary.shipping, Price::from_whole(15));
        // 267 + 15 + 21.36
        assert_eq!(summary.total, Price::from_cents(30336));

        let summary = OrderSummary::compute(
            1,
            Price::from_whole(45),
            DeliveryOption::Express,
            Some("FREESHIP"),
        );
        assert_eq!(summary.discount, Price::from_whole(15));
    }

    #[test]
    fn test_delivery_option_serde() {
        assert_eq!(
            serde_json::to_string(&DeliveryOption::Express).unwrap(),
            r#""express""#
        );
        let parsed: DeliveryOption = serde_json::from_str(r#""standard""#).unwrap();
        assert_eq!(parsed, DeliveryOption::Standard);
    }

    #[test]
    fn test_code_round_trip() {
        for code in [
            DiscountCode::Save10,
            DiscountCode::Welcome20,
            DiscountCode::FreeShip,
        ] {
            assert_eq!(DiscountCode::parse(code.as_str()), Some(code));
        }
    }
}
