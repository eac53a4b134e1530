//! Stock status derived from the informational stock flags on products.

use serde::{Deserialize, Serialize};

/// Availability shown next to a product.
///
/// Purely informational: nothing checks it against real inventory, and an
/// out-of-stock product can still be added to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Derive the status from the optional `inStock` / `lowStock` flags.
    ///
    /// Missing flags are treated as "in stock, not low".
    #[must_use]
    pub const fn from_flags(in_stock: Option<bool>, low_stock: Option<bool>) -> Self {
        match (in_stock, low_stock) {
            (Some(false), _) => Self::OutOfStock,
            (_, Some(true)) => Self::LowStock,
            _ => Self::InStock,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In stock",
            Self::LowStock => "Low stock",
            Self::OutOfStock => "Out of stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(StockStatus::from_flags(None, None), StockStatus::InStock);
        assert_eq!(
            StockStatus::from_flags(Some(true), Some(true)),
            StockStatus::LowStock
        );
        assert_eq!(
            StockStatus::from_flags(Some(false), Some(true)),
            StockStatus::OutOfStock
        );
        assert_eq!(StockStatus::from_flags(None, Some(false)), StockStatus::InStock);
    }

    #[test]
    fn test_label() {
        assert_eq!(StockStatus::OutOfStock.label(), "Out of stock");
    }
}
