//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod quantity;
pub mod status;

pub use id::{OrderId, ProductId};
pub use price::{Price, PriceError};
pub use quantity::Quantity;
pub use status::StockStatus;
