//! Shopfront Core - Shared types library.
//!
//! This crate provides the value types shared by all Shopfront components:
//! - `storefront` - Cart/wishlist store, catalog, and JSON API
//! - `integration-tests` - Black-box tests of the storefront
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, quantities, and stock status

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
