//! Domain models for the cart/wishlist store.
//!
//! Inputs (`CartProduct`, `WishlistItemInput`) are what callers hand to the
//! store; `CartLine` and `WishlistEntry` are what it keeps and persists.
//! An `Order` is the cart frozen at checkout.

pub mod cart;
pub mod order;
pub mod wishlist;

pub use cart::{CartLine, CartProduct};
pub use order::{AddressKind, Order, PaymentMethod, ShippingAddress};
pub use wishlist::{WishlistEntry, WishlistItemInput};
