//! The cart and wishlist collections and their transitions.
//!
//! Every transition is a total function over the current state: unknown ids
//! turn into no-ops rather than errors. Each one returns `true` when it
//! changed the state, which is what drives persistence and subscriber
//! notification in [`ShopStore`](super::ShopStore).

use serde::{Deserialize, Serialize};

use shopfront_core::{Price, ProductId, Quantity};

use crate::models::{CartLine, CartProduct, WishlistEntry, WishlistItemInput};

/// Cart lines and wishlist entries, each in insertion order and unique by id.
///
/// This is also the persisted record: `{"cart": [...], "wishlist": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopState {
    #[serde(default)]
    pub cart: Vec<CartLine>,
    #[serde(default)]
    pub wishlist: Vec<WishlistEntry>,
}

impl ShopState {
    // =========================================================================
    // Cart
    // =========================================================================

    /// Add `quantity` units of a product.
    ///
    /// An existing line is incremented (saturating at [`Quantity::MAX`]);
    /// otherwise a new line is appended with `quantity` clamped into range.
    pub fn add_to_cart(&mut self, product: CartProduct, quantity: u32) -> bool {
        if let Some(line) = self.cart_line_mut(&product.id) {
            let next = line.quantity.saturating_add(quantity);
            let changed = next != line.quantity;
            line.quantity = next;
            return changed;
        }

        let quantity = Quantity::clamped(i64::from(quantity));
        self.cart.push(CartLine::from_product(product, quantity));
        true
    }

    /// Set the quantity of a line, clamped into `[1, 10]`.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        let Some(line) = self.cart_line_mut(id) else {
            return false;
        };
        let next = Quantity::clamped(quantity);
        let changed = next != line.quantity;
        line.quantity = next;
        changed
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let before = self.cart.len();
        self.cart.retain(|line| &line.id != id);
        self.cart.len() != before
    }

    pub fn clear_cart(&mut self) -> bool {
        if self.cart.is_empty() {
            return false;
        }
        self.cart.clear();
        true
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Save a product. If the id is already saved the first copy is kept.
    pub fn add_to_wishlist(&mut self, input: WishlistItemInput) -> bool {
        if self.is_in_wishlist(&input.id) {
            return false;
        }
        self.wishlist.push(WishlistEntry::from_input(input));
        true
    }

    pub fn remove_from_wishlist(&mut self, id: &ProductId) -> bool {
        let before = self.wishlist.len();
        self.wishlist.retain(|entry| &entry.id != id);
        self.wishlist.len() != before
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// Remove the cart line and save it to the wishlist.
    ///
    /// If the wishlist already holds the id, the wishlist is left as is and
    /// the cart line is still removed.
    pub fn move_cart_to_wishlist(&mut self, id: &ProductId) -> bool {
        let Some(index) = self.cart.iter().position(|line| &line.id == id) else {
            return false;
        };
        let line = self.cart.remove(index);
        if !self.is_in_wishlist(id) {
            self.wishlist.push(WishlistEntry::from_cart_line(&line));
        }
        true
    }

    /// Remove the wishlist entry and put one unit of it in the cart.
    ///
    /// An existing cart line is incremented by one (saturating at
    /// [`Quantity::MAX`]) instead of duplicated.
    pub fn move_wishlist_to_cart(&mut self, id: &ProductId) -> bool {
        let Some(index) = self.wishlist.iter().position(|entry| &entry.id == id) else {
            return false;
        };
        let entry = self.wishlist.remove(index);
        if let Some(line) = self.cart_line_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.cart.push(CartLine::from_wishlist_entry(&entry));
        }
        true
    }

    // =========================================================================
    // Derived reads
    // =========================================================================

    /// Total number of units across all lines.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|line| line.quantity.get()).sum()
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn cart_subtotal(&self) -> Price {
        self.cart.iter().map(CartLine::line_total).sum()
    }

    #[must_use]
    pub fn cart_line(&self, id: &ProductId) -> Option<&CartLine> {
        self.cart.iter().find(|line| &line.id == id)
    }

    #[must_use]
    pub fn wishlist_entry(&self, id: &ProductId) -> Option<&WishlistEntry> {
        self.wishlist.iter().find(|entry| &entry.id == id)
    }

    #[must_use]
    pub fn is_in_cart(&self, id: &ProductId) -> bool {
        self.cart_line(id).is_some()
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist_entry(id).is_some()
    }

    fn cart_line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.cart.iter_mut().find(|line| &line.id == id)
    }
}
