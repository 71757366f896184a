//! Cycle-count cart state.
//!
//! DESIGN
//! ======
//! The cart is transient server-side state mirrored here while the panel is
//! open: fetched on open, refetched after a line deletion, emptied on
//! checkout. Concurrent fetches are not guarded; the last response wins.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::CartLineItem;

/// State of the slide-over cart panel.
#[derive(Clone, Debug, Default)]
pub struct CartState {
    pub line_items: Vec<CartLineItem>,
    pub open: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl CartState {
    /// Replace the fetched lines, clearing any stale error.
    pub fn set_lines(&mut self, line_items: Vec<CartLineItem>) {
        self.line_items = line_items;
        self.loading = false;
        self.error = None;
    }

    /// Empty the cart after a successful checkout.
    pub fn clear(&mut self) {
        self.line_items.clear();
        self.loading = false;
        self.error = None;
    }

    /// Number of pending adjustment lines.
    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
