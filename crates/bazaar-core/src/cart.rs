//! # Cart
//!
//! The transient shopping cart: (product, quantity) aggregates with
//! add/merge semantics.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                           │
//! │                                                                 │
//! │  add(product), not in cart ──► new line, quantity = 1           │
//! │                                                                 │
//! │  add(product), in cart ──────► that line's quantity += 1        │
//! │                                (never a duplicate line)         │
//! │                                                                 │
//! │  view ───────────────────────► lines + subtotals + grand total  │
//! │                                                                 │
//! │  checkout (session) ─────────► snapshot lines, then clear()     │
//! │                                                                 │
//! │  There is deliberately NO remove / decrement operation.         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per distinct product name
//! - Every line's quantity is ≥ 1
//! - Lines hold frozen copies of catalog records; later catalog
//!   reordering never touches them

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One aggregated (product, quantity) entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Frozen copy of the catalog record at the time of first add.
    pub product: Product,

    /// How many units of this product are in the cart. Always ≥ 1.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line for a product's first add.
    pub fn new(product: Product) -> Self {
        CartLine {
            product,
            quantity: 1,
        }
    }

    /// Line subtotal: unit price × quantity.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The active cart. One per session; cleared wholesale by checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product.
    ///
    /// If the product (by name) is already in the cart, its line's
    /// quantity goes up by exactly 1; otherwise a new line with
    /// quantity 1 is appended. Returns a copy of the affected line.
    pub fn add(&mut self, product: &Product) -> CartLine {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product.name == product.name)
        {
            line.quantity += 1;
            return line.clone();
        }

        let line = CartLine::new(product.clone());
        self.lines.push(line.clone());
        line
    }

    /// The lines in add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (not total units).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Grand total: Σ line subtotals.
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.subtotal()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes all lines. Used only by checkout; there is no partial
    /// clear.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Cart View
// =============================================================================

/// A read-only rendering of the cart: lines plus grand total.
///
/// The shell turns this into the fixed-width cart table; checkout
/// reuses the same shape for the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: Money,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            lines: cart.lines.clone(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(name: &str, cents: i64) -> Product {
        Product {
            name: name.to_string(),
            category: "Office".to_string(),
            price: Money::from_cents(cents),
            rating: 4.0,
        }
    }

    #[test]
    fn test_add_new_product_creates_line_with_quantity_one() {
        let mut cart = Cart::new();
        let line = cart.add(&test_product("Pen", 150));

        assert_eq!(line.quantity, 1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total(), Money::from_cents(150));
    }

    #[test]
    fn test_add_same_product_merges_into_one_line() {
        let mut cart = Cart::new();
        let pen = test_product("Pen", 150);

        cart.add(&pen);
        let line = cart.add(&pen);

        // No duplicate line; quantity incremented by exactly 1
        assert_eq!(cart.line_count(), 1);
        assert_eq!(line.quantity, 2);
        assert_eq!(cart.total(), Money::from_cents(300));
    }

    #[test]
    fn test_distinct_products_get_distinct_lines() {
        let mut cart = Cart::new();
        cart.add(&test_product("Pen", 150));
        cart.add(&test_product("Pencil", 50));

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total(), Money::from_cents(200));
    }

    #[test]
    fn test_line_subtotal() {
        let mut line = CartLine::new(test_product("Pen", 150));
        line.quantity = 3;
        assert_eq!(line.subtotal(), Money::from_cents(450));
    }

    #[test]
    fn test_cart_lines_hold_frozen_copies() {
        let mut cart = Cart::new();
        let mut pen = test_product("Pen", 150);
        cart.add(&pen);

        // Mutating the caller's record does not reach into the cart
        pen.price = Money::from_cents(9999);
        assert_eq!(cart.lines()[0].product.price, Money::from_cents(150));
    }

    #[test]
    fn test_view_captures_lines_and_total() {
        let mut cart = Cart::new();
        cart.add(&test_product("Pen", 150));
        cart.add(&test_product("Pen", 150));
        cart.add(&test_product("Pencil", 50));

        let view = CartView::from(&cart);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.total, Money::from_cents(350));
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add(&test_product("Pen", 150));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }
}
