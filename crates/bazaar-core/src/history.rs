//! # Checkout History
//!
//! Immutable purchase snapshots and the session's purchase ledger.
//!
//! ## Snapshot Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Checkout Snapshot                           │
//! │                                                                 │
//! │  Live Cart                        Purchase (frozen)             │
//! │  ┌──────────────────┐   deep     ┌──────────────────────────┐   │
//! │  │ Pen      × 2     │   copy     │ id, receipt number       │   │
//! │  │ Pencil   × 1     │ ─────────► │ items: Pen ×2, Pencil ×1 │   │
//! │  └──────────────────┘            │ completed_at, total      │   │
//! │          │                       └──────────────────────────┘   │
//! │          ▼                                  │                   │
//! │     cart.clear()                            ▼                   │
//! │                                  appended to the ledger,        │
//! │                                  never edited or removed        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A purchase shares nothing with the live cart: later cart activity
//! cannot reach back into a completed purchase.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{Cart, CartLine};
use crate::money::Money;

// =============================================================================
// Purchase
// =============================================================================

/// An immutable snapshot of one completed checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable receipt number, e.g. `260824-143015-0042`.
    pub receipt_number: String,

    /// Deep copy of the cart lines at checkout, in add order.
    pub items: Vec<CartLine>,

    /// Local wall-clock time the checkout completed.
    pub completed_at: DateTime<Local>,

    /// Grand total: Σ price × quantity over `items`.
    pub total: Money,
}

impl Purchase {
    /// Snapshots a non-empty cart into a purchase.
    ///
    /// The caller (the session's checkout) is responsible for checking
    /// emptiness first and clearing the cart afterwards; this function
    /// only captures.
    pub fn snapshot(cart: &Cart) -> Self {
        let completed_at = Local::now();
        Purchase {
            id: Uuid::new_v4().to_string(),
            receipt_number: generate_receipt_number(completed_at),
            items: cart.lines().to_vec(),
            completed_at,
            total: cart.total(),
        }
    }

    /// The checkout time at second precision, for receipt headers.
    pub fn timestamp(&self) -> String {
        self.completed_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Generates a receipt number from the checkout instant plus a
/// sub-second suffix.
///
/// Derived from the same instant as `completed_at`, so the number's
/// date/time part always agrees with the displayed timestamp.
fn generate_receipt_number(at: DateTime<Local>) -> String {
    let suffix: u16 = (at.timestamp_subsec_nanos() % 10000) as u16;
    format!("{}-{:04}", at.format("%y%m%d-%H%M%S"), suffix)
}

// =============================================================================
// Purchase History
// =============================================================================

/// The append-only ledger of completed purchases, in checkout order.
///
/// Lives for the session only; durability across restarts is out of
/// scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseHistory {
    purchases: Vec<Purchase>,
}

impl PurchaseHistory {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        PurchaseHistory {
            purchases: Vec::new(),
        }
    }

    /// Appends a completed purchase. The only mutation the ledger has.
    pub fn record(&mut self, purchase: Purchase) {
        self.purchases.push(purchase);
    }

    /// All purchases in insertion order.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    /// Number of completed purchases.
    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    /// Whether any purchase has completed this session.
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn test_product(name: &str, cents: i64) -> Product {
        Product {
            name: name.to_string(),
            category: "Office".to_string(),
            price: Money::from_cents(cents),
            rating: 4.0,
        }
    }

    #[test]
    fn test_snapshot_captures_lines_and_total() {
        let mut cart = Cart::new();
        cart.add(&test_product("Pen", 150));
        cart.add(&test_product("Pen", 150));

        let purchase = Purchase::snapshot(&cart);
        assert_eq!(purchase.items.len(), 1);
        assert_eq!(purchase.items[0].quantity, 2);
        assert_eq!(purchase.total, Money::from_cents(300));
    }

    #[test]
    fn test_snapshot_is_independent_of_live_cart() {
        let mut cart = Cart::new();
        cart.add(&test_product("Pen", 150));

        let purchase = Purchase::snapshot(&cart);
        cart.clear();
        cart.add(&test_product("Mug", 600));

        // The snapshot kept its own copy
        assert_eq!(purchase.items.len(), 1);
        assert_eq!(purchase.items[0].product.name, "Pen");
        assert_eq!(purchase.total, Money::from_cents(150));
    }

    #[test]
    fn test_timestamp_has_second_precision() {
        let cart = {
            let mut c = Cart::new();
            c.add(&test_product("Pen", 150));
            c
        };
        let purchase = Purchase::snapshot(&cart);

        // "YYYY-MM-DD HH:MM:SS"
        let ts = purchase.timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(ts.as_bytes()[4], b'-');
        assert_eq!(ts.as_bytes()[10], b' ');
        assert_eq!(ts.as_bytes()[13], b':');
    }

    #[test]
    fn test_receipt_number_agrees_with_completed_at() {
        let mut cart = Cart::new();
        cart.add(&test_product("Pen", 150));

        let purchase = Purchase::snapshot(&cart);

        // Same instant feeds both, so the date/time part matches even
        // across a midnight or second boundary
        let expected_prefix = purchase.completed_at.format("%y%m%d-%H%M%S").to_string();
        assert!(purchase.receipt_number.starts_with(&expected_prefix));
        // Prefix plus "-NNNN" suffix
        assert_eq!(
            purchase.receipt_number.len(),
            expected_prefix.len() + 5
        );
    }

    #[test]
    fn test_history_preserves_insertion_order() {
        let mut history = PurchaseHistory::new();
        assert!(history.is_empty());

        let mut cart = Cart::new();
        cart.add(&test_product("Pen", 150));
        history.record(Purchase::snapshot(&cart));

        cart.add(&test_product("Pencil", 50));
        history.record(Purchase::snapshot(&cart));

        assert_eq!(history.len(), 2);
        assert_eq!(history.purchases()[0].total, Money::from_cents(150));
        assert_eq!(history.purchases()[1].total, Money::from_cents(200));
    }
}
