//! # Session
//!
//! One user's catalog session: the record store, the active cart, the
//! search log, and the purchase ledger, behind a single engine object.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Session                                 │
//! │                                                                 │
//! │  Catalog ──► search(query) / sort_by(key)   (read or reorder)   │
//! │     │                                                           │
//! │     ▼                                                           │
//! │  add_to_cart(name) ──► Cart (merge by name)                     │
//! │     │                                                           │
//! │     ▼                                                           │
//! │  checkout() ──► Purchase appended to history, cart cleared      │
//! │                                                                 │
//! │  Cart lifecycle: Empty ──add──► Populated ──checkout──► Empty   │
//! │  (no transition leaves the cart partially checked out)          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded by design: one session per user, no shared state.
//! If a concurrent host ever embeds this, the catalog is safe for
//! shared reads after load; the cart and ledger need an exclusive
//! owner per session.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cart::{Cart, CartLine, CartView};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::history::{Purchase, PurchaseHistory};
use crate::money::Money;
use crate::types::{Product, SortKey};

// =============================================================================
// Session
// =============================================================================

/// The engine object a shell drives. Owns every mutable collection for
/// the run; nothing here is process-global.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    history: PurchaseHistory,
    search_log: Vec<String>,
}

impl Session {
    /// Creates a session over an already-parsed record sequence.
    pub fn new(records: Vec<Product>) -> Self {
        info!(count = records.len(), "catalog loaded");
        Session {
            catalog: Catalog::new(records),
            cart: Cart::new(),
            history: PurchaseHistory::new(),
            search_log: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Catalog reads
    // -------------------------------------------------------------------------

    /// All records in current display order.
    pub fn products(&self) -> &[Product] {
        self.catalog.records()
    }

    /// Substring search over name and category, in catalog order.
    ///
    /// Every query is appended to the session's search log, raw and
    /// unconditionally, even when it matches nothing.
    pub fn search(&mut self, query: &str) -> Vec<Product> {
        self.search_log.push(query.to_string());
        let matches = self.catalog.search(query);
        debug!(query, count = matches.len(), "search");
        matches
    }

    /// Raw queries in issue order. Never deduplicated or trimmed;
    /// unbounded for the session.
    pub fn search_log(&self) -> &[String] {
        &self.search_log
    }

    /// The distinct categories, in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Records in any of the selected categories, in catalog order.
    ///
    /// Unlike [`Session::search`], filters are not queries and do not
    /// touch the search log.
    pub fn filter_by_categories(&self, selected: &[String]) -> Vec<Product> {
        let matches = self.catalog.filter_by_categories(selected);
        debug!(selected = selected.len(), count = matches.len(), "category filter");
        matches
    }

    /// Records inside the inclusive price range with at least the
    /// given rating, in catalog order.
    pub fn filter_by_price_and_rating(
        &self,
        min_price: Money,
        max_price: Money,
        min_rating: f64,
    ) -> Vec<Product> {
        let matches = self
            .catalog
            .filter_by_price_and_rating(min_price, max_price, min_rating);
        debug!(count = matches.len(), "price/rating filter");
        matches
    }

    // -------------------------------------------------------------------------
    // Catalog reorder
    // -------------------------------------------------------------------------

    /// Reorders the catalog in place; the order persists for the rest
    /// of the session.
    pub fn sort_by(&mut self, key: SortKey) {
        self.catalog.sort_by(key);
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Adds one unit of the named product to the cart.
    ///
    /// The name must match a catalog record exactly; on a miss nothing
    /// mutates and [`CoreError::ProductNotFound`] comes back. A repeat
    /// add merges into the existing line.
    pub fn add_to_cart(&mut self, name: &str) -> CoreResult<CartLine> {
        let product = self
            .catalog
            .find_by_name(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?
            .clone();

        let line = self.cart.add(&product);
        debug!(
            product = %line.product.name,
            quantity = line.quantity,
            "added to cart"
        );
        Ok(line)
    }

    /// The cart's lines and grand total.
    ///
    /// An empty cart is a distinct state, not an empty listing:
    /// [`CoreError::EmptyCart`] comes back instead of a view.
    pub fn view_cart(&self) -> CoreResult<CartView> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        Ok(CartView::from(&self.cart))
    }

    // -------------------------------------------------------------------------
    // Checkout / history
    // -------------------------------------------------------------------------

    /// Drains the cart into a new [`Purchase`] on the ledger.
    ///
    /// All-or-nothing: snapshot every line, record the purchase, clear
    /// the cart. An empty cart checks out to [`CoreError::EmptyCart`]
    /// with no mutation at all.
    pub fn checkout(&mut self) -> CoreResult<Purchase> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let purchase = Purchase::snapshot(&self.cart);
        self.cart.clear();
        self.history.record(purchase.clone());

        info!(
            receipt = %purchase.receipt_number,
            total = %purchase.total,
            items = purchase.items.len(),
            "checkout complete"
        );
        Ok(purchase)
    }

    /// Completed purchases in checkout order.
    pub fn history(&self) -> &[Purchase] {
        self.history.purchases()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
