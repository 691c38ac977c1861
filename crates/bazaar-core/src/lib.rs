//! # bazaar-core: Pure Business Logic for Bazaar
//!
//! This crate is the **heart** of Bazaar. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Bazaar Architecture                         │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                    CLI Shell (apps/cli)                   │  │
//! │  │   CSV load ──► menu loop ──► table/receipt rendering      │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │              ★ bazaar-core (THIS CRATE) ★                 │  │
//! │  │                                                           │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────────┐    │  │
//! │  │  │ catalog │ │  sort   │ │  cart   │ │   history    │    │  │
//! │  │  │ Records │ │ 2 algos │ │  Lines  │ │  Purchases   │    │  │
//! │  │  │ Search  │ │ SortKey │ │ Totals  │ │  Receipts    │    │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────────┘    │  │
//! │  │              all owned by one Session object              │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO TERMINAL • NO FILES • PURE FUNCTIONS        │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SortKey)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`sort`] - The two comparator-driven sorting algorithms
//! - [`catalog`] - The record store: search and reorder
//! - [`cart`] - Cart lines with add/merge semantics
//! - [`history`] - Purchase snapshots and the session ledger
//! - [`session`] - The engine object shells drive
//! - [`error`] - Domain error types
//! - [`validation`] - Record field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic logic, no hidden state
//! 2. **No I/O**: file, terminal, and network access are FORBIDDEN here
//! 3. **Integer Money**: prices are cents (i64), never floats
//! 4. **Explicit Errors**: typed outcomes, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::session::Session;
//! use bazaar_core::types::{Product, SortKey};
//!
//! let records = vec![
//!     Product::parse_row("Pen,Office,1.50,4.0").unwrap(),
//!     Product::parse_row("Pencil,Office,0.50,4.5").unwrap(),
//! ];
//! let mut session = Session::new(records);
//!
//! session.sort_by(SortKey::PriceAsc);
//! session.add_to_cart("Pen").unwrap();
//! session.add_to_cart("Pen").unwrap();
//!
//! let purchase = session.checkout().unwrap();
//! assert_eq!(purchase.total.to_string(), "$3.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod history;
pub mod money;
pub mod session;
pub mod sort;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Session` instead of
// `use bazaar_core::session::Session`

pub use cart::{Cart, CartLine, CartView};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use history::{Purchase, PurchaseHistory};
pub use money::Money;
pub use session::Session;
pub use types::{Product, SortKey};
