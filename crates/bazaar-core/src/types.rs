//! # Domain Types
//!
//! Core domain types used throughout Bazaar.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────┐    │
//! │  │    Product     │  │    CartLine    │  │    Purchase    │    │
//! │  │  ────────────  │  │  (cart module) │  │ (history mod.) │    │
//! │  │  name (key)    │  │  product       │  │  id (UUID)     │    │
//! │  │  category      │  │  quantity      │  │  receipt_number│    │
//! │  │  price (Money) │  └────────────────┘  │  items, total  │    │
//! │  │  rating (f64)  │                      │  completed_at  │    │
//! │  └────────────────┘  ┌────────────────┐  └────────────────┘    │
//! │                      │    SortKey     │                        │
//! │                      │  PriceAsc ...  │                        │
//! │                      └────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product's `name` is its natural key: cart aggregation and
//! exact-name lookup both key on it. Catalog records are frozen after
//! load; cart operations work on independent copies.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{parse_price, parse_rating, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A catalog record, immutable for the life of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name. Natural key for cart aggregation and lookup.
    pub name: String,

    /// Category label, matched by substring search alongside the name.
    pub category: String,

    /// Unit price.
    pub price: Money,

    /// Review score. Not money; stays floating point.
    pub rating: f64,
}

impl Product {
    /// Parses one `name,category,price[,rating]` source row.
    ///
    /// ## Behavior
    /// - A missing rating field defaults to 0.0
    /// - A malformed numeric field fails THIS record only; the caller
    ///   reports it and carries on with the rest of the load
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::types::Product;
    ///
    /// let pen = Product::parse_row("Pen,Office,1.50,4.0").unwrap();
    /// assert_eq!(pen.name, "Pen");
    /// assert_eq!(pen.price.cents(), 150);
    ///
    /// let unrated = Product::parse_row("Clip,Office,0.10").unwrap();
    /// assert_eq!(unrated.rating, 0.0);
    ///
    /// assert!(Product::parse_row("Pen,Office,cheap").is_err());
    /// ```
    pub fn parse_row(row: &str) -> Result<Self, ValidationError> {
        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() < 3 {
            return Err(ValidationError::MalformedRow {
                found: fields.len(),
                expected: 3,
            });
        }

        let name = fields[0].to_string();
        validate_product_name(&name)?;

        let price = parse_price(fields[2])?;
        let rating = match fields.get(3) {
            Some(raw) => parse_rating(raw)?,
            None => 0.0,
        };

        Ok(Product {
            name,
            category: fields[1].to_string(),
            price,
            rating,
        })
    }

    /// Checks whether `query` is a case-sensitive substring of the name
    /// or the category.
    #[inline]
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.category.contains(query)
    }
}

// =============================================================================
// Sort Key
// =============================================================================

/// The orderings a catalog can be rearranged into.
///
/// Each key carries its comparison strategy (see [`SortKey::precedes`]),
/// so callers never handle raw comparison functions tied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Price, low to high (merge sort, stable).
    PriceAsc,
    /// Price, high to low (merge sort, stable).
    PriceDesc,
    /// Rating, high to low (partition-exchange sort, NOT stable).
    RatingDesc,
    /// Category, lexicographic (merge sort, stable).
    CategoryAsc,
}

impl SortKey {
    /// The comparison strategy for this key: does `a` strictly precede
    /// `b` in the target order?
    pub fn precedes(&self, a: &Product, b: &Product) -> bool {
        match self {
            SortKey::PriceAsc => a.price < b.price,
            SortKey::PriceDesc => a.price > b.price,
            SortKey::RatingDesc => a.rating > b.rating,
            SortKey::CategoryAsc => a.category < b.category,
        }
    }

    /// Human-readable label for menus and logs.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price (low to high)",
            SortKey::PriceDesc => "price (high to low)",
            SortKey::RatingDesc => "rating (high to low)",
            SortKey::CategoryAsc => "category",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
