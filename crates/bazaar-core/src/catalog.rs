//! # Catalog
//!
//! The in-memory record store: the sequence of [`Product`] records
//! loaded at session start, plus the read and reorder operations over
//! it.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Catalog Operations                         │
//! │                                                                 │
//! │  load (once) ───────► Catalog::new(records)                     │
//! │                                                                 │
//! │  search "Office" ───► linear scan, substring on name/category   │
//! │                       (read only, catalog order preserved)      │
//! │                                                                 │
//! │  sort_by(key) ──────► reorders records IN PLACE; the new order  │
//! │                       is what every later operation sees        │
//! │                                                                 │
//! │  filter by category / price range + minimum rating              │
//! │                 ────► linear scans, read only                   │
//! │                                                                 │
//! │  add to cart ───────► find_by_name, exact match                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are never added, removed, or edited after construction.
//! Sorting rearranges them; nothing else touches them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::money::Money;
use crate::sort::{merge_sort, partition_exchange_sort};
use crate::types::{Product, SortKey};

// =============================================================================
// Catalog
// =============================================================================

/// The session's product records, in their current display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an already-parsed record sequence.
    pub fn new(records: Vec<Product>) -> Self {
        Catalog { records }
    }

    /// All records in current display order.
    pub fn records(&self) -> &[Product] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Linear substring search over name and category.
    ///
    /// Case-sensitive, order-preserving: matches come back in current
    /// catalog order. An empty result is a valid outcome.
    pub fn search(&self, query: &str) -> Vec<Product> {
        self.records
            .iter()
            .filter(|p| p.matches(query))
            .cloned()
            .collect()
    }

    /// Exact-name lookup (the natural key).
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.records.iter().find(|p| p.name == name)
    }

    /// The distinct categories, in first-appearance order.
    ///
    /// Feeds the category filter menu: the user picks from what the
    /// catalog actually contains.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category) {
                seen.push(record.category.clone());
            }
        }
        seen
    }

    /// Records whose category is one of the selected categories,
    /// in catalog order.
    ///
    /// Exact category match, not substring. An empty selection selects
    /// nothing.
    pub fn filter_by_categories(&self, selected: &[String]) -> Vec<Product> {
        self.records
            .iter()
            .filter(|p| selected.contains(&p.category))
            .cloned()
            .collect()
    }

    /// Records within an inclusive price range AND at or above a
    /// minimum rating, in catalog order.
    ///
    /// The two conditions are one combined filter: a record must pass
    /// both to come back.
    pub fn filter_by_price_and_rating(
        &self,
        min_price: Money,
        max_price: Money,
        min_rating: f64,
    ) -> Vec<Product> {
        self.records
            .iter()
            .filter(|p| p.price >= min_price && p.price <= max_price && p.rating >= min_rating)
            .cloned()
            .collect()
    }

    /// Reorders the catalog in place under the given key.
    ///
    /// The new order persists for the rest of the session. Rating uses
    /// the unstable partition-exchange sort; every other key uses the
    /// stable merge sort. See [`crate::sort`] for the trade-offs.
    pub fn sort_by(&mut self, key: SortKey) {
        debug!(key = key.label(), count = self.records.len(), "sorting catalog");

        match key {
            SortKey::RatingDesc => {
                partition_exchange_sort(&mut self.records, |a, b| key.precedes(a, b));
            }
            SortKey::PriceAsc | SortKey::PriceDesc | SortKey::CategoryAsc => {
                merge_sort(&mut self.records, |a, b| key.precedes(a, b));
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn test_product(name: &str, category: &str, cents: i64, rating: f64) -> Product {
        Product {
            name: name.to_string(),
            category: category.to_string(),
            price: Money::from_cents(cents),
            rating,
        }
    }

    fn office_catalog() -> Catalog {
        Catalog::new(vec![
            test_product("Pen", "Office", 150, 4.0),
            test_product("Pencil", "Office", 50, 4.5),
            test_product("Mug", "Kitchen", 600, 3.8),
        ])
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let catalog = office_catalog();

        let hits = catalog.search("Office");
        assert_eq!(hits.len(), 2);
        // Catalog order preserved
        assert_eq!(hits[0].name, "Pen");
        assert_eq!(hits[1].name, "Pencil");

        let hits = catalog.search("Mug");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_search_is_case_sensitive_and_may_be_empty() {
        let catalog = office_catalog();
        assert!(catalog.search("office").is_empty());
        assert!(catalog.search("Stapler").is_empty());
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let catalog = office_catalog();
        assert!(catalog.find_by_name("Pen").is_some());
        // Substring is not enough for the natural key
        assert!(catalog.find_by_name("Pe").is_none());
        assert!(catalog.find_by_name("pen").is_none());
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let mut catalog = office_catalog();
        catalog.sort_by(SortKey::PriceAsc);

        let names: Vec<&str> = catalog.records().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pencil", "Pen", "Mug"]);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let mut catalog = office_catalog();
        catalog.sort_by(SortKey::RatingDesc);

        let ratings: Vec<f64> = catalog.records().iter().map(|p| p.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_by_category_is_stable() {
        let mut catalog = office_catalog();
        catalog.sort_by(SortKey::CategoryAsc);

        let names: Vec<&str> = catalog.records().iter().map(|p| p.name.as_str()).collect();
        // Kitchen < Office; Pen and Pencil keep their relative order
        assert_eq!(names, vec!["Mug", "Pen", "Pencil"]);
    }

    #[test]
    fn test_len_and_is_empty() {
        let catalog = office_catalog();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());

        let empty = Catalog::new(Vec::new());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_categories_are_distinct_in_first_appearance_order() {
        let catalog = office_catalog();
        assert_eq!(catalog.categories(), vec!["Office", "Kitchen"]);

        let empty = Catalog::new(Vec::new());
        assert!(empty.categories().is_empty());
    }

    #[test]
    fn test_filter_by_categories_is_exact_match() {
        let catalog = office_catalog();

        let hits = catalog.filter_by_categories(&["Office".to_string()]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Pen");
        assert_eq!(hits[1].name, "Pencil");

        let hits = catalog.filter_by_categories(&[
            "Kitchen".to_string(),
            "Office".to_string(),
        ]);
        assert_eq!(hits.len(), 3);

        // Empty selection selects nothing; substring is not enough
        assert!(catalog.filter_by_categories(&[]).is_empty());
        assert!(catalog
            .filter_by_categories(&["Off".to_string()])
            .is_empty());
    }

    #[test]
    fn test_filter_by_price_and_rating_combines_both_conditions() {
        let catalog = office_catalog();

        // Bounds are inclusive: Pencil (50) and Pen (150) sit on them
        let hits = catalog.filter_by_price_and_rating(
            Money::from_cents(50),
            Money::from_cents(150),
            0.0,
        );
        assert_eq!(hits.len(), 2);

        // Rating threshold knocks out Pen (4.0 < 4.5)
        let hits = catalog.filter_by_price_and_rating(
            Money::from_cents(50),
            Money::from_cents(150),
            4.5,
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Pencil");

        // A range nothing falls in is a valid empty outcome
        let hits = catalog.filter_by_price_and_rating(
            Money::from_cents(1000),
            Money::from_cents(2000),
            0.0,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_sort_persists_for_later_reads() {
        let mut catalog = office_catalog();
        catalog.sort_by(SortKey::PriceDesc);

        // A later search sees the new order
        let hits = catalog.search("Office");
        assert_eq!(hits[0].name, "Pen");
        assert_eq!(hits[1].name, "Pencil");
    }
}
