//! # Sort Engine
//!
//! Two general-purpose, comparator-driven sorting algorithms.
//!
//! ## Why Two Algorithms?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Sort Engine                              │
//! │                                                                 │
//! │  merge_sort                     partition_exchange_sort         │
//! │  ──────────────────────────     ─────────────────────────────   │
//! │  • Stable: ties keep their      • NOT stable: equal elements    │
//! │    original relative order        may swap places               │
//! │  • O(n log n) always            • O(n log n) average,           │
//! │  • Allocates merge buffers        O(n²) worst case              │
//! │  • Used for: price asc/desc,    • In place, no allocation       │
//! │    category                     • Used for: rating descending   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both take a comparator `precedes(a, b) -> bool` answering "does `a`
//! strictly precede `b` in the target order?", so the same engine sorts
//! ascending, descending, or by any derived key.
//!
//! ## Known Quadratic Worst Case
//! `partition_exchange_sort` picks the last element as pivot. On input
//! that is already in the target order it degrades to O(n²) with
//! recursion depth n. This is a deliberate, documented property of the
//! algorithm choice: replacing it with a guaranteed O(n log n) sort
//! would also change where equal-rating items land, which callers can
//! observe. Keep catalog sizes in mind before reaching for it elsewhere.

// =============================================================================
// Merge Sort (stable)
// =============================================================================

/// Sorts `items` in place, stably, under the given comparator.
///
/// Ties (neither element precedes the other) preserve their original
/// relative order. Empty and single-element slices are no-ops.
///
/// ## Example
/// ```rust
/// use bazaar_core::sort::merge_sort;
///
/// let mut prices = vec![150, 50, 100];
/// merge_sort(&mut prices, |a, b| a < b);
/// assert_eq!(prices, vec![50, 100, 150]);
/// ```
pub fn merge_sort<T, F>(items: &mut [T], precedes: F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    merge_sort_inner(items, &precedes);
}

fn merge_sort_inner<T, F>(items: &mut [T], precedes: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let n = items.len();
    if n <= 1 {
        return;
    }

    let mid = n / 2;
    merge_sort_inner(&mut items[..mid], precedes);
    merge_sort_inner(&mut items[mid..], precedes);
    merge(items, mid, precedes);
}

/// Merges the two sorted runs `items[..mid]` and `items[mid..]`.
///
/// Takes from the left run unless the right element STRICTLY precedes
/// it. That tie-break is what makes the whole sort stable.
fn merge<T, F>(items: &mut [T], mid: usize, precedes: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let left: Vec<T> = items[..mid].to_vec();
    let right: Vec<T> = items[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left.len() && j < right.len() {
        if precedes(&right[j], &left[i]) {
            items[k] = right[j].clone();
            j += 1;
        } else {
            items[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }

    while i < left.len() {
        items[k] = left[i].clone();
        i += 1;
        k += 1;
    }

    while j < right.len() {
        items[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}

// =============================================================================
// Partition-Exchange Sort (unstable, in place)
// =============================================================================

/// Sorts `items` in place under the given comparator using
/// partition-exchange (last-element pivot).
///
/// NOT stable: equal elements may reorder. Empty and single-element
/// slices are no-ops. See the module docs for the quadratic worst case.
///
/// ## Example
/// ```rust
/// use bazaar_core::sort::partition_exchange_sort;
///
/// let mut ratings = vec![4.0, 4.8, 3.2];
/// partition_exchange_sort(&mut ratings, |a, b| a > b);
/// assert_eq!(ratings, vec![4.8, 4.0, 3.2]);
/// ```
pub fn partition_exchange_sort<T, F>(items: &mut [T], precedes: F)
where
    F: Fn(&T, &T) -> bool,
{
    partition_exchange_inner(items, &precedes);
}

fn partition_exchange_inner<T, F>(items: &mut [T], precedes: &F)
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return;
    }

    let pivot_index = partition(items, precedes);

    let (left, rest) = items.split_at_mut(pivot_index);
    partition_exchange_inner(left, precedes);
    // rest[0] is the pivot, already in its final position
    partition_exchange_inner(&mut rest[1..], precedes);
}

/// Partitions around the last element: everything that strictly
/// precedes the pivot ends up before it. Returns the pivot's final
/// index.
fn partition<T, F>(items: &mut [T], precedes: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let high = items.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        if precedes(&items[j], &items[high]) {
            items.swap(boundary, j);
            boundary += 1;
        }
    }

    items.swap(boundary, high);
    boundary
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts `sorted` is a permutation of `original`.
    fn assert_permutation(original: &[i64], sorted: &[i64]) {
        let mut a = original.to_vec();
        let mut b = sorted.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge_sort_orders_ascending() {
        let original = vec![150i64, 50, 100, 75, 75, 200];
        let mut items = original.clone();
        merge_sort(&mut items, |a, b| a < b);

        assert_permutation(&original, &items);
        assert!(items.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_merge_sort_orders_descending() {
        let mut items = vec![150i64, 50, 100];
        merge_sort(&mut items, |a, b| a > b);
        assert_eq!(items, vec![150, 100, 50]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        // (key, original position): equal keys must keep their order
        let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        merge_sort(&mut items, |a, b| a.0 < b.0);
        assert_eq!(
            items,
            vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]
        );
    }

    #[test]
    fn test_merge_sort_is_idempotent() {
        let mut items = vec![3i64, 1, 4, 1, 5, 9, 2, 6];
        merge_sort(&mut items, |a, b| a < b);
        let once = items.clone();
        merge_sort(&mut items, |a, b| a < b);
        assert_eq!(items, once);
    }

    #[test]
    fn test_merge_sort_edge_cases() {
        let mut empty: Vec<i64> = vec![];
        merge_sort(&mut empty, |a, b| a < b);
        assert!(empty.is_empty());

        let mut single = vec![42i64];
        merge_sort(&mut single, |a, b| a < b);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_partition_exchange_orders_descending() {
        let original = vec![40i64, 48, 32, 48, 10, 50];
        let mut items = original.clone();
        partition_exchange_sort(&mut items, |a, b| a > b);

        assert_permutation(&original, &items);
        assert!(items.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_partition_exchange_edge_cases() {
        let mut empty: Vec<i64> = vec![];
        partition_exchange_sort(&mut empty, |a, b| a > b);
        assert!(empty.is_empty());

        let mut single = vec![42i64];
        partition_exchange_sort(&mut single, |a, b| a > b);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_partition_exchange_terminates_on_sorted_input() {
        // Already in target order is the quadratic worst case. This
        // checks termination and correctness, not speed.
        let mut items: Vec<i64> = (0..200).rev().collect();
        let expected = items.clone();
        partition_exchange_sort(&mut items, |a, b| a > b);
        assert_eq!(items, expected);
    }

    #[test]
    fn test_partition_exchange_all_equal() {
        let mut items = vec![7i64; 16];
        partition_exchange_sort(&mut items, |a, b| a > b);
        assert_eq!(items, vec![7i64; 16]);
    }
}
