//! # Sort Routine
//!
//! Orders a product slice ascending by one field using adjacent-swap passes.
//!
//! ```text
//!  pass 1:  [C 3] [A 1] [B 2]  →  [A 1] [C 3] [B 2]  →  [A 1] [B 2] [C 3]
//!  pass 2:  no swap            →  done
//! ```
//!
//! A swap only happens when the left key is strictly greater than the right
//! one, so equal keys never move past each other and the sort is stable. A
//! `NaN` price never compares greater, so it stays where it is.
//!
//! Cost is O(n²) comparisons in the worst case, fine for a hand-typed list.

use std::cmp::Ordering;

use crate::types::{Product, SortCriterion};

/// Compares two products on the given criterion.
///
/// Returns `None` only for prices that do not order (`NaN`).
fn compare(a: &Product, b: &Product, criterion: SortCriterion) -> Option<Ordering> {
    match criterion {
        SortCriterion::Price => a.price.partial_cmp(&b.price),
        SortCriterion::Name => Some(a.name.cmp(&b.name)),
        SortCriterion::Brand => Some(a.brand.cmp(&b.brand)),
    }
}

/// Sorts `products` in place, ascending by `criterion`.
pub fn bubble_sort(products: &mut [Product], criterion: SortCriterion) {
    let n = products.len();

    for pass in 0..n {
        let mut swapped = false;

        for j in 0..n - pass - 1 {
            if compare(&products[j], &products[j + 1], criterion) == Some(Ordering::Greater) {
                products.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
