//! # Inventory
//!
//! The product store and the transaction processor.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Command             Method                   Vec<Product> change       │
//! │  ───────             ──────                   ───────────────────       │
//! │                                                                         │
//! │  add ──────────────► add() ─────────────────► products.push(p)         │
//! │                                                                         │
//! │  find ─────────────► find() ────────────────► (read only)              │
//! │                                                                         │
//! │  update ───────────► update() ──────────────► products[i] = p          │
//! │                                                                         │
//! │  delete ───────────► delete() ──────────────► products.remove(i)       │
//! │                                                                         │
//! │  sort ─────────────► sort_by() ─────────────► reordered in place       │
//! │                                                                         │
//! │  transaction ──────► record_transaction() ──► products[i].stock -= q   │
//! │                                                                         │
//! │  NOTE: every lookup is a linear scan returning the FIRST name match.    │
//! │        Duplicate names are allowed and never merged.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::sort::bubble_sort;
use crate::table::render_table;
use crate::types::{Product, SortCriterion, Transaction};
use crate::TABLE_HEADERS;

/// An ordered list of products.
///
/// ## Invariants
/// - Insertion order is kept until [`Inventory::sort_by`] reorders it
/// - No uniqueness on `name`; the first match wins
/// - `stock >= 0` is only guarded by [`Inventory::record_transaction`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
        }
    }

    /// Appends a product. Never fails.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }

    /// Returns the first product named exactly `name`.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Mutable access to the first product named exactly `name`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name == name)
    }

    /// Replaces the first product named `name` with `product`, keeping its
    /// position. The replacement may carry a different name.
    ///
    /// Returns `false` and changes nothing when no product matches.
    pub fn update(&mut self, name: &str, product: Product) -> bool {
        match self.find_mut(name) {
            Some(existing) => {
                *existing = product;
                true
            }
            None => false,
        }
    }

    /// Removes the first product named `name`; the rest keep their order.
    ///
    /// Returns `false` and changes nothing when no product matches.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sorts ascending by `criterion`. Stable.
    pub fn sort_by(&mut self, criterion: SortCriterion) {
        bubble_sort(&mut self.products, criterion);
    }

    /// Parses `criteria` and sorts by it.
    ///
    /// An unrecognized keyword leaves the order untouched and returns `None`.
    pub fn sort_by_criteria(&mut self, criteria: &str) -> Option<SortCriterion> {
        let criterion = criteria.parse().ok()?;
        self.sort_by(criterion);
        Some(criterion)
    }

    /// Takes `transaction.quantity` units out of the named product's stock.
    ///
    /// ## Steps
    /// ```text
    /// find(product_name) ── None ──► Err(ProductNotFound)
    ///      │
    ///      ▼
    /// stock < quantity ──── yes ───► Err(InsufficientStock)
    ///      │
    ///      ▼
    /// stock - quantity ── overflow ─► Err(StockOverflow)
    ///      │
    ///      ▼
    /// stock = stock - quantity ────► Ok(remaining stock)
    /// ```
    ///
    /// Nothing is mutated on error. The quantity itself is not checked, so a
    /// negative quantity increases stock.
    pub fn record_transaction(&mut self, transaction: &Transaction) -> CoreResult<i64> {
        let product = self
            .find_mut(&transaction.product_name)
            .ok_or_else(|| CoreError::ProductNotFound(transaction.product_name.clone()))?;

        if product.stock < transaction.quantity {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: transaction.quantity,
            });
        }

        product.stock = product
            .stock
            .checked_sub(transaction.quantity)
            .ok_or_else(|| CoreError::StockOverflow {
                name: product.name.clone(),
                stock: product.stock,
                quantity: transaction.quantity,
            })?;
        Ok(product.stock)
    }

    /// Renders every product as a table, prices fixed to `price_decimals`.
    pub fn to_table(&self, price_decimals: usize) -> String {
        let rows: Vec<Vec<String>> = self
            .products
            .iter()
            .map(|p| p.table_row(price_decimals))
            .collect();

        render_table(&TABLE_HEADERS, &rows)
    }

    /// The products in current order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for Inventory {
    fn from(products: Vec<Product>) -> Self {
        Inventory { products }
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Inventory {
            products: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
