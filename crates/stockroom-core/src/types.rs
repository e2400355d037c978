//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   Transaction   │   │  SortCriterion  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  product_name   │   │  Price          │       │
//! │  │  brand          │   │  quantity       │   │  Name           │       │
//! │  │  kind ("type")  │   └─────────────────┘   │  Brand          │       │
//! │  │  price (f64)    │                         └─────────────────┘       │
//! │  │  stock (i64)    │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product is identified by its `name`, but names are not unique. Every
//! lookup returns the first match in insertion (or last sorted) order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// =============================================================================
// Product
// =============================================================================

/// An inventory record.
///
/// Neither `price` nor `stock` is range-checked here; negative values are
/// representable and only rejected by the CLI in strict mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also the lookup key.
    pub name: String,

    /// Manufacturer or label.
    pub brand: String,

    /// Product category. Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Unit price.
    pub price: f64,

    /// Units on hand.
    pub stock: i64,
}

impl Product {
    /// Creates a product from its five fields.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        kind: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Self {
        Product {
            name: name.into(),
            brand: brand.into(),
            kind: kind.into(),
            price,
            stock,
        }
    }

    /// Returns the row cells used by the inventory table.
    ///
    /// Price is fixed to `price_decimals` places, stock is a plain integer.
    pub fn table_row(&self, price_decimals: usize) -> Vec<String> {
        vec![
            self.name.clone(),
            self.brand.clone(),
            self.kind.clone(),
            format!("{:.*}", price_decimals, self.price),
            self.stock.to_string(),
        ]
    }
}

/// Formats a float in its shortest round-trip form, switching to exponent
/// notation when the decimal exponent is below -4 or at least 6.
///
/// ```text
/// 9.99      → 9.99        1000000  → 1e+06
/// 123456.5  → 123456.5    0.00001  → 1e-05
/// inf       → +Inf        1.5e-7   → 1.5e-07
/// ```
pub fn format_compact(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // `{:e}` yields the shortest digits as `<mantissa>e<exp>`, e.g. `1.5e-7`.
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return value.to_string(),
    };

    if value == 0.0 || (-4..6).contains(&exponent) {
        return value.to_string();
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}

/// Compact single-line form: `{Widget AcmeCo Gadget 9.99 10}`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {} {}}}",
            self.name,
            self.brand,
            self.kind,
            format_compact(self.price),
            self.stock
        )
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A request to take `quantity` units of a named product out of stock.
///
/// Consumed immediately by [`Inventory::record_transaction`](crate::Inventory::record_transaction)
/// and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub product_name: String,
    pub quantity: i64,
}

impl Transaction {
    pub fn new(product_name: impl Into<String>, quantity: i64) -> Self {
        Transaction {
            product_name: product_name.into(),
            quantity,
        }
    }
}

// =============================================================================
// Sort Criterion
// =============================================================================

/// The field products are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Numeric, ascending.
    Price,
    /// Byte-wise lexicographic, case-sensitive.
    Name,
    /// Byte-wise lexicographic, case-sensitive.
    Brand,
}

impl SortCriterion {
    /// Every criterion, in the order shown in the sort prompt.
    pub const ALL: [SortCriterion; 3] =
        [SortCriterion::Price, SortCriterion::Name, SortCriterion::Brand];

    /// The exact keyword a user types to select this criterion.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Price => "price",
            SortCriterion::Name => "name",
            SortCriterion::Brand => "brand",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matches keywords exactly; `"Price"` or `" price"` are unknown.
impl FromStr for SortCriterion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortCriterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSortCriteria(s.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
