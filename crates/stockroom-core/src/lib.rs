//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate holds every inventory rule as plain functions and methods with
//! zero I/O. The interactive CLI (`apps/stockroom-cli`) is a thin shell that
//! reads prompts and calls into here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Command Loop (stockroom-cli)                    │   │
//! │  │   add ─ find ─ update ─ delete ─ sort ─ transaction ─ display   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │   sort    │  │   table   │  │ validation│  │   │
//! │  │   │  Store    │  │  Bubble   │  │ Box-drawn │  │  Parsing  │  │   │
//! │  │   │  Txn      │  │  passes   │  │  render   │  │  rules    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBALS                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, SortCriterion)
//! - [`inventory`] - The product store and transaction processor
//! - [`sort`] - Stable adjacent-swap sort by criterion
//! - [`table`] - Box-drawing table renderer
//! - [`validation`] - Numeric parsing and strict-mode rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, Product, Transaction};
//!
//! let mut inventory = Inventory::new();
//! inventory.add(Product::new("Widget", "AcmeCo", "Gadget", 9.99, 10));
//!
//! let remaining = inventory
//!     .record_transaction(&Transaction::new("Widget", 3))
//!     .unwrap();
//! assert_eq!(remaining, 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod sort;
pub mod table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use table::render_table;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Column headers of the inventory table, in display order.
pub const TABLE_HEADERS: [&str; 5] = ["Name", "Brand", "Type", "Price", "Stock"];

/// Decimal places used for prices when no other value is configured.
pub const DEFAULT_PRICE_DECIMALS: usize = 2;
