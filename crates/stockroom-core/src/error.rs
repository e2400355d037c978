//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                      │
//! │  ├── CoreError        - Store and transaction failures                  │
//! │  └── ValidationError  - Input parsing / strict-mode failures            │
//! │                                                                         │
//! │  stockroom-cli errors (app crate)                                       │
//! │  └── CliError         - Terminal I/O and configuration failures         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed message, loop continues    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal to the command loop. They are rendered with
//! `Display` and the next command is read.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory operation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// No product carries the requested name.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Not enough stock to cover a transaction.
    ///
    /// ## User Workflow
    /// ```text
    /// transaction Widget, quantity 10
    ///      │
    ///      ▼
    /// Check stock: available=7
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Widget", available: 7, requested: 10 }
    ///      │
    ///      ▼
    /// "Insufficient stock for Widget: available 7, requested 10"
    /// "Transaction failed."
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Applying a transaction would push stock past the range of `i64`.
    #[error("Stock for {name} would overflow: stock {stock}, quantity {quantity}")]
    StockOverflow {
        name: String,
        stock: i64,
        quantity: i64,
    },

    /// Sort criterion is not one of price, name, brand.
    #[error("Unknown sort criteria: {0:?}")]
    UnknownSortCriteria(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only surfaced in strict mode; the default mode coerces bad numbers to zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Input could not be parsed as a number.
    #[error("{field} must be a number, got {input:?}")]
    InvalidNumber { field: String, input: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Widget".to_string(),
            available: 7,
            requested: 10,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Widget: available 7, requested 10"
        );

        let err = CoreError::ProductNotFound("Gizmo".to_string());
        assert_eq!(err.to_string(), "Product not found: Gizmo");

        let err = CoreError::StockOverflow {
            name: "Big".to_string(),
            stock: i64::MAX,
            quantity: -1,
        };
        assert_eq!(
            err.to_string(),
            "Stock for Big would overflow: stock 9223372036854775807, quantity -1"
        );

        let err = CoreError::UnknownSortCriteria("size".to_string());
        assert_eq!(err.to_string(), "Unknown sort criteria: \"size\"");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidNumber {
            field: "price".to_string(),
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price must be a number, got \"abc\"");

        let err = ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        };
        assert_eq!(err.to_string(), "stock must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: name is required");
    }
}
