//! # Validation Module
//!
//! Numeric parsing and input rules for values typed at the prompt.
//!
//! ## Two Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Handling Modes                               │
//! │                                                                         │
//! │  Lenient (default)                                                     │
//! │  ├── parse_price_or_zero / parse_int_or_zero                           │
//! │  └── "abc" → 0, "-5" → -5, nothing is rejected                         │
//! │           │                                                             │
//! │  Strict (STOCKROOM_STRICT=true)                                        │
//! │  ├── parse_price / parse_stock / parse_quantity                        │
//! │  ├── validate_product_name, validate_price, validate_stock,            │
//! │  │   validate_quantity, validate_sort_criteria                          │
//! │  └── First failing rule is reported, the command is abandoned          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_price, parse_price_or_zero};
//!
//! assert_eq!(parse_price("9.99").unwrap(), 9.99);
//! assert!(parse_price("nine").is_err());
//! assert_eq!(parse_price_or_zero("nine"), 0.0);
//! ```

use crate::error::ValidationError;
use crate::types::SortCriterion;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a float. The input is taken as-is; surrounding spaces fail.
fn parse_float(field: &str, input: &str) -> ValidationResult<f64> {
    input.parse::<f64>().map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        input: input.to_string(),
    })
}

/// Parses a signed integer. An optional leading `+` or `-` is accepted.
fn parse_int(field: &str, input: &str) -> ValidationResult<i64> {
    input.parse::<i64>().map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        input: input.to_string(),
    })
}

/// Parses a price entered at a prompt.
pub fn parse_price(input: &str) -> ValidationResult<f64> {
    parse_float("price", input)
}

/// Parses a stock level entered at a prompt.
pub fn parse_stock(input: &str) -> ValidationResult<i64> {
    parse_int("stock", input)
}

/// Parses a transaction quantity entered at a prompt.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    parse_int("quantity", input)
}

/// Lenient price parsing: anything unparseable becomes `0.0`.
pub fn parse_price_or_zero(input: &str) -> f64 {
    parse_price(input).unwrap_or(0.0)
}

/// Lenient integer parsing for stock and quantity: unparseable becomes `0`.
pub fn parse_int_or_zero(input: &str) -> i64 {
    input.parse::<i64>().unwrap_or(0)
}

// =============================================================================
// Strict-Mode Rules
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Widget").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a price: zero is allowed, negatives, NaN and infinities are not.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "price".to_string(),
            input: price.to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level: zero is allowed.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a transaction quantity.
///
/// ## Rules
/// - Must be positive (> 0); a negative quantity would add stock
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a sort keyword and returns the matching criterion.
pub fn validate_sort_criteria(input: &str) -> ValidationResult<SortCriterion> {
    input.parse().map_err(|_| ValidationError::NotAllowed {
        field: "criteria".to_string(),
        allowed: SortCriterion::ALL
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("9.99").unwrap(), 9.99);
        assert_eq!(parse_price("10").unwrap(), 10.0);
        assert_eq!(parse_price("-1.5").unwrap(), -1.5);
        assert_eq!(parse_price("1e2").unwrap(), 100.0);

        assert!(parse_price("").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price(" 9.99").is_err());
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_stock("10").unwrap(), 10);
        assert_eq!(parse_stock("+4").unwrap(), 4);
        assert_eq!(parse_quantity("-3").unwrap(), -3);

        assert_eq!(
            parse_quantity("3.5"),
            Err(ValidationError::InvalidNumber {
                field: "quantity".to_string(),
                input: "3.5".to_string(),
            })
        );
        assert!(parse_stock("ten").is_err());
    }

    #[test]
    fn test_lenient_parsers_default_to_zero() {
        assert_eq!(parse_price_or_zero("abc"), 0.0);
        assert_eq!(parse_price_or_zero(""), 0.0);
        assert_eq!(parse_price_or_zero("2.25"), 2.25);

        assert_eq!(parse_int_or_zero("x"), 0);
        assert_eq!(parse_int_or_zero("7"), 7);
        assert_eq!(parse_int_or_zero("-7"), -7);
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Widget").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("\t ").is_err());
    }

    #[test]
    fn test_validate_price_and_stock() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(9.99).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(f64::NEG_INFINITY).is_err());
        assert!(validate_price(parse_price("inf").unwrap()).is_err());

        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert_eq!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            })
        );
        assert!(validate_quantity(-5).is_err());
    }

    #[test]
    fn test_validate_sort_criteria() {
        assert_eq!(validate_sort_criteria("brand").unwrap(), SortCriterion::Brand);

        let err = validate_sort_criteria("stock").unwrap_err();
        assert_eq!(
            err.to_string(),
            "criteria must be one of: [\"price\", \"name\", \"brand\"]"
        );
    }
}
