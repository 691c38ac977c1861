//! # Validation Module
//!
//! Record field validation for Bazaar.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                          │
//! │                                                                 │
//! │  Layer 1: CLI shell                                             │
//! │  ├── Reads the file, skips the header row                       │
//! │  └── Reports rejected rows, keeps loading                       │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 2: THIS MODULE (via Product::parse_row)                  │
//! │  ├── Required fields present                                    │
//! │  ├── Numeric fields parse                                       │
//! │  └── Price and rating are non-negative                          │
//! │                                                                 │
//! │  A bad row fails alone; the load never aborts wholesale.        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Pen").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Field Parsers
// =============================================================================

/// Parses a decimal price field into integer-cents [`Money`].
///
/// ## Rules
/// - Must parse as a number
/// - Must be non-negative (zero is allowed: free items)
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::parse_price;
///
/// assert_eq!(parse_price("1.50").unwrap().cents(), 150);
/// assert_eq!(parse_price("2").unwrap().cents(), 200);
/// assert!(parse_price("cheap").is_err());
/// assert!(parse_price("-1.00").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    let raw = raw.trim();

    let value: f64 = raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "price".to_string(),
        value: raw.to_string(),
    })?;

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    // Decimal text becomes integer cents here, once, at the load
    // boundary. All arithmetic after this point is exact.
    Ok(Money::from_cents((value * 100.0).round() as i64))
}

/// Parses a rating field.
///
/// ## Rules
/// - Empty means unrated and defaults to 0.0 (matches the source data,
///   where the trailing rating column is sometimes blank)
/// - Otherwise must parse as a non-negative number
pub fn parse_rating(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "rating".to_string(),
        value: raw.to_string(),
    })?;

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "rating".to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Pen").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("1.50").unwrap().cents(), 150);
        assert_eq!(parse_price("0").unwrap().cents(), 0);
        assert_eq!(parse_price(" 10.99 ").unwrap().cents(), 1099);

        assert!(parse_price("").is_err());
        assert!(parse_price("cheap").is_err());
        assert!(parse_price("-0.01").is_err());
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4.5").unwrap(), 4.5);
        assert_eq!(parse_rating("").unwrap(), 0.0);
        assert_eq!(parse_rating("  ").unwrap(), 0.0);

        assert!(parse_rating("great").is_err());
        assert!(parse_rating("-1").is_err());
    }
}
