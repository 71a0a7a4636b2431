//! # Validation Module
//!
//! Field-level validation for product construction.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Console input parsing                                     │
//! │  ├── Non-numeric entries caught before the core is called           │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - field validation at construction            │
//! │  ├── Product name must be present                                   │
//! │  └── Prices must not be negative                                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Cart operations - business rule validation                │
//! │  ├── Quantities must be positive and under the cap                  │
//! │  └── Cart size bounded                                              │
//! └─────────────────────────────────────────────────────────────────────┘
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
/// - Must not be empty (after trimming)
/// - Must be between 1 and 200 characters
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Teabags").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use bodega_core::money::Money;
/// use bodega_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_minor(10000)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_minor(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Laptop").is_ok());
        assert!(validate_product_name("  Headphones  ").is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_minor(500)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_minor(-1)).is_err());
    }
}
