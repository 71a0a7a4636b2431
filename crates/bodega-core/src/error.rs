//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  bodega-core errors (this file)                                     │
//! │  ├── CoreError        - Cart and discount rule violations           │
//! │  └── ValidationError  - Field-level validation failures             │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → console message                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, requested quantity)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable; none aborts the session

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. The console catches them
/// and shows the message to the user; the cart itself is left unchanged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The named product has no line in the cart.
    ///
    /// ## When This Occurs
    /// - Removing a product that was never added
    /// - Updating the quantity of a product that was never added
    #[error("{0} not found in the cart")]
    ProductNotFound(String),

    /// A quantity was zero or negative where a positive one is required.
    ///
    /// ## When This Occurs
    /// - Adding or removing zero/negative units
    /// - Updating a line to a negative quantity (zero means "delete the line")
    #[error("Quantity must be positive, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Cart has exceeded maximum allowed distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Percentage discount outside the 0-100 range.
    #[error("Discount percentage must be between 0 and 100, got {percentage}")]
    InvalidDiscount { percentage: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
///
/// These errors occur when a field value doesn't meet requirements.
/// Used for early validation before business logic runs (e.g. product
/// construction).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
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
        let err = CoreError::ProductNotFound("Teabags".to_string());
        assert_eq!(err.to_string(), "Teabags not found in the cart");

        let err = CoreError::InvalidQuantity { requested: -3 };
        assert_eq!(err.to_string(), "Quantity must be positive, got -3");

        let err = CoreError::InvalidDiscount { percentage: 150 };
        assert_eq!(
            err.to_string(),
            "Discount percentage must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
