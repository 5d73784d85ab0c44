//! # Error Types
//!
//! Domain-specific error types for wrapcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wrapcart-core errors (this file)                                      │
//! │  ├── CoreError        - Pricing / configuration failures               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  checkout app                                                          │
//! │  └── anyhow::Error    - What the console user sees                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (with context) → stderr    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product, field, value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
///
/// A failure aborts the calculation for that order. The engine never
/// mutates anything, so there is no partial state to roll back.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The order references a product that is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The pricing configuration is unusable.
    ///
    /// Raised when the catalog is empty. Bad individual values (zero
    /// `units_per_package`, duplicate product ids or rule names, negative
    /// amounts) surface as [`CoreError::Validation`] instead.
    #[error("Invalid pricing configuration: {reason}")]
    InvalidConfig { reason: String },

    /// An order amount left the i64 cents range.
    ///
    /// Only reachable with overridden configurations whose prices or fees
    /// are large enough that `price × quantity` or the running totals
    /// overflow.
    #[error("Order amount out of range while computing {stage}")]
    AmountOverflow { stage: &'static str },

    /// Fees and discount would produce a negative grand total.
    ///
    /// Only reachable with overridden configurations (the reference rule
    /// table cannot discount below zero).
    #[error("Order total would be negative ({total})")]
    NegativeTotal { total: Money },

    /// Validation error (wraps ValidationError).
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Whether this error belongs to the `InvalidInput` category: bad
    /// quantities, malformed flags or unknown products.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::ProductNotFound(_) | CoreError::Validation(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// `field` always carries enough context for a user to find the bad value,
/// e.g. `"quantity for Product A"`.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. "abc" for a quantity, "maybe" for a yes/no).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. the same product twice in one order).
    #[error("{field} '{value}' appears more than once")]
    Duplicate { field: String, value: String },
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
        let err = CoreError::ProductNotFound("Product Z".to_string());
        assert_eq!(err.to_string(), "Product not found: Product Z");

        let err = CoreError::NegativeTotal {
            total: Money::from_cents(-250),
        };
        assert_eq!(err.to_string(), "Order total would be negative (-$2.50)");

        let err = CoreError::AmountOverflow { stage: "subtotal" };
        assert_eq!(err.to_string(), "Order amount out of range while computing subtotal");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "quantity for Product A".to_string(),
        };
        assert_eq!(err.to_string(), "quantity for Product A must not be negative");

        let err = ValidationError::InvalidFormat {
            field: "gift wrap for Product B".to_string(),
            reason: "expected yes or no".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "gift wrap for Product B has invalid format: expected yes or no"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "product id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(core_err.is_invalid_input());
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(CoreError::ProductNotFound("X".to_string()).is_invalid_input());
        assert!(!CoreError::InvalidConfig {
            reason: "empty catalog".to_string()
        }
        .is_invalid_input());
        assert!(!CoreError::NegativeTotal {
            total: Money::from_cents(-1)
        }
        .is_invalid_input());
        assert!(!CoreError::AmountOverflow { stage: "shipping fee" }.is_invalid_input());
    }
}
