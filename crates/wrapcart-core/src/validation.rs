//! # Validation Module
//!
//! Input validation and parsing for order data and pricing configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input boundary (checkout prompts, JSON, ...)                 │
//! │  └── parse_quantity / parse_gift_wrap: text → typed values             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: PricingEngine::calculate_total                               │
//! │  └── validate_quantity, known products, no duplicate lines             │
//! │                                                                         │
//! │  Config is validated once, in PricingEngine::new                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wrapcart_core::validation::{parse_gift_wrap, parse_quantity};
//!
//! assert_eq!(parse_quantity("25", "Product A").unwrap(), 25);
//! assert!(parse_gift_wrap("Yes", "Product A").unwrap());
//! assert!(parse_quantity("-1", "Product A").is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn quantity_field(product_id: &str) -> String {
    format!("quantity for {}", product_id)
}

// =============================================================================
// Order Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must not be negative (zero is allowed: the product is not ordered)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64, product_id: &str) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: quantity_field(product_id),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: quantity_field(product_id),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses and validates a quantity typed by a user.
///
/// Surrounding whitespace is ignored. Fractions, signs-only and words are
/// rejected as `InvalidFormat`.
pub fn parse_quantity(input: &str, product_id: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: quantity_field(product_id),
        });
    }

    let qty: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: quantity_field(product_id),
        reason: format!("'{}' is not a whole number", input),
    })?;

    validate_quantity(qty, product_id)?;
    Ok(qty)
}

/// Parses a yes/no gift wrap answer.
///
/// Accepts `yes`, `y`, `true` and `no`, `n`, `false`, case-insensitive.
pub fn parse_gift_wrap(input: &str, product_id: &str) -> ValidationResult<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(ValidationError::InvalidFormat {
            field: format!("gift wrap for {}", product_id),
            reason: format!("expected yes or no, got '{}'", other),
        }),
    }
}

// =============================================================================
// Config Validators
// =============================================================================

/// Validates a catalog product id.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

/// Validates an amount in cents (price, fee, flat discount).
///
/// Zero is allowed (free items, free shipping).
pub fn validate_amount_cents(cents: i64, field: &str) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points (0% to 100%).
pub fn validate_rate_bps(bps: u32, field: &str) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

/// Validates the package size used for shipping.
pub fn validate_units_per_package(units: i64) -> ValidationResult<()> {
    if units <= 0 {
        return Err(ValidationError::OutOfRange {
            field: "units_per_package".to_string(),
            min: 1,
            max: i64::MAX,
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
    fn test_validate_quantity() {
        assert!(validate_quantity(0, "Product A").is_ok());
        assert!(validate_quantity(201, "Product A").is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY, "Product A").is_ok());

        assert!(validate_quantity(-1, "Product A").is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1, "Product A").is_err());
    }

    #[test]
    fn test_negative_quantity_names_product() {
        let err = validate_quantity(-3, "Product B").unwrap_err();
        assert_eq!(err.to_string(), "quantity for Product B must not be negative");
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0", "Product A").unwrap(), 0);
        assert_eq!(parse_quantity("  16\n", "Product C").unwrap(), 16);

        assert!(matches!(
            parse_quantity("", "Product A"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_quantity("2.5", "Product A"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("ten", "Product A"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("-4", "Product A"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_parse_gift_wrap() {
        assert!(parse_gift_wrap("yes", "Product A").unwrap());
        assert!(parse_gift_wrap(" YES ", "Product A").unwrap());
        assert!(parse_gift_wrap("y", "Product A").unwrap());
        assert!(!parse_gift_wrap("no", "Product A").unwrap());
        assert!(!parse_gift_wrap("False", "Product A").unwrap());

        let err = parse_gift_wrap("maybe", "Product C").unwrap_err();
        assert_eq!(
            err.to_string(),
            "gift wrap for Product C has invalid format: expected yes or no, got 'maybe'"
        );
    }

    #[test]
    fn test_validate_config_values() {
        assert!(validate_product_id("Product A").is_ok());
        assert!(validate_product_id("  ").is_err());

        assert!(validate_amount_cents(0, "price").is_ok());
        assert!(validate_amount_cents(-100, "price").is_err());

        assert!(validate_rate_bps(10_000, "rate").is_ok());
        assert!(validate_rate_bps(10_001, "rate").is_err());

        assert!(validate_units_per_package(10).is_ok());
        assert!(validate_units_per_package(0).is_err());
    }
}
