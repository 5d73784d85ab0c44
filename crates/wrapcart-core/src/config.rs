//! # Pricing Configuration
//!
//! Catalog, rule table and fee settings, passed to `PricingEngine::new`.
//!
//! ## Sources
//! The core only defines the struct and its reference defaults. Loading
//! from files or the environment is the caller's job (see the checkout
//! app). Every field has a default, so a partial TOML/JSON document
//! overrides just what it names.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::rules::{reference_rules, DiscountEffect, DiscountRule};
use crate::types::Product;
use crate::validation::{
    validate_amount_cents, validate_product_id, validate_rate_bps, validate_units_per_package,
};

/// How eligible discounts are ranked against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountComparison {
    /// Compare the rules' plain numbers: a flat $10 is 10, a 10% rate is
    /// 0.10. The winner's number is subtracted as currency.
    #[default]
    RawValue,

    /// Compare what each rule actually saves on the subtotal.
    Savings,
}

/// Pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Products in display and evaluation order.
    pub catalog: Vec<Product>,

    /// Discount rules in evaluation order (earlier wins ties).
    pub rules: Vec<DiscountRule>,

    /// Gift wrap fee charged per wrapped unit.
    pub gift_wrap_fee_per_unit: Money,

    /// Shipping fee per full package.
    pub shipping_fee_per_package: Money,

    /// Units per package. Partial packages ship free.
    pub units_per_package: i64,

    pub discount_comparison: DiscountComparison,
}

impl Default for PricingConfig {
    /// Reference configuration.
    ///
    /// ## Default Values
    /// - Catalog: Product A $20, Product B $40, Product C $50
    /// - Gift wrap: $1 per unit
    /// - Shipping: $5 per 10 units
    /// - Rules: see [`crate::rules`]
    /// - Comparison: raw value
    fn default() -> Self {
        PricingConfig {
            catalog: vec![
                Product::new("Product A", Money::from_major_minor(20, 0)),
                Product::new("Product B", Money::from_major_minor(40, 0)),
                Product::new("Product C", Money::from_major_minor(50, 0)),
            ],
            rules: reference_rules(),
            gift_wrap_fee_per_unit: Money::from_major_minor(1, 0),
            shipping_fee_per_package: Money::from_major_minor(5, 0),
            units_per_package: 10,
            discount_comparison: DiscountComparison::RawValue,
        }
    }
}

impl PricingConfig {
    /// Checks the configuration before an engine is built from it.
    pub fn validate(&self) -> CoreResult<()> {
        if self.catalog.is_empty() {
            return Err(CoreError::InvalidConfig {
                reason: "catalog has no products".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for product in &self.catalog {
            validate_product_id(&product.id)?;
            validate_amount_cents(product.price_cents, &format!("price of {}", product.id))?;
            if !seen.insert(product.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.clone(),
                }
                .into());
            }
        }

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "rule name".to_string(),
                }
                .into());
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "rule name".to_string(),
                    value: rule.name.clone(),
                }
                .into());
            }
            if rule.eligibility.threshold() < 0 {
                return Err(ValidationError::MustBeNonNegative {
                    field: format!("threshold of {}", rule.name),
                }
                .into());
            }
            match rule.effect {
                DiscountEffect::Flat { amount } => {
                    validate_amount_cents(amount.cents(), &format!("amount of {}", rule.name))?;
                }
                DiscountEffect::Rate { rate } => {
                    validate_rate_bps(rate.bps(), &format!("rate of {}", rule.name))?;
                }
            }
        }

        validate_amount_cents(self.gift_wrap_fee_per_unit.cents(), "gift_wrap_fee_per_unit")?;
        validate_amount_cents(self.shipping_fee_per_package.cents(), "shipping_fee_per_package")?;
        validate_units_per_package(self.units_per_package)?;

        Ok(())
    }

    /// Looks up a catalog product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Eligibility;
    use crate::types::DiscountRate;

    #[test]
    fn test_default_config_is_valid() {
        let config = PricingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog.len(), 3);
        assert_eq!(config.rules.len(), 4);
        assert_eq!(config.product("Product C").unwrap().price_cents, 5000);
    }

    #[test]
    fn test_rejects_zero_units_per_package() {
        let config = PricingConfig {
            units_per_package: 0,
            ..PricingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let config = PricingConfig {
            catalog: Vec::new(),
            ..PricingConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig { .. })));
    }

    #[test]
    fn test_rejects_duplicate_products_and_rules() {
        let mut config = PricingConfig::default();
        config
            .catalog
            .push(Product::new("Product A", Money::from_cents(100)));
        assert!(matches!(
            config.validate(),
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));

        let mut config = PricingConfig::default();
        let first = config.rules[0].clone();
        config.rules.push(first);
        assert!(matches!(
            config.validate(),
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_rejects_bad_rule_values() {
        let mut config = PricingConfig::default();
        config.rules.push(DiscountRule::new(
            "too_generous",
            Eligibility::TotalQuantityAbove { threshold: 1 },
            DiscountEffect::Rate {
                rate: DiscountRate::from_bps(12_000),
            },
        ));
        assert!(config.validate().is_err());

        let mut config = PricingConfig::default();
        config.rules.push(DiscountRule::new(
            "negative_threshold",
            Eligibility::AnyProductAbove { threshold: -1 },
            DiscountEffect::Flat {
                amount: Money::from_cents(100),
            },
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PricingConfig = serde_json::from_str(
            r#"{"units_per_package": 5, "discount_comparison": "savings"}"#,
        )
        .unwrap();
        assert_eq!(config.units_per_package, 5);
        assert_eq!(config.discount_comparison, DiscountComparison::Savings);
        assert_eq!(config.catalog, PricingConfig::default().catalog);
        assert_eq!(config.rules, PricingConfig::default().rules);
    }
}
