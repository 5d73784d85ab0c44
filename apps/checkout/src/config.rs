//! # Checkout Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CHECKOUT_*`, nested keys split on `__`)
//! 2. Config file (`checkout.toml`, or the path in `CHECKOUT_CONFIG`)
//! 3. Defaults (reference catalog and rule table)
//!
//! ## Example `checkout.toml`
//! ```toml
//! output = "json"
//!
//! [pricing]
//! discount_comparison = "savings"
//! shipping_fee_per_package = 700   # cents
//! ```
//!
//! Read-only after startup.

use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use wrapcart_core::PricingConfig;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "checkout.toml";

/// How the breakdown is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub output: OutputFormat,
    pub pricing: PricingConfig,
}

impl CheckoutConfig {
    /// Loads defaults, then the config file, then the environment.
    ///
    /// ## Environment Variables
    /// - `CHECKOUT_CONFIG`: config file path (default `checkout.toml`, optional)
    /// - `CHECKOUT_OUTPUT`: `text` or `json`
    /// - `CHECKOUT_PRICING__DISCOUNT_COMPARISON`: `raw_value` or `savings`
    /// - `CHECKOUT_PRICING__UNITS_PER_PACKAGE`, `..._SHIPPING_FEE_PER_PACKAGE`,
    ///   `..._GIFT_WRAP_FEE_PER_UNIT`: integers (fees in cents)
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("CHECKOUT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Config::builder()
            .add_source(File::new(&path, FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("CHECKOUT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parses a TOML document on top of the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use wrapcart_core::{DiscountComparison, Money};

    /// Serializes tests that touch the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: [&str; 4] = [
        "CHECKOUT_CONFIG",
        "CHECKOUT_OUTPUT",
        "CHECKOUT_PRICING__UNITS_PER_PACKAGE",
        "CHECKOUT_PRICING__DISCOUNT_COMPARISON",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CheckoutConfig::from_toml_str("").unwrap();
        assert_eq!(config, CheckoutConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_partial_overrides() {
        let config = CheckoutConfig::from_toml_str(
            r#"
            output = "json"

            [pricing]
            discount_comparison = "savings"
            shipping_fee_per_package = 700
            "#,
        )
        .unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.pricing.discount_comparison, DiscountComparison::Savings);
        assert_eq!(config.pricing.shipping_fee_per_package, Money::from_cents(700));
        assert_eq!(config.pricing.units_per_package, 10);
        assert_eq!(config.pricing.catalog, PricingConfig::default().catalog);
    }

    #[test]
    fn test_custom_catalog_and_rules() {
        let config = CheckoutConfig::from_toml_str(
            r#"
            [[pricing.catalog]]
            id = "Mug"
            price_cents = 1200

            [[pricing.rules]]
            name = "mug_bundle"
            eligibility = { kind = "any_product_above", threshold = 3 }
            effect = { type = "flat", amount = 500 }
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.catalog.len(), 1);
        assert_eq!(config.pricing.catalog[0].id, "Mug");
        assert_eq!(config.pricing.rules.len(), 1);
        assert_eq!(config.pricing.rules[0].name, "mug_bundle");
        assert!(config.pricing.validate().is_ok());
    }

    #[test]
    fn test_load_layers_file_then_environment() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            output = "text"

            [pricing]
            shipping_fee_per_package = 700
            units_per_package = 20
            "#
        )
        .unwrap();
        file.flush().unwrap();

        std::env::set_var("CHECKOUT_CONFIG", file.path());
        std::env::set_var("CHECKOUT_OUTPUT", "json");
        std::env::set_var("CHECKOUT_PRICING__UNITS_PER_PACKAGE", "5");
        std::env::set_var("CHECKOUT_PRICING__DISCOUNT_COMPARISON", "savings");

        let loaded = CheckoutConfig::load();
        clear_env();
        let config = loaded.unwrap();

        // Environment beats the file
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.pricing.units_per_package, 5);
        assert_eq!(config.pricing.discount_comparison, DiscountComparison::Savings);
        // File beats the defaults
        assert_eq!(config.pricing.shipping_fee_per_package, Money::from_cents(700));
        // Untouched keys keep their defaults
        assert_eq!(config.pricing.catalog, PricingConfig::default().catalog);
        assert_eq!(config.pricing.gift_wrap_fee_per_unit, Money::from_cents(100));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("CHECKOUT_CONFIG", dir.path().join("missing.toml"));

        let loaded = CheckoutConfig::load();
        clear_env();

        assert_eq!(loaded.unwrap(), CheckoutConfig::default());
    }
}
