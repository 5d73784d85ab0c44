//! # Discount Rules
//!
//! The rule table: what makes an order eligible for a discount, and what
//! the discount is worth.
//!
//! ## Reference Rule Table (evaluation order)
//! ```text
//! ┌──────────────────────┬──────────────────────────────┬────────────┐
//! │ name                 │ eligible when                │ effect     │
//! ├──────────────────────┼──────────────────────────────┼────────────┤
//! │ flat_10_discount     │ total quantity > 200         │ $10 flat   │
//! │ bulk_10_discount     │ total quantity > 20          │ rate 0.10  │
//! │ tiered_50_discount   │ any product quantity > 15    │ rate 0.50  │
//! │ bulk_5_discount      │ first product quantity > 10  │ rate 0.05  │
//! └──────────────────────┴──────────────────────────────┴────────────┘
//! ```
//!
//! Evaluation order matters: when two candidates are worth the same, the
//! earlier rule wins.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::DiscountRate;

pub const FLAT_10_DISCOUNT: &str = "flat_10_discount";
pub const BULK_10_DISCOUNT: &str = "bulk_10_discount";
pub const TIERED_50_DISCOUNT: &str = "tiered_50_discount";
pub const BULK_5_DISCOUNT: &str = "bulk_5_discount";

// =============================================================================
// Eligibility
// =============================================================================

/// When a rule applies. Thresholds are strict: quantity must exceed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Eligibility {
    /// Total units across the order exceed `threshold`.
    TotalQuantityAbove { threshold: i64 },

    /// Any single product's units exceed `threshold`.
    AnyProductAbove { threshold: i64 },

    /// Same test as `AnyProductAbove`, but the scan stops at the first
    /// qualifying product and the candidate records which one it was.
    FirstProductAbove { threshold: i64 },
}

impl Eligibility {
    pub fn threshold(&self) -> i64 {
        match *self {
            Eligibility::TotalQuantityAbove { threshold }
            | Eligibility::AnyProductAbove { threshold }
            | Eligibility::FirstProductAbove { threshold } => threshold,
        }
    }
}

// =============================================================================
// Effect
// =============================================================================

/// What an eligible rule is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountEffect {
    /// A fixed amount off.
    Flat { amount: Money },

    /// A fraction of the subtotal.
    Rate { rate: DiscountRate },
}

impl DiscountEffect {
    /// The effect's plain number, read as currency.
    ///
    /// ```rust
    /// use wrapcart_core::money::Money;
    /// use wrapcart_core::rules::DiscountEffect;
    /// use wrapcart_core::types::DiscountRate;
    ///
    /// let flat = DiscountEffect::Flat { amount: Money::from_cents(1000) };
    /// let rate = DiscountEffect::Rate { rate: DiscountRate::from_bps(1000) };
    /// assert_eq!(flat.raw_amount().cents(), 1000); // 10
    /// assert_eq!(rate.raw_amount().cents(), 10);   // 0.10
    /// ```
    pub fn raw_amount(&self) -> Money {
        match self {
            DiscountEffect::Flat { amount } => *amount,
            DiscountEffect::Rate { rate } => rate.as_raw_amount(),
        }
    }

    /// The effect's plain number in ten-thousandths, for raw comparison.
    ///
    /// A flat $10 is 10 → 100_000; a 0.125 rate is 1_250. Comparing at this
    /// precision keeps 0.125 below a flat $0.13 even though both read as
    /// 13 cents.
    pub fn raw_value_bps(&self) -> i128 {
        match self {
            DiscountEffect::Flat { amount } => amount.cents() as i128 * 100,
            DiscountEffect::Rate { rate } => rate.bps() as i128,
        }
    }

    /// The money actually saved on `subtotal`.
    pub fn savings(&self, subtotal: Money) -> Money {
        match self {
            DiscountEffect::Flat { amount } => *amount,
            DiscountEffect::Rate { rate } => subtotal.portion(*rate),
        }
    }
}

// =============================================================================
// Rule
// =============================================================================

/// A named discount rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    pub name: String,
    pub eligibility: Eligibility,
    pub effect: DiscountEffect,
}

impl DiscountRule {
    pub fn new(name: impl Into<String>, eligibility: Eligibility, effect: DiscountEffect) -> Self {
        DiscountRule {
            name: name.into(),
            eligibility,
            effect,
        }
    }

    /// Checks the rule against an order's quantities.
    ///
    /// `quantities` is (product id, units) in catalog order.
    pub fn evaluate(&self, total_quantity: i64, quantities: &[(&str, i64)]) -> Option<DiscountCandidate> {
        let qualifying_product = match self.eligibility {
            Eligibility::TotalQuantityAbove { threshold } => {
                if total_quantity <= threshold {
                    return None;
                }
                None
            }
            Eligibility::AnyProductAbove { threshold } => {
                if !quantities.iter().any(|&(_, qty)| qty > threshold) {
                    return None;
                }
                None
            }
            Eligibility::FirstProductAbove { threshold } => {
                let (product, _) = quantities.iter().find(|&&(_, qty)| qty > threshold)?;
                Some(product.to_string())
            }
        };

        Some(DiscountCandidate {
            rule_name: self.name.clone(),
            effect: self.effect,
            qualifying_product,
        })
    }
}

/// An eligible rule for a particular order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCandidate {
    pub rule_name: String,
    pub effect: DiscountEffect,
    /// Set by `FirstProductAbove` rules only.
    pub qualifying_product: Option<String>,
}

impl DiscountCandidate {
    pub fn raw_amount(&self) -> Money {
        self.effect.raw_amount()
    }

    pub fn raw_value_bps(&self) -> i128 {
        self.effect.raw_value_bps()
    }

    pub fn savings(&self, subtotal: Money) -> Money {
        self.effect.savings(subtotal)
    }
}

/// The reference rule table, in evaluation order.
pub fn reference_rules() -> Vec<DiscountRule> {
    vec![
        DiscountRule::new(
            FLAT_10_DISCOUNT,
            Eligibility::TotalQuantityAbove { threshold: 200 },
            DiscountEffect::Flat {
                amount: Money::from_major_minor(10, 0),
            },
        ),
        DiscountRule::new(
            BULK_10_DISCOUNT,
            Eligibility::TotalQuantityAbove { threshold: 20 },
            DiscountEffect::Rate {
                rate: DiscountRate::from_bps(1000),
            },
        ),
        DiscountRule::new(
            TIERED_50_DISCOUNT,
            Eligibility::AnyProductAbove { threshold: 15 },
            DiscountEffect::Rate {
                rate: DiscountRate::from_bps(5000),
            },
        ),
        DiscountRule::new(
            BULK_5_DISCOUNT,
            Eligibility::FirstProductAbove { threshold: 10 },
            DiscountEffect::Rate {
                rate: DiscountRate::from_bps(500),
            },
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
