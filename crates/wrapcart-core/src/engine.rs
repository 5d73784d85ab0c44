//! # Pricing Engine
//!
//! Turns an order into a [`PriceBreakdown`].
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order { lines }                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate: known products, no duplicates, 0 <= qty <= max              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lines in catalog order ──► total quantity, subtotal                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  eligible_discounts ──► pick ONE (raw value or savings, first wins)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shipping = floor(qty / units_per_package) × fee_per_package           │
//! │  gift wrap = Σ wrapped qty × fee_per_unit                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total = subtotal - discount + shipping + gift wrap                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine holds only immutable configuration, so one instance can be
//! shared between threads and every call is independent.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::{DiscountComparison, PricingConfig};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::rules::DiscountCandidate;
use crate::types::{AppliedDiscount, LineSummary, Order, PriceBreakdown, Product};
use crate::validation::validate_quantity;

/// Prices orders against a fixed catalog and rule table.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl Default for PricingEngine {
    /// Engine over the reference configuration.
    fn default() -> Self {
        PricingEngine {
            config: PricingConfig::default(),
        }
    }
}

impl PricingEngine {
    /// Validates `config` and builds an engine over it.
    ///
    /// ## Example
    /// ```rust
    /// use wrapcart_core::{Order, PricingConfig, PricingEngine};
    ///
    /// let engine = PricingEngine::new(PricingConfig::default()).unwrap();
    /// let breakdown = engine
    ///     .calculate_total(&Order::new().with_line("Product C", 16, false))
    ///     .unwrap();
    ///
    /// assert_eq!(breakdown.discount_name(), Some("tiered_50_discount"));
    /// assert_eq!(breakdown.total.to_string(), "$804.50");
    /// ```
    pub fn new(config: PricingConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(PricingEngine { config })
    }

    /// Catalog products in evaluation order.
    pub fn catalog(&self) -> &[Product] {
        &self.config.catalog
    }

    /// Unit price of a catalog product.
    pub fn price_of(&self, product_id: &str) -> Option<Money> {
        self.config.product(product_id).map(Product::price)
    }

    // =========================================================================
    // Discount Selection
    // =========================================================================

    /// All rules the quantities qualify for, in rule table order.
    pub fn eligible_discounts(
        &self,
        total_quantity: i64,
        quantities: &[(&str, i64)],
    ) -> Vec<DiscountCandidate> {
        self.config
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(total_quantity, quantities))
            .collect()
    }

    /// Picks the eligible rule with the numerically largest raw value.
    ///
    /// Flat amounts and rates are compared as plain numbers (10 beats
    /// 0.50, 0.13 beats 0.125), and the winning number is returned as a
    /// currency amount: a 0.10 rate discounts $0.10. Ties go to the earlier
    /// rule. Returns `(None, 0)` when nothing is eligible.
    pub fn select_discount(&self, total_quantity: i64, quantities: &[(&str, i64)]) -> AppliedDiscount {
        pick_largest(
            self.eligible_discounts(total_quantity, quantities),
            DiscountCandidate::raw_value_bps,
            DiscountCandidate::raw_amount,
        )
    }

    /// Picks the eligible rule that saves the most money on `subtotal`.
    ///
    /// Rates are applied to the subtotal (rounded half-up to the cent);
    /// flat amounts count at face value. Ties go to the earlier rule.
    pub fn select_discount_by_savings(
        &self,
        total_quantity: i64,
        quantities: &[(&str, i64)],
        subtotal: Money,
    ) -> AppliedDiscount {
        pick_largest(
            self.eligible_discounts(total_quantity, quantities),
            |candidate| candidate.savings(subtotal),
            |candidate| candidate.savings(subtotal),
        )
    }

    // =========================================================================
    // Totals
    // =========================================================================

    /// Prices an order.
    ///
    /// ## Errors
    /// - `ProductNotFound` if a line names a product outside the catalog
    /// - `Validation` for negative or oversized quantities and duplicate lines
    /// - `NegativeTotal` if the configured discount exceeds subtotal plus fees
    /// - `AmountOverflow` if configured prices or fees push an amount past
    ///   the i64 cents range
    pub fn calculate_total(&self, order: &Order) -> CoreResult<PriceBreakdown> {
        self.validate_order(order)?;

        let lines: Vec<LineSummary> = self
            .config
            .catalog
            .iter()
            .map(|product| -> CoreResult<LineSummary> {
                let line = order.line(&product.id);
                let quantity = line.map_or(0, |l| l.quantity);
                let line_total = product
                    .price()
                    .checked_multiply_quantity(quantity)
                    .ok_or_else(|| overflow("line total"))?;
                Ok(LineSummary {
                    product_id: product.id.clone(),
                    quantity,
                    unit_price: product.price(),
                    line_total,
                    gift_wrap: line.is_some_and(|l| l.gift_wrap),
                })
            })
            .collect::<CoreResult<_>>()?;

        let quantities: Vec<(&str, i64)> = lines
            .iter()
            .map(|l| (l.product_id.as_str(), l.quantity))
            .collect();

        let total_quantity: i64 = lines.iter().map(|l| l.quantity).sum();
        let subtotal = checked_sum(lines.iter().map(|l| l.line_total), "subtotal")?;

        let discount = match self.config.discount_comparison {
            DiscountComparison::RawValue => self.select_discount(total_quantity, &quantities),
            DiscountComparison::Savings => {
                self.select_discount_by_savings(total_quantity, &quantities, subtotal)
            }
        };

        let packages = total_quantity / self.config.units_per_package;
        let shipping_fee = self
            .config
            .shipping_fee_per_package
            .checked_multiply_quantity(packages)
            .ok_or_else(|| overflow("shipping fee"))?;

        let mut gift_wrap_fee = Money::zero();
        for line in lines.iter().filter(|l| l.gift_wrap) {
            gift_wrap_fee = self
                .config
                .gift_wrap_fee_per_unit
                .checked_multiply_quantity(line.quantity)
                .and_then(|fee| gift_wrap_fee.checked_add(fee))
                .ok_or_else(|| overflow("gift wrap fee"))?;
        }

        let total = subtotal
            .checked_sub(discount.amount)
            .and_then(|t| t.checked_add(shipping_fee))
            .and_then(|t| t.checked_add(gift_wrap_fee))
            .ok_or_else(|| overflow("total"))?;

        debug!(
            total_quantity,
            subtotal = %subtotal,
            discount = ?discount.name,
            discount_amount = %discount.amount,
            shipping_fee = %shipping_fee,
            gift_wrap_fee = %gift_wrap_fee,
            total = %total,
            "Order priced"
        );

        if total.is_negative() {
            warn!(total = %total, discount = ?discount.name, "Rejecting order with negative total");
            return Err(CoreError::NegativeTotal { total });
        }

        Ok(PriceBreakdown {
            lines,
            total_quantity,
            subtotal,
            discount,
            shipping_fee,
            gift_wrap_fee,
            total,
        })
    }

    fn validate_order(&self, order: &Order) -> CoreResult<()> {
        let mut seen = HashSet::new();

        for line in &order.lines {
            if self.config.product(&line.product_id).is_none() {
                return Err(CoreError::ProductNotFound(line.product_id.clone()));
            }
            if !seen.insert(line.product_id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "order line".to_string(),
                    value: line.product_id.clone(),
                }
                .into());
            }
            validate_quantity(line.quantity, &line.product_id)?;
        }

        Ok(())
    }
}

/// Largest candidate by `key`, discounted by `amount`; the first one wins
/// a tie.
fn pick_largest<K, F, G>(candidates: Vec<DiscountCandidate>, key: F, amount: G) -> AppliedDiscount
where
    K: Ord,
    F: Fn(&DiscountCandidate) -> K,
    G: Fn(&DiscountCandidate) -> Money,
{
    let mut best: Option<(DiscountCandidate, K)> = None;

    for candidate in candidates {
        let candidate_key = key(&candidate);
        debug!(
            rule = %candidate.rule_name,
            amount = %amount(&candidate),
            product = ?candidate.qualifying_product,
            "Discount candidate"
        );
        let is_better = best
            .as_ref()
            .map_or(true, |(_, best_key)| candidate_key > *best_key);
        if is_better {
            best = Some((candidate, candidate_key));
        }
    }

    match best {
        Some((candidate, _)) => AppliedDiscount {
            amount: amount(&candidate),
            name: Some(candidate.rule_name),
        },
        None => AppliedDiscount::none(),
    }
}

fn overflow(stage: &'static str) -> CoreError {
    warn!(stage, "Order amount overflowed");
    CoreError::AmountOverflow { stage }
}

fn checked_sum(mut amounts: impl Iterator<Item = Money>, stage: &'static str) -> CoreResult<Money> {
    amounts.try_fold(Money::zero(), |acc, m| acc.checked_add(m).ok_or_else(|| overflow(stage)))
}

// =============================================================================
// Unit Tests
// =============================================================================
