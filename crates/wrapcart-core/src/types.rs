//! # Domain Types
//!
//! Catalog, order and breakdown types used throughout wrapcart.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │     Order       │   │   PriceBreakdown    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │──►│  lines[]        │──►│  subtotal           │   │
//! │  │  price_cents    │   │   product_id    │   │  discount           │   │
//! │  └─────────────────┘   │   quantity      │   │  shipping / wrap    │   │
//! │    (static config)     │   gift_wrap     │   │  total              │   │
//! │                        └─────────────────┘   └─────────────────────┘   │
//! │                         (per calculation)      (consumed by caller)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// A fractional discount rate in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10% = 0.10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Reads the rate's plain number as a currency amount.
    ///
    /// 0.10 becomes $0.10, 0.50 becomes $0.50. This is the amount a rate
    /// subtracts once it wins a raw-value comparison. Sub-cent remainders
    /// round half-up; the comparison itself runs on basis points.
    #[inline]
    pub const fn as_raw_amount(&self) -> Money {
        Money::from_cents(((self.0 + 50) / 100) as i64)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry. Immutable once the engine is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Product identifier, also the display name ("Product A").
    pub id: String,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl Product {
    pub fn new(id: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            price_cents: price.cents(),
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order
// =============================================================================

/// One product's selection in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub product_id: String,
    /// Units ordered. Signed so that bad input reaches validation instead of
    /// wrapping; the engine rejects anything below zero.
    pub quantity: i64,
    pub gift_wrap: bool,
}

impl OrderLine {
    pub fn new(product_id: impl Into<String>, quantity: i64, gift_wrap: bool) -> Self {
        OrderLine {
            product_id: product_id.into(),
            quantity,
            gift_wrap,
        }
    }
}

/// A set of order lines for one calculation.
///
/// Catalog products without a line count as zero units, no gift wrap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Order::default()
    }

    /// Builder-style line append.
    ///
    /// ## Example
    /// ```rust
    /// use wrapcart_core::types::Order;
    ///
    /// let order = Order::new()
    ///     .with_line("Product A", 25, false)
    ///     .with_line("Product C", 2, true);
    /// assert_eq!(order.lines.len(), 2);
    /// ```
    pub fn with_line(mut self, product_id: impl Into<String>, quantity: i64, gift_wrap: bool) -> Self {
        self.lines.push(OrderLine::new(product_id, quantity, gift_wrap));
        self
    }

    /// Looks up the line for a product.
    pub fn line(&self, product_id: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }
}

// =============================================================================
// Results
// =============================================================================

/// The single discount chosen for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedDiscount {
    /// Rule name, `None` when no rule was eligible.
    pub name: Option<String>,
    /// Amount subtracted from the subtotal.
    pub amount: Money,
}

impl AppliedDiscount {
    /// No discount: `(None, 0)`.
    pub fn none() -> Self {
        AppliedDiscount {
            name: None,
            amount: Money::zero(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.name.is_none()
    }
}

/// Per-product line of a breakdown, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineSummary {
    pub product_id: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// quantity × unit price
    pub line_total: Money,
    pub gift_wrap: bool,
}

/// Full monetary breakdown of an order.
///
/// `total = subtotal - discount.amount + shipping_fee + gift_wrap_fee`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    /// One entry per catalog product, including zero-quantity ones.
    pub lines: Vec<LineSummary>,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount: AppliedDiscount,
    pub shipping_fee: Money,
    pub gift_wrap_fee: Money,
    pub total: Money,
}

impl PriceBreakdown {
    /// Name of the applied rule, if any.
    pub fn discount_name(&self) -> Option<&str> {
        self.discount.name.as_deref()
    }

    pub fn discount_amount(&self) -> Money {
        self.discount.amount
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_bps() {
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert_eq!(rate, DiscountRate::from_bps(1000));
    }

    #[test]
    fn test_discount_rate_as_raw_amount() {
        assert_eq!(DiscountRate::from_bps(1000).as_raw_amount().cents(), 10);
        assert_eq!(DiscountRate::from_bps(5000).as_raw_amount().cents(), 50);
        assert_eq!(DiscountRate::from_bps(500).as_raw_amount().cents(), 5);
        // 0.125 → $0.13
        assert_eq!(DiscountRate::from_bps(1250).as_raw_amount().cents(), 13);
    }

    #[test]
    fn test_product_price() {
        let product = Product::new("Product B", Money::from_major_minor(40, 0));
        assert_eq!(product.price_cents, 4000);
        assert_eq!(product.price(), Money::from_cents(4000));
    }

    #[test]
    fn test_order_line_lookup() {
        let order = Order::new()
            .with_line("Product A", 3, true)
            .with_line("Product B", 0, false);

        let line = order.line("Product A").unwrap();
        assert_eq!(line.quantity, 3);
        assert!(line.gift_wrap);
        assert!(order.line("Product C").is_none());
    }

    #[test]
    fn test_applied_discount_none() {
        let none = AppliedDiscount::none();
        assert!(none.is_none());
        assert!(none.amount.is_zero());
    }

    #[test]
    fn test_order_deserializes_from_json() {
        let order: Order = serde_json::from_str(
            r#"{"lines":[{"product_id":"Product C","quantity":16,"gift_wrap":false}]}"#,
        )
        .unwrap();
        assert_eq!(order, Order::new().with_line("Product C", 16, false));
    }
}
