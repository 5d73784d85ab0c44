//! # wrapcart-core: Pure Pricing Logic for wrapcart
//!
//! Computes order totals: subtotal, the single best discount, shipping and
//! gift wrap fees. No I/O; the checkout app (or any other front end) feeds
//! it validated orders and presents the breakdown.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        wrapcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/checkout (console)                         │   │
//! │  │    prompts ──► Order ──► PriceBreakdown ──► "Order Summary"     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ wrapcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌──────────────────┐  │   │
//! │  │   │  types  │  │  money  │  │  rules  │  │ engine           │  │   │
//! │  │   │ Product │  │  Money  │  │ Discount│  │ PricingEngine    │  │   │
//! │  │   │  Order  │  │ (cents) │  │  Rule   │  │ config/validation│  │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Order, PriceBreakdown
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rules`] - Discount rules and the reference rule table
//! - [`config`] - `PricingConfig` with reference defaults
//! - [`engine`] - `PricingEngine`
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and validation
//!
//! ## Example Usage
//!
//! ```rust
//! use wrapcart_core::{Order, PricingEngine};
//!
//! let engine = PricingEngine::default();
//! let order = Order::new()
//!     .with_line("Product A", 10, false)
//!     .with_line("Product B", 10, false)
//!     .with_line("Product C", 5, true);
//!
//! let breakdown = engine.calculate_total(&order).unwrap();
//! assert_eq!(breakdown.discount_name(), Some("bulk_10_discount"));
//! assert_eq!(breakdown.gift_wrap_fee.to_string(), "$5.00");
//! assert_eq!(breakdown.total.to_string(), "$864.90");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod engine;
pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{DiscountComparison, PricingConfig};
pub use engine::PricingEngine;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use rules::{DiscountCandidate, DiscountEffect, DiscountRule, Eligibility};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single product in one order.
///
/// Bounds what a typo can do to an order. Totals are still computed with
/// checked arithmetic, since catalog prices are not bounded.
pub const MAX_ITEM_QUANTITY: i64 = 1_000_000;
