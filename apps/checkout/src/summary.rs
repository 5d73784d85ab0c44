//! # Order Summary
//!
//! Renders a [`PriceBreakdown`] for the console.
//!
//! ```text
//! Order Summary:
//! Product A: 25 units - $500.00
//! ...
//!
//! Subtotal: $500.00
//! Discount Applied (tiered_50_discount): -$0.50
//! Shipping Fee: $10.00
//! Gift Wrap Fee: $0.00
//!
//! Total: $509.50
//! ```

use std::io::{self, Write};

use wrapcart_core::PriceBreakdown;

/// Writes the text summary.
pub fn write_summary<W: Write>(breakdown: &PriceBreakdown, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Order Summary:")?;
    for line in &breakdown.lines {
        writeln!(
            out,
            "{}: {} units - {}",
            line.product_id, line.quantity, line.line_total
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Subtotal: {}", breakdown.subtotal)?;
    writeln!(
        out,
        "Discount Applied ({}): -{}",
        breakdown.discount_name().unwrap_or("None"),
        breakdown.discount_amount()
    )?;
    writeln!(out, "Shipping Fee: {}", breakdown.shipping_fee)?;
    writeln!(out, "Gift Wrap Fee: {}", breakdown.gift_wrap_fee)?;
    writeln!(out)?;
    writeln!(out, "Total: {}", breakdown.total)
}

/// Writes the breakdown as pretty JSON (amounts in cents).
pub fn write_json<W: Write>(breakdown: &PriceBreakdown, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, breakdown).map_err(io::Error::from)?;
    writeln!(out)
}
