//! # Console Prompts
//!
//! Collects an order by asking, for each catalog product in order:
//!
//! ```text
//! Enter quantity for Product A: 25
//! Is Product A wrapped as a gift? (yes/no): no
//! ```
//!
//! Generic over `BufRead`/`Write` so tests can drive it with byte slices.
//! The first invalid answer aborts the checkout with a message naming the
//! product and field.

use std::io::{BufRead, Write};

use tracing::debug;
use wrapcart_core::validation::{parse_gift_wrap, parse_quantity};
use wrapcart_core::{Order, Product};

use crate::error::CheckoutError;

/// Prompts for every product in `catalog` and builds the order.
pub fn read_order<R, W>(catalog: &[Product], input: &mut R, output: &mut W) -> Result<Order, CheckoutError>
where
    R: BufRead,
    W: Write,
{
    let mut order = Order::new();

    for product in catalog {
        let answer = ask(
            input,
            output,
            &format!("Enter quantity for {}:", product.id),
            &product.id,
            "quantity",
        )?;
        let quantity = parse_quantity(&answer, &product.id)?;

        let answer = ask(
            input,
            output,
            &format!("Is {} wrapped as a gift? (yes/no):", product.id),
            &product.id,
            "gift wrap",
        )?;
        let gift_wrap = parse_gift_wrap(&answer, &product.id)?;

        debug!(product = %product.id, quantity, gift_wrap, "Line entered");
        order = order.with_line(product.id.clone(), quantity, gift_wrap);
    }

    Ok(order)
}

fn ask<R, W>(input: &mut R, output: &mut W, question: &str, product: &str, field: &str) -> Result<String, CheckoutError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{} ", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CheckoutError::InputClosed {
            product: product.to_string(),
            field: field.to_string(),
        });
    }

    Ok(line)
}
