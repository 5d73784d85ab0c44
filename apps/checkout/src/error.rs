//! # Checkout Errors
//!
//! Errors raised while collecting an order from the console. Pricing
//! errors come from `wrapcart-core` and are reported through `anyhow`.

use thiserror::Error;
use wrapcart_core::ValidationError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Reading stdin or writing a prompt failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The user typed something that is not a valid quantity or yes/no.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Input ended before every product was answered.
    #[error("Input ended before {field} for {product} was entered")]
    InputClosed { product: String, field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_closed_message() {
        let err = CheckoutError::InputClosed {
            product: "Product B".to_string(),
            field: "quantity".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Input ended before quantity for Product B was entered"
        );
    }
}
