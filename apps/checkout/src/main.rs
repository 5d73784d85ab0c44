//! # wrapcart Checkout Entry Point
//!
//! ```text
//! $ checkout
//! Enter quantity for Product A: 25
//! Is Product A wrapped as a gift? (yes/no): no
//! ...
//! Order Summary:
//! ...
//! Total: $509.50
//! ```
//!
//! The actual setup is in lib.rs for testability.

fn main() -> anyhow::Result<()> {
    wrapcart_checkout::run()
}
