//! Checkout Stub
//!
//! Real checkout is out of scope; the page only shows a notice.

use crate::config::CartConfig;
use crate::models::Cart;

/// Notice shown when the checkout button is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutNotice {
    /// Nothing to check out
    EmptyCart,
    /// Placeholder for handing off to a payment page
    Proceed,
}

impl CheckoutNotice {
    pub fn new(cart_is_empty: bool) -> Self {
        if cart_is_empty {
            CheckoutNotice::EmptyCart
        } else {
            CheckoutNotice::Proceed
        }
    }

    pub fn for_cart(cart: &Cart) -> Self {
        Self::new(cart.is_empty())
    }

    pub fn message<'a>(&self, config: &'a CartConfig) -> &'a str {
        match self {
            CheckoutNotice::EmptyCart => &config.empty_checkout_notice,
            CheckoutNotice::Proceed => &config.checkout_notice,
        }
    }
}
