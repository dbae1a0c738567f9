//! Checkout Button Component
//!
//! Stand-in for a real checkout: shows a blocking notice and changes
//! nothing.

use cart_core::CheckoutNotice;
use leptos::prelude::*;

use crate::context::use_cart;

#[component]
pub fn CheckoutButton() -> impl IntoView {
    let cart = use_cart();

    let checkout = move |_| {
        let message = cart.with_store(|s| {
            CheckoutNotice::new(s.is_empty())
                .message(s.config())
                .to_string()
        });
        if let Err(e) = window().alert_with_message(&message) {
            log::warn!("[CHECKOUT] alert failed: {:?}", e);
        }
    };

    view! {
        <button id="checkout-btn" class="btn btn-dark w-100 mt-3" on:click=checkout>
            "前往結帳"
        </button>
    }
}
