//! Cart Summary Component

use leptos::prelude::*;

use crate::components::CheckoutButton;
use crate::context::use_cart;

/// Subtotal line and checkout trigger
#[component]
pub fn CartSummary() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="cart-summary">
            <div class="d-flex justify-content-between">
                <span>"小計"</span>
                <strong id="cart-subtotal">
                    {move || cart.view.with(|v| v.subtotal_text.clone())}
                </strong>
            </div>
            <CheckoutButton />
        </div>
    }
}
