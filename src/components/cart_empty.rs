//! Empty Cart Indicator

use leptos::prelude::*;

use crate::context::use_cart;

/// Shown only while the cart has no lines
#[component]
pub fn CartEmpty() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div
            id="cart-empty"
            class=move || {
                if cart.view.with(|v| v.empty) { "cart-empty" } else { "cart-empty d-none" }
            }
        >
            <p>"購物車目前沒有商品"</p>
            <a href="/" class="btn btn-outline-dark">"繼續購物"</a>
        </div>
    }
}
