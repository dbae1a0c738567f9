//! Cart Page App
//!
//! Empty state, item list and summary for the cart page.

use leptos::prelude::*;

use crate::components::{CartEmpty, CartList, CartSummary};
use crate::context::CartContext;
use crate::store::AppStore;

#[component]
pub fn App(store: AppStore) -> impl IntoView {
    let cart = CartContext::new(store);
    provide_context(cart);

    // Every render refreshes the badge. Writes already do; this covers
    // renders with no write, such as the first mount.
    Effect::new(move |_| {
        cart.view.track();
        cart.with_store(|s| s.update_badge());
    });

    view! {
        <section class="cart-page">
            <CartEmpty />
            <CartList />
            <CartSummary />
        </section>
    }
}
