//! Cart List Component
//!
//! Renders the rows and owns the only click/change listeners for them.
//! Events are delegated: the handler finds the row through `data-id` and
//! the control through its class.

use cart_core::{CartAction, ControlKind};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::CartRow;
use crate::context::use_cart;

/// Element that was hit plus the id of the row containing it
fn row_target(target: Option<web_sys::EventTarget>) -> Option<(web_sys::Element, String)> {
    let target = target?.dyn_into::<web_sys::Element>().ok()?;
    let row = target.closest(".cart-item").ok().flatten()?;
    let id = row.get_attribute("data-id")?;
    Some((target, id))
}

#[component]
pub fn CartList() -> impl IntoView {
    let cart = use_cart();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some((target, id)) = row_target(ev.target()) else { return };
        let Some(action) = ControlKind::from_classes(&target.class_name())
            .and_then(|kind| kind.click_action(id))
        else {
            return;
        };
        if matches!(action, CartAction::Remove(_)) {
            ev.prevent_default();
        }
        cart.dispatch(action);
    };

    let on_change = move |ev: web_sys::Event| {
        let Some((target, id)) = row_target(ev.target()) else { return };
        let Some(kind) = ControlKind::from_classes(&target.class_name()) else { return };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
        if let Some(action) = kind.change_action(id, input.value()) {
            cart.dispatch(action);
        }
    };

    view! {
        <div id="cart-list" class="cart-list" on:click=on_click on:change=on_change>
            {move || {
                // Rows are rebuilt on every mutation, even when the view is
                // unchanged: a typed "3.9" truncated back to 3 must still
                // reseed the input.
                cart.version.track();
                cart.view
                    .get()
                    .rows
                    .into_iter()
                    .map(|row| view! { <CartRow row=row /> })
                    .collect_view()
            }}
        </div>
    }
}
