//! Cart Row Component
//!
//! Markup only. Buttons carry the classes `CartList` dispatches on.

use cart_core::RowView;
use leptos::prelude::*;

/// A single line item row
#[component]
pub fn CartRow(row: RowView) -> impl IntoView {
    let RowView {
        id,
        title,
        img,
        price_text,
        qty,
        line_total_text,
    } = row;

    view! {
        <div class="cart-item" data-id=id>
            <img src=img alt=title.clone() />
            <div class="flex-grow-1">
                <div class="d-flex justify-content-between align-items-start">
                    <div>
                        <div class="cart-item-title">{title}</div>
                        <a href="#" class="remove-btn small mt-1 d-inline-block">"移除"</a>
                    </div>
                    <div class="cart-item-price">{price_text}</div>
                </div>

                <div class="mt-2 d-flex justify-content-between align-items-center">
                    <div class="qty-box">
                        <button class="qty-btn btn-minus" aria-label="減少">"−"</button>
                        <input
                            class="qty-input"
                            type="number"
                            min="0"
                            step="1"
                            prop:value=qty.to_string()
                        />
                        <button class="qty-btn btn-plus" aria-label="增加">"＋"</button>
                    </div>
                    <div class="text-muted small">
                        "小計：" <strong>{line_total_text}</strong>
                    </div>
                </div>
            </div>
        </div>
    }
}
