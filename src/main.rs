//! Cart Widget Entry Point
//!
//! Bootstrap order matters: legacy keys are folded into the canonical cart
//! before anything renders.

mod logging;
mod config;
mod store;
mod badge;
mod navbar;
mod context;
mod components;
mod app;

use app::App;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Element the cart mounts into; falls back to `<body>`
const MOUNT_ID: &str = "cart-root";

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = config::load();
    let navbar_threshold = config.navbar_scroll_threshold;
    let store = store::open(config);
    badge::attach(&store);

    match cart_core::migrate_legacy_keys(&store) {
        Ok(report) if !report.is_noop() => {
            log::info!("[BOOT] migrated legacy carts: {:?}", report.merged_keys);
        }
        Ok(_) => {}
        Err(e) => log::warn!("[BOOT] legacy migration failed: {}", e),
    }
    store.update_badge();

    navbar::watch_scroll(navbar_threshold);

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => mount_to(root, move || view! { <App store=store /> }).forget(),
        None => mount_to_body(move || view! { <App store=store /> }),
    }
}
