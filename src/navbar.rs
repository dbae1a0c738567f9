//! Navbar Scroll State
//!
//! Toggles `scrolled` on the first `.navbar` so it keeps the right colors
//! at the top of the page.

use cart_core::navbar_scrolled;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

pub fn watch_scroll(threshold: f64) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(nav) = document.query_selector(".navbar").ok().flatten() else {
        return;
    };

    let sync = move || {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let classes = nav.class_list();
        let result = if navbar_scrolled(scroll_y, threshold) {
            classes.add_1("scrolled")
        } else {
            classes.remove_1("scrolled")
        };
        if let Err(e) = result {
            log::debug!("[NAV] class toggle failed: {:?}", e);
        }
    };
    sync();

    let callback = Closure::<dyn FnMut()>::new(sync);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("[NAV] could not watch scroll: {:?}", e);
    }
    // Lives as long as the page
    callback.forget();
}
