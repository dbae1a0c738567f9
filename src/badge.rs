//! Cart Badge
//!
//! Mirrors the total quantity into the host page's badge counter, which
//! lives outside the mounted app (usually in the navbar).

use crate::store::AppStore;

/// Subscribe the badge element to quantity changes. Pages without the
/// element are left alone.
pub fn attach(store: &AppStore) {
    let element_id = store.config().badge_element_id.clone();
    store.subscribe(move |total| {
        let badge = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&element_id));
        if let Some(badge) = badge {
            badge.set_text_content(Some(&total.to_string()));
        }
    });
}
