//! Cart Context
//!
//! Shared handle to the store plus the render version, provided via the
//! Leptos Context API.

use cart_core::{dispatch, render, CartAction, CartView};
use leptos::prelude::*;

use crate::store::AppStore;

/// App-wide cart handle
#[derive(Clone, Copy)]
pub struct CartContext {
    store: StoredValue<AppStore, LocalStorage>,
    /// Bumped after every successful mutation - read
    pub version: ReadSignal<u32>,
    /// Bumped after every successful mutation - write
    set_version: WriteSignal<u32>,
    /// View model recomputed from storage on every version bump
    pub view: Memo<CartView>,
}

impl CartContext {
    pub fn new(store: AppStore) -> Self {
        let store = StoredValue::new_local(store);
        let (version, set_version) = signal(0u32);
        let view = Memo::new(move |_| {
            version.track();
            store.with_value(|s| render(&s.read(), s.config()))
        });
        Self {
            store,
            version,
            set_version,
            view,
        }
    }

    pub fn with_store<R>(&self, f: impl FnOnce(&AppStore) -> R) -> R {
        self.store.with_value(f)
    }

    /// Force a re-render from storage
    pub fn refresh(&self) {
        self.set_version.update(|v| *v += 1);
    }

    /// Persist an interaction and re-render when it changed the cart
    pub fn dispatch(&self, action: CartAction) {
        match self.with_store(|s| dispatch(s, &action)) {
            Ok(true) => self.refresh(),
            Ok(false) => {}
            Err(e) => log::warn!("[CART] {:?} failed: {}", action, e),
        }
    }
}

/// Get the cart context
pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}
