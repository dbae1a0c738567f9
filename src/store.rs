//! Browser Cart Store
//!
//! Backs the core `CartStore` with `window.localStorage`.

use cart_core::{CartConfig, CartError, CartResult, CartStorage, CartStore, MemoryStorage};
use wasm_bindgen::JsValue;

/// Storage the page ended up with
pub enum PageStorage {
    Local(web_sys::Storage),
    /// `localStorage` is unavailable (privacy mode, sandboxed iframe)
    Memory(MemoryStorage),
}

/// Store type used throughout the frontend
pub type AppStore = CartStore<PageStorage>;

fn js_error(e: JsValue) -> CartError {
    CartError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl CartStorage for PageStorage {
    fn get(&self, key: &str) -> CartResult<Option<String>> {
        match self {
            PageStorage::Local(storage) => storage.get_item(key).map_err(js_error),
            PageStorage::Memory(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> CartResult<()> {
        match self {
            PageStorage::Local(storage) => storage.set_item(key, value).map_err(js_error),
            PageStorage::Memory(storage) => storage.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> CartResult<()> {
        match self {
            PageStorage::Local(storage) => storage.remove_item(key).map_err(js_error),
            PageStorage::Memory(storage) => storage.remove(key),
        }
    }
}

/// Open the cart over `localStorage`, or over memory when it is missing
pub fn open(config: CartConfig) -> AppStore {
    let storage = match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => PageStorage::Local(storage),
        _ => {
            log::warn!("[STORE] localStorage unavailable, cart changes will not persist");
            PageStorage::Memory(MemoryStorage::new())
        }
    };
    CartStore::new(storage, config)
}
