//! Cart Store
//!
//! Single owner of the persisted cart. Every read goes back to storage;
//! every write replaces the whole list and notifies count subscribers.

use std::cell::RefCell;

use crate::config::CartConfig;
use crate::error::CartResult;
use crate::models::Cart;
use crate::storage::CartStorage;

type CountListener = Box<dyn Fn(u32)>;

/// Storage-backed cart with total-quantity subscriptions
pub struct CartStore<S: CartStorage> {
    storage: S,
    config: CartConfig,
    listeners: RefCell<Vec<CountListener>>,
}

impl<S: CartStorage> CartStore<S> {
    pub fn new(storage: S, config: CartConfig) -> Self {
        Self {
            storage,
            config,
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current cart. Storage failures and malformed data read as empty.
    pub fn read(&self) -> Cart {
        match self.storage.get(&self.config.storage_key) {
            Ok(Some(raw)) => Cart::from_json_str(&raw, &self.config.default_title),
            Ok(None) => Cart::new(),
            Err(e) => {
                log::warn!("[CART] read failed, using empty cart: {}", e);
                Cart::new()
            }
        }
    }

    /// Replace the persisted cart, then refresh subscribers
    pub fn write(&self, cart: &Cart) -> CartResult<()> {
        let mut cart = cart.clone();
        cart.retain_positive();
        let json = serde_json::to_string(&cart)?;
        self.storage.set(&self.config.storage_key, &json)?;
        log::debug!("[CART] wrote {} lines", cart.len());
        self.notify(cart.total_quantity());
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn total_quantity(&self) -> u32 {
        self.read().total_quantity()
    }

    /// Push the current total quantity to subscribers and return it
    pub fn update_badge(&self) -> u32 {
        let total = self.total_quantity();
        self.notify(total);
        total
    }

    /// Register a total-quantity listener. Listeners run synchronously, in
    /// registration order, and must not subscribe from inside a callback.
    pub fn subscribe(&self, listener: impl Fn(u32) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self, total: u32) {
        for listener in self.listeners.borrow().iter() {
            listener(total);
        }
    }
}
