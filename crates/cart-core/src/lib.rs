//! Cart Core
//!
//! Browser-free half of the cart widget: line item model, storage
//! abstraction, cart store, legacy key migration and the view model the
//! frontend renders from. Nothing here touches the DOM.

mod error;
mod config;
mod coerce;
mod models;
mod storage;
mod store;
mod migration;
mod money;
mod view;
mod actions;
mod checkout;

#[cfg(test)]
mod tests;

pub use error::{CartError, CartResult};
pub use config::{CartConfig, MissingIdPolicy, DEFAULT_LEGACY_KEYS};
pub use models::{Cart, LineItem};
pub use storage::{CartStorage, MemoryStorage};
pub use store::CartStore;
pub use migration::{migrate_legacy_keys, Field, FieldRule, MigrationReport, LEGACY_FIELD_RULES};
pub use money::format_money;
pub use view::{navbar_scrolled, render, CartView, RowView};
pub use actions::{apply, dispatch, CartAction, ControlKind};
pub use checkout::CheckoutNotice;
