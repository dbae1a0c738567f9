//! UI Components
//!
//! Leptos components for the cart page.

mod cart_empty;
mod cart_list;
mod cart_row;
mod cart_summary;
mod checkout_button;

pub use cart_empty::CartEmpty;
pub use cart_list::CartList;
pub use cart_row::CartRow;
pub use cart_summary::CartSummary;
pub use checkout_button::CheckoutButton;
