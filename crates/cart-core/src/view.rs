//! Cart View Model
//!
//! Pure projection of a cart into what the page displays. The frontend
//! only copies these values into the DOM.

use crate::config::CartConfig;
use crate::models::{Cart, LineItem};
use crate::money::format_money;

/// One rendered cart row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowView {
    pub id: String,
    pub title: String,
    /// Image URL with the placeholder substituted for empty values
    pub img: String,
    pub price_text: String,
    pub qty: u32,
    pub line_total_text: String,
}

impl RowView {
    fn from_item(item: &LineItem, config: &CartConfig) -> Self {
        let img = if item.img.is_empty() {
            config.placeholder_image.clone()
        } else {
            item.img.clone()
        };
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            img,
            price_text: format_money(item.price, &config.currency_prefix),
            qty: item.qty,
            line_total_text: format_money(item.line_total(), &config.currency_prefix),
        }
    }
}

/// Everything the cart page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Show the empty-state indicator instead of rows
    pub empty: bool,
    pub rows: Vec<RowView>,
    pub subtotal_text: String,
    /// Total quantity for the badge
    pub badge: u32,
}

/// Project a cart into its view
pub fn render(cart: &Cart, config: &CartConfig) -> CartView {
    if cart.is_empty() {
        return CartView {
            empty: true,
            rows: Vec::new(),
            subtotal_text: format_money(0.0, &config.currency_prefix),
            badge: 0,
        };
    }
    CartView {
        empty: false,
        rows: cart.iter().map(|item| RowView::from_item(item, config)).collect(),
        subtotal_text: format_money(cart.subtotal(), &config.currency_prefix),
        badge: cart.total_quantity(),
    }
}

/// Whether the navbar should carry its `scrolled` class
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}
