//! Cart Models
//!
//! Line items and the cart aggregate persisted under the canonical key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;

/// One product entry in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub title: String,
    /// Unit price in the configured currency
    pub price: f64,
    /// Image URL, empty when none was given
    pub img: String,
    pub qty: u32,
}

impl LineItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: f64, qty: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            img: String::new(),
            qty,
        }
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    /// `price * qty`
    pub fn line_total(&self) -> f64 {
        self.price * self.qty as f64
    }

    /// Leniently read a persisted entry. Non-objects and entries without an
    /// id are rejected.
    pub fn from_value(value: &Value, default_title: &str) -> Option<Self> {
        let entry = value.as_object()?;
        let id = entry.get("id").and_then(coerce::to_id)?;
        Some(Self {
            id,
            title: entry
                .get("title")
                .and_then(coerce::to_text)
                .unwrap_or_else(|| default_title.to_string()),
            price: entry.get("price").map(coerce::to_price).unwrap_or(0.0),
            img: entry.get("img").and_then(coerce::to_text).unwrap_or_default(),
            qty: entry.get("qty").map(coerce::to_quantity).unwrap_or(0),
        })
    }
}

/// Ordered list of line items with unique ids
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart, merging duplicate ids and dropping empty lines
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.merge(item);
        }
        cart.retain_positive();
        cart
    }

    /// Parse the persisted JSON list. Anything malformed reads as empty.
    pub fn from_json_str(raw: &str, default_title: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(entries)) => Self::from_items(
                entries
                    .iter()
                    .filter_map(|entry| LineItem::from_value(entry, default_title)),
            ),
            Ok(_) => {
                log::warn!("[CART] persisted cart is not a list, reading as empty");
                Self::new()
            }
            Err(e) => {
                log::warn!("[CART] persisted cart is not valid JSON ({}), reading as empty", e);
                Self::new()
            }
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Add `item.qty` onto an existing line with the same id, or append.
    /// Returns true when an existing line absorbed the quantity.
    pub fn merge(&mut self, item: LineItem) -> bool {
        match self.get_mut(&item.id) {
            Some(existing) => {
                existing.qty = existing.qty.saturating_add(item.qty);
                true
            }
            None => {
                self.items.push(item);
                false
            }
        }
    }

    /// Remove a line by id
    pub fn remove(&mut self, id: &str) -> Option<LineItem> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Drop every line whose quantity reached zero
    pub fn retain_positive(&mut self) {
        self.items.retain(|item| item.qty > 0);
    }

    /// Badge count: sum of quantities
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().fold(0u32, |sum, item| sum.saturating_add(item.qty))
    }

    /// Sum of `price * qty` over all lines
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
