//! Cart Interactions
//!
//! Mutations triggered from the rendered list: increment, decrement,
//! remove and direct quantity edits.

use serde_json::Value;

use crate::coerce;
use crate::error::CartResult;
use crate::models::Cart;
use crate::storage::CartStorage;
use crate::store::CartStore;

/// A user interaction on one cart line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Decrement(String),
    Increment(String),
    Remove(String),
    /// Raw text typed into the quantity input
    SetQuantity(String, String),
}

impl CartAction {
    pub fn id(&self) -> &str {
        match self {
            CartAction::Decrement(id)
            | CartAction::Increment(id)
            | CartAction::Remove(id)
            | CartAction::SetQuantity(id, _) => id,
        }
    }
}

/// Row control recognized from an element's class list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// `btn-minus`
    Decrement,
    /// `btn-plus`
    Increment,
    /// `remove-btn`
    Remove,
    /// `qty-input`
    Quantity,
}

impl ControlKind {
    /// Classify a space-separated class attribute
    pub fn from_classes(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| match class {
            "btn-minus" => Some(ControlKind::Decrement),
            "btn-plus" => Some(ControlKind::Increment),
            "remove-btn" => Some(ControlKind::Remove),
            "qty-input" => Some(ControlKind::Quantity),
            _ => None,
        })
    }

    /// Action for a click on this control; clicking the input does nothing
    pub fn click_action(self, id: String) -> Option<CartAction> {
        match self {
            ControlKind::Decrement => Some(CartAction::Decrement(id)),
            ControlKind::Increment => Some(CartAction::Increment(id)),
            ControlKind::Remove => Some(CartAction::Remove(id)),
            ControlKind::Quantity => None,
        }
    }

    /// Action for a change event on this control
    pub fn change_action(self, id: String, value: String) -> Option<CartAction> {
        match self {
            ControlKind::Quantity => Some(CartAction::SetQuantity(id, value)),
            _ => None,
        }
    }
}

/// Apply an action in place. Returns false when the id is not in the cart.
pub fn apply(cart: &mut Cart, action: &CartAction) -> bool {
    let Some(item) = cart.get_mut(action.id()) else {
        return false;
    };
    match action {
        CartAction::Decrement(_) => item.qty = item.qty.saturating_sub(1),
        CartAction::Increment(_) => item.qty = item.qty.saturating_add(1),
        CartAction::Remove(id) => {
            cart.remove(id);
        }
        CartAction::SetQuantity(id, raw) => {
            let qty = coerce::to_number(&Value::String(raw.clone()))
                .map(coerce::number_to_quantity)
                .unwrap_or(0);
            if qty == 0 {
                cart.remove(id);
            } else {
                item.qty = qty;
            }
        }
    }
    cart.retain_positive();
    true
}

/// Read, apply and persist. Returns whether the cart changed and needs a
/// re-render.
pub fn dispatch<S: CartStorage>(store: &CartStore<S>, action: &CartAction) -> CartResult<bool> {
    let mut cart = store.read();
    if !apply(&mut cart, action) {
        log::debug!("[CART] ignoring {:?}: no such line", action);
        return Ok(false);
    }
    store.write(&cart)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;

    fn cart() -> Cart {
        Cart::from_items(vec![LineItem::new("a", "A", 100.0, 1), LineItem::new("b", "B", 20.0, 3)])
    }

    #[test]
    fn test_control_kind_from_classes() {
        assert_eq!(ControlKind::from_classes("qty-btn btn-minus"), Some(ControlKind::Decrement));
        assert_eq!(ControlKind::from_classes("qty-btn btn-plus"), Some(ControlKind::Increment));
        assert_eq!(ControlKind::from_classes("remove-btn small mt-1"), Some(ControlKind::Remove));
        assert_eq!(ControlKind::from_classes("qty-input"), Some(ControlKind::Quantity));
        assert_eq!(ControlKind::from_classes("cart-item-title"), None);
        assert_eq!(ControlKind::Quantity.click_action("a".into()), None);
        assert_eq!(ControlKind::Increment.change_action("a".into(), "3".into()), None);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = cart();
        assert!(apply(&mut cart, &CartAction::Increment("b".into())));
        assert_eq!(cart.get("b").map(|i| i.qty), Some(4));
        assert!(apply(&mut cart, &CartAction::Decrement("b".into())));
        assert_eq!(cart.get("b").map(|i| i.qty), Some(3));
    }

    #[test]
    fn test_decrement_to_zero_removes() {
        let mut cart = cart();
        assert!(apply(&mut cart, &CartAction::Decrement("a".into())));
        assert!(cart.get("a").is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let mut cart = cart();
        assert!(apply(&mut cart, &CartAction::Remove("b".into())));
        assert!(cart.get("b").is_none());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = cart();
        assert!(apply(&mut cart, &CartAction::SetQuantity("a".into(), "5".into())));
        assert_eq!(cart.get("a").map(|i| i.qty), Some(5));

        assert!(apply(&mut cart, &CartAction::SetQuantity("a".into(), "2.7".into())));
        assert_eq!(cart.get("a").map(|i| i.qty), Some(2));

        assert!(apply(&mut cart, &CartAction::SetQuantity("a".into(), "-3".into())));
        assert!(cart.get("a").is_none());

        assert!(apply(&mut cart, &CartAction::SetQuantity("b".into(), "abc".into())));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_fractional_edit_truncates_to_current_quantity() {
        let mut cart = Cart::from_items(vec![LineItem::new("a", "A", 100.0, 3)]);
        assert!(apply(&mut cart, &CartAction::SetQuantity("a".into(), "3.9".into())));
        assert_eq!(cart.get("a").map(|i| i.qty), Some(3));

        assert!(apply(&mut cart, &CartAction::SetQuantity("a".into(), "3.0".into())));
        assert_eq!(cart.get("a").map(|i| i.qty), Some(3));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut cart = cart();
        let before = cart.clone();
        assert!(!apply(&mut cart, &CartAction::Increment("zzz".into())));
        assert_eq!(cart, before);
    }
}
