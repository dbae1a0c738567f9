//! Cart Scenario Tests
//!
//! End-to-end flows over `MemoryStorage`: startup migration, rendering and
//! interactions going through the store.

use std::cell::Cell;
use std::rc::Rc;

use crate::{
    dispatch, migrate_legacy_keys, render, CartAction, CartConfig, CartStorage, CartStore,
    ControlKind, MemoryStorage,
};

fn setup_store(entries: &[(&str, &str)]) -> CartStore<MemoryStorage> {
    CartStore::new(
        MemoryStorage::with_entries(entries.iter().copied()),
        CartConfig::default(),
    )
}

#[test]
fn test_migration_merges_sku_into_existing_line() {
    let store = setup_store(&[
        ("cart", r#"[{"id":"A","title":"Tea","price":100,"img":"","qty":3}]"#),
        ("shoppingCart", r#"[{"sku":"A","quantity":2}]"#),
    ]);

    migrate_legacy_keys(&store).unwrap();

    let cart = store.read();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].id, "A");
    assert_eq!(cart.items()[0].qty, 5);
    assert_eq!(cart.items()[0].title, "Tea");
}

#[test]
fn test_migration_is_idempotent_and_clears_legacy_keys() {
    let store = setup_store(&[
        ("cartItems", r#"[{"id":1,"name":"Pen","unitPrice":30,"quantity":2}]"#),
        ("myCart", r#"[{"productId":"X","price":"80"}]"#),
    ]);

    migrate_legacy_keys(&store).unwrap();
    let once = store.read();
    let raw_once = store.storage().get("cart").unwrap();

    let report = migrate_legacy_keys(&store).unwrap();
    assert!(report.is_noop());
    assert_eq!(store.read(), once);
    assert_eq!(store.storage().get("cart").unwrap(), raw_once);

    for key in CartConfig::default().legacy_keys {
        assert!(!store.storage().contains(&key), "legacy key {} still present", key);
    }
    assert_eq!(once.len(), 2);
    assert_eq!(once.get("1").map(|i| i.qty), Some(2));
    assert_eq!(once.get("X").map(|i| i.qty), Some(1));
}

#[test]
fn test_entry_without_any_id_is_dropped_and_key_deleted() {
    let store = setup_store(&[(
        "productsInCart",
        r#"[{"name":"Ghost","quantity":4},{"sku":"K","quantity":1}]"#,
    )]);

    let report = migrate_legacy_keys(&store).unwrap();

    let cart = store.read();
    assert_eq!(cart.len(), 1);
    assert!(cart.iter().all(|item| item.title != "Ghost"));
    assert_eq!(report.dropped_items, 1);
    assert!(!store.storage().contains("productsInCart"));
}

#[test]
fn test_migration_refreshes_badge() {
    let store = setup_store(&[("cartItems", r#"[{"id":"a","qty":2},{"id":"b","qty":3}]"#)]);
    let badge = Rc::new(Cell::new(0));
    let sink = badge.clone();
    store.subscribe(move |total| sink.set(total));

    migrate_legacy_keys(&store).unwrap();
    assert_eq!(badge.get(), 5);
}

#[test]
fn test_subtotal_text_for_single_line() {
    let store = setup_store(&[(
        "cart",
        r#"[{"id":"a","title":"A","price":100,"img":"","qty":3}]"#,
    )]);
    let view = render(&store.read(), store.config());
    assert_eq!(view.subtotal_text, "NT$ 300");
}

#[test]
fn test_empty_cart_view() {
    let store = setup_store(&[("cart", "[]")]);
    let view = render(&store.read(), store.config());
    assert!(view.empty);
    assert_eq!(view.subtotal_text, "NT$ 0");
    assert_eq!(store.update_badge(), 0);
}

#[test]
fn test_badge_sums_quantities() {
    let store = setup_store(&[("cart", r#"[{"id":"a","qty":2},{"id":"b","qty":3}]"#)]);
    assert_eq!(store.update_badge(), 5);
    assert_eq!(render(&store.read(), store.config()).badge, 5);
}

#[test]
fn test_quantity_edit_to_zero_removes_line() {
    let store = setup_store(&[(
        "cart",
        r#"[{"id":"a","title":"A","price":10,"qty":2},{"id":"b","title":"B","price":5,"qty":1}]"#,
    )]);

    let action = ControlKind::Quantity
        .change_action("a".to_string(), "0".to_string())
        .unwrap();
    assert!(dispatch(&store, &action).unwrap());

    let view = render(&store.read(), store.config());
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].id, "b");
    assert_eq!(view.subtotal_text, "NT$ 5");
}

#[test]
fn test_fractional_edit_still_requests_rerender() {
    let store = setup_store(&[(
        "cart",
        r#"[{"id":"a","title":"A","price":100,"img":"","qty":3}]"#,
    )]);
    let before = render(&store.read(), store.config());

    let action = CartAction::SetQuantity("a".into(), "3.9".into());
    assert!(dispatch(&store, &action).unwrap());

    let after = render(&store.read(), store.config());
    assert_eq!(after.rows[0].qty, 3);
    assert_eq!(after, before);
}

#[test]
fn test_click_flow_through_store() {
    let store = setup_store(&[("cart", r#"[{"id":"a","title":"A","price":10,"img":"","qty":1}]"#)]);

    assert!(dispatch(&store, &CartAction::Increment("a".into())).unwrap());
    assert_eq!(store.total_quantity(), 2);

    assert!(dispatch(&store, &CartAction::Decrement("a".into())).unwrap());
    assert!(dispatch(&store, &CartAction::Decrement("a".into())).unwrap());
    assert!(store.read().is_empty());
    assert_eq!(store.storage().get("cart").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_unknown_id_does_not_write() {
    let store = setup_store(&[("cart", r#"[{"id":"a","qty":1}]"#)]);
    let before = store.storage().get("cart").unwrap();

    assert!(!dispatch(&store, &CartAction::Remove("nope".into())).unwrap());
    assert_eq!(store.storage().get("cart").unwrap(), before);
}
