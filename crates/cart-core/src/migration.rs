//! Legacy Key Migration
//!
//! Folds carts written by older scripts under alternate keys and field
//! names into the canonical cart, then deletes the old keys.

use serde_json::{Map, Value};

use crate::coerce;
use crate::config::{CartConfig, MissingIdPolicy};
use crate::error::CartResult;
use crate::models::LineItem;
use crate::storage::CartStorage;
use crate::store::CartStore;

/// Canonical line item field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    Price,
    Img,
    Qty,
}

/// Maps one legacy source field onto a canonical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub source: &'static str,
    pub target: Field,
}

const fn rule(source: &'static str, target: Field) -> FieldRule {
    FieldRule { source, target }
}

/// Mapping rules for legacy entries. For each target field the first
/// present, non-null source wins, in list order.
pub const LEGACY_FIELD_RULES: &[FieldRule] = &[
    rule("id", Field::Id),
    rule("productId", Field::Id),
    rule("sku", Field::Id),
    rule("title", Field::Title),
    rule("name", Field::Title),
    rule("price", Field::Price),
    rule("unitPrice", Field::Price),
    rule("img", Field::Img),
    rule("image", Field::Img),
    rule("qty", Field::Qty),
    rule("quantity", Field::Qty),
];

/// Outcome of one migration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Legacy keys that were merged and removed
    pub merged_keys: Vec<String>,
    /// Legacy keys left in place because they did not hold a JSON list
    pub skipped_keys: Vec<String>,
    /// Entries whose quantity was added onto an existing line
    pub merged_items: usize,
    /// Entries appended as new lines
    pub appended_items: usize,
    /// Entries discarded for lack of an id
    pub dropped_items: usize,
}

impl MigrationReport {
    pub fn is_noop(&self) -> bool {
        self.merged_keys.is_empty() && self.skipped_keys.is_empty()
    }
}

fn resolve<'a>(
    entry: &'a Map<String, Value>,
    rules: &[FieldRule],
    target: Field,
) -> Option<&'a Value> {
    rules
        .iter()
        .filter(|r| r.target == target)
        .find_map(|r| entry.get(r.source).filter(|v| !v.is_null()))
}

/// Normalize a legacy entry into a line item, `None` when it has no usable id
pub fn normalize_entry(
    entry: &Value,
    rules: &[FieldRule],
    config: &CartConfig,
) -> Option<LineItem> {
    let entry = entry.as_object()?;
    let id = match resolve(entry, rules, Field::Id) {
        Some(raw) => coerce::to_id(raw)?,
        None => match config.missing_id {
            MissingIdPolicy::Drop => return None,
            MissingIdPolicy::Generate => uuid::Uuid::new_v4().to_string(),
        },
    };
    Some(LineItem {
        id,
        title: resolve(entry, rules, Field::Title)
            .and_then(coerce::to_text)
            .unwrap_or_else(|| config.default_title.clone()),
        price: resolve(entry, rules, Field::Price).map(coerce::to_price).unwrap_or(0.0),
        img: resolve(entry, rules, Field::Img).and_then(coerce::to_text).unwrap_or_default(),
        qty: resolve(entry, rules, Field::Qty).map(coerce::to_quantity).unwrap_or(1),
    })
}

/// Merge every configured legacy key into the canonical cart.
///
/// Keys holding anything but a JSON list are left untouched. Keys that were
/// merged are removed even when some of their entries were dropped. The
/// merged cart is always written back, which refreshes the badge.
pub fn migrate_legacy_keys<S: CartStorage>(store: &CartStore<S>) -> CartResult<MigrationReport> {
    let config = store.config();
    let storage = store.storage();
    let mut merged = store.read();
    let mut report = MigrationReport::default();

    for key in &config.legacy_keys {
        let raw = match storage.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => continue,
            Err(e) => {
                log::warn!("[MIGRATE] could not read legacy key '{}': {}", key, e);
                continue;
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                log::warn!("[MIGRATE] legacy key '{}' is not a list, leaving it in place", key);
                report.skipped_keys.push(key.clone());
                continue;
            }
            Err(e) => {
                log::warn!(
                    "[MIGRATE] legacy key '{}' is not valid JSON ({}), leaving it in place",
                    key,
                    e
                );
                report.skipped_keys.push(key.clone());
                continue;
            }
        };

        for entry in &entries {
            match normalize_entry(entry, LEGACY_FIELD_RULES, config) {
                Some(item) => {
                    if merged.merge(item) {
                        report.merged_items += 1;
                    } else {
                        report.appended_items += 1;
                    }
                }
                None => report.dropped_items += 1,
            }
        }

        if let Err(e) = storage.remove(key) {
            log::warn!("[MIGRATE] could not remove legacy key '{}': {}", key, e);
        }
        report.merged_keys.push(key.clone());
    }

    store.write(&merged)?;

    if report.is_noop() {
        log::debug!("[MIGRATE] no legacy keys found");
    } else {
        log::info!(
            "[MIGRATE] merged {:?}, skipped {:?}: {} merged, {} appended, {} dropped",
            report.merged_keys,
            report.skipped_keys,
            report.merged_items,
            report.appended_items,
            report.dropped_items
        );
    }
    Ok(report)
}
