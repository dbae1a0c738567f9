//! Cart Configuration
//!
//! Storage keys, display strings and policies. Every field has a default so
//! a host page only needs to override what differs.

use serde::{Deserialize, Serialize};
use crate::error::{CartError, CartResult};

/// Legacy storage keys written by earlier cart scripts, in merge order
pub const DEFAULT_LEGACY_KEYS: &[&str] = &["cartItems", "shoppingCart", "productsInCart", "myCart"];

/// What migration does with a legacy entry that carries no id field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingIdPolicy {
    /// Skip the entry
    #[default]
    Drop,
    /// Mint a fresh UUID v4 for it
    Generate,
}

/// Cart widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CartConfig {
    /// Canonical storage key holding the cart list
    pub storage_key: String,
    /// Legacy keys merged (then removed) on startup
    pub legacy_keys: Vec<String>,
    /// Prefix placed before every formatted amount
    pub currency_prefix: String,
    /// Title used when an item has none
    pub default_title: String,
    /// Image shown when an item has no image URL
    pub placeholder_image: String,
    pub missing_id: MissingIdPolicy,
    /// DOM id of the badge counter
    pub badge_element_id: String,
    /// Scroll offset (px) past which the navbar gets the `scrolled` class
    pub navbar_scroll_threshold: f64,
    /// Notice shown when checking out an empty cart
    pub empty_checkout_notice: String,
    /// Placeholder notice shown instead of a real checkout flow
    pub checkout_notice: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: "cart".to_string(),
            legacy_keys: DEFAULT_LEGACY_KEYS.iter().map(|k| k.to_string()).collect(),
            currency_prefix: "NT$ ".to_string(),
            default_title: "未命名商品".to_string(),
            placeholder_image: "https://placehold.co/200x200?text=No+Image".to_string(),
            missing_id: MissingIdPolicy::Drop,
            badge_element_id: "cart-count".to_string(),
            navbar_scroll_threshold: 10.0,
            empty_checkout_notice: "購物車是空的。".to_string(),
            checkout_notice: "這裡導到你的金流/結帳頁。".to_string(),
        }
    }
}

impl CartConfig {
    /// Reject configurations that would corrupt the canonical cart
    pub fn validate(&self) -> CartResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(CartError::Config("storageKey must not be empty".to_string()));
        }
        if self.legacy_keys.iter().any(|k| k == &self.storage_key) {
            return Err(CartError::Config(format!(
                "legacy key list contains the canonical key '{}'",
                self.storage_key
            )));
        }
        if !self.navbar_scroll_threshold.is_finite() {
            return Err(CartError::Config("navbarScrollThreshold must be finite".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_key, "cart");
        assert_eq!(
            config.legacy_keys,
            vec!["cartItems", "shoppingCart", "productsInCart", "myCart"]
        );
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: CartConfig =
            serde_json::from_str(r#"{"currencyPrefix":"US$ ","missingId":"generate"}"#).unwrap();
        assert_eq!(config.currency_prefix, "US$ ");
        assert_eq!(config.missing_id, MissingIdPolicy::Generate);
        assert_eq!(config.storage_key, "cart");
    }

    #[test]
    fn test_canonical_key_in_legacy_list_rejected() {
        let config = CartConfig {
            legacy_keys: vec!["cart".to_string()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CartError::Config(_))));
    }
}
