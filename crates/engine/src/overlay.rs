//! Overlay visibility registry.
//!
//! A single [`OverlayRegistry`] owns the visible/hidden flag of every overlay
//! keyed by `(page, overlay)`. It is passed explicitly to whatever needs to
//! show or hide overlays; components read their own flag and only mutate
//! state through [`OverlayRegistry::show`] and [`OverlayRegistry::hide`].

use indexmap::IndexMap;
use storedesk_types::OverlayKey;
use tracing::warn;

pub const EDIT_COLLECTION_PAGE: &str = "editCollection";

/// Product membership overlay on the edit-collection page.
pub const PRODUCT_LIST_OVERLAY: OverlayKey = OverlayKey::new(EDIT_COLLECTION_PAGE, "productList");
/// Visibility overlay on the edit-collection page.
pub const VISIBILITY_OVERLAY: OverlayKey = OverlayKey::new(EDIT_COLLECTION_PAGE, "visibility");

#[derive(Debug, Clone, Default)]
pub struct OverlayRegistry {
    overlays: IndexMap<OverlayKey, bool>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the edit-collection page's overlays, all hidden.
    pub fn for_edit_collection() -> Self {
        let mut registry = Self::new();
        registry.register(PRODUCT_LIST_OVERLAY);
        registry.register(VISIBILITY_OVERLAY);
        registry
    }

    /// Register `key` as hidden. Re-registering keeps the current flag.
    pub fn register(&mut self, key: OverlayKey) {
        self.overlays.entry(key).or_insert(false);
    }

    pub fn show(&mut self, key: OverlayKey) {
        self.set(key, true);
    }

    pub fn hide(&mut self, key: OverlayKey) {
        self.set(key, false);
    }

    pub fn toggle(&mut self, key: OverlayKey) {
        let visible = self.is_visible(key);
        self.set(key, !visible);
    }

    /// Unregistered keys read as hidden.
    pub fn is_visible(&self, key: OverlayKey) -> bool {
        self.overlays.get(&key).copied().unwrap_or(false)
    }

    pub fn any_visible(&self) -> bool {
        self.overlays.values().any(|visible| *visible)
    }

    /// Most recently registered visible overlay, which is the one drawn on top.
    pub fn topmost(&self) -> Option<OverlayKey> {
        self.overlays
            .iter()
            .rev()
            .find_map(|(key, visible)| visible.then_some(*key))
    }

    fn set(&mut self, key: OverlayKey, visible: bool) {
        match self.overlays.get_mut(&key) {
            Some(flag) => *flag = visible,
            None => warn!(page = key.page, overlay = key.overlay, "ignoring unregistered overlay"),
        }
    }
}

/// Whether the page beneath should stop receiving scroll/navigation input.
pub fn should_lock_background(overlay_visible: bool, alert_visible: bool) -> bool {
    overlay_visible || alert_visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_and_hide_only_touch_their_key() {
        let mut registry = OverlayRegistry::for_edit_collection();
        registry.show(PRODUCT_LIST_OVERLAY);
        assert!(registry.is_visible(PRODUCT_LIST_OVERLAY));
        assert!(!registry.is_visible(VISIBILITY_OVERLAY));
        registry.toggle(VISIBILITY_OVERLAY);
        assert_eq!(registry.topmost(), Some(VISIBILITY_OVERLAY));
        registry.hide(VISIBILITY_OVERLAY);
        assert_eq!(registry.topmost(), Some(PRODUCT_LIST_OVERLAY));
        registry.hide(PRODUCT_LIST_OVERLAY);
        assert!(!registry.any_visible());
    }

    #[test]
    fn unregistered_keys_are_ignored() {
        let mut registry = OverlayRegistry::new();
        let stray = OverlayKey::new("home", "search");
        registry.show(stray);
        assert!(!registry.is_visible(stray));
        assert!(!registry.any_visible());
    }

    #[test]
    fn background_locks_for_overlay_or_alert() {
        assert!(!should_lock_background(false, false));
        assert!(should_lock_background(true, false));
        assert!(should_lock_background(false, true));
    }
}
