//! Shared type definitions for Storedesk.
//!
//! Domain records mirror the storefront backend's JSON payloads. The
//! message and effect enums at the bottom of this module form the contract
//! between TUI components and the runtime that executes side effects.

mod collection;
mod filter;
mod ids;
mod visibility;

pub use collection::{CampaignDuration, CampaignStatus, Collection, Product};
pub use filter::{ParseProductFilterError, ProductFilter};
pub use ids::{CollectionId, ProductId, SlugError};
pub use visibility::Visibility;

/// Severity attached to user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Identifies an overlay by the page that owns it and its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayKey {
    pub page: &'static str,
    pub overlay: &'static str,
}

impl OverlayKey {
    pub const fn new(page: &'static str, overlay: &'static str) -> Self {
        Self { page, overlay }
    }
}

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic UI tick (throbbers, alert timeouts)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// The collection for the current page was fetched
    CollectionLoaded(Box<Collection>),
    /// The collection lookup produced no record
    CollectionMissing(String),
    /// The collection lookup failed for a reason other than not-found
    CollectionLoadFailed(String),
    /// The add-product request finished; `Err` carries the logged cause
    AddProductFinished(Result<String, String>),
}

/// Side effects that can be triggered by state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the collection addressed by a route slug
    LoadCollection(String),
    /// Delegate an add-product mutation to the backend
    AddProduct {
        collection_id: CollectionId,
        product_id: ProductId,
    },
    /// Make an overlay visible
    ShowOverlay(OverlayKey),
    /// Hide an overlay
    HideOverlay(OverlayKey),
    /// Hide the alert message
    DismissAlert,
    /// Leave the application
    Quit,
}
