//! Storefront API client utilities.
//!
//! This crate owns the boundary between Storedesk and the storefront
//! backend. It focuses on:
//!
//! - The [`CollectionService`] trait, which is all the workflow logic needs
//!   from the backend (fetch a collection, add a product to it)
//! - [`StorefrontClient`], the reqwest implementation of that trait
//! - Validating the configured base URL for safety
//!
//! # Example
//!
//! ```ignore
//! use storedesk_api::{CollectionService, StorefrontClient};
//! use storedesk_types::CollectionId;
//! use storedesk_util::StoredeskConfig;
//!
//! async fn show() -> anyhow::Result<()> {
//!     let client = StorefrontClient::from_config(&StoredeskConfig::load()?)?;
//!     let collection = client.fetch_collection(&CollectionId::from("99001")).await?;
//!     println!("{collection:?}");
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{StorefrontClient, validate_base_url};
pub use error::ApiError;

use async_trait::async_trait;
use storedesk_types::{Collection, CollectionId, ProductId};

/// Operations the storefront backend exposes to the admin workflows.
#[async_trait]
pub trait CollectionService: Send + Sync {
    /// Fetch one collection. `Ok(None)` signals "not found".
    async fn fetch_collection(&self, id: &CollectionId) -> Result<Option<Collection>, ApiError>;

    /// Add a product to a collection, returning the backend's human-readable
    /// confirmation message.
    async fn add_product(&self, collection_id: &CollectionId, product_id: &ProductId) -> Result<String, ApiError>;
}
