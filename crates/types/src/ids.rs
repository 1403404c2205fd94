//! Identifiers for collections and products.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a route slug does not end in a numeric collection id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("route slug '{slug}' has no collection id after its final hyphen")]
    MissingId { slug: String },
    #[error("collection id '{id}' in route slug '{slug}' is not numeric")]
    NonNumericId { slug: String, id: String },
}

/// Numeric identifier of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    /// Extract the id from a route slug of the shape `<slug>-<numeric-id>`.
    ///
    /// The id is the text after the final hyphen; a slug without any hyphen
    /// is taken whole.
    ///
    /// ```
    /// use storedesk_types::CollectionId;
    ///
    /// let id = CollectionId::from_route_slug("blue-sofa-99001").unwrap();
    /// assert_eq!(id.as_str(), "99001");
    /// ```
    pub fn from_route_slug(slug: &str) -> Result<Self, SlugError> {
        let trimmed = slug.trim();
        let candidate = trimmed.rsplit('-').next().unwrap_or(trimmed);
        if candidate.is_empty() {
            return Err(SlugError::MissingId { slug: slug.to_string() });
        }
        if !candidate.chars().all(|c| c.is_ascii_digit()) {
            return Err(SlugError::NonNumericId {
                slug: slug.to_string(),
                id: candidate.to_string(),
            });
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CollectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated product identifier: exactly five ASCII digits.
///
/// Only the engine's validator constructs these; see
/// `storedesk_engine::validate_product_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub const LENGTH: usize = 5;

    /// Wrap an already validated value. Returns `None` unless `value` is
    /// exactly [`ProductId::LENGTH`] ASCII digits.
    pub fn new(value: &str) -> Option<Self> {
        let is_valid = value.len() == Self::LENGTH && value.chars().all(|c| c.is_ascii_digit());
        is_valid.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
