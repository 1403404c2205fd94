use storedesk_api::{ApiError, CollectionService};
use storedesk_types::{Collection, CollectionId};
use thiserror::Error;
use tracing::debug;

/// Page-level failure while loading the edit-collection page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The route did not address a collection, or the backend has none.
    #[error("collection '{slug}' not found")]
    NotFound { slug: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl PageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Resolve a `<slug>-<numeric-id>` route to its collection.
///
/// A malformed slug and a missing record both become
/// [`PageError::NotFound`]; transport failures propagate as
/// [`PageError::Api`].
pub async fn load_edit_collection(service: &dyn CollectionService, route_slug: &str) -> Result<Collection, PageError> {
    let not_found = || PageError::NotFound {
        slug: route_slug.to_string(),
    };

    let collection_id = CollectionId::from_route_slug(route_slug).map_err(|error| {
        debug!(%error, "route slug does not address a collection");
        not_found()
    })?;

    debug!(%collection_id, "fetching collection");
    service.fetch_collection(&collection_id).await?.ok_or_else(not_found)
}
