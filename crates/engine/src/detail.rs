//! Read-only view model for the edit-collection page.

use chrono::{DateTime, Utc};
use storedesk_types::{CampaignStatus, Collection, CollectionId, Visibility};
use storedesk_util::format_price;

pub const BASIC_DETAILS_HINT: &str = "Important for SEO: a name that includes target keywords in the first four words, \
a short URL with three or four keywords, and prices that help your business grow while making customers feel \
they're getting a good deal.";

pub const CAMPAIGN_HINT: &str = "Keep track of your campaign. Upcoming, Active, or Ended. This helps you plan your \
marketing effectively and make adjustments as needed for maximum impact.";

pub const VISIBILITY_HINT: &str = "Choose whether your collection is a work-in-progress (draft) or ready to be seen \
(published), and decide if you want shoppers to see it or keep it private (hidden).";

/// One labelled value in the basic details section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDetailView {
    pub id: CollectionId,
    pub title: String,
    /// Category, name, slug and price, in that order.
    pub basic_details: Vec<DetailField>,
    /// `None` when the collection has no campaign window.
    pub campaign_status: Option<CampaignStatus>,
    pub visibility: Visibility,
    pub product_count: usize,
}

impl CollectionDetailView {
    pub fn from_collection(collection: &Collection, now: DateTime<Utc>) -> Self {
        let basic_details = vec![
            DetailField {
                label: "Category",
                value: collection.category.clone(),
            },
            DetailField {
                label: "Name",
                value: collection.name.clone(),
            },
            DetailField {
                label: "Slug",
                value: route_slug(collection),
            },
            DetailField {
                label: "Price",
                value: format_price(collection.price),
            },
        ];

        Self {
            id: collection.id.clone(),
            title: collection.name.clone(),
            basic_details,
            campaign_status: collection.campaign_duration.map(|duration| duration.status_at(now)),
            visibility: collection.visibility.clone(),
            product_count: collection.products.len(),
        }
    }

    pub fn campaign_label(&self) -> &'static str {
        self.campaign_status.map(CampaignStatus::label).unwrap_or("Not scheduled")
    }
}

/// `<slug>-<id>`, the shape the edit page is routed by.
pub fn route_slug(collection: &Collection) -> String {
    if collection.slug.is_empty() {
        collection.id.to_string()
    } else {
        format!("{}-{}", collection.slug, collection.id)
    }
}
