//! Collection and product records as returned by the storefront backend.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{CollectionId, Visibility};

/// A product as embedded in a collection's membership list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Poster image reference (URL or asset path).
    #[serde(default)]
    pub poster: String,
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Start and end of a collection's promotional campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDuration {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Where a campaign sits relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Upcoming,
    Active,
    Ended,
}

impl CampaignStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Active => "Active",
            Self::Ended => "Ended",
        }
    }
}

impl CampaignDuration {
    /// Active on `[starts_at, ends_at)`.
    pub fn status_at(&self, now: DateTime<Utc>) -> CampaignStatus {
        if now < self.starts_at {
            CampaignStatus::Upcoming
        } else if now < self.ends_at {
            CampaignStatus::Active
        } else {
            CampaignStatus::Ended
        }
    }
}

/// A named, priced grouping of products with its own publication lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(deserialize_with = "collection_id_from_any")]
    pub id: CollectionId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub campaign_duration: Option<CampaignDuration>,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(value) => value,
        StringOrNumber::Number(value) => value.to_string(),
    })
}

fn collection_id_from_any<'de, D>(deserializer: D) -> Result<CollectionId, D::Error>
where
    D: Deserializer<'de>,
{
    string_or_number(deserializer).map(|raw| CollectionId::from(raw.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn collection_deserializes_with_defaults() {
        let json = r#"{
            "id": 99001,
            "name": "Blue Sofa",
            "slug": "blue-sofa",
            "visibility": "published",
            "products": [
                { "id": "10001", "name": "Cushion", "price": 19.5, "visibility": "DRAFT" },
                { "id": 10002, "name": "Throw", "poster": "https://cdn.example.com/throw.png" }
            ]
        }"#;
        let collection: Collection = serde_json::from_str(json).expect("deserialize collection");
        assert_eq!(collection.id.as_str(), "99001");
        assert_eq!(collection.visibility, Visibility::Published);
        assert!(collection.campaign_duration.is_none());
        assert_eq!(collection.products.len(), 2);
        assert_eq!(collection.products[0].visibility, Visibility::Draft);
        assert_eq!(collection.products[0].price, Decimal::new(195, 1));
        assert_eq!(collection.products[1].id, "10002");
        assert_eq!(collection.products[1].visibility, Visibility::Draft);
    }

    #[test]
    fn campaign_status_tracks_window() {
        let duration = CampaignDuration {
            starts_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(
            duration.status_at(Utc.with_ymd_and_hms(2025, 12, 31, 23, 0, 0).unwrap()),
            CampaignStatus::Upcoming
        );
        assert_eq!(duration.status_at(duration.starts_at), CampaignStatus::Active);
        assert_eq!(duration.status_at(duration.ends_at), CampaignStatus::Ended);
    }
}
