//! Customer-facing promotional banner for a collection.

use storedesk_types::Collection;

use crate::detail::route_slug;

/// Viewports narrower than this get the mobile artwork.
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionalBanner {
    pub href: String,
    pub alt: String,
    pub mobile: BannerImage,
    pub desktop: BannerImage,
}

impl PromotionalBanner {
    pub fn for_collection(collection: &Collection) -> Self {
        let asset_stem = if collection.slug.is_empty() {
            collection.id.to_string()
        } else {
            collection.slug.clone()
        };
        let image = |variant: &str| BannerImage {
            src: format!("/images/collections/{asset_stem}-{variant}.png"),
            width: 1000,
            height: 1000,
        };

        Self {
            href: format!("/collections/{}", route_slug(collection)),
            alt: format!("Shop {}", collection.name.to_lowercase()),
            mobile: image("mobile"),
            desktop: image("desktop"),
        }
    }

    /// Artwork for a viewport `width` pixels (or columns) wide.
    pub fn image_for_width(&self, width: u32) -> &BannerImage {
        if width < MOBILE_BREAKPOINT { &self.mobile } else { &self.desktop }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_links_to_collection_and_picks_artwork() {
        let collection: Collection =
            serde_json::from_str(r#"{ "id": 42, "name": "Bedroom", "slug": "bedroom" }"#).expect("fixture");
        let banner = PromotionalBanner::for_collection(&collection);
        assert_eq!(banner.href, "/collections/bedroom-42");
        assert_eq!(banner.alt, "Shop bedroom");
        assert_eq!(banner.image_for_width(375).src, "/images/collections/bedroom-mobile.png");
        assert_eq!(banner.image_for_width(768).src, "/images/collections/bedroom-desktop.png");
    }

    #[test]
    fn alt_text_lowercases_multi_word_names() {
        let collection: Collection =
            serde_json::from_str(r#"{ "id": 7, "name": "Living Room", "slug": "living-room" }"#).expect("fixture");
        let banner = PromotionalBanner::for_collection(&collection);
        assert_eq!(banner.alt, "Shop living room");
        assert_eq!(banner.href, "/collections/living-room-7");
    }
}
