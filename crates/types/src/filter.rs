use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Visibility;

/// Filter tag selecting which products of a collection are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductFilter {
    #[default]
    All,
    Published,
    /// Draft or hidden.
    Inactive,
}

impl ProductFilter {
    /// Tags in display order.
    pub const ALL_TAGS: [ProductFilter; 3] = [Self::All, Self::Published, Self::Inactive];

    /// Whether a product with `visibility` belongs to this filter's partition.
    pub fn matches(self, visibility: &Visibility) -> bool {
        match (self, visibility) {
            (Self::All, _) => true,
            (Self::Published, Visibility::Published) => true,
            (Self::Published, Visibility::Draft | Visibility::Hidden | Visibility::Other(_)) => false,
            (Self::Inactive, Visibility::Draft | Visibility::Hidden) => true,
            (Self::Inactive, Visibility::Published | Visibility::Other(_)) => false,
        }
    }

    /// Tab label without the count, e.g. `"View all"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "View all",
            Self::Published => "Published",
            Self::Inactive => "Inactive",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Published,
            Self::Published => Self::Inactive,
            Self::Inactive => Self::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Inactive,
            Self::Published => Self::All,
            Self::Inactive => Self::Published,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product filter '{0}'; expected one of: all, published, inactive")]
pub struct ParseProductFilterError(pub String);

impl FromStr for ProductFilter {
    type Err = ParseProductFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "published" => Ok(Self::Published),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ParseProductFilterError(s.to_string())),
        }
    }
}

impl fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::All => "all",
            Self::Published => "published",
            Self::Inactive => "inactive",
        };
        f.write_str(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_and_inactive_never_overlap() {
        let samples = [
            Visibility::Published,
            Visibility::Draft,
            Visibility::Hidden,
            Visibility::Other("ARCHIVED".into()),
        ];
        for visibility in &samples {
            assert!(
                !(ProductFilter::Published.matches(visibility) && ProductFilter::Inactive.matches(visibility)),
                "{visibility} matched both partitions"
            );
            assert!(ProductFilter::All.matches(visibility));
        }
    }

    #[test]
    fn parses_filter_tokens() {
        assert_eq!("Published".parse::<ProductFilter>(), Ok(ProductFilter::Published));
        assert_eq!("INACTIVE".parse::<ProductFilter>(), Ok(ProductFilter::Inactive));
        assert!("draft".parse::<ProductFilter>().is_err());
    }

    #[test]
    fn cycling_visits_every_tag() {
        let mut tag = ProductFilter::All;
        for expected in [ProductFilter::Published, ProductFilter::Inactive, ProductFilter::All] {
            tag = tag.next();
            assert_eq!(tag, expected);
        }
        assert_eq!(ProductFilter::All.prev(), ProductFilter::Inactive);
    }
}
