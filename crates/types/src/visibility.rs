//! Publication state shared by collections and products.
//!
//! The backend transmits visibility as an uppercase token (`"PUBLISHED"`,
//! `"DRAFT"`, `"HIDDEN"`). Tokens outside that set are preserved in
//! [`Visibility::Other`] so they still render, but they never classify as
//! published or inactive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Publication state of a collection or product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Visibility {
    /// Live in the storefront.
    Published,
    /// Work in progress.
    #[default]
    Draft,
    /// Intentionally withheld from shoppers.
    Hidden,
    /// Any other token sent by the backend, normalized to uppercase.
    Other(String),
}

impl Visibility {
    pub const PUBLISHED: &'static str = "PUBLISHED";
    pub const DRAFT: &'static str = "DRAFT";
    pub const HIDDEN: &'static str = "HIDDEN";

    /// Normalize a raw token case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_uppercase();
        match normalized.as_str() {
            Self::PUBLISHED => Self::Published,
            Self::DRAFT => Self::Draft,
            Self::HIDDEN => Self::Hidden,
            _ => Self::Other(normalized),
        }
    }

    /// Uppercase wire token.
    pub fn as_token(&self) -> &str {
        match self {
            Self::Published => Self::PUBLISHED,
            Self::Draft => Self::DRAFT,
            Self::Hidden => Self::HIDDEN,
            Self::Other(token) => token.as_str(),
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }

    /// Draft or hidden. Derived, never stored.
    pub fn is_inactive(&self) -> bool {
        match self {
            Self::Draft | Self::Hidden => true,
            Self::Published | Self::Other(_) => false,
        }
    }

    /// Human label, e.g. `"Published"`.
    pub fn label(&self) -> String {
        let lower = self.as_token().to_ascii_lowercase();
        let mut chars = lower.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for Visibility {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Visibility> for String {
    fn from(value: Visibility) -> Self {
        value.as_token().to_string()
    }
}

impl FromStr for Visibility {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Visibility::parse("published"), Visibility::Published);
        assert_eq!(Visibility::parse("Draft"), Visibility::Draft);
        assert_eq!(Visibility::parse(" HIDDEN "), Visibility::Hidden);
        assert_eq!(Visibility::parse("archived"), Visibility::Other("ARCHIVED".into()));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(Visibility::parse(" PUBLISHED").is_published());
        assert_eq!(Visibility::parse("draft\n"), Visibility::Draft);
    }

    #[test]
    fn inactive_is_draft_or_hidden_only() {
        assert!(Visibility::Draft.is_inactive());
        assert!(Visibility::Hidden.is_inactive());
        assert!(!Visibility::Published.is_inactive());
        assert!(!Visibility::Other("ARCHIVED".into()).is_inactive());
    }

    #[test]
    fn serde_uses_uppercase_tokens() {
        let parsed: Visibility = serde_json::from_str("\"hidden\"").expect("deserialize visibility");
        assert_eq!(parsed, Visibility::Hidden);
        assert_eq!(serde_json::to_string(&Visibility::Published).expect("serialize"), "\"PUBLISHED\"");
    }

    #[test]
    fn label_is_capitalized() {
        assert_eq!(Visibility::Published.label(), "Published");
        assert_eq!(Visibility::Other("ON_HOLD".into()).label(), "On_hold");
    }
}
