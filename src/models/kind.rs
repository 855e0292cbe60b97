//! Media kind definitions
//!
//! A tracked item is either a series (progress counted in episodes) or a
//! book (progress counted in pages). This enum keeps those strings out of
//! the rest of the codebase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a tracked item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Series,
    Book,
}

impl Kind {
    /// Get the persisted name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Series => "series",
            Kind::Book => "book",
        }
    }

    /// Unit the progress counter is measured in
    pub fn unit(&self) -> &'static str {
        match self {
            Kind::Series => "episode",
            Kind::Book => "page",
        }
    }

    /// Try to parse a string into a Kind, returning None if invalid
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for Kind {
    type Err = String;

    /// Case-insensitive, accepts a few common aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "series" | "serie" | "show" | "tv" | "s" => Ok(Kind::Series),
            "book" | "books" | "b" => Ok(Kind::Book),
            _ => Err(format!("Unknown kind: {} (expected 'series' or 'book')", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Kind::Series.as_str(), "series");
        assert_eq!(Kind::Book.as_str(), "book");
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(Kind::parse_optional("Series"), Some(Kind::Series));
        assert_eq!(Kind::parse_optional("tv"), Some(Kind::Series));
        assert_eq!(Kind::parse_optional(" BOOK "), Some(Kind::Book));
        assert_eq!(Kind::parse_optional("movie"), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Kind::Series).unwrap(), "\"series\"");
        let kind: Kind = serde_json::from_str("\"book\"").unwrap();
        assert_eq!(kind, Kind::Book);
        assert!(serde_json::from_str::<Kind>("\"Book\"").is_err());
    }

    #[test]
    fn test_unit() {
        assert_eq!(Kind::Series.unit(), "episode");
        assert_eq!(Kind::Book.unit(), "page");
    }
}
