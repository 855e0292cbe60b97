//! Tracked item model

use super::Kind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of an item within a user's list
///
/// Ids are creation timestamps in milliseconds, so newer items carry
/// larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(ItemId)
    }
}

/// A single series or book being followed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: Kind,
    pub progress: u64,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, kind: Kind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            progress: 0,
        }
    }

    /// Case-insensitive name comparison used for duplicate detection
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// A change to an item's progress counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// Relative step, e.g. +1 / -1 from the increment buttons
    Delta(i64),
    /// Absolute value typed in directly
    Set(i64),
}

impl ProgressUpdate {
    /// Resolve against the current value. Never goes below zero.
    pub fn apply(self, current: u64) -> u64 {
        match self {
            ProgressUpdate::Delta(delta) if delta >= 0 => current.saturating_add(delta as u64),
            ProgressUpdate::Delta(delta) => current.saturating_sub(delta.unsigned_abs()),
            ProgressUpdate::Set(value) => value.max(0) as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_starts_at_zero() {
        let item = Item::new(ItemId(7), "Dune", Kind::Book);
        assert_eq!(item.progress, 0);
        assert_eq!(item.kind, Kind::Book);
    }

    #[test]
    fn test_has_name_ignores_case_and_padding() {
        let item = Item::new(ItemId(1), "One Piece", Kind::Series);
        assert!(item.has_name("one piece"));
        assert!(item.has_name("  ONE PIECE "));
        assert!(!item.has_name("One"));
    }

    #[test]
    fn test_progress_update_clamps() {
        assert_eq!(ProgressUpdate::Delta(1).apply(0), 1);
        assert_eq!(ProgressUpdate::Delta(-1).apply(0), 0);
        assert_eq!(ProgressUpdate::Delta(-10).apply(3), 0);
        assert_eq!(ProgressUpdate::Set(-5).apply(40), 0);
        assert_eq!(ProgressUpdate::Set(120).apply(40), 120);
        assert_eq!(ProgressUpdate::Delta(i64::MIN).apply(u64::MAX), u64::MAX - (1 << 63));
    }

    #[test]
    fn test_item_id_parse() {
        assert_eq!("42".parse::<ItemId>().unwrap(), ItemId(42));
        assert_eq!("#42".parse::<ItemId>().unwrap(), ItemId(42));
        assert!("abc".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item {
            id: ItemId(3),
            name: "Solo Leveling".to_string(),
            kind: Kind::Book,
            progress: 120,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"name":"Solo Leveling","kind":"book","progress":120}"#
        );
    }
}
