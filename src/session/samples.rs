//! Built-in demo lists
//!
//! Logging in as one of the reserved users without any saved data starts
//! from one of these lists instead of an empty one.

use crate::models::{Item, ItemId, Kind};
use crate::store::ItemList;

/// One row of a demo list
struct SampleItem {
    id: u64,
    name: &'static str,
    kind: Kind,
    progress: u64,
}

const fn sample(id: u64, name: &'static str, kind: Kind, progress: u64) -> SampleItem {
    SampleItem {
        id,
        name,
        kind,
        progress,
    }
}

const OTAKU: &[SampleItem] = &[
    sample(1, "One Piece", Kind::Series, 1090),
    sample(2, "Jujutsu Kaisen", Kind::Series, 45),
    sample(3, "Solo Leveling", Kind::Book, 120),
    sample(4, "Frieren: Beyond Journey's End", Kind::Series, 28),
];

const READER: &[SampleItem] = &[
    sample(5, "The Lord of the Rings", Kind::Book, 450),
    sample(6, "Harry Potter and the Philosopher's Stone", Kind::Book, 220),
    sample(7, "The Da Vinci Code", Kind::Book, 100),
    sample(8, "Sherlock (Series)", Kind::Series, 12),
];

/// Reserved user ids and their demo lists
const SAMPLES: &[(&str, &[SampleItem])] = &[("otaku", OTAKU), ("reader", READER)];

/// Names of the users with a demo list
pub fn reserved_users() -> impl Iterator<Item = &'static str> {
    SAMPLES.iter().map(|(user, _)| *user)
}

/// Demo list for a normalized user id, if it is a reserved one
pub fn sample_list(user: &str) -> Option<ItemList> {
    let (_, rows) = SAMPLES.iter().find(|(name, _)| *name == user)?;
    let items = rows
        .iter()
        .map(|row| Item {
            id: ItemId(row.id),
            name: row.name.to_string(),
            kind: row.kind,
            progress: row.progress,
        })
        .collect();
    // Sample ids are unique by construction
    ItemList::from_items(items).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_users_have_lists() {
        for user in reserved_users() {
            let list = sample_list(user).unwrap();
            assert_eq!(list.len(), 4, "{user}");
        }
    }

    #[test]
    fn test_unknown_user_has_no_sample() {
        assert!(sample_list("alice").is_none());
        // Lookups use the normalized (lower-case) id
        assert!(sample_list("Otaku").is_none());
    }

    #[test]
    fn test_otaku_order() {
        let list = sample_list("otaku").unwrap();
        let names: Vec<_> = list.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names[0], "One Piece");
        assert_eq!(list.items()[0].progress, 1090);
    }
}
