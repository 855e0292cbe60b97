//! Ordered list of tracked items
//!
//! The list order is user-controlled: new items are prepended, and the drag
//! gesture moves items around. Every operation keeps ids unique and
//! progress non-negative.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Item, ItemId, Kind, ProgressUpdate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of an add request that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new item was created at the front of the list
    Added(ItemId),
    /// An item with the same name (ignoring case) already exists
    Duplicate(ItemId),
}

impl AddOutcome {
    pub fn id(&self) -> ItemId {
        match self {
            AddOutcome::Added(id) | AddOutcome::Duplicate(id) => *id,
        }
    }
}

/// A user's tracked items, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing items, rejecting duplicate ids
    pub fn from_items(items: Vec<Item>) -> TrackerResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(TrackerError::InvalidList(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    /// Parse the persisted JSON form (`[{id, name, kind, progress}, ...]`)
    pub fn decode(json: &str) -> TrackerResult<Self> {
        let items: Vec<Item> =
            serde_json::from_str(json).map_err(|e| TrackerError::InvalidList(e.to_string()))?;
        Self::from_items(items)
    }

    /// Serialize to the persisted JSON form
    pub fn encode(&self) -> TrackerResult<String> {
        serde_json::to_string(&self.items).map_err(|e| TrackerError::InvalidList(e.to_string()))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Index of an item in the full list
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Find an item by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.has_name(name))
    }

    /// Add a new item using the current time for its id
    pub fn add(&mut self, name: &str, kind: Kind) -> TrackerResult<AddOutcome> {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.add_at(name, kind, now)
    }

    /// Add a new item created at `now_millis`
    ///
    /// Blank names are rejected. A name already present (ignoring case) is
    /// reported as a duplicate and nothing is created.
    pub fn add_at(
        &mut self,
        name: &str,
        kind: Kind,
        now_millis: u64,
    ) -> TrackerResult<AddOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::BlankName);
        }

        if let Some(existing) = self.find_by_name(name) {
            tracing::debug!("Duplicate add of '{}', existing id {}", name, existing.id);
            return Ok(AddOutcome::Duplicate(existing.id));
        }

        let id = self.next_id(now_millis)?;
        self.items.insert(0, Item::new(id, name, kind));
        tracing::debug!("Added {} '{}' with id {}", kind, name, id);
        Ok(AddOutcome::Added(id))
    }

    /// Next id: the creation time, bumped past every id already in the list
    ///
    /// Fails when the largest id is already `u64::MAX`.
    fn next_id(&self, now_millis: u64) -> TrackerResult<ItemId> {
        let Some(largest) = self.items.iter().map(|item| item.id).max() else {
            return Ok(ItemId(now_millis));
        };
        largest
            .0
            .checked_add(1)
            .map(|floor| ItemId(now_millis.max(floor)))
            .ok_or(TrackerError::IdsExhausted(largest))
    }

    /// Remove an item. Returns false if it was not present.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Apply a progress update, clamping at zero. Returns the new value.
    pub fn adjust_progress(&mut self, id: ItemId, update: ProgressUpdate) -> Option<u64> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.progress = update.apply(item.progress);
        Some(item.progress)
    }

    /// Move `source` to the position currently held by `dest`
    ///
    /// No-op when either id is missing or both are the same item.
    pub fn reorder(&mut self, source: ItemId, dest: ItemId) -> bool {
        if source == dest {
            return false;
        }
        match (self.position(source), self.position(dest)) {
            (Some(from), Some(to)) => self.move_index(from, to),
            _ => false,
        }
    }

    /// Array move: remove at `from`, insert at `to`
    pub fn move_index(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
