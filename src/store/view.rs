//! What part of the list is on screen
//!
//! Holds the kind filter, search text and highlighted item, and follows the
//! add flow: after adding, the view jumps to the new (or already existing)
//! item's kind with the search cleared.

use super::filter::{KindFilter, filter_items};
use super::list::{AddOutcome, ItemList};
use crate::models::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Kind filter (All, Series, Book)
    pub filter: KindFilter,
    /// Search text
    pub query: String,
    /// Item to draw attention to after a duplicate add
    pub highlighted: Option<ItemId>,
}

impl ViewState {
    pub fn new(filter: KindFilter, query: impl Into<String>) -> Self {
        Self {
            filter,
            query: query.into(),
            highlighted: None,
        }
    }

    /// Drag reordering only makes sense on the unfiltered list
    pub fn reorder_enabled(&self) -> bool {
        self.filter == KindFilter::All && self.query.is_empty()
    }

    /// Items currently visible, in list order
    pub fn visible<'a>(&self, list: &'a ItemList) -> Vec<&'a Item> {
        filter_items(list, self.filter, &self.query)
    }

    /// Update the view after an add request
    pub fn after_add(&mut self, list: &ItemList, outcome: AddOutcome) {
        self.query.clear();
        match outcome {
            AddOutcome::Added(id) => {
                self.highlighted = None;
                if let Some(item) = list.get(id) {
                    self.filter = item.kind.into();
                }
            }
            AddOutcome::Duplicate(id) => {
                if let Some(item) = list.get(id) {
                    self.filter = item.kind.into();
                    self.highlighted = Some(id);
                }
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kind;

    #[test]
    fn test_reorder_enabled_only_when_unfiltered() {
        assert!(ViewState::default().reorder_enabled());
        assert!(!ViewState::new(KindFilter::Book, "").reorder_enabled());
        assert!(!ViewState::new(KindFilter::All, "x").reorder_enabled());
    }

    #[test]
    fn test_after_add_switches_to_new_kind() {
        let mut list = ItemList::new();
        let outcome = list.add_at("Dune", Kind::Book, 1).unwrap();
        let mut view = ViewState::new(KindFilter::Series, "du");

        view.after_add(&list, outcome);

        assert_eq!(view.filter, KindFilter::Book);
        assert!(view.query.is_empty());
        assert_eq!(view.highlighted, None);
    }

    #[test]
    fn test_after_duplicate_highlights_existing() {
        let mut list = ItemList::new();
        list.add_at("Severance", Kind::Series, 1).unwrap();
        let outcome = list.add_at("severance", Kind::Book, 2).unwrap();
        let mut view = ViewState::new(KindFilter::Book, "sev");

        view.after_add(&list, outcome);

        assert_eq!(view.filter, KindFilter::Series);
        assert!(view.query.is_empty());
        assert_eq!(view.highlighted, Some(ItemId(1)));
        assert_eq!(view.visible(&list).len(), 1);
    }
}
