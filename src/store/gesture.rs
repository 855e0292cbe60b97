//! Drag-and-drop reorder handling
//!
//! The drag layer reports one event when a gesture completes. Ids are mapped
//! to indices in the full list and the item is moved there.

use super::list::ItemList;
use super::view::ViewState;
use crate::error::{TrackerError, TrackerResult};
use crate::models::ItemId;

/// Completed drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    /// Item being dragged
    pub active: ItemId,
    /// Item it was dropped on, `None` when the gesture was cancelled
    pub over: Option<ItemId>,
}

impl DragEnd {
    pub fn new(active: ItemId, over: Option<ItemId>) -> Self {
        Self { active, over }
    }
}

/// Apply a completed drag gesture to the full list
///
/// Returns `Ok(true)` if the list changed. Cancelled gestures, drops onto
/// the dragged item itself and unknown ids leave the list untouched. While a
/// filter or search is active the visible indices do not line up with the
/// list, so the gesture is refused with [`TrackerError::ReorderDisabled`].
pub fn handle_drag_end(
    list: &mut ItemList,
    view: &ViewState,
    event: DragEnd,
) -> TrackerResult<bool> {
    if !view.reorder_enabled() {
        return Err(TrackerError::ReorderDisabled);
    }

    let Some(over) = event.over else {
        return Ok(false);
    };
    if over == event.active {
        return Ok(false);
    }

    let (Some(from), Some(to)) = (list.position(event.active), list.position(over)) else {
        tracing::debug!("Drag between unknown items {} -> {}", event.active, over);
        return Ok(false);
    };

    let moved = list.move_index(from, to);
    if moved {
        tracing::debug!("Moved item {} from index {} to {}", event.active, from, to);
    }
    Ok(moved)
}
