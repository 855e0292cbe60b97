//! In-memory list store
//!
//! - `list` - the ordered item list and its CRUD operations
//! - `filter` - kind filter and name search
//! - `view` - filter/search state and the add-flow view updates
//! - `gesture` - drag-and-drop reorder events

pub mod filter;
pub mod gesture;
pub mod list;
pub mod view;

pub use filter::{KindFilter, filter_items};
pub use gesture::{DragEnd, handle_drag_end};
pub use list::{AddOutcome, ItemList};
pub use view::ViewState;
