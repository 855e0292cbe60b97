//! Model layer
//!
//! Plain data types shared by the list store, storage and session layers.

pub mod item;
pub mod kind;
pub mod theme;

pub use item::{Item, ItemId, ProgressUpdate};
pub use kind::Kind;
pub use theme::Theme;
