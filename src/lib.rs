//! hobbylist library
//!
//! Keeps a per-user list of the series and books being followed, with a
//! progress counter per item, user-controlled ordering, kind filter and
//! search. State is persisted to a local key-value store.
//!
//! - [`store`] - the ordered list, filtering and drag reordering
//! - [`storage`] - key-value persistence backends
//! - [`session`] - active user, theme and write-through persistence
//! - [`config`] - YAML configuration and platform paths
//! - [`cli`] - command-line front end

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{TrackerError, TrackerResult};
pub use models::{Item, ItemId, Kind, ProgressUpdate, Theme};
pub use session::Session;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::{AddOutcome, DragEnd, ItemList, KindFilter, ViewState, filter_items};
