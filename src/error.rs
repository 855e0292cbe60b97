//! Error types for the tracker library

use crate::storage::StorageError;

/// Tracker errors
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Item name must not be blank")]
    BlankName,

    #[error("User identifier must not be blank")]
    BlankUser,

    #[error("No active user, log in first")]
    NotLoggedIn,

    #[error("Reordering is disabled while a kind filter or search is active")]
    ReorderDisabled,

    #[error("No item id left above #{0}")]
    IdsExhausted(crate::models::ItemId),

    #[error("Invalid item list data: {0}")]
    InvalidList(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
