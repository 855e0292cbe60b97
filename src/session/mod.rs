//! Per-user tracking session
//!
//! `Session` is the application state: the active user, their item list,
//! the view (filter/search) and the theme. It owns a [`KeyValueStore`] and
//! writes every successful mutation through to it before returning.
//!
//! # Example
//!
//! ```rust
//! use hobbylist::config::Config;
//! use hobbylist::models::Kind;
//! use hobbylist::session::Session;
//! use hobbylist::storage::MemoryStore;
//!
//! # fn example() -> hobbylist::TrackerResult<()> {
//! let mut session = Session::open(MemoryStore::new(), &Config::default())?;
//! session.login("Alice")?;
//! session.add("Dune", Kind::Book)?;
//! assert_eq!(session.active_user(), Some("alice"));
//! assert_eq!(session.items().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod samples;

use crate::config::Config;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Item, ItemId, Kind, ProgressUpdate, Theme};
use crate::storage::{KeyValueStore, keys};
use crate::store::{AddOutcome, DragEnd, ItemList, KindFilter, ViewState, handle_drag_end};

/// Normalize a user identifier: trimmed and lower-cased
pub fn normalize_user(identifier: &str) -> Option<String> {
    let user = identifier.trim().to_lowercase();
    (!user.is_empty()).then_some(user)
}

pub struct Session<S: KeyValueStore> {
    store: S,
    user: Option<String>,
    items: ItemList,
    view: ViewState,
    theme: Theme,
    samples: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore the active user and theme from `store`
    ///
    /// If a user was logged in, their list is loaded as on login.
    pub fn open(store: S, config: &Config) -> TrackerResult<Self> {
        let theme = match store.get(keys::THEME)? {
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                config.ui.theme
            }),
            None => config.ui.theme,
        };

        let user = store
            .get(keys::ACTIVE_USER)?
            .and_then(|value| normalize_user(&value));

        let mut session = Self {
            store,
            user: None,
            items: ItemList::new(),
            view: ViewState::default(),
            theme,
            samples: config.samples,
        };

        if let Some(user) = user {
            session.items = session.load_items(&user)?;
            tracing::debug!("Restored session for '{}' ({} items)", user, session.items.len());
            session.user = Some(user);
        }

        Ok(session)
    }

    /// Make `identifier` the active user and load their list
    ///
    /// Returns the normalized identifier.
    pub fn login(&mut self, identifier: &str) -> TrackerResult<&str> {
        let user = normalize_user(identifier).ok_or(TrackerError::BlankUser)?;

        let items = self.load_items(&user)?;
        self.store.set(keys::ACTIVE_USER, &user)?;

        tracing::debug!("Logged in as '{}' ({} items)", user, items.len());
        self.items = items;
        self.view.reset();
        Ok(self.user.insert(user).as_str())
    }

    /// Forget the active user and drop the in-memory list
    ///
    /// The user's saved list stays in the store.
    pub fn logout(&mut self) -> TrackerResult<()> {
        self.store.remove(keys::ACTIVE_USER)?;
        if let Some(user) = self.user.take() {
            tracing::debug!("Logged out '{}'", user);
        }
        self.items = ItemList::new();
        self.view.reset();
        Ok(())
    }

    pub fn active_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Full list in user order
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_filter(&mut self, filter: KindFilter) {
        self.view.filter = filter;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.query = query.into();
    }

    /// Items passing the current filter and search
    pub fn visible(&self) -> Vec<&Item> {
        self.view.visible(&self.items)
    }

    /// Add an item to the front of the list
    ///
    /// A duplicate name creates nothing and returns the existing item's id;
    /// the view is switched to that item either way.
    pub fn add(&mut self, name: &str, kind: Kind) -> TrackerResult<AddOutcome> {
        self.require_user()?;
        let mut items = self.items.clone();
        let outcome = items.add(name, kind)?;
        if let AddOutcome::Added(_) = outcome {
            self.commit(items)?;
        }
        self.view.after_add(&self.items, outcome);
        Ok(outcome)
    }

    /// Remove an item. Returns false if it was not in the list.
    pub fn remove(&mut self, id: ItemId) -> TrackerResult<bool> {
        self.require_user()?;
        let mut items = self.items.clone();
        let removed = items.remove(id);
        if removed {
            self.commit(items)?;
        }
        Ok(removed)
    }

    /// Change an item's progress, clamped at zero. Returns the new value.
    pub fn adjust_progress(
        &mut self,
        id: ItemId,
        update: ProgressUpdate,
    ) -> TrackerResult<Option<u64>> {
        self.require_user()?;
        let mut items = self.items.clone();
        let progress = items.adjust_progress(id, update);
        if progress.is_some() {
            self.commit(items)?;
        }
        Ok(progress)
    }

    /// Move `source` to the position of `dest` in the full list
    pub fn reorder(&mut self, source: ItemId, dest: ItemId) -> TrackerResult<bool> {
        self.require_user()?;
        let mut items = self.items.clone();
        let moved = items.reorder(source, dest);
        if moved {
            self.commit(items)?;
        }
        Ok(moved)
    }

    /// Apply a completed drag gesture, see [`handle_drag_end`]
    pub fn drag_end(&mut self, event: DragEnd) -> TrackerResult<bool> {
        self.require_user()?;
        let mut items = self.items.clone();
        let moved = handle_drag_end(&mut items, &self.view, event)?;
        if moved {
            self.commit(items)?;
        }
        Ok(moved)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> TrackerResult<()> {
        self.store.set(keys::THEME, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    /// Switch between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> TrackerResult<Theme> {
        let theme = self.theme.toggle();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn require_user(&self) -> TrackerResult<&str> {
        self.user.as_deref().ok_or(TrackerError::NotLoggedIn)
    }

    /// Saved list, else the demo list for reserved users, else empty.
    /// Unreadable saved data counts as empty.
    fn load_items(&self, user: &str) -> TrackerResult<ItemList> {
        match self.store.get(&keys::items_key(user))? {
            Some(json) => Ok(ItemList::decode(&json).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable list for '{}': {}", user, e);
                ItemList::new()
            })),
            None if self.samples => Ok(samples::sample_list(user).unwrap_or_default()),
            None => Ok(ItemList::new()),
        }
    }

    /// Write `items` to the store, then make them the current list.
    /// On failure the current list is left as it was.
    fn commit(&mut self, items: ItemList) -> TrackerResult<()> {
        let key = keys::items_key(self.require_user()?);
        let json = items.encode()?;
        self.store.set(&key, &json)?;
        self.items = items;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, MockKeyValueStore, StorageError};
    use mockall::predicate::eq;

    fn session() -> Session<MemoryStore> {
        Session::open(MemoryStore::new(), &Config::default()).unwrap()
    }

    #[test]
    fn test_normalize_user() {
        assert_eq!(normalize_user("  Alice "), Some("alice".to_string()));
        assert_eq!(normalize_user("   "), None);
    }

    #[test]
    fn test_mutations_require_login() {
        let mut session = session();
        assert!(matches!(
            session.add("Dune", Kind::Book),
            Err(TrackerError::NotLoggedIn)
        ));
        assert!(matches!(
            session.remove(ItemId(1)),
            Err(TrackerError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_blank_login_rejected() {
        let mut session = session();
        assert!(matches!(session.login("  "), Err(TrackerError::BlankUser)));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_login_reserved_user_loads_sample() {
        let mut session = session();
        session.login("OTAKU").unwrap();
        assert_eq!(session.active_user(), Some("otaku"));
        assert_eq!(session.items().len(), 4);
    }

    #[test]
    fn test_samples_can_be_disabled() {
        let config = Config {
            samples: false,
            ..Config::default()
        };
        let mut session = Session::open(MemoryStore::new(), &config).unwrap();
        session.login("otaku").unwrap();
        assert!(session.items().is_empty());
    }

    #[test]
    fn test_add_resets_view_to_new_kind() {
        let mut session = session();
        session.login("alice").unwrap();
        session.set_query("zzz");
        session.add("Dune", Kind::Book).unwrap();
        assert_eq!(session.view().filter, KindFilter::Book);
        assert_eq!(session.visible().len(), 1);
    }

    #[test]
    fn test_drag_end_refused_while_searching() {
        let mut session = session();
        session.login("reader").unwrap();
        session.set_query("the");
        let result = session.drag_end(DragEnd::new(ItemId(5), Some(ItemId(7))));
        assert!(matches!(result, Err(TrackerError::ReorderDisabled)));
    }

    #[test]
    fn test_corrupt_list_falls_back_to_empty_without_writing() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().with(eq(keys::THEME)).returning(|_| Ok(None));
        store.expect_get().with(eq(keys::ACTIVE_USER)).returning(|_| Ok(None));
        store
            .expect_get()
            .with(eq("items:bob"))
            .returning(|_| Ok(Some("{not json".to_string())));
        store
            .expect_set()
            .with(eq(keys::ACTIVE_USER), eq("bob"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut session = Session::open(store, &Config::default()).unwrap();
        session.login("Bob").unwrap();
        assert!(session.items().is_empty());
    }

    #[test]
    fn test_add_writes_list_through() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .with(eq(keys::ACTIVE_USER), eq("bob"))
            .times(1)
            .returning(|_, _| Ok(()));
        store
            .expect_set()
            .withf(|key, value| key == "items:bob" && value.contains(r#""name":"Dune""#))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut session = Session::open(store, &Config::default()).unwrap();
        session.login("bob").unwrap();
        session.add("Dune", Kind::Book).unwrap();
        // Duplicate add writes nothing
        session.add("dune", Kind::Book).unwrap();
    }

    fn failing_store() -> MockKeyValueStore {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .with(eq(keys::ACTIVE_USER), eq("reader"))
            .returning(|_, _| Ok(()));
        store
            .expect_set()
            .withf(|key, _| key == "items:reader")
            .returning(|_, _| {
                Err(StorageError::Write {
                    path: "store.json".into(),
                    source: std::io::Error::other("disk full"),
                })
            });
        store
    }

    #[test]
    fn test_failed_write_leaves_list_unchanged() {
        let mut session = Session::open(failing_store(), &Config::default()).unwrap();
        session.login("reader").unwrap();
        let before = session.items().clone();

        assert!(matches!(
            session.add("Dune", Kind::Book),
            Err(TrackerError::Storage(_))
        ));
        assert!(session.remove(ItemId(5)).is_err());
        assert!(
            session
                .adjust_progress(ItemId(5), ProgressUpdate::Delta(10))
                .is_err()
        );
        assert!(session.reorder(ItemId(5), ItemId(7)).is_err());
        assert!(
            session
                .drag_end(DragEnd::new(ItemId(6), Some(ItemId(8))))
                .is_err()
        );

        assert_eq!(session.items(), &before);
    }

    #[test]
    fn test_stored_theme_wins_over_config() {
        let mut store = MemoryStore::new();
        store.set(keys::THEME, "dark").unwrap();
        let session = Session::open(store, &Config::default()).unwrap();
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn test_invalid_stored_theme_falls_back() {
        let mut store = MemoryStore::new();
        store.set(keys::THEME, "sepia").unwrap();
        let session = Session::open(store, &Config::default()).unwrap();
        assert_eq!(session.theme(), Theme::Light);
    }
}
