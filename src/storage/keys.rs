//! Store key names

/// Identifier of the logged-in user
pub const ACTIVE_USER: &str = "active_user";

/// Theme preference (`light` or `dark`)
pub const THEME: &str = "theme";

const ITEMS_PREFIX: &str = "items:";

/// Key holding a user's serialized item list
pub fn items_key(user: &str) -> String {
    format!("{}{}", ITEMS_PREFIX, user)
}

/// Users that have a stored list
pub fn user_from_items_key(key: &str) -> Option<&str> {
    key.strip_prefix(ITEMS_PREFIX)
}
