//! Plain-text rows for item listings

use crate::models::{Item, ItemId};

/// Progress with its unit, e.g. `1 episode`, `12 pages`
pub fn progress_label(item: &Item) -> String {
    let unit = item.kind.unit();
    if item.progress == 1 {
        format!("{} {}", item.progress, unit)
    } else {
        format!("{} {}s", item.progress, unit)
    }
}

/// One row per item: id, highlight marker, kind, name and progress
pub fn render_items(items: &[&Item], highlighted: Option<ItemId>) -> String {
    let id_width = items
        .iter()
        .map(|item| item.id.0.to_string().len())
        .max()
        .unwrap_or(0);
    let name_width = items
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);

    items
        .iter()
        .map(|item| {
            let marker = if Some(item.id) == highlighted { '*' } else { ' ' };
            format!(
                "#{:<id_width$} {} {:<6} {:<name_width$}  {}",
                item.id.0,
                marker,
                item.kind.as_str(),
                item.name,
                progress_label(item),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Message shown instead of an empty listing
pub fn empty_message(searching: bool) -> &'static str {
    if searching {
        "No results."
    } else {
        "Nothing tracked yet. Start with `hobbylist add <name>`."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kind;

    #[test]
    fn test_progress_label_pluralizes() {
        let mut item = Item::new(ItemId(1), "Andor", Kind::Series);
        assert_eq!(progress_label(&item), "0 episodes");
        item.progress = 1;
        assert_eq!(progress_label(&item), "1 episode");
        let book = Item::new(ItemId(2), "Dune", Kind::Book);
        assert_eq!(progress_label(&book), "0 pages");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_items(&[], None), "");
    }
}
