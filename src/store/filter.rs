//! Kind filter and name search

use crate::models::{Item, Kind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which kinds of item are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Series,
    Book,
}

impl KindFilter {
    pub fn matches(&self, kind: Kind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Series => kind == Kind::Series,
            KindFilter::Book => kind == Kind::Book,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Series => "series",
            KindFilter::Book => "book",
        }
    }
}

impl From<Kind> for KindFilter {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Series => KindFilter::Series,
            Kind::Book => KindFilter::Book,
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "*" => Ok(KindFilter::All),
            other => other
                .parse::<Kind>()
                .map(KindFilter::from)
                .map_err(|_| format!("Unknown filter: {} (expected 'all', 'series' or 'book')", s)),
        }
    }
}

/// Items passing both the kind filter and the search query, in list order
///
/// The query is a case-insensitive substring; an empty query matches
/// everything.
pub fn filter_items<'a, I>(items: I, filter: KindFilter, query: &str) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let query = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| filter.matches(item.kind))
        .filter(|item| query.is_empty() || item.name.to_lowercase().contains(&query))
        .collect()
}
