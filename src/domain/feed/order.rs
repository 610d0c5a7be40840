//! Feed ordering across collections

use crate::domain::entry::ContentEntry;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction of the feed's date ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first
    Ascending,
    /// Newest first
    #[default]
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortDirection::Ascending),
            "descending" | "desc" => Ok(SortDirection::Descending),
            _ => Err(format!(
                "Invalid order: '{}'. Valid orders are: ascending, descending",
                s
            )),
        }
    }
}

/// An entry in the merged feed, tagged with the collection it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedEntry<'a> {
    pub collection: &'a str,
    pub entry: &'a ContentEntry,
}

/// Merges collections into one date-ordered sequence.
pub struct FeedOrderer;

impl FeedOrderer {
    /// Merge and sort by publish date.
    ///
    /// Collections are visited in the given order. Entries with equal dates keep
    /// that encounter order. The inputs are left untouched.
    pub fn order<'a>(
        collections: &[(&'a str, &'a [ContentEntry])],
        direction: SortDirection,
    ) -> Vec<OrderedEntry<'a>> {
        let mut merged: Vec<OrderedEntry<'a>> = collections
            .iter()
            .flat_map(|&(collection, entries)| {
                entries
                    .iter()
                    .map(move |entry| OrderedEntry { collection, entry })
            })
            .collect();

        // sort_by is stable
        match direction {
            SortDirection::Ascending => merged.sort_by(|a, b| a.entry.date.cmp(&b.entry.date)),
            SortDirection::Descending => merged.sort_by(|a, b| b.entry.date.cmp(&a.entry.date)),
        }

        merged
    }
}
