//! Tag aggregation - counting entries per tag
//!
//! Produces the tag index shown on the tags page: every tag in use, its slug,
//! and how many entries carry it.

use crate::domain::entry::ContentEntry;
use crate::domain::tag::TagRegistry;
use crate::error::{QuireError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// One row of the tag index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    #[serde(rename = "name")]
    pub tag: String,
    pub slug: String,
    pub count: usize,
}

/// Aggregator for tag counts and tag filtering
pub struct TagAggregator;

impl TagAggregator {
    /// Count entries per tag.
    ///
    /// Output order is the order in which tags are first seen, walking entries
    /// in the given order. Entries without tags are skipped. A tag missing from
    /// the registry fails with [`QuireError::UnknownTag`].
    ///
    /// # Examples
    ///
    /// ```
    /// use quire::domain::tags::TagAggregator;
    /// use quire::domain::TagRegistry;
    ///
    /// let registry = TagRegistry::new([("tree", "tree")]).unwrap();
    /// let counts = TagAggregator::aggregate(&[], &registry).unwrap();
    /// assert!(counts.is_empty());
    /// ```
    pub fn aggregate(entries: &[ContentEntry], registry: &TagRegistry) -> Result<Vec<TagCount>> {
        let mut output: Vec<TagCount> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for entry in entries {
            let Some(tags) = &entry.tags else {
                continue;
            };

            for tag in tags {
                if let Some(&idx) = positions.get(tag.as_str()) {
                    output[idx].count += 1;
                    continue;
                }

                let slug = registry.slug(tag).ok_or_else(|| QuireError::UnknownTag {
                    tag: tag.clone(),
                    entry: entry.slug.clone(),
                })?;

                positions.insert(tag.as_str(), output.len());
                output.push(TagCount {
                    tag: tag.clone(),
                    slug: slug.to_string(),
                    count: 1,
                });
            }
        }

        Ok(output)
    }

    /// Entries carrying `tag`, in input order.
    pub fn posts_with_tag<'a>(entries: &'a [ContentEntry], tag: &str) -> Vec<&'a ContentEntry> {
        entries.iter().filter(|e| e.has_tag(tag)).collect()
    }
}
