//! Tag registry: canonical tag name to URL slug

use crate::error::{QuireError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Tags every new site starts with.
pub const DEFAULT_TAGS: &[&str] = &[
    "general",
    "coding",
    "mdx",
    "open-source",
    "set",
    "dynamic-programming",
    "stack",
    "sort",
    "hash",
    "linked-list",
    "heap",
    "binary-search",
    "tree",
    "graph-dfs",
    "sliding-window",
    "tree-bfs",
    "tree-dfs",
    "backtracking",
    "array",
    "two-pointers",
];

/// How tags may be written in `quire.toml`.
///
/// A list of names (slug == name) or a table of `name = "slug"`.
/// Both normalize into the same [`TagRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagSource {
    Names(Vec<String>),
    Slugs(BTreeMap<String, String>),
}

impl Default for TagSource {
    fn default() -> Self {
        TagSource::Names(DEFAULT_TAGS.iter().map(|t| t.to_string()).collect())
    }
}

/// Immutable mapping from canonical tag name to its URL slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    slugs: HashMap<String, String>,
}

impl TagRegistry {
    /// Build a registry from `(name, slug)` pairs.
    ///
    /// Slugs must be URL-safe. Two names sharing a slug is allowed but logged.
    pub fn new<I, N, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut slugs: HashMap<String, String> = HashMap::new();
        let mut seen: HashMap<String, String> = HashMap::new();

        for (name, slug) in pairs {
            let name = name.into();
            let slug = slug.into();

            if name.trim().is_empty() {
                return Err(QuireError::Config("Tag name must not be empty".to_string()));
            }
            if !is_url_safe(&slug) {
                return Err(QuireError::Config(format!(
                    "Tag '{}' has slug '{}' which is not URL-safe (use a-z, 0-9, '-' or '_')",
                    name, slug
                )));
            }

            if let Some(other) = seen.get(&slug) {
                if other != &name {
                    tracing::warn!(
                        slug = %slug,
                        first = %other,
                        second = %name,
                        "two tags share one slug"
                    );
                }
            } else {
                seen.insert(slug.clone(), name.clone());
            }

            slugs.insert(name, slug);
        }

        Ok(TagRegistry { slugs })
    }

    /// Build a registry from its configuration form.
    pub fn from_source(source: &TagSource) -> Result<Self> {
        match source {
            TagSource::Names(names) => Self::new(names.iter().map(|n| (n.clone(), n.clone()))),
            TagSource::Slugs(map) => Self::new(map.iter().map(|(n, s)| (n.clone(), s.clone()))),
        }
    }

    /// Resolve the slug for a tag name.
    pub fn slug(&self, tag: &str) -> Option<&str> {
        self.slugs.get(tag).map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.slugs.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
