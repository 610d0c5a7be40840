//! Content entries and their frontmatter schema

use super::date::deserialize_entry_date;
use super::tag::TagRegistry;
use crate::error::{QuireError, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Frontmatter as written at the top of a source document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub title: String,
    pub slug: String,
    pub description: String,

    #[serde(deserialize_with = "deserialize_entry_date")]
    pub date: NaiveDateTime,

    #[serde(deserialize_with = "deserialize_entry_date")]
    pub last_updated: NaiveDateTime,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "default_true")]
    pub search_index: bool,
}

fn default_true() -> bool {
    true
}

/// A validated content entry belonging to one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub last_updated: NaiveDateTime,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub search_index: bool,
    pub collection: String,
    pub source: PathBuf,
}

impl ContentEntry {
    /// Build an entry from parsed frontmatter, validating slug and tags.
    pub fn from_frontmatter(
        frontmatter: Frontmatter,
        collection: &str,
        source: &Path,
        registry: &TagRegistry,
    ) -> Result<Self> {
        validate_slug(&frontmatter.slug).map_err(|_| QuireError::Frontmatter {
            path: source.to_path_buf(),
            message: format!(
                "slug '{}' must be a single folder name without path separators",
                frontmatter.slug
            ),
        })?;

        if let Some(tags) = &frontmatter.tags {
            if let Some(unknown) = tags.iter().find(|t| !registry.contains(t)) {
                return Err(QuireError::UnknownTag {
                    tag: unknown.clone(),
                    entry: frontmatter.slug.clone(),
                });
            }
        }

        Ok(ContentEntry {
            title: frontmatter.title,
            slug: frontmatter.slug,
            description: frontmatter.description,
            date: frontmatter.date,
            last_updated: frontmatter.last_updated,
            tags: frontmatter.tags,
            image: frontmatter.image,
            search_index: frontmatter.search_index,
            collection: collection.to_string(),
            source: source.to_path_buf(),
        })
    }

    /// Parse a whole source document into an entry.
    pub fn parse(
        source_text: &str,
        collection: &str,
        source: &Path,
        registry: &TagRegistry,
    ) -> Result<Self> {
        let frontmatter = extract_frontmatter(source_text, source)?;
        Self::from_frontmatter(frontmatter, collection, source, registry)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// Extract and deserialize the leading `---` YAML block of a document.
pub fn extract_frontmatter(source_text: &str, path: &Path) -> Result<Frontmatter> {
    let invalid = |message: String| QuireError::Frontmatter {
        path: path.to_path_buf(),
        message,
    };

    let trimmed = source_text.trim_start_matches('\u{feff}').trim_start();
    let Some(after_open) = trimmed.strip_prefix("---") else {
        return Err(invalid("missing frontmatter block".to_string()));
    };

    let Some(close_pos) = after_open.find("\n---") else {
        return Err(invalid(
            "unclosed frontmatter block - missing closing ---".to_string(),
        ));
    };

    serde_yaml::from_str(&after_open[..close_pos]).map_err(|e| invalid(e.to_string()))
}

/// A slug must be a single folder name: non-empty, no `/`, `\` or `..`.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.contains('/') || slug.contains('\\') || slug.contains("..") {
        return Err(QuireError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}
