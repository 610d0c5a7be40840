//! Configuration management (`quire.toml`)

use crate::domain::feed::{LinkPolicy, SortDirection};
use crate::domain::{TagRegistry, TagSource};
use crate::error::{QuireError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the site configuration file at the site root.
pub const CONFIG_FILE: &str = "quire.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tags: TagSource,
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default = "default_collections")]
    pub collections: Vec<CollectionConfig>,
}

/// Site-level metadata used by the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub url: String,
    pub title: String,
    /// Used as the feed title; falls back to `title`
    #[serde(default)]
    pub title_default: Option<String>,
    pub description: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_path")]
    pub path: PathBuf,
    #[serde(default = "default_feed_collections")]
    pub collections: Vec<String>,
    #[serde(default)]
    pub order: SortDirection,
    #[serde(default)]
    pub link: LinkPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub name: String,
    pub dir: PathBuf,
}

fn default_lang() -> String {
    "en-US".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_feed_path() -> PathBuf {
    PathBuf::from("rss.xml")
}

fn default_feed_collections() -> Vec<String> {
    vec!["blog".to_string()]
}

fn default_collections() -> Vec<CollectionConfig> {
    vec![CollectionConfig {
        name: "blog".to_string(),
        dir: PathBuf::from("content/blog"),
    }]
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            output: default_output(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            path: default_feed_path(),
            collections: default_feed_collections(),
            order: SortDirection::default(),
            link: LinkPolicy::default(),
        }
    }
}

impl SiteConfig {
    pub fn feed_title(&self) -> &str {
        self.title_default.as_deref().unwrap_or(&self.title)
    }

    /// Channel language tag, e.g. `ko-KR` becomes `ko-kr`.
    pub fn feed_language(&self) -> String {
        self.lang.to_lowercase()
    }
}

impl Config {
    /// Parse and validate configuration text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| QuireError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from quire.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuireError::NotSiteDirectory(path.to_path_buf())
            } else {
                QuireError::Io(e)
            }
        })?;

        Self::parse(&contents)
    }

    /// Build the tag registry declared in this config.
    pub fn registry(&self) -> Result<TagRegistry> {
        TagRegistry::from_source(&self.tags)
    }

    pub fn collection(&self, name: &str) -> Result<&CollectionConfig> {
        self.collections
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| QuireError::UnknownCollection(name.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.site.url.trim().is_empty() {
            return Err(QuireError::Config("site.url must not be empty".to_string()));
        }

        let mut names = HashSet::new();
        for collection in &self.collections {
            if !names.insert(collection.name.as_str()) {
                return Err(QuireError::Config(format!(
                    "Collection '{}' is declared more than once",
                    collection.name
                )));
            }
        }

        let mut feed_names = HashSet::new();
        for name in &self.feed.collections {
            if !names.contains(name.as_str()) {
                return Err(QuireError::Config(format!(
                    "feed.collections names unknown collection '{}'",
                    name
                )));
            }
            if !feed_names.insert(name.as_str()) {
                return Err(QuireError::Config(format!(
                    "feed.collections lists '{}' more than once",
                    name
                )));
            }
        }

        self.registry()?;
        Ok(())
    }
}

/// `quire.toml` written by `quire init`.
pub const DEFAULT_CONFIG: &str = r#"# Tags that entries may use. Either a list of names (slug == name)
# or a [tags] table mapping name = "slug".
tags = [
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
]

[site]
url = "https://example.com"
title = "My Site"
description = "Notes and write-ups"
lang = "en-US"

[build]
output = "dist"

[feed]
path = "rss.xml"
collections = ["blog"]
order = "descending"
link = "collection"

[[collections]]
name = "blog"
dir = "content/blog"

[[collections]]
name = "frame"
dir = "content/frame"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tag::DEFAULT_TAGS;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[site]
url = "https://example.com"
title = "Algorithms"
description = "Write-ups"
"#;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.site.lang, "en-US");
        assert_eq!(config.feed.order, SortDirection::Descending);
        assert_eq!(config.feed.link, LinkPolicy::Collection);
        assert_eq!(config.collections.len(), 2);
        assert_eq!(config.registry().unwrap().len(), DEFAULT_TAGS.len());
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = Config::parse(MINIMAL).unwrap();
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.feed.path, PathBuf::from("rss.xml"));
        assert_eq!(config.feed.collections, vec!["blog".to_string()]);
        assert_eq!(config.collection("blog").unwrap().dir, PathBuf::from("content/blog"));
        assert_eq!(config.site.feed_title(), "Algorithms");
    }

    #[test]
    fn test_feed_language_is_lowercased() {
        let config = Config::parse(&format!("{}lang = \"ko-KR\"\n", MINIMAL)).unwrap();
        assert_eq!(config.site.feed_language(), "ko-kr");
    }

    #[test]
    fn test_table_tags() {
        let text = format!("[tags]\n\"Dynamic Programming\" = \"dp\"\n{}", MINIMAL);
        let config = Config::parse(&text).unwrap();
        assert_eq!(config.registry().unwrap().slug("Dynamic Programming"), Some("dp"));
    }

    #[test]
    fn test_rejects_unknown_feed_collection() {
        let text = format!("{}\n[feed]\ncollections = [\"frame\"]\n", MINIMAL);
        let result = Config::parse(&text);
        assert!(matches!(result, Err(QuireError::Config(msg)) if msg.contains("frame")));
    }

    #[test]
    fn test_rejects_duplicate_collection() {
        let text = format!(
            "{}\n[[collections]]\nname = \"blog\"\ndir = \"a\"\n\n[[collections]]\nname = \"blog\"\ndir = \"b\"\n",
            MINIMAL
        );
        assert!(Config::parse(&text).is_err());
    }

    #[test]
    fn test_rejects_repeated_feed_collection() {
        let text = format!("{}\n[feed]\ncollections = [\"blog\", \"blog\"]\n", MINIMAL);
        let result = Config::parse(&text);
        assert!(matches!(result, Err(QuireError::Config(msg)) if msg.contains("more than once")));
    }

    #[test]
    fn test_rejects_bad_order() {
        let text = format!("{}\n[feed]\norder = \"newest\"\n", MINIMAL);
        assert!(
            matches!(Config::parse(&text), Err(QuireError::Config(msg)) if msg.contains(CONFIG_FILE))
        );
        assert!(matches!(Config::parse("[site"), Err(QuireError::Config(_))));
    }

    #[test]
    fn test_unknown_collection_lookup() {
        let config = Config::parse(MINIMAL).unwrap();
        assert!(matches!(
            config.collection("notes"),
            Err(QuireError::UnknownCollection(_))
        ));
    }

    #[test]
    fn test_load_from_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), MINIMAL).unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.site.url, "https://example.com");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            QuireError::NotSiteDirectory(_) => {}
            _ => panic!("Expected NotSiteDirectory error"),
        }
    }
}
