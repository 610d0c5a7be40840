//! Build use case
//!
//! Produces the derived artifacts of a site: the RSS feed, the tag listing and
//! the `sitemap.xml` alias.

use super::content::SiteContent;
use crate::domain::feed::{build_item, FeedItem, FeedOrderer};
use crate::domain::tags::{TagAggregator, TagCount};
use crate::error::{QuireError, Result};
use crate::infrastructure::config::SiteConfig;
use crate::infrastructure::repository::SiteRepository;
use crate::infrastructure::FileSystemRepository;
use rss::validation::Validate;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const SITEMAP_INDEX: &str = "sitemap-index.xml";
const SITEMAP_ALIAS: &str = "sitemap.xml";
const TAGS_FILE: &str = "tags.toml";

/// What a build wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub feed_path: PathBuf,
    pub feed_items: usize,
    pub tags_path: PathBuf,
    pub tag_count: usize,
    pub sitemap_aliased: bool,
}

#[derive(Serialize)]
struct TagListing<'a> {
    tag: &'a [TagCount],
}

/// Service for building site artifacts
pub struct BuildService {
    repository: FileSystemRepository,
}

impl BuildService {
    pub fn new(repository: FileSystemRepository) -> Self {
        BuildService { repository }
    }

    /// Run a full build.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config or any entry fails validation
    /// - The feed fails RSS validation
    /// - File I/O fails
    pub fn execute(&self) -> Result<BuildReport> {
        let config = self.repository.load_config()?;
        let registry = config.registry()?;
        let content = SiteContent::load(&self.repository, &config, &registry)?;

        // Feed
        let selected = content.select(Some(config.feed.collections.as_slice()))?;
        let items: Vec<FeedItem> = FeedOrderer::order(&selected, config.feed.order)
            .iter()
            .map(|ordered| build_item(ordered, &config.site.url, config.feed.link))
            .collect();
        let xml = render_feed(&config.site, &items)?;

        let feed_rel = config.build.output.join(&config.feed.path);
        self.repository.write_file(&feed_rel, &xml)?;
        tracing::info!(path = %feed_rel.display(), items = items.len(), "wrote feed");

        // Tag listing
        let entries = content.flatten(None)?;
        let counts = TagAggregator::aggregate(&entries, &registry)?;
        let listing = toml::to_string(&TagListing { tag: &counts })?;

        let tags_rel = config.build.output.join(TAGS_FILE);
        self.repository.write_file(&tags_rel, &listing)?;
        tracing::info!(path = %tags_rel.display(), tags = counts.len(), "wrote tag listing");

        let sitemap_aliased = alias_sitemap(&self.repository.output_dir(&config));

        Ok(BuildReport {
            feed_path: self.repository.root().join(feed_rel),
            feed_items: items.len(),
            tags_path: self.repository.root().join(tags_rel),
            tag_count: counts.len(),
            sitemap_aliased,
        })
    }
}

/// Render feed items as an RSS 2.0 document.
pub fn render_feed(site: &SiteConfig, items: &[FeedItem]) -> Result<String> {
    let items: Vec<rss::Item> = items
        .iter()
        .map(|item| {
            ItemBuilder::default()
                .title(item.title.clone())
                .link(item.link.clone())
                .guid(
                    GuidBuilder::default()
                        .permalink(true)
                        .value(item.link.clone())
                        .build(),
                )
                .description(item.description.clone())
                .content(item.content.clone())
                .pub_date(item.pub_date.and_utc().to_rfc2822())
                .build()
        })
        .collect();

    let channel = ChannelBuilder::default()
        .title(site.feed_title())
        .link(format!("{}/", site.url.trim_end_matches('/')))
        .description(site.description.clone())
        .language(site.feed_language())
        .managing_editor(site.author.clone())
        .generator("quire".to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| QuireError::Feed(format!("rss validation failed: {}", e)))?;
    Ok(channel.to_string())
}

/// Copy `sitemap-index.xml` to `sitemap.xml` inside `output_dir`.
///
/// Failure is logged and reported as `false`; it never fails the build.
pub fn alias_sitemap(output_dir: &Path) -> bool {
    let source = output_dir.join(SITEMAP_INDEX);
    let destination = output_dir.join(SITEMAP_ALIAS);

    match fs::copy(&source, &destination) {
        Ok(_) => {
            tracing::info!("`{}` created as alias of `{}`", SITEMAP_ALIAS, SITEMAP_INDEX);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to create {} alias: {}", SITEMAP_ALIAS, e);
            false
        }
    }
}
