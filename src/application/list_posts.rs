//! List posts use case

use super::content::SiteContent;
use crate::domain::feed::{FeedOrderer, SortDirection};
use crate::domain::tags::TagAggregator;
use crate::domain::ContentEntry;
use crate::error::{QuireError, Result};
use crate::infrastructure::repository::SiteRepository;
use crate::infrastructure::FileSystemRepository;

/// Service for listing entries in feed order, optionally by tag.
pub struct ListPostsService {
    repository: FileSystemRepository,
}

impl ListPostsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Entries in date order; `order` overrides the configured feed direction.
    pub fn execute(
        &self,
        tag: Option<&str>,
        collection: Option<&str>,
        order: Option<SortDirection>,
    ) -> Result<Vec<ContentEntry>> {
        let config = self.repository.load_config()?;
        let registry = config.registry()?;

        if let Some(tag) = tag {
            if !registry.contains(tag) {
                return Err(QuireError::Config(format!(
                    "Tag '{}' is not registered in quire.toml",
                    tag
                )));
            }
        }

        let content = SiteContent::load(&self.repository, &config, &registry)?;
        let names = collection.map(|c| vec![c.to_string()]);
        let selected = content.select(names.as_deref())?;

        let direction = order.unwrap_or(config.feed.order);
        let ordered: Vec<ContentEntry> = FeedOrderer::order(&selected, direction)
            .into_iter()
            .map(|o| o.entry.clone())
            .collect();

        Ok(match tag {
            Some(tag) => TagAggregator::posts_with_tag(&ordered, tag)
                .into_iter()
                .cloned()
                .collect(),
            None => ordered,
        })
    }
}
