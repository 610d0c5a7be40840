//! List tags use case

use super::content::SiteContent;
use crate::domain::tags::{TagAggregator, TagCount};
use crate::error::Result;
use crate::infrastructure::repository::SiteRepository;
use crate::infrastructure::FileSystemRepository;

/// Service for building the tag index.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Aggregate tags over one collection, or over every collection in config order.
    pub fn execute(&self, collection: Option<&str>) -> Result<Vec<TagCount>> {
        let config = self.repository.load_config()?;
        let registry = config.registry()?;
        let content = SiteContent::load(&self.repository, &config, &registry)?;

        let names = collection.map(|c| vec![c.to_string()]);
        let entries = content.flatten(names.as_deref())?;

        let counts = TagAggregator::aggregate(&entries, &registry)?;
        tracing::debug!(entries = entries.len(), tags = counts.len(), "aggregated tags");
        Ok(counts)
    }
}
