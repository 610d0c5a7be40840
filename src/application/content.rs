//! Loaded site content shared by the read-only use cases

use crate::domain::{ContentEntry, TagRegistry};
use crate::error::{QuireError, Result};
use crate::infrastructure::{Config, FileSystemRepository};

/// Immutable snapshot of every configured collection, in config order.
#[derive(Debug, Clone)]
pub struct SiteContent {
    collections: Vec<(String, Vec<ContentEntry>)>,
}

impl SiteContent {
    /// Load all collections declared in the config.
    pub fn load(
        repository: &FileSystemRepository,
        config: &Config,
        registry: &TagRegistry,
    ) -> Result<Self> {
        let mut collections = Vec::with_capacity(config.collections.len());
        for collection in &config.collections {
            let entries = repository.load_collection(collection, registry)?;
            collections.push((collection.name.clone(), entries));
        }
        Ok(SiteContent { collections })
    }

    pub fn entries(&self, name: &str) -> Result<&[ContentEntry]> {
        self.collections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entries)| entries.as_slice())
            .ok_or_else(|| QuireError::UnknownCollection(name.to_string()))
    }

    /// Named collections as orderer input; `None` selects every collection.
    pub fn select<'a>(
        &'a self,
        names: Option<&'a [String]>,
    ) -> Result<Vec<(&'a str, &'a [ContentEntry])>> {
        match names {
            Some(names) => names
                .iter()
                .map(|name| Ok((name.as_str(), self.entries(name)?)))
                .collect(),
            None => Ok(self
                .collections
                .iter()
                .map(|(name, entries)| (name.as_str(), entries.as_slice()))
                .collect()),
        }
    }

    /// Entries of the selected collections concatenated in selection order.
    pub fn flatten(&self, names: Option<&[String]>) -> Result<Vec<ContentEntry>> {
        Ok(self
            .select(names)?
            .into_iter()
            .flat_map(|(_, entries)| entries.iter().cloned())
            .collect())
    }
}
