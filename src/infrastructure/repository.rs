//! File system repository

use crate::domain::{ContentEntry, TagRegistry};
use crate::error::{QuireError, Result};
use crate::infrastructure::config::{CollectionConfig, Config, CONFIG_FILE};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from quire.toml
    fn load_config(&self) -> Result<Config>;

    /// Check if quire.toml exists
    fn is_initialized(&self) -> bool;

    /// Write the initial quire.toml
    fn initialize(&self, config_text: &str) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover site root by walking up from current directory
    /// First checks QUIRE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUIRE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuireError::Config(format!(
                    "QUIRE_ROOT is set to '{}' but no {} found. \
                    Run 'quire init' in that directory or unset QUIRE_ROOT.",
                    path.display(),
                    CONFIG_FILE
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuireError::NotSiteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }

    fn initialize(&self, config_text: &str) -> Result<()> {
        if self.is_initialized() {
            return Err(QuireError::Config(format!(
                "Site already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&self.root)?;
        fs::write(self.root.join(CONFIG_FILE), config_text)?;
        Ok(())
    }
}

// Content and output operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Absolute directory of a collection.
    pub fn collection_dir(&self, collection: &CollectionConfig) -> PathBuf {
        self.root.join(&collection.dir)
    }

    /// Source files of a collection, relative to the site root, in path order.
    ///
    /// Picks up `.md` and `.mdx` files at any depth, skipping files whose name
    /// starts with `_` and anything inside a hidden directory.
    pub fn list_entry_files(&self, collection: &CollectionConfig) -> Result<Vec<PathBuf>> {
        let dir = self.collection_dir(collection);
        if !dir.is_dir() {
            tracing::debug!(collection = %collection.name, dir = %dir.display(), "collection directory missing");
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| QuireError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if name.starts_with('_') || !(name.ends_with(".mdx") || name.ends_with(".md")) {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(rel);
        }

        Ok(files)
    }

    /// Load and validate every entry of a collection.
    ///
    /// Fails on the first invalid document, unknown tag or duplicate slug.
    pub fn load_collection(
        &self,
        collection: &CollectionConfig,
        registry: &TagRegistry,
    ) -> Result<Vec<ContentEntry>> {
        let files = self.list_entry_files(collection)?;
        let mut entries = Vec::with_capacity(files.len());
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for rel in files {
            let text = fs::read_to_string(self.root.join(&rel))?;
            let entry = ContentEntry::parse(&text, &collection.name, &rel, registry)?;

            if let Some(first) = seen.get(&entry.slug) {
                return Err(QuireError::DuplicateSlug {
                    collection: collection.name.clone(),
                    slug: entry.slug,
                    first: first.clone(),
                    second: rel,
                });
            }
            seen.insert(entry.slug.clone(), rel);
            entries.push(entry);
        }

        tracing::debug!(
            collection = %collection.name,
            count = entries.len(),
            "loaded collection"
        );
        Ok(entries)
    }

    /// Absolute output directory for build artifacts.
    pub fn output_dir(&self, config: &Config) -> PathBuf {
        self.root.join(&config.build.output)
    }

    /// Write a file (creates parent directories, overwrites if it exists)
    pub fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        let path = self.root.join(path);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(QuireError::Io)
    }

    /// Create a directory relative to the root; its parent must exist and
    /// the directory itself must not.
    pub fn create_dir_exclusive(&self, dir: &Path) -> Result<PathBuf> {
        let path = self.root.join(dir);
        match fs::create_dir(&path) {
            Ok(()) => Ok(path),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(QuireError::AlreadyExists(path))
            }
            Err(e) => Err(QuireError::Io(e)),
        }
    }
}
