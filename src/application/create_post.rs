//! Create post use case

use crate::domain::entry::validate_slug;
use crate::domain::PostTemplate;
use crate::error::{QuireError, Result};
use crate::infrastructure::repository::SiteRepository;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

const TEMPLATE_DIR: &str = ".template";
const ENTRY_FILE: &str = "index.mdx";

/// Service for scaffolding a new entry from the collection's template.
pub struct CreatePostService {
    repository: FileSystemRepository,
}

impl CreatePostService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CreatePostService { repository }
    }

    /// Create `{collection dir}/{slug}/index.mdx` and return its path relative
    /// to the site root.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slug or title is empty, or the slug contains a path separator
    /// - The collection is unknown
    /// - The template is missing
    /// - The target directory already exists
    pub fn execute(
        &self,
        slug: &str,
        title: &str,
        collection: &str,
        today: NaiveDate,
    ) -> Result<PathBuf> {
        let slug = slug.trim();
        let title = title.trim();

        if slug.is_empty() || title.is_empty() {
            return Err(QuireError::Scaffold(
                "Both slug and title are required".to_string(),
            ));
        }
        validate_slug(slug)?;

        let config = self.repository.load_config()?;
        let collection = config.collection(collection)?;
        let base = Path::new(&collection.dir);

        let template_path = self
            .repository
            .root()
            .join(base)
            .join(TEMPLATE_DIR)
            .join(ENTRY_FILE);
        let template = PostTemplate::from_file(&template_path)?;

        let target_dir = base.join(slug);
        self.repository.create_dir_exclusive(&target_dir)?;

        let target_file = target_dir.join(ENTRY_FILE);
        self.repository
            .write_file(&target_file, &template.render(title, slug, today))?;

        tracing::debug!(path = %target_file.display(), "created entry");
        Ok(target_file)
    }
}
