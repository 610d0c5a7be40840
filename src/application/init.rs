//! Initialize site use case

use crate::domain::template::DEFAULT_POST_TEMPLATE;
use crate::error::Result;
use crate::infrastructure::config::DEFAULT_CONFIG;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use std::fs;
use std::path::Path;

/// Service for initializing a new site
pub struct InitService;

impl InitService {
    /// Write quire.toml, the blog post template and the frame directory.
    pub fn execute(path: &Path) -> Result<()> {
        let repo = FileSystemRepository::new(path.to_path_buf());

        // Fails if quire.toml already exists
        repo.initialize(DEFAULT_CONFIG)?;

        let template_dir = path.join("content").join("blog").join(".template");
        fs::create_dir_all(&template_dir)?;

        let template_path = template_dir.join("index.mdx");
        if !template_path.exists() {
            fs::write(&template_path, DEFAULT_POST_TEMPLATE)?;
        }

        fs::create_dir_all(path.join("content").join("frame"))?;

        println!("Initialized quire site at {}", path.display());

        Ok(())
    }
}
