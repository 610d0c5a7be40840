//! Error types for quire

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quire
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("Not a quire site: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Unknown tag '{tag}' on entry '{entry}'")]
    UnknownTag { tag: String, entry: String },

    #[error(
        "Duplicate slug '{slug}' in collection '{collection}': {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateSlug {
        collection: String,
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("{0}")]
    Scaffold(String),

    #[error("Invalid frontmatter in {}: {message}", .path.display())]
    Frontmatter { path: PathBuf, message: String },

    #[error("Directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Template not found at {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QuireError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuireError::NotSiteDirectory(_) => 2,
            QuireError::UnknownTag { .. }
            | QuireError::DuplicateSlug { .. }
            | QuireError::Frontmatter { .. } => 3,
            QuireError::AlreadyExists(_)
            | QuireError::TemplateNotFound(_)
            | QuireError::InvalidSlug(_)
            | QuireError::Scaffold(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuireError::NotSiteDirectory(path) => {
                format!(
                    "Not a quire site: {}\n\n\
                    Suggestions:\n\
                    • Run 'quire init' in this directory to create a new site\n\
                    • Navigate to a directory containing quire.toml\n\
                    • Set QUIRE_ROOT environment variable to your site path",
                    path.display()
                )
            }
            QuireError::UnknownTag { tag, entry } => {
                format!(
                    "Unknown tag '{}' on entry '{}'\n\n\
                    Suggestions:\n\
                    • Check the tag spelling in the entry's frontmatter\n\
                    • Register the tag under [tags] in quire.toml",
                    tag, entry
                )
            }
            QuireError::DuplicateSlug { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Give one of the entries a different 'slug' in its frontmatter",
                    self
                )
            }
            QuireError::InvalidSlug(slug) => {
                format!(
                    "Invalid slug: '{}'\n\n\
                    Slug must be a single folder name without path separators\n\
                    Example: quire new two-pointers \"Two Pointers\"",
                    slug
                )
            }
            QuireError::AlreadyExists(path) => {
                format!(
                    "Directory already exists: {}\n\n\
                    Suggestions:\n\
                    • Choose a different slug\n\
                    • Remove the existing directory if it is no longer needed",
                    path.display()
                )
            }
            QuireError::TemplateNotFound(path) => {
                format!(
                    "Template not found at {}\n\n\
                    Suggestions:\n\
                    • Create the template file with title, slug, date and lastUpdated lines\n\
                    • Run 'quire init' to scaffold a default template",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuireError
pub type Result<T> = std::result::Result<T, QuireError>;
