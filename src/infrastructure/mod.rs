//! Infrastructure layer - Configuration and file system I/O

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, SiteRepository};
