//! quire - Content pipeline for a static site
//!
//! Loads tagged content entries from markdown frontmatter, builds the tag
//! index, and orders entries across collections into an RSS feed.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuireError;
