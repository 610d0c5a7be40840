//! Domain layer - Content model, tag index and feed logic

pub mod date;
pub mod entry;
pub mod feed;
pub mod tag;
pub mod tags;
pub mod template;

pub use entry::{ContentEntry, Frontmatter};
pub use tag::{TagRegistry, TagSource};
pub use template::PostTemplate;
