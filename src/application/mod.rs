//! Application layer - Use cases and orchestration

pub mod build;
pub mod content;
pub mod create_post;
pub mod init;
pub mod list_posts;
pub mod list_tags;

pub use build::{BuildReport, BuildService};
pub use content::SiteContent;
pub use create_post::CreatePostService;
pub use init::InitService;
pub use list_posts::ListPostsService;
pub use list_tags::ListTagsService;
