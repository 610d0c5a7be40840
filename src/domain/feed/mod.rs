//! Feed ordering and item construction

pub mod item;
pub mod order;

pub use item::{build_item, generate_content, FeedItem, LinkPolicy};
pub use order::{FeedOrderer, OrderedEntry, SortDirection};
