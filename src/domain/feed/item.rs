//! Feed item construction

use super::order::OrderedEntry;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How an entry's path is formed inside the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// `{collection}/{slug}`
    #[default]
    Collection,
    /// `{slug}`
    Slug,
}

impl LinkPolicy {
    pub fn path(&self, collection: &str, slug: &str) -> String {
        match self {
            LinkPolicy::Collection => format!("{}/{}", collection, slug),
            LinkPolicy::Slug => slug.to_string(),
        }
    }
}

/// A syndication-ready item.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    pub content: String,
    pub link: String,
    pub pub_date: NaiveDateTime,
    pub collection: String,
}

/// Build a feed item for an ordered entry.
///
/// `site_url` may carry a trailing slash; links always end with one.
pub fn build_item(ordered: &OrderedEntry<'_>, site_url: &str, policy: LinkPolicy) -> FeedItem {
    let entry = ordered.entry;
    let path = policy.path(ordered.collection, &entry.slug);
    let link = format!("{}/{}/", site_url.trim_end_matches('/'), path);

    FeedItem {
        title: entry.title.clone(),
        description: entry.description.clone(),
        content: generate_content(&entry.description, &link),
        link,
        pub_date: entry.date,
        collection: ordered.collection.to_string(),
    }
}

/// Description as an escaped paragraph, followed by a "Keep reading" link.
pub fn generate_content(description: &str, link: &str) -> String {
    format!(
        "<p>{}</p><div style=\"margin-top: 50px; font-style: italic;\"><strong><a href=\"{}\">Keep reading</a>.</strong></div>",
        html_escape::encode_text(description),
        html_escape::encode_double_quoted_attribute(link)
    )
}
