//! Output formatting utilities

use crate::domain::date::default_date_format;
use crate::domain::tags::TagCount;
use crate::domain::ContentEntry;

/// Format the tag index for display.
pub fn format_tag_list(tags: &[TagCount]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let width = tags.iter().map(|t| t.tag.len()).max().unwrap_or(0);

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!(
            "{:<width$}  {:>3}  /tags/{}/\n",
            tag.tag,
            tag.count,
            tag.slug,
            width = width
        ));
    }
    output
}

/// Format a list of entries for display
pub fn format_post_list(entries: &[ContentEntry]) -> String {
    if entries.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{:<12}  {}/{}  {}\n",
            default_date_format(entry.date),
            entry.collection,
            entry.slug,
            entry.title
        ));
    }
    output
}
