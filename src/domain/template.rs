//! Post template used when scaffolding new entries

use crate::error::{QuireError, Result};
use chrono::NaiveDate;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Template written by `quire init`.
pub const DEFAULT_POST_TEMPLATE: &str = "---\ntitle: \nslug: \ndescription: \"\"\ndate: \nlastUpdated: \ntags:\n  - general\n---\n\nWrite your post here.\n";

/// Frontmatter lines filled in when scaffolding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Slug,
    Date,
    LastUpdated,
}

impl Field {
    fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Slug => "slug",
            Field::Date => "date",
            Field::LastUpdated => "lastUpdated",
        }
    }

    /// `key:` line with a blank or existing value; CRLF templates keep their `\r`.
    fn regex(self) -> &'static Regex {
        static TITLE: OnceLock<Regex> = OnceLock::new();
        static SLUG: OnceLock<Regex> = OnceLock::new();
        static DATE: OnceLock<Regex> = OnceLock::new();
        static LAST_UPDATED: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            Field::Title => &TITLE,
            Field::Slug => &SLUG,
            Field::Date => &DATE,
            Field::LastUpdated => &LAST_UPDATED,
        };
        cell.get_or_init(|| {
            Regex::new(&format!(r"(?mR)^{}:[ \t]*(?:\S.*)?$", self.key())).unwrap()
        })
    }
}

/// Template for a new post
#[derive(Debug)]
pub struct PostTemplate {
    content: String,
}

impl PostTemplate {
    pub fn new(content: impl Into<String>) -> Self {
        PostTemplate {
            content: content.into(),
        }
    }

    /// Read the template file; a missing file is [`QuireError::TemplateNotFound`].
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(QuireError::TemplateNotFound(path.to_path_buf()));
        }
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Fill in the first `title:`, `slug:`, `date:` and `lastUpdated:` lines.
    pub fn render(&self, title: &str, slug: &str, today: NaiveDate) -> String {
        let today = today.format("%Y-%m-%d").to_string();
        let replacements = [
            (Field::Title, title),
            (Field::Slug, slug),
            (Field::Date, today.as_str()),
            (Field::LastUpdated, today.as_str()),
        ];

        let mut result = self.content.clone();
        for (field, value) in replacements {
            let line = format!("{}: {}", field.key(), value);
            result = field.regex().replace(&result, NoExpand(&line)).into_owned();
        }
        result
    }
}
