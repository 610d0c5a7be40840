#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn quire_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quire").unwrap();
    cmd.env_remove("QUIRE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a site in a fresh temp directory.
pub fn init_site() -> TempDir {
    let temp = TempDir::new().unwrap();
    quire_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Write a file relative to the site root, creating parent directories.
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Write `{collection}/{slug}/index.mdx` with the given date and tags.
pub fn write_post(root: &Path, collection: &str, slug: &str, date: &str, tags: &[&str]) {
    let tags: String = if tags.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = tags.iter().map(|t| format!("  - {}\n", t)).collect();
        format!("tags:\n{}", items.concat())
    };
    let content = format!(
        "---\ntitle: {slug} title\nslug: {slug}\ndescription: About {slug}\ndate: {date}\nlastUpdated: {date}\n{tags}---\n\nBody of {slug}\n"
    );
    write(root, &format!("content/{}/{}/index.mdx", collection, slug), &content);
}
