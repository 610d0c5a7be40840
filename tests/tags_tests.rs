//! Integration tests for tags and posts commands

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::{init_site, quire_cmd, write, write_post};

#[test]
fn test_tags_no_tags_found() {
    let temp = init_site();

    quire_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_tags_first_occurrence_order_with_counts() {
    let temp = init_site();
    write_post(temp.path(), "blog", "a", "2024-01-01", &["heap", "tree"]);
    write_post(temp.path(), "blog", "b", "2024-02-01", &["array", "heap"]);
    write_post(temp.path(), "blog", "c", "2024-03-01", &[]);

    let output = quire_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<Vec<&str>> = stdout
        .lines()
        .map(|l| l.split_whitespace().collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["heap", "2", "/tags/heap/"],
            vec!["tree", "1", "/tags/tree/"],
            vec!["array", "1", "/tags/array/"],
        ]
    );
}

#[test]
fn test_tags_uses_registry_slugs() {
    let temp = init_site();
    let config = std::fs::read_to_string(temp.path().join("quire.toml")).unwrap();
    let start = config.find("tags = [").unwrap();
    let end = start + config[start..].find(']').unwrap() + 1;
    let config = format!(
        "{}[tags]\n\"Dynamic Programming\" = \"dynamic-programming\"\n{}",
        &config[..start],
        &config[end..]
    );
    std::fs::write(temp.path().join("quire.toml"), config).unwrap();

    write_post(temp.path(), "blog", "dp", "2024-01-01", &["Dynamic Programming"]);

    quire_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("/tags/dynamic-programming/"));
}

#[test]
fn test_tags_unknown_tag_fails() {
    let temp = init_site();
    write_post(temp.path(), "blog", "bad", "2024-01-01", &["graphs"]);

    quire_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Unknown tag 'graphs' on entry 'bad'"));
}

#[test]
fn test_tags_per_collection() {
    let temp = init_site();
    write_post(temp.path(), "blog", "a", "2024-01-01", &["heap"]);
    write_post(temp.path(), "frame", "f", "2024-01-01", &["stack"]);

    quire_cmd()
        .current_dir(temp.path())
        .args(["tags", "--collection", "frame"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stack"))
        .stdout(predicate::str::contains("heap").not());

    quire_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("stack"))
        .stdout(predicate::str::contains("heap"));
}

#[test]
fn test_duplicate_slug_fails_with_both_paths() {
    let temp = init_site();
    write(
        temp.path(),
        "content/blog/first/index.mdx",
        "---\ntitle: A\nslug: same\ndescription: a\ndate: 2024-01-01\nlastUpdated: 2024-01-01\n---\n",
    );
    write(
        temp.path(),
        "content/blog/second/index.mdx",
        "---\ntitle: B\nslug: same\ndescription: b\ndate: 2024-01-02\nlastUpdated: 2024-01-02\n---\n",
    );

    quire_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Duplicate slug 'same'"))
        .stderr(predicate::str::contains("first"))
        .stderr(predicate::str::contains("second"));
}

#[test]
fn test_invalid_frontmatter_fails() {
    let temp = init_site();
    write(
        temp.path(),
        "content/blog/broken/index.mdx",
        "---\ntitle: Broken\n---\n",
    );

    quire_cmd()
        .current_dir(temp.path())
        .arg("posts")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid frontmatter"));
}

#[test]
fn test_posts_newest_first_across_collections() {
    let temp = init_site();
    write_post(temp.path(), "blog", "jan", "2024-01-01", &[]);
    write_post(temp.path(), "blog", "mar", "2024-03-01", &[]);
    write_post(temp.path(), "frame", "feb", "2024-02-01", &[]);

    let output = quire_cmd()
        .current_dir(temp.path())
        .arg("posts")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let order: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().find(|part| part.contains('/')))
        .collect();
    assert_eq!(order, vec!["blog/mar", "frame/feb", "blog/jan"]);

    let output = quire_cmd()
        .current_dir(temp.path())
        .args(["posts", "--order", "asc"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let order: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().find(|part| part.contains('/')))
        .collect();
    assert_eq!(order, vec!["blog/jan", "frame/feb", "blog/mar"]);
}

#[test]
fn test_posts_by_tag() {
    let temp = init_site();
    write_post(temp.path(), "blog", "a", "2024-01-01", &["tree"]);
    write_post(temp.path(), "blog", "b", "2024-02-01", &["heap"]);

    quire_cmd()
        .current_dir(temp.path())
        .args(["posts", "--tag", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blog/a"))
        .stdout(predicate::str::contains("blog/b").not());

    quire_cmd()
        .current_dir(temp.path())
        .args(["posts", "--tag", "array"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn test_posts_unregistered_tag() {
    let temp = init_site();

    quire_cmd()
        .current_dir(temp.path())
        .args(["posts", "--tag", "graphs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not registered"));
}
