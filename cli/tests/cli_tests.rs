use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Build a `blogc` command isolated from the caller's environment
fn blogc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("blogc").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("BLOG_CONTENT_PATH")
        .env_remove("BLOG_RELATED_LIMIT")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to write a small content export
fn write_export(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("export.json");
    fs::write(
        &path,
        r#"{
  "posts": [
    {
      "id": 10,
      "slug": "eigener-beitrag",
      "title": "Eigener Beitrag aus dem Export",
      "content": "<h2>Start</h2><p>Ein Absatz.</p><h2>Ende</h2>",
      "category": "Solarthermie",
      "author": "Team",
      "date": "2024-07-01",
      "tags": ["Solarthermie"]
    }
  ],
  "categories": [
    {
      "id": 1,
      "slug": "solarthermie",
      "name": "Solarthermie",
      "description": "Sonnenwärme"
    }
  ]
}"#,
    )
    .unwrap();
    path
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blog CLI"))
        .stdout(predicate::str::contains("related"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("blogc"));
}

#[test]
fn test_posts_text() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .arg("posts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blog Posts"))
        .stdout(predicate::str::contains(
            "waermepumpe-kosten-foerderung-2024",
        ))
        .stdout(predicate::str::contains("Total posts: 6"));
}

#[test]
fn test_posts_json() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args(["posts", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slug\""))
        .stdout(predicate::str::contains("\"readingTime\""))
        .stdout(predicate::str::contains(
            "hydraulischer-abgleich-heizkosten-sparen",
        ));
}

#[test]
fn test_featured_posts() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args(["posts", "--featured"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Featured Posts"))
        .stdout(predicate::str::contains("Total posts: 2"));
}

#[test]
fn test_post_html_is_enhanced() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args([
            "post",
            "waermepumpe-kosten-foerderung-2024",
            "--format",
            "html",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("blog-divider"))
        .stdout(predicate::str::contains("blog-callout--important"))
        .stdout(predicate::str::contains("blog-summary"));
}

#[test]
fn test_missing_post_fails() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args(["post", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No blog post with slug 'does-not-exist'",
        ));
}

#[test]
fn test_category_posts() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args(["category", "waermepumpe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wärmepumpe"))
        .stdout(predicate::str::contains(
            "luft-wasser-waermepumpe-im-altbau",
        ))
        .stdout(predicate::str::contains("Total posts: 2"));
}

#[test]
fn test_unknown_category_fails() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args(["category", "unbekannt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'unbekannt'"));
}

#[test]
fn test_categories_json_has_computed_counts() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args(["categories", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slug\": \"waermepumpe\""))
        .stdout(predicate::str::contains("\"count\": 2"));
}

#[test]
fn test_related_posts() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args(["related", "1", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "luft-wasser-waermepumpe-im-altbau",
        ))
        .stdout(predicate::str::contains("Total posts: 1"));
}

#[test]
fn test_related_limit_from_env() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .env("BLOG_RELATED_LIMIT", "5")
        .args(["related", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total posts: 5"));
}

#[test]
fn test_related_unknown_post() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args(["related", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn test_enhance_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("artikel.html");
    fs::write(
        &file,
        "<h2>Eins</h2>\n<p><strong>Tipp:</strong> Frühzeitig planen.</p>\n<h2>Zwei</h2>\n",
    )
    .unwrap();

    blogc(&dir)
        .arg("enhance")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<hr class=\"blog-divider\" />\n<h2>Zwei</h2>",
        ))
        .stdout(predicate::str::contains("blog-callout--tip"));
}

#[test]
fn test_enhance_ignores_content_source() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("artikel.html");
    fs::write(&file, "<h2>Eins</h2><h2>Zwei</h2>").unwrap();

    blogc(&dir)
        .env("BLOG_CONTENT_PATH", "fehlt.json")
        .arg("enhance")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("blog-divider"));
}

#[test]
fn test_enhance_missing_file() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .args(["enhance", "fehlt.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_content_path_from_env() {
    let dir = TempDir::new().unwrap();
    let export = write_export(&dir);

    blogc(&dir)
        .env("BLOG_CONTENT_PATH", &export)
        .args(["posts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eigener-beitrag"))
        .stdout(predicate::str::contains("Total posts: 1"));
}

#[test]
fn test_content_path_from_dotenv() {
    let dir = TempDir::new().unwrap();
    write_export(&dir);
    fs::write(dir.path().join(".env"), "BLOG_CONTENT_PATH=export.json\n").unwrap();

    blogc(&dir)
        .args(["categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solarthermie"))
        .stdout(predicate::str::contains("(1)"));
}

#[test]
fn test_invalid_content_path_fails() {
    let dir = TempDir::new().unwrap();

    blogc(&dir)
        .env("BLOG_CONTENT_PATH", "fehlt.json")
        .arg("posts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open content file"));
}
