//! Content source reading an exported JSON file
//!
//! Expected layout:
//!
//! ```json
//! { "posts": [ { "id": 1, "slug": "...", ... } ], "categories": [ ... ] }
//! ```
//!
//! The file is re-read on every request, so edits show up without a restart.

use crate::error::ContentError;
use crate::models::{BlogCategory, BlogPost};
use crate::source::ContentSource;
use crate::utils::{estimate_reading_time, extract_summary, validate_slug_format};
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Maximum length of a generated excerpt
pub const EXCERPT_LENGTH: usize = 160;

#[derive(Debug, Deserialize)]
struct ContentFile {
    #[serde(default)]
    posts: Vec<BlogPost>,
    #[serde(default)]
    categories: Vec<BlogCategory>,
}

/// Source backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Open a content file, failing early if it is missing or invalid
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let source = Self {
            path: path.as_ref().to_path_buf(),
        };

        let file = source.read().await?;
        info!(
            "Opened blog content file {:?} with {} posts and {} categories",
            source.path,
            file.posts.len(),
            file.categories.len()
        );

        Ok(source)
    }

    /// Get the path of the content file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<ContentFile> {
        debug!("Reading blog content from {:?}", self.path);
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFoundError(self.path.display().to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        let mut file: ContentFile = serde_json::from_slice(&bytes)?;

        file.posts = file.posts.into_iter().map(complete_post).collect();
        validate_posts(&file.posts)?;
        validate_categories(&file.categories)?;

        Ok(file)
    }
}

#[async_trait]
impl ContentSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn posts(&self) -> Result<Vec<BlogPost>> {
        Ok(self.read().await?.posts)
    }

    async fn categories(&self) -> Result<Vec<BlogCategory>> {
        Ok(self.read().await?.categories)
    }
}

/// Fill in fields an export may leave out
fn complete_post(mut post: BlogPost) -> BlogPost {
    if post.excerpt.trim().is_empty() {
        post.excerpt = extract_summary(&post.content, EXCERPT_LENGTH);
    }
    if post.reading_time == 0 {
        post.reading_time = estimate_reading_time(&post.content);
    }
    post
}

/// Check slug format and uniqueness of slugs and ids
pub fn validate_posts(posts: &[BlogPost]) -> Result<()> {
    let mut slugs = HashSet::new();
    let mut ids = HashSet::new();

    for post in posts {
        validate_slug_format(&post.slug)?;

        if !slugs.insert(post.slug.as_str()) {
            return Err(ContentError::ValidationError(format!(
                "Duplicate post slug: {}",
                post.slug
            )));
        }
        if !ids.insert(post.id) {
            return Err(ContentError::ValidationError(format!(
                "Duplicate post id: {}",
                post.id
            )));
        }
    }

    Ok(())
}

/// Check slug format and uniqueness of category slugs and ids
pub fn validate_categories(categories: &[BlogCategory]) -> Result<()> {
    let mut slugs = HashSet::new();
    let mut ids = HashSet::new();

    for category in categories {
        validate_slug_format(&category.slug)?;

        if !slugs.insert(category.slug.as_str()) {
            return Err(ContentError::ValidationError(format!(
                "Duplicate category slug: {}",
                category.slug
            )));
        }
        if !ids.insert(category.id) {
            return Err(ContentError::ValidationError(format!(
                "Duplicate category id: {}",
                category.id
            )));
        }
    }

    Ok(())
}
