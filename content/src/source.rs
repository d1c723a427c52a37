//! Content sources the blog service reads from
//!
//! The service only talks to the [`ContentSource`] trait so that the mock
//! data can be swapped for a network-backed CMS client without touching
//! callers.

use crate::mock_data::{MOCK_CATEGORIES, MOCK_POSTS};
use crate::models::{BlogCategory, BlogPost};
use crate::Result;
use async_trait::async_trait;

/// Trait for anything that can deliver blog posts and categories
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// All posts in display order
    async fn posts(&self) -> Result<Vec<BlogPost>>;

    /// All categories in display order
    async fn categories(&self) -> Result<Vec<BlogCategory>>;
}

/// Source backed by the built-in placeholder articles
#[derive(Debug, Default, Clone, Copy)]
pub struct MockContentSource;

impl MockContentSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn posts(&self) -> Result<Vec<BlogPost>> {
        Ok(MOCK_POSTS.clone())
    }

    async fn categories(&self) -> Result<Vec<BlogCategory>> {
        Ok(MOCK_CATEGORIES.clone())
    }
}
