//! Blog accessors used by page templates
//!
//! Every accessor swallows source failures: the error is logged and the
//! caller gets an empty list or `None`, matching what a page should render
//! when the CMS is unreachable.

use crate::enhance::enhance_content;
use crate::hashing::{has_content_changed, hash_content};
use crate::models::{BlogCategory, BlogPost, PostId};
use crate::related::{related_posts, DEFAULT_RELATED_LIMIT};
use crate::source::{ContentSource, MockContentSource};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Enhanced HTML of a post together with the hash of the raw content it was built from
#[derive(Debug, Clone)]
struct EnhancedEntry {
    content_hash: String,
    html: String,
}

/// Read access to blog posts and categories
pub struct BlogService {
    source: Arc<dyn ContentSource>,
    related_limit: usize,
    enhanced: RwLock<HashMap<PostId, EnhancedEntry>>,
}

impl BlogService {
    /// Create a service reading from the given source
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self::with_source(Arc::new(source))
    }

    /// Create a service reading from a shared source
    pub fn with_source(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            related_limit: DEFAULT_RELATED_LIMIT,
            enhanced: RwLock::new(HashMap::new()),
        }
    }

    /// Create a service over the built-in placeholder articles
    pub fn mock() -> Self {
        Self::new(MockContentSource::new())
    }

    /// Set the number of related posts returned when no limit is given
    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.related_limit = limit;
        self
    }

    pub fn related_limit(&self) -> usize {
        self.related_limit
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    async fn load_posts(&self) -> Vec<BlogPost> {
        match self.source.posts().await {
            Ok(posts) => posts,
            Err(err) => {
                error!(
                    "Error fetching blog posts from {} source: {}",
                    self.source.name(),
                    err
                );
                Vec::new()
            }
        }
    }

    async fn load_categories(&self) -> Vec<BlogCategory> {
        match self.source.categories().await {
            Ok(categories) => categories,
            Err(err) => {
                error!(
                    "Error fetching blog categories from {} source: {}",
                    self.source.name(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// All posts with their raw content, in source order
    pub async fn get_all_blog_posts(&self) -> Vec<BlogPost> {
        self.load_posts().await
    }

    /// The post with exactly this slug, with display-ready content
    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        let Some(mut post) = self
            .load_posts()
            .await
            .into_iter()
            .find(|post| post.slug == slug)
        else {
            debug!("No blog post with slug {}", slug);
            return None;
        };

        post.content = self.enhanced_content(&post).await;
        Some(post)
    }

    /// Enhanced HTML for a post, reusing earlier work while the raw content is unchanged
    async fn enhanced_content(&self, post: &BlogPost) -> String {
        if let Some(entry) = self.enhanced.read().await.get(&post.id) {
            if !has_content_changed(&entry.content_hash, &post.content) {
                debug!("Using cached enhanced content for post {}", post.id);
                return entry.html.clone();
            }
        }

        let html = enhance_content(&post.content);
        self.enhanced.write().await.insert(
            post.id,
            EnhancedEntry {
                content_hash: hash_content(&post.content),
                html: html.clone(),
            },
        );

        html
    }

    /// Posts whose category label normalizes to `category_slug`
    pub async fn get_blog_posts_by_category(&self, category_slug: &str) -> Vec<BlogPost> {
        self.load_posts()
            .await
            .into_iter()
            .filter(|post| post.category_slug() == category_slug)
            .collect()
    }

    /// Posts flagged as featured, in source order
    pub async fn get_featured_posts(&self) -> Vec<BlogPost> {
        self.load_posts()
            .await
            .into_iter()
            .filter(BlogPost::is_featured)
            .collect()
    }

    /// All categories with post counts computed from the current posts
    pub async fn get_all_categories(&self) -> Vec<BlogCategory> {
        let posts = self.load_posts().await;
        self.load_categories()
            .await
            .into_iter()
            .map(|category| category.with_count_from(&posts))
            .collect()
    }

    pub async fn get_category_by_slug(&self, slug: &str) -> Option<BlogCategory> {
        self.get_all_categories()
            .await
            .into_iter()
            .find(|category| category.slug == slug)
    }

    /// Up to `limit` posts related to `post_id`, best match first
    ///
    /// `None` uses the service's configured limit.
    pub async fn get_related_posts(&self, post_id: PostId, limit: Option<usize>) -> Vec<BlogPost> {
        let limit = limit.unwrap_or(self.related_limit);
        related_posts(&self.load_posts().await, post_id, limit)
    }
}

impl Default for BlogService {
    fn default() -> Self {
        Self::mock()
    }
}
