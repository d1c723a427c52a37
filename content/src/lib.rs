//! # Blog Content Crate
//!
//! Read-only access to the articles and categories of the company blog. Until
//! the CMS integration exists, content comes from a built-in placeholder data
//! set or from an exported JSON file.
//!
//! ## Key Features
//!
//! - **Accessors**: all posts, post by slug, posts by category, featured
//!   posts and categories with live post counts ([`BlogService`])
//! - **Related Posts**: ranking by shared category and tags
//! - **Content Enhancement**: section dividers, callout boxes and summary
//!   blockquotes injected into article HTML
//! - **Pluggable Sources**: anything implementing [`ContentSource`]
//!
//! ## Usage
//!
//! ```rust
//! use blog_content::BlogService;
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! rt.block_on(async {
//!     let service = BlogService::mock();
//!
//!     let post = service.get_blog_post_by_slug("luft-wasser-waermepumpe-im-altbau").await;
//!     assert!(post.is_some());
//!
//!     let related = service.get_related_posts(1, Some(3)).await;
//!     assert!(related.len() <= 3);
//! });
//! ```

pub mod enhance;
pub mod error;
pub mod file_source;
pub mod hashing;
pub mod mock_data;
pub mod models;
pub mod related;
pub mod service;
pub mod source;
pub mod utils;

// Re-export commonly used items at the crate root
pub use enhance::{enhance_content, CalloutKind};
pub use error::ContentError;
pub use file_source::JsonFileSource;
pub use hashing::hash_content;
pub use models::{BlogCategory, BlogPost, CategoryId, PostId};
pub use related::{related_posts, DEFAULT_RELATED_LIMIT};
pub use service::BlogService;
pub use source::{ContentSource, MockContentSource};
pub use utils::category_slug;

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
