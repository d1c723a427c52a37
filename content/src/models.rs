//! Blog post and category records

use crate::utils::category_slug;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PostId = u32;
pub type CategoryId = u32;

/// A single blog article.
///
/// `content` holds raw, author-controlled HTML. Display HTML is produced by
/// [`crate::enhance::enhance_content`] and never written back into the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_bio: Option<String>,
    pub date: NaiveDate,
    /// Minutes; zero means "not yet estimated"
    #[serde(default)]
    pub reading_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl BlogPost {
    /// Slug of the category label, used to match category pages
    pub fn category_slug(&self) -> String {
        category_slug(&self.category)
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// A blog category as listed in navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: CategoryId,
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Number of posts in this category, recomputed from the posts on read
    #[serde(default)]
    pub count: usize,
}

impl BlogCategory {
    /// Recount the posts belonging to this category
    pub fn with_count_from(mut self, posts: &[BlogPost]) -> Self {
        self.count = posts
            .iter()
            .filter(|post| post.category_slug() == self.slug)
            .count();
        self
    }
}
