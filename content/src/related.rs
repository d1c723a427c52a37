//! Related-article ranking by shared category and tags

use crate::models::{BlogPost, PostId};
use std::collections::HashSet;

/// Default number of related posts shown under an article
pub const DEFAULT_RELATED_LIMIT: usize = 3;

const CATEGORY_SCORE: usize = 2;
const TAG_SCORE: usize = 1;

/// Relevance of `candidate` for a reader of `post`
///
/// Same category (exact, case-sensitive) scores 2, every tag both posts
/// carry scores 1.
pub fn relatedness(post: &BlogPost, candidate: &BlogPost) -> usize {
    let mut score = 0;
    if post.category == candidate.category {
        score += CATEGORY_SCORE;
    }

    let tags: HashSet<&str> = post.tags.iter().map(String::as_str).collect();
    let shared = candidate
        .tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .intersection(&tags)
        .count();

    score + shared * TAG_SCORE
}

/// Rank the posts related to `post_id`, best first
///
/// Posts sharing nothing are dropped, ties keep their original order and at
/// most `limit` posts are returned. An unknown id yields no posts.
pub fn related_posts(posts: &[BlogPost], post_id: PostId, limit: usize) -> Vec<BlogPost> {
    let Some(post) = posts.iter().find(|post| post.id == post_id) else {
        return Vec::new();
    };

    let mut scored = posts
        .iter()
        .filter(|candidate| candidate.id != post_id)
        .map(|candidate| (relatedness(post, candidate), candidate))
        .filter(|(score, _)| *score > 0)
        .collect::<Vec<_>>();

    // stable, so equal scores stay in source order
    scored.sort_by(|(a, _), (b, _)| b.cmp(a));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
