//! Content hashing for change detection
//!
//! The service keys its enhanced-HTML memo on these hashes so that a post is
//! only re-enhanced when its raw content changes.

use sha2::{Digest, Sha256};

/// Generate a SHA256 hash of a raw content string
///
/// # Example
///
/// ```rust
/// use blog_content::hash_content;
///
/// let hash = hash_content("<p>Hallo</p>");
/// assert_eq!(hash.len(), 64); // SHA256 produces 64 hex characters
/// ```
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check whether content differs from the content a hash was taken of
pub fn has_content_changed(previous_hash: &str, content: &str) -> bool {
    previous_hash != hash_content(content)
}
