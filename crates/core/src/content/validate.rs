/// Post validation applied before any write to the post store.
use thiserror::Error;

use super::post::BlogPost;
use super::slug::is_url_safe;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("post slug is required")]
    MissingSlug,
    #[error("post slug {0:?} is not URL-safe")]
    InvalidSlug(String),
    #[error("readTimeMinutes must be a positive integer")]
    ZeroReadTime,
}

/// Validate that a post can be stored.
pub fn validate_post(post: &BlogPost) -> Result<(), ValidationError> {
    if post.slug.is_empty() {
        return Err(ValidationError::MissingSlug);
    }
    if !is_url_safe(&post.slug) {
        return Err(ValidationError::InvalidSlug(post.slug.clone()));
    }
    if post.read_time_minutes == Some(0) {
        return Err(ValidationError::ZeroReadTime);
    }
    Ok(())
}
