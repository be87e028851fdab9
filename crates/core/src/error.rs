use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::content::validate::ValidationError;

/// Errors raised by the content stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("post not found: {0}")]
    PostNotFound(String),

    #[error("image not found: {0}")]
    ImageNotFound(String),

    #[error("a post with slug {0:?} already exists")]
    DuplicateSlug(String),

    #[error("invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
