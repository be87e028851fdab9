//! File-backed content stores.
//!
//! Every call re-reads its file from disk; nothing is cached between calls.
//! Writers are not serialized, so two overlapping read-modify-write cycles on
//! the same store can lose an update.

mod images;
mod json;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::content::landing::LandingCopy;
use crate::content::post::BlogPost;
use crate::content::validate::validate_post;
use crate::error::{StoreError, StoreResult};

pub use images::{is_image_file, sanitize_filename, IMAGE_EXTENSIONS};

/// Default locations, relative to the project root.
pub const DEFAULT_POSTS_PATH: &str = "src/app/content/posts.json";
pub const DEFAULT_LANDING_PATH: &str = "src/app/content/landing.json";
pub const DEFAULT_IMAGES_DIR: &str = "public/images";

/// Where each store lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    /// JSON array of posts.
    pub posts: PathBuf,
    /// JSON object with the landing copy.
    pub landing: PathBuf,
    /// Flat directory of uploaded images.
    pub images: PathBuf,
}

impl ContentPaths {
    /// Default layout under a project root.
    pub fn under_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            posts: root.join(DEFAULT_POSTS_PATH),
            landing: root.join(DEFAULT_LANDING_PATH),
            images: root.join(DEFAULT_IMAGES_DIR),
        }
    }
}

/// Access to the post, landing and image stores.
#[derive(Debug, Clone)]
pub struct ContentStore {
    paths: ContentPaths,
}

impl ContentStore {
    pub fn new(paths: ContentPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ContentPaths {
        &self.paths
    }

    // ── Posts ────────────────────────────────────────────────────────────

    pub async fn read_posts(&self) -> StoreResult<Vec<BlogPost>> {
        json::read_json(&self.paths.posts).await
    }

    pub async fn write_posts(&self, posts: &[BlogPost]) -> StoreResult<()> {
        json::write_json(&self.paths.posts, posts).await
    }

    /// Look up a single post by slug.
    pub async fn find_post(&self, slug: &str) -> StoreResult<BlogPost> {
        self.read_posts()
            .await?
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| StoreError::PostNotFound(slug.to_string()))
    }

    /// Insert a post at the front of the collection.
    ///
    /// An empty slug is derived from the title. Fails with
    /// [`StoreError::DuplicateSlug`] if the slug is already taken.
    pub async fn create_post(&self, mut post: BlogPost) -> StoreResult<BlogPost> {
        post.ensure_slug();
        validate_post(&post)?;

        let mut posts = self.read_posts().await?;
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(StoreError::DuplicateSlug(post.slug));
        }
        posts.insert(0, post.clone());
        self.write_posts(&posts).await?;
        Ok(post)
    }

    /// Replace the post currently stored under `slug`.
    ///
    /// The replacement may carry a new slug as long as no other post uses it.
    pub async fn update_post(&self, slug: &str, mut post: BlogPost) -> StoreResult<BlogPost> {
        post.ensure_slug();

        let mut posts = self.read_posts().await?;
        let idx = posts
            .iter()
            .position(|p| p.slug == slug)
            .ok_or_else(|| StoreError::PostNotFound(slug.to_string()))?;
        validate_post(&post)?;
        if post.slug != slug && posts.iter().any(|p| p.slug == post.slug) {
            return Err(StoreError::DuplicateSlug(post.slug));
        }

        posts[idx] = post.clone();
        self.write_posts(&posts).await?;
        Ok(post)
    }

    /// Remove the post stored under `slug` and return it.
    pub async fn delete_post(&self, slug: &str) -> StoreResult<BlogPost> {
        let mut posts = self.read_posts().await?;
        let idx = posts
            .iter()
            .position(|p| p.slug == slug)
            .ok_or_else(|| StoreError::PostNotFound(slug.to_string()))?;
        let removed = posts.remove(idx);
        self.write_posts(&posts).await?;
        Ok(removed)
    }

    // ── Landing copy ─────────────────────────────────────────────────────

    pub async fn read_landing(&self) -> StoreResult<LandingCopy> {
        json::read_json(&self.paths.landing).await
    }

    /// Overwrite the whole landing document. No merge with the stored copy.
    pub async fn write_landing(&self, doc: &LandingCopy) -> StoreResult<()> {
        json::write_json(&self.paths.landing, doc).await
    }

    // ── Images ───────────────────────────────────────────────────────────

    /// Image filenames in the image directory, sorted.
    ///
    /// A missing directory lists as empty.
    pub async fn list_images(&self) -> StoreResult<Vec<String>> {
        let dir = &self.paths.images;
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::io(dir, source)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| StoreError::io(dir, source))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !is_image_file(&name) {
                continue;
            }
            let file_type = entry
                .file_type()
                .await
                .map_err(|source| StoreError::io(&entry.path(), source))?;
            if file_type.is_dir() {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }

    /// Write an image, replacing any file with the same name.
    ///
    /// Returns the sanitized name the file was stored under.
    pub async fn save_image(&self, filename: &str, data: &[u8]) -> StoreResult<String> {
        let name = sanitize_filename(filename)?;
        let dir = &self.paths.images;
        fs::create_dir_all(dir)
            .await
            .map_err(|source| StoreError::io(dir, source))?;

        let dest = dir.join(name);
        fs::write(&dest, data)
            .await
            .map_err(|source| StoreError::io(&dest, source))?;
        tracing::debug!(path = %dest.display(), bytes = data.len(), "wrote image");
        Ok(name.to_string())
    }

    /// Delete an image by name. Returns the sanitized name.
    pub async fn delete_image(&self, filename: &str) -> StoreResult<String> {
        let name = sanitize_filename(filename)?;
        let target = self.paths.images.join(name);
        match fs::remove_file(&target).await {
            Ok(()) => Ok(name.to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::ImageNotFound(name.to_string()))
            }
            Err(source) => Err(StoreError::io(&target, source)),
        }
    }
}
