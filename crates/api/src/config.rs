use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use site_cms_core::store::{
    ContentPaths, DEFAULT_IMAGES_DIR, DEFAULT_LANDING_PATH, DEFAULT_POSTS_PATH,
};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3030;
const DEFAULT_SITE_DIR: &str = "public";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Configuration errors reported at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Project root the content paths are resolved against.
    pub content_root: PathBuf,
    /// JSON array of blog posts.
    pub posts_path: PathBuf,
    /// JSON landing copy document.
    pub landing_path: PathBuf,
    /// Directory uploaded images are written to.
    pub images_dir: PathBuf,
    /// Static files served for any path the content API does not handle.
    pub site_dir: PathBuf,
    /// Mount the `/cms` content API. Off for production.
    pub cms_enabled: bool,
    /// Largest accepted request body.
    pub max_body_bytes: usize,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let root = PathBuf::from(lookup("CONTENT_ROOT").unwrap_or_else(|| ".".to_string()));
        let path = |var: &str, default: &str| {
            root.join(lookup(var).unwrap_or_else(|| default.to_string()))
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, "PORT", DEFAULT_PORT, "a valid port number")?,
            posts_path: path("POSTS_PATH", DEFAULT_POSTS_PATH),
            landing_path: path("LANDING_PATH", DEFAULT_LANDING_PATH),
            images_dir: path("IMAGES_DIR", DEFAULT_IMAGES_DIR),
            site_dir: path("SITE_DIR", DEFAULT_SITE_DIR),
            cms_enabled: parse_bool(&lookup, "CMS_ENABLED", true)?,
            max_body_bytes: parse_var(
                &lookup,
                "MAX_BODY_BYTES",
                DEFAULT_MAX_BODY_BYTES,
                "a byte count",
            )?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            content_root: root,
        })
    }

    /// Defaults for a project rooted at `root`, ignoring the environment.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let paths = ContentPaths::under_root(root);
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            content_root: root.to_path_buf(),
            posts_path: paths.posts,
            landing_path: paths.landing,
            images_dir: paths.images,
            site_dir: root.join(DEFAULT_SITE_DIR),
            cms_enabled: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Store locations derived from this configuration.
    pub fn content_paths(&self) -> ContentPaths {
        ContentPaths {
            posts: self.posts_path.clone(),
            landing: self.landing_path.clone(),
            images: self.images_dir.clone(),
        }
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            expected: "a boolean",
            value,
        }),
    }
}
