use std::sync::Arc;

use site_cms_core::ContentStore;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    store: ContentStore,
    config: AppConfig,
}

impl AppState {
    /// Open the content stores described by `config`.
    pub fn new(config: AppConfig) -> Self {
        let store = ContentStore::new(config.content_paths());
        Self {
            inner: Arc::new(InnerState { store, config }),
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.inner.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
