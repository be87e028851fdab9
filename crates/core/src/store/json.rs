use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use crate::error::{StoreError, StoreResult};

/// Read and parse a whole JSON document.
pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let raw = fs::read(path)
        .await
        .map_err(|source| StoreError::io(path, source))?;
    serde_json::from_slice(&raw).map_err(|source| StoreError::json(path, source))
}

/// Replace a JSON document on disk.
///
/// The document is pretty-printed with two-space indentation into a sibling
/// temp file, which is then renamed over `path`.
pub(crate) async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> StoreResult<()> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::json(path, source))?;
    let tmp = temp_path(path);

    fs::write(&tmp, &bytes)
        .await
        .map_err(|source| StoreError::io(&tmp, source))?;
    if let Err(source) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::io(path, source));
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote content document");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
