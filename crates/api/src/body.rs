use axum::body::{Body, Bytes};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Collect the whole request body into one buffer.
///
/// The size cap is enforced by the body-limit layer in front of the router.
pub async fn read_body(body: Body) -> ApiResult<Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to read request body: {e}")))
}

/// Collect the request body and parse it as JSON.
pub async fn read_json<T: DeserializeOwned>(body: Body) -> ApiResult<T> {
    let bytes = read_body(body).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
