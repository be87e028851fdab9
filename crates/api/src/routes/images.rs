use axum::{
    body::Body,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use site_cms_multipart::extract_file;

use crate::body::read_body;
use crate::error::{method_not_allowed, ApiResult};
use crate::state::AppState;

/// Image routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/images",
            get(list_images).post(upload_image).fallback(method_not_allowed),
        )
        .route(
            "/images/{filename}",
            delete(delete_image).fallback(method_not_allowed),
        )
}

async fn list_images(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.store().list_images().await?))
}

/// Store the first file in a `multipart/form-data` body.
async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> ApiResult<Json<Value>> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let body = read_body(body).await?;
    let file = extract_file(content_type, &body)?;

    let filename = state.store().save_image(&file.filename, file.data).await?;
    tracing::info!(filename = %filename, bytes = file.data.len(), "uploaded image");
    Ok(Json(json!({ "filename": filename })))
}

async fn delete_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Json<Value>> {
    let filename = state.store().delete_image(&filename).await?;
    tracing::info!(filename = %filename, "deleted image");
    Ok(Json(json!({ "ok": true })))
}
