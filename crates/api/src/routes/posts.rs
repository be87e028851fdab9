use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use site_cms_core::BlogPost;

use crate::body::read_json;
use crate::error::{method_not_allowed, ApiResult};
use crate::state::AppState;

/// Blog post routes. The collection route is literal, so it is never read as a slug.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(list_posts).post(create_post).fallback(method_not_allowed),
        )
        .route(
            "/posts/{slug}",
            get(get_post)
                .put(update_post)
                .delete(delete_post)
                .fallback(method_not_allowed),
        )
}

async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogPost>>> {
    Ok(Json(state.store().read_posts().await?))
}

async fn create_post(
    State(state): State<AppState>,
    body: Body,
) -> ApiResult<(StatusCode, Json<BlogPost>)> {
    let post: BlogPost = read_json(body).await?;
    let created = state.store().create_post(post).await?;
    tracing::info!(slug = %created.slug, "created post");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<BlogPost>> {
    Ok(Json(state.store().find_post(&slug).await?))
}

async fn update_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    body: Body,
) -> ApiResult<Json<BlogPost>> {
    let post: BlogPost = read_json(body).await?;
    let updated = state.store().update_post(&slug, post).await?;
    tracing::info!(slug = %slug, new_slug = %updated.slug, "updated post");
    Ok(Json(updated))
}

async fn delete_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Value>> {
    state.store().delete_post(&slug).await?;
    tracing::info!(slug = %slug, "deleted post");
    Ok(Json(json!({ "ok": true })))
}
