use axum::{body::Body, extract::State, routing::get, Json, Router};
use site_cms_core::LandingCopy;

use crate::body::read_json;
use crate::error::{method_not_allowed, ApiResult};
use crate::state::AppState;

/// Landing copy routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/landing",
        get(get_landing).put(put_landing).fallback(method_not_allowed),
    )
}

async fn get_landing(State(state): State<AppState>) -> ApiResult<Json<LandingCopy>> {
    Ok(Json(state.store().read_landing().await?))
}

/// Replace the whole document. Fields missing from the request are not
/// carried over from the stored copy.
async fn put_landing(State(state): State<AppState>, body: Body) -> ApiResult<Json<LandingCopy>> {
    let doc: LandingCopy = read_json(body).await?;
    state.store().write_landing(&doc).await?;
    let missing = doc.missing_sections();
    if !missing.is_empty() {
        tracing::warn!(?missing, "landing copy stored without some sections");
    }
    tracing::info!("replaced landing copy");
    Ok(Json(doc))
}
