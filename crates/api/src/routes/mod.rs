pub mod images;
pub mod landing;
pub mod posts;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Path prefix of the content API.
pub const CMS_PREFIX: &str = "/cms";

/// Assemble the full router with all route groups.
///
/// Anything the content API does not match falls through to the static site.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();
    if state.config().cms_enabled {
        router = router.nest(CMS_PREFIX, cms_routes());
    }
    router
        .fallback_service(ServeDir::new(&state.config().site_dir))
        .with_state(state)
}

fn cms_routes() -> Router<AppState> {
    Router::new()
        .merge(posts::routes())
        .merge(landing::routes())
        .merge(images::routes())
}
