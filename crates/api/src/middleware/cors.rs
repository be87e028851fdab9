use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
        Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{Any, CorsLayer};

use crate::routes::CMS_PREFIX;

const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

/// Build the CORS layer. Any origin may call the content API.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}

/// Answer every `OPTIONS` request under the content API with an empty `204`.
/// Must be layered outside [`cors_layer`].
pub async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS && is_cms_path(request.uri().path()) {
        return (
            StatusCode::NO_CONTENT,
            [
                (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
                (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            ],
        )
            .into_response();
    }
    next.run(request).await
}

fn is_cms_path(path: &str) -> bool {
    path.strip_prefix(CMS_PREFIX)
        .is_some_and(|rest| rest.starts_with('/'))
}
