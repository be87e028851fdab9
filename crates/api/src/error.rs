use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use site_cms_core::StoreError;
use site_cms_multipart::MultipartError;

/// API error type rendered as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::PostNotFound(_) | StoreError::ImageNotFound(_) => {
                ApiError::NotFound(message)
            }
            StoreError::DuplicateSlug(_) => ApiError::Conflict(message),
            StoreError::InvalidFilename(_) | StoreError::Validation(_) => {
                ApiError::BadRequest(message)
            }
            StoreError::Io { .. } | StoreError::Json { .. } => ApiError::Internal(message),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(msg) = &self {
            tracing::error!("content API failure: {msg}");
        }

        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback for a known `/cms` path called with a method it does not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_cms_core::content::validate::ValidationError;

    #[test]
    fn store_errors_map_to_statuses() {
        let cases = [
            (StoreError::PostNotFound("x".into()), StatusCode::NOT_FOUND),
            (StoreError::ImageNotFound("x.png".into()), StatusCode::NOT_FOUND),
            (StoreError::DuplicateSlug("x".into()), StatusCode::CONFLICT),
            (StoreError::InvalidFilename("..".into()), StatusCode::BAD_REQUEST),
            (
                StoreError::Validation(ValidationError::MissingSlug),
                StatusCode::BAD_REQUEST,
            ),
            (
                StoreError::Io {
                    path: "posts.json".into(),
                    source: std::io::Error::other("disk on fire"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn internal_message_is_surfaced() {
        let err = ApiError::from(StoreError::Io {
            path: "posts.json".into(),
            source: std::io::Error::other("disk on fire"),
        });
        assert_eq!(err.to_string(), "failed to access posts.json: disk on fire");
    }

    #[tokio::test]
    async fn method_fallback_renders_json_405() {
        let response = method_not_allowed().await.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }

    #[test]
    fn multipart_errors_are_bad_requests() {
        let err = ApiError::from(MultipartError::MissingBoundary);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No boundary in Content-Type");
    }
}
