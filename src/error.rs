use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type ApiResult<T> = std::result::Result<T, ApiErrorKind>;

#[derive(Debug)]
pub enum ApiErrorKind {
    InternalError(String),
    MetadataNotFound(String),
    MetadataInvalid(String),
    StaleRelease(String),
    FileNotFound(String),
    PathNotAllowed(String),
    NonUnicodePath(String),
    TooManyRequests,
}

impl IntoResponse for ApiErrorKind {
    fn into_response(self) -> Response {
        match self {
            ApiErrorKind::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", err),
            )
                .into_response(),
            ApiErrorKind::MetadataNotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("metadata file not found: {path}"),
            )
                .into_response(),
            ApiErrorKind::MetadataInvalid(err) => (
                StatusCode::NOT_FOUND,
                format!("metadata file not usable: {err}"),
            )
                .into_response(),
            ApiErrorKind::StaleRelease(name) => {
                (StatusCode::NOT_FOUND, format!("{name} not found")).into_response()
            }
            ApiErrorKind::FileNotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("file or folder not found: {path}"),
            )
                .into_response(),
            ApiErrorKind::PathNotAllowed(path) => {
                (StatusCode::FORBIDDEN, format!("path {path} not allowed")).into_response()
            }
            ApiErrorKind::NonUnicodePath(path) => (
                StatusCode::BAD_REQUEST,
                format!("path {path} is not valid unicode"),
            )
                .into_response(),
            ApiErrorKind::TooManyRequests => (
                StatusCode::TOO_MANY_REQUESTS,
                "too many requests".to_string(),
            )
                .into_response(),
        }
    }
}
