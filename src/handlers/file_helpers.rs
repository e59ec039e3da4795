use std::path::Path;

use axum::{body::Body, http::header, response::Response};
use tokio_util::io::ReaderStream;

use crate::error::{ApiErrorKind, ApiResult};

/// Streams a file from disk as the response body, with a content type
/// guessed from the filename. The bytes go out exactly as stored.
pub(crate) async fn stream_file(path: &Path) -> ApiResult<Response> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|_| ApiErrorKind::FileNotFound(path.display().to_string()))?;

    let content_type = mime_guess::from_path(path).first_or_octet_stream();
    let stream = ReaderStream::new(file);

    Response::builder()
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .body(Body::from_stream(stream))
        .map_err(|err| ApiErrorKind::InternalError(format!("could not build response: {err}")))
}
