use axum::{
    http::{header, HeaderValue},
    response::Response,
};

use crate::{
    error::{ApiErrorKind, ApiResult},
    handlers::file_helpers::stream_file,
    storage::{LAUNCHER_ARCHIVE, STORAGE},
    version::resolve_version,
};

/// launcher_version
/// Interface: GET /launcher/version
///
/// Plain-text version string of the legacy launcher component, resolved
/// from the launcher's own metadata file.
pub(crate) async fn launcher_version() -> ApiResult<String> {
    let storage = STORAGE.get().unwrap();
    resolve_version(&storage.launcher_metadata_path())
}

/// launcher_archive
/// Interface: GET /launcher/download
pub(crate) async fn launcher_archive() -> ApiResult<Response> {
    let storage = STORAGE.get().unwrap();
    let path = storage.launcher_archive_path();

    if !path.is_file() {
        return Err(ApiErrorKind::FileNotFound(LAUNCHER_ARCHIVE.to_string()));
    }

    let mut response = stream_file(&path).await?;
    let _ = response.headers_mut().insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"launcher.zip\""),
    );
    Ok(response)
}

#[cfg(test)]
mod test {
    use super::{launcher_archive, launcher_version};
    use crate::log::print_request_response;
    use crate::test_helpers::{init_test_environment, request_uri_for_test};
    use axum::http::header::CONTENT_DISPOSITION;
    use axum::http::{Method, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn version_endpoint_returns_plain_version_string() {
        init_test_environment();

        let app = Router::new()
            .route("/launcher/version", get(launcher_version))
            .layer(middleware::from_fn(print_request_response));

        let request = request_uri_for_test("/launcher/version", Method::GET);
        let resp = app.oneshot(request).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), "0.9.1");
    }

    #[tokio::test]
    async fn download_endpoint_sends_the_archive_as_attachment() {
        init_test_environment();

        let app = Router::new()
            .route("/launcher/download", get(launcher_archive))
            .layer(middleware::from_fn(print_request_response));

        let request = request_uri_for_test("/launcher/download", Method::GET);
        let resp = app.oneshot(request).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("launcher.zip"));

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.starts_with(b"PK"));
    }
}
