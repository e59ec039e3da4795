use axum::{
    extract::Path as PathExtract,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::{ApiErrorKind, ApiResult},
    handlers::file_helpers::stream_file,
    listing::list_folder,
    storage::STORAGE,
};

/// download_folder_entry
/// Interface: GET /download-folder/{path}
///
/// Sub-paths are never filtered: a directory comes back as its full
/// listing, a file as its raw bytes.
pub(crate) async fn download_folder_entry(
    PathExtract(path): PathExtract<String>,
) -> ApiResult<Response> {
    tracing::debug!("[download_folder_entry] path: {path}");

    let storage = STORAGE.get().unwrap();
    let full_path = storage.resolve_release_path(&path)?;

    if full_path.is_dir() {
        let listing = list_folder(&full_path, &storage.release_dir())?;
        return Ok(Json(listing).into_response());
    }

    if !full_path.is_file() {
        return Err(ApiErrorKind::FileNotFound(path));
    }

    stream_file(&full_path).await
}
