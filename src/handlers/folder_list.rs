use axum::{response::IntoResponse, Json};

use crate::{
    error::ApiResult,
    listing::{list_folder, ListingEntry},
    release::filter_release,
    storage::{LocalStorage, STORAGE},
    version::resolve_version,
};

/// download_folder
/// Interface: GET /download-folder
///
/// The one place where filtering applies: the top-level listing only ever
/// shows the artifacts of the currently published version.
pub(crate) async fn download_folder() -> ApiResult<impl IntoResponse> {
    let storage = STORAGE.get().unwrap();
    let listing = release_listing(storage)?;
    Ok(Json(listing))
}

/// Resolve the published version, list the release directory, narrow the
/// listing to the current artifacts.
pub(crate) fn release_listing(storage: &LocalStorage) -> ApiResult<Vec<ListingEntry>> {
    let version = resolve_version(&storage.metadata_path())?;
    let release_dir = storage.release_dir();
    let listing = list_folder(&release_dir, &release_dir)?;
    filter_release(listing, &version)
}
