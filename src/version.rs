use std::fs;
use std::path::Path;

use serde_derive::Deserialize;

use crate::error::{ApiErrorKind, ApiResult};

/// Name of the electron-updater metadata file declaring the published
/// version. The release filter keeps this exact filename, so the resolver
/// and the filter share the one constant.
pub const METADATA_FILENAME: &str = "latest.yml";

/// The slice of the metadata document we care about. electron-updater
/// writes more fields (files, sha512, releaseDate); they are ignored.
#[derive(Debug, Deserialize)]
pub struct LatestMetadata {
    pub version: String,
}

/// Reads the metadata file and returns the declared version.
pub fn resolve_version(path: &Path) -> ApiResult<String> {
    let contents = fs::read_to_string(path)
        .map_err(|_| ApiErrorKind::MetadataNotFound(path.display().to_string()))?;

    let metadata: LatestMetadata = serde_yaml::from_str(&contents)
        .map_err(|err| ApiErrorKind::MetadataInvalid(err.to_string()))?;

    tracing::info!("resolved published version: {}", metadata.version);

    Ok(metadata.version)
}
