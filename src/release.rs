use crate::error::{ApiErrorKind, ApiResult};
use crate::listing::ListingEntry;
use crate::version::METADATA_FILENAME;

/// Installer filename published for a given version.
pub fn installer_name(version: &str) -> String {
    format!("LeadMe Setup {version}.exe")
}

/// Narrows the top-level release listing to the artifacts of the declared
/// version: the installer, its blockmap, and the metadata file itself.
/// Folders (the unpacked build) are always current and pass unchanged.
///
/// Fails with `StaleRelease` when the declared version has no installer on
/// disk, which signals a half-finished or broken deployment.
pub fn filter_release(listing: Vec<ListingEntry>, version: &str) -> ApiResult<Vec<ListingEntry>> {
    let installer = installer_name(version);
    let blockmap = format!("{installer}.blockmap");

    let installer_present = listing
        .iter()
        .any(|entry| entry.is_file() && entry.name() == installer);
    if !installer_present {
        return Err(ApiErrorKind::StaleRelease(installer));
    }

    Ok(listing
        .into_iter()
        .filter(|entry| match entry {
            ListingEntry::Folder { .. } => true,
            ListingEntry::File { name, .. } => {
                name == &installer || name == &blockmap || name == METADATA_FILENAME
            }
        })
        .collect())
}
