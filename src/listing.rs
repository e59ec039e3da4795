use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::error::{ApiErrorKind, ApiResult};

/// One entry of a directory listing as handed to clients.
///
/// Serializes to `{"type": "file", "name": ..., "path": ...}` or
/// `{"type": "folder", "name": ..., "content": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListingEntry {
    File { name: String, path: String },
    Folder { name: String, content: Vec<ListingEntry> },
}

impl ListingEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } => name,
            Self::Folder { name, .. } => name,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}

/// Recursively collects the content of `dir` into an owned tree.
///
/// Entries come back in filesystem enumeration order; callers must not
/// rely on anything beyond that. Folders whose subtree holds no files are
/// omitted entirely. File paths are recorded relative to `root`.
pub fn list_folder(dir: &Path, root: &Path) -> ApiResult<Vec<ListingEntry>> {
    if !dir.is_dir() {
        return Err(ApiErrorKind::FileNotFound(dir.display().to_string()));
    }

    let read_dir = dir.read_dir().map_err(|err| {
        ApiErrorKind::InternalError(format!("could not read directory {dir:?}: {err}"))
    })?;

    let mut content = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|err| {
            ApiErrorKind::InternalError(format!("could not read directory entry: {err}"))
        })?;

        let entry_path = entry.path();
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| ApiErrorKind::NonUnicodePath(entry_path.display().to_string()))?
            .to_string();

        if entry_path.is_dir() {
            // Nested folder: collapse its subtree, drop it when empty.
            let sub_content = list_folder(&entry_path, root)?;
            if !sub_content.is_empty() {
                content.push(ListingEntry::Folder {
                    name,
                    content: sub_content,
                });
            }
        } else {
            let relative = entry_path.strip_prefix(root).map_err(|err| {
                ApiErrorKind::InternalError(format!(
                    "entry {entry_path:?} escapes listing root {root:?}: {err}"
                ))
            })?;
            let path = relative
                .to_str()
                .ok_or_else(|| ApiErrorKind::NonUnicodePath(entry_path.display().to_string()))?
                .to_string();
            content.push(ListingEntry::File { name, path });
        }
    }

    Ok(content)
}
