use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{ApiErrorKind, ApiResult};
use crate::version::METADATA_FILENAME;

/// Directory under the data dir holding the current application release.
pub const RELEASE_DIR: &str = "electron-launcher";

/// Directory under the data dir holding the legacy launcher component.
pub const LAUNCHER_DIR: &str = "launcher";

/// Archive name served to launcher clients.
pub const LAUNCHER_ARCHIVE: &str = "launcher.zip";

// Static storage of the directory layout
pub static STORAGE: OnceLock<LocalStorage> = OnceLock::new();

pub fn init_storage(storage: LocalStorage) {
    let _ = STORAGE.get_or_init(|| storage);
}

/// Fixed directory layout below the configured data directory. The
/// filesystem is the single source of truth; nothing here is cached.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn try_new(path: &Path) -> Result<Self, IoError> {
        if !path.is_dir() {
            return Err(IoError::new(
                IoErrorKind::NotFound,
                format!("data directory not found: {}", path.display()),
            ));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn release_dir(&self) -> PathBuf {
        self.path.join(RELEASE_DIR)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.release_dir().join(METADATA_FILENAME)
    }

    pub fn launcher_dir(&self) -> PathBuf {
        self.path.join(LAUNCHER_DIR)
    }

    pub fn launcher_metadata_path(&self) -> PathBuf {
        self.launcher_dir().join(METADATA_FILENAME)
    }

    pub fn launcher_archive_path(&self) -> PathBuf {
        self.launcher_dir().join(LAUNCHER_ARCHIVE)
    }

    /// Joins a request sub-path under the release root. Requests may only
    /// descend into the tree, so absolute paths and `..` are refused.
    pub fn resolve_release_path(&self, sub_path: &str) -> ApiResult<PathBuf> {
        let relative = Path::new(sub_path);
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => return Err(ApiErrorKind::PathNotAllowed(sub_path.to_string())),
            }
        }
        Ok(self.release_dir().join(relative))
    }
}
