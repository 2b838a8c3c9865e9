//! Local-disk file store
//!
//! A flat directory holding uploaded bytes. A file's key is its filename;
//! writing an existing name replaces the file.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::core::error::AppError;

/// File store rooted at a single directory
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the store directory if it is missing
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create upload directory {}: {}",
                self.root.display(),
                e
            ))
        })?;
        debug!("Upload directory ready: {}", self.root.display());
        Ok(())
    }

    /// On-disk path for `filename`.
    ///
    /// The name must be a single plain path component.
    pub fn path_for(&self, filename: &str) -> Result<PathBuf, AppError> {
        validate_filename(filename)?;
        Ok(self.root.join(filename))
    }

    /// Write `data` to `<root>/<filename>`, replacing any existing file.
    ///
    /// The bytes are flushed and synced before this returns.
    pub async fn write(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AppError> {
        let path = self.path_for(filename)?;
        self.ensure_dir().await?;

        let mut file = fs::File::create(&path).await.map_err(|e| {
            AppError::Internal(format!("Failed to create {}: {}", path.display(), e))
        })?;
        file.write_all(data).await.map_err(|e| {
            AppError::Internal(format!("Failed to write {}: {}", path.display(), e))
        })?;
        file.sync_all().await.map_err(|e| {
            AppError::Internal(format!("Failed to sync {}: {}", path.display(), e))
        })?;

        info!("Stored file: path={}, size={}", path.display(), data.len());
        Ok(path)
    }

    /// Remove a stored file by path. A file that is already gone is not an error.
    pub async fn remove(&self, path: impl AsRef<Path>) -> io::Result<()> {
        match fs::remove_file(path.as_ref()).await {
            Ok(()) => {
                debug!("Removed file: {}", path.as_ref().display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.is_empty() || filename == "." || filename == ".." {
        return Err(AppError::Validation(format!(
            "Invalid filename '{}'",
            filename
        )));
    }
    if filename.contains('/') || filename.contains('\\') || filename.contains('\0') {
        return Err(AppError::Validation(format!(
            "Filename '{}' must not contain path separators",
            filename
        )));
    }
    Ok(())
}
