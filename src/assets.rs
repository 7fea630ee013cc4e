//! File storage collaborator for background images

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::util::path::is_plain_segment;

#[derive(Debug)]
pub enum UploadError {
    MissingFile(PathBuf),
    /// A folder or owner id that would escape the storage root
    InvalidSegment(String),
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile(path) => write!(f, "file not found: {}", path.display()),
            Self::InvalidSegment(segment) => write!(f, "invalid storage path segment {segment:?}"),
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::MissingFile(_) | Self::InvalidSegment(_) => None,
        }
    }
}

/// Uploads a file and returns the URL it is served from
pub trait AssetStorage {
    fn upload(&mut self, file: &Path, folder: &str, owner_id: &str) -> Result<String, UploadError>;
}

/// Copies uploads into `<root>/<folder>/<owner_id>/` and returns `file://` URLs
#[derive(Debug, Clone)]
pub struct LocalAssetStorage {
    root: PathBuf,
}

impl LocalAssetStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStorage for LocalAssetStorage {
    fn upload(&mut self, file: &Path, folder: &str, owner_id: &str) -> Result<String, UploadError> {
        let Some(file_name) = file.file_name() else {
            return Err(UploadError::MissingFile(file.to_path_buf()));
        };
        if !file.is_file() {
            return Err(UploadError::MissingFile(file.to_path_buf()));
        }

        if let Some(segment) = [folder, owner_id].into_iter().find(|s| !is_plain_segment(s)) {
            return Err(UploadError::InvalidSegment(segment.to_string()));
        }

        let target_dir = self.root.join(folder).join(owner_id);
        std::fs::create_dir_all(&target_dir).map_err(|source| UploadError::Io {
            path: target_dir.clone(),
            source,
        })?;
        let target = target_dir.join(file_name);
        std::fs::copy(file, &target).map_err(|source| UploadError::Io {
            path: target.clone(),
            source,
        })?;

        tracing::info!("Uploaded {} to {}", file.display(), target.display());
        Ok(format!("file://{}", target.display()))
    }
}
