use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFolder {
    ProfilePictures,
    Resumes,
}

impl MediaFolder {
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaFolder::ProfilePictures => "profile_pics",
            MediaFolder::Resumes => "resumes",
        }
    }

    fn from_dir_name(name: &str) -> Option<Self> {
        match name {
            "profile_pics" => Some(MediaFolder::ProfilePictures),
            "resumes" => Some(MediaFolder::Resumes),
            _ => None,
        }
    }
}

/// Local filesystem storage for uploaded blobs. Writes happen outside any
/// database transaction, so a stored file may briefly exist without a row
/// referencing it (or the reverse if the caller fails between the two).
#[derive(Clone)]
pub struct StorageService {
    root: PathBuf,
}

impl StorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes `data` under `folder` with a generated name and returns the
    /// relative reference (`resumes/<uuid>.pdf`) to persist on the record.
    pub async fn store(&self, folder: MediaFolder, original_name: &str, data: Bytes) -> Result<String> {
        if data.is_empty() {
            return Err(Error::BadRequest("Uploaded file is empty".into()));
        }

        let dir = self.root.join(folder.dir_name());
        fs::create_dir_all(&dir).await?;

        let file_name = match sanitized_extension(original_name) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        let size = data.len();
        fs::write(dir.join(&file_name), data).await.map_err(|e| {
            error!("Failed to write media file: {}", e);
            Error::Io(e)
        })?;

        let reference = format!("{}/{}", folder.dir_name(), file_name);
        info!(reference = %reference, size, "Media file stored");
        Ok(reference)
    }

    pub async fn read(&self, reference: &str) -> Result<Bytes> {
        let path = self.resolve(reference)?;
        match fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound(format!("Media file '{}' not found", reference)))
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    pub async fn delete(&self, reference: &str) -> Result<()> {
        let path = self.resolve(reference)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Maps a reference back onto the media root, rejecting anything that is
    /// not exactly `<known folder>/<file name>`.
    fn resolve(&self, reference: &str) -> Result<PathBuf> {
        let invalid = || Error::BadRequest(format!("Invalid media reference '{}'", reference));

        let mut components = Path::new(reference).components();
        let folder = match components.next() {
            Some(Component::Normal(name)) => name.to_str().and_then(MediaFolder::from_dir_name),
            _ => None,
        }
        .ok_or_else(invalid)?;
        let file = match components.next() {
            Some(Component::Normal(name)) => name,
            _ => return Err(invalid()),
        };
        if components.next().is_some() {
            return Err(invalid());
        }

        Ok(self.root.join(folder.dir_name()).join(file))
    }
}

fn sanitized_extension(original_name: &str) -> Option<String> {
    Path::new(original_name)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
}
