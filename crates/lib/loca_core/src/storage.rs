//! Scoped storage for uploaded rental pictures.
//!
//! Files live under `<root>/<rental id>/<filename>`, so two rentals can
//! both hold a `photo.jpg` without colliding. Stored files are served back
//! under [`PUBLIC_PREFIX`].

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tokio::fs;

/// URL prefix under which stored pictures are exposed.
pub const PUBLIC_PREFIX: &str = "/files/rentalpicture";

/// Storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    /// The filename would resolve outside the rental's directory.
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Disk-backed store namespacing files by rental id.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the storage root if it does not exist yet.
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Write `bytes` under the rental's directory and return the public URL
    /// path of the stored file.
    ///
    /// The per-rental directory is created on first use; `create_dir_all`
    /// tolerates a concurrent writer getting there first. Re-storing an
    /// existing filename overwrites it, last write wins.
    pub async fn store(
        &self,
        rental_id: i64,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let filename = sanitize(filename)?;
        let dir = self.root.join(rental_id.to_string());
        fs::create_dir_all(&dir).await?;
        fs::write(dir.join(filename), bytes).await?;
        Ok(format!("{PUBLIC_PREFIX}/{rental_id}/{filename}"))
    }

    /// Resolve a stored file strictly inside the rental's directory.
    pub async fn load(&self, rental_id: i64, filename: &str) -> Result<PathBuf, StorageError> {
        // Containment is checked before touching the filesystem, so a
        // traversal attempt never reaches the existence probe.
        let filename = sanitize(filename)?;
        let path = self.root.join(rental_id.to_string()).join(filename);
        if fs::try_exists(&path).await? {
            Ok(path)
        } else {
            Err(StorageError::NotFound(format!("{rental_id}/{filename}")))
        }
    }
}

/// Accept only filenames that are a single plain path component.
fn sanitize(filename: &str) -> Result<&str, StorageError> {
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(filename),
        _ => Err(StorageError::InvalidFilename(filename.to_string())),
    }
}
