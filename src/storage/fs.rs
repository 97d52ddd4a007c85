//! Filesystem storage backend.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::{GameSaverError, Result};
use crate::storage::Storage;

/// Storage backend that keeps one file per key in a base directory.
///
/// Writes go to a uniquely named temporary sibling which is flushed to disk
/// and then renamed over the target, so a concurrent reader sees either the
/// old file or the new one in full. The base directory is created on demand.
///
/// # Example
///
/// ```rust,no_run
/// use game_saver::FsStorage;
///
/// let storage = FsStorage::new("/var/lib/game/saves");
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    base_dir: PathBuf,
}

impl FsStorage {
    /// Create a new `FsStorage` rooted at the given directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Create the base directory (and parents) if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(GameSaverError::storage)
    }

    /// Fixed-length sibling name, independent of the key, so any key that
    /// fits the filesystem's name limit also gets a valid temp name.
    fn temp_path(&self) -> PathBuf {
        self.base_dir
            .join(format!(".{}.tmp", uuid::Uuid::new_v4().simple()))
    }
}

async fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(content).await?;
    file.sync_all().await
}

impl Storage for FsStorage {
    async fn put(&self, key: &str, content: &[u8]) -> Result<()> {
        let path = self.base_dir.join(key);
        self.ensure_dir().await?;

        let tmp = self.temp_path();
        let written = match write_synced(&tmp, content).await {
            Ok(()) => tokio::fs::rename(&tmp, &path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            // Best effort: the temp file is never read back.
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(GameSaverError::storage(e));
        }

        tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.base_dir.join(key);

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GameSaverError::storage(e)),
        }
    }
}
