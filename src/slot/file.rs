//! # Filesystem Slot
//!
//! Each key is stored as `<dir>/<key>.json`. Writes go through a temp file
//! that is fsynced and then renamed over the target, so a reader sees either
//! the old blob or the new one, never a torn write.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::errors::{SlotError, SlotResult};
use super::{validate_key, Slot};

/// Slot backed by one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds `key`.
    pub fn path_for(&self, key: &str) -> SlotResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", key))
    }

    async fn write_temp(temp_path: &Path, value: &str) -> io::Result<()> {
        let mut file = fs::File::create(temp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await
    }
}

impl Slot for FileSlot {
    async fn read(&self, key: &str) -> SlotResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SlotError::read(key, e)),
        }
    }

    async fn write(&self, key: &str, value: &str) -> SlotResult<()> {
        let path = self.path_for(key)?;
        let temp_path = self.temp_path_for(key);

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SlotError::write(key, e))?;

        if let Err(e) = Self::write_temp(&temp_path, value).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(SlotError::write(key, e));
        }

        if let Err(e) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(SlotError::write(key, e));
        }

        // Make the rename itself durable
        if let Ok(dir) = fs::File::open(&self.dir).await {
            let _ = dir.sync_all().await;
        }

        Ok(())
    }
}
