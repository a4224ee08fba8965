use crate::error::{Result, StoreError};

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Raw byte storage for the persisted collection.
///
/// Implementations only move bytes; decoding and record semantics live above them.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    /// Returns the persisted bytes, or `None` if nothing has been persisted yet.
    async fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replaces the persisted bytes.
    ///
    /// A failed write must leave the previously persisted bytes intact.
    async fn write(&self, bytes: &[u8]) -> Result<()>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// Stores the collection in a single file on local disk.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a write goes to before being renamed over the target.
    ///
    /// Unique per call, so backends sharing a target never share a temp file.
    pub(crate) fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("contacts");
        self.path
            .with_file_name(format!(
            ".{}.tmp.{}.{}",
            name,
            std::process::id(),
            uuid::Uuid::new_v4().simple()
        ))
    }
}

fn unavailable(operation: &'static str, path: &Path, source: std::io::Error) -> StoreError {
    StoreError::StorageUnavailable {
        operation,
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl Backend for FileBackend {
    async fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read", &self.path, e)),
        }
    }

    async fn write(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| unavailable("create", parent, e))?;
        }

        // Write a sibling temp file and rename it over the target so a failed
        // write never leaves a truncated collection behind.
        let temp_path = self.temp_path();
        let written: std::io::Result<()> = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(bytes).await?;
            file.sync_all().await
        }
        .await;

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(unavailable("write", &temp_path, e));
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(unavailable("rename", &self.path, e));
        }

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the collection bytes in process memory.
#[derive(Default)]
pub struct MemoryBackend {
    bytes: Mutex<Option<Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from already persisted bytes.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Mutex::new(Some(bytes.into())),
        }
    }

    /// Copy of the currently persisted bytes.
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.bytes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.snapshot())
    }

    async fn write(&self, bytes: &[u8]) -> Result<()> {
        *self
            .bytes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(bytes.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
