//! Persistence backends for the welcome store.
//!
//! The store encodes the whole table itself and hands the backend an opaque byte
//! document. `FileBackend` is used in production; `MemoryBackend` keeps the document in
//! memory for tests and ephemeral runs.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serenity::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::store::StoreError;

/// Durable storage for the encoded welcome table.
#[async_trait]
pub trait WelcomeBackend: Send + Sync {
    /// Human-readable location used in diagnostics.
    fn location(&self) -> String;

    /// Reads the stored document.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - Document exists
    /// - `Ok(None)` - Nothing has been stored yet
    /// - `Err(StoreError::Io)` - Document exists but could not be read
    async fn read(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replaces the stored document with `bytes`.
    ///
    /// Implementations must never leave a partially written document behind: either the
    /// previous document or the new one is readable at every point in time.
    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError>;
}

/// File-backed storage using write-to-temp then rename.
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

    /// Sibling path the next document is staged in before being renamed into place.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
        move |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[async_trait]
impl WelcomeBackend for FileBackend {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(&self.path)(e)),
        }
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(Self::io_error(parent))?;
            }
        }

        let staging = self.staging_path();

        let mut file = tokio::fs::File::create(&staging)
            .await
            .map_err(Self::io_error(&staging))?;
        file.write_all(bytes)
            .await
            .map_err(Self::io_error(&staging))?;
        file.sync_all().await.map_err(Self::io_error(&staging))?;
        drop(file);

        // The previous document stays readable until this rename commits the new one
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(Self::io_error(&self.path))?;

        Ok(())
    }
}

/// In-memory storage holding the last written document.
#[derive(Default)]
pub struct MemoryBackend {
    document: Mutex<Option<Vec<u8>>>,
    writes: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that already holds `bytes`, as if written by an earlier run.
    pub fn with_document(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Mutex::new(Some(bytes.into())),
            writes: AtomicUsize::new(0),
        }
    }

    /// Current document, if any.
    pub fn document(&self) -> Option<Vec<u8>> {
        self.document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WelcomeBackend for MemoryBackend {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.document())
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError> {
        *self
            .document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(bytes.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
