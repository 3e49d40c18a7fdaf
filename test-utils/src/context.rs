use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::TestError;

/// Test context owning a temporary directory and the path of the welcome store file.
///
/// The directory and everything in it is removed when the context is dropped, so keep
/// the context alive for as long as the store under test is used.
pub struct TestContext {
    /// Temporary directory all test files live in.
    pub dir: TempDir,

    /// Path of the welcome store document inside `dir`.
    store_path: PathBuf,
}

impl TestContext {
    /// Creates a new context with an empty temporary directory.
    ///
    /// # Arguments
    /// - `file_name` - Store file name relative to the temporary directory
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Directory created; the store file does not exist yet
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new(file_name: &str) -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let store_path = dir.path().join(file_name);

        Ok(Self { dir, store_path })
    }

    /// Path the store under test should read from and write to.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Reads the store file as raw bytes.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - File exists
    /// - `Ok(None)` - File has not been written
    /// - `Err(TestError::Io)` - File exists but could not be read
    pub async fn read_store_file(&self) -> Result<Option<Vec<u8>>, TestError> {
        match tokio::fs::read(&self.store_path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads and parses the store file as JSON.
    ///
    /// # Panics
    /// - If the file is missing or not valid JSON (indicates a failing test)
    pub async fn read_store_json(&self) -> serde_json::Value {
        let bytes = self
            .read_store_file()
            .await
            .expect("store file should be readable")
            .expect("store file should exist");

        serde_json::from_slice(&bytes).expect("store file should be valid JSON")
    }

    /// Overwrites the store file with `bytes`, creating parent directories.
    pub async fn write_store_file(&self, bytes: &[u8]) -> Result<(), TestError> {
        if let Some(parent) = self.store_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.store_path, bytes).await?;

        Ok(())
    }

    /// Lists the file names currently present next to the store file.
    ///
    /// Used to assert that no staging files are left behind after a write.
    pub async fn sibling_file_names(&self) -> Result<Vec<String>, TestError> {
        let Some(parent) = self.store_path.parent() else {
            return Ok(Vec::new());
        };

        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(parent).await?;
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(names)
    }
}
