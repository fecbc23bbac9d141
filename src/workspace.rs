// src/workspace.rs
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::errors::{AnalysisError, Result};

/// Name the staged contract is always written under.
pub const SOURCE_FILE_NAME: &str = "TestContract.sol";

/// A uniquely named temporary directory holding one staged source file.
///
/// The directory is removed recursively when the value is dropped, so every
/// exit path of a request releases it.
pub struct Workspace {
    dir: TempDir,
    source_path: PathBuf,
}

impl Workspace {
    /// Creates a fresh directory and writes `contents` verbatim as `file_name`.
    pub async fn create(file_name: &str, contents: &str) -> Result<Self> {
        let dir = tokio::task::spawn_blocking(|| tempfile::Builder::new().prefix("slither-").tempdir())
            .await
            .map_err(|e| AnalysisError::Workspace(io::Error::other(e)))?
            .map_err(AnalysisError::Workspace)?;
        let source_path = dir.path().join(file_name);

        tokio::fs::write(&source_path, contents.as_bytes())
            .await
            .map_err(AnalysisError::Workspace)?;

        Ok(Self { dir, source_path })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Removes the directory now, off the async worker, instead of on drop.
    /// Failures are logged only.
    pub async fn close(self) {
        let path = self.dir.path().to_path_buf();
        let dir = self.dir;
        match tokio::task::spawn_blocking(move || dir.close()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::warn!("Failed to remove workspace {}: {}", path.display(), e),
            Err(e) => log::warn!("Workspace removal task for {} failed: {}", path.display(), e),
        }
    }
}
