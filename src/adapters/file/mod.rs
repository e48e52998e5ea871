//! Local file manifest source.
//!
//! Serves a `versions.json` from disk regardless of the requested URL, so a
//! manifest can be checked against page URLs before it is deployed.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::ports::{FetchError, ManifestSource};

/// Reads the manifest from a fixed local path.
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait(?Send)]
impl ManifestSource for FileManifestSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("Serving {} from {}", url, self.path.display());

        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Io(format!("{}: {}", self.path.display(), e)))
    }
}
