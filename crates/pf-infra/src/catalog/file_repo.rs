use anyhow::{Context, Result};
use async_trait::async_trait;
use pf_core::{ports::CatalogSourcePort, ProjectDraft};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::CatalogFormat;

/// Catalog source backed by a TOML or JSON file.
pub struct FileCatalogRepository {
    path: PathBuf,
}

impl FileCatalogRepository {
    /// Creates a repository reading from `path`. The file is not touched
    /// until [`load_drafts`](CatalogSourcePort::load_drafts) is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use pf_infra::FileCatalogRepository;
    ///
    /// let repo = FileCatalogRepository::new("content/catalog.toml");
    /// assert!(repo.path().ends_with("catalog.toml"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSourcePort for FileCatalogRepository {
    /// Reads the file and decodes it according to its extension.
    ///
    /// Unlike settings, a missing catalog is an error: there is no sensible
    /// empty default for the projects section.
    async fn load_drafts(&self) -> Result<Vec<ProjectDraft>> {
        let format = CatalogFormat::from_path(&self.path)?;

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read catalog failed: {}", self.path.display()))?;

        let drafts = format
            .decode(&content)
            .with_context(|| format!("decode catalog failed: {}", self.path.display()))?;

        debug!(path = %self.path.display(), drafts = drafts.len(), "catalog file decoded");
        Ok(drafts)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
