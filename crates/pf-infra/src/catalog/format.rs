use anyhow::Context;
use pf_core::ProjectDraft;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// On-disk layout shared by both formats: a `projects` list.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    projects: Vec<ProjectDraft>,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported catalog format: {} (expected .toml or .json)", .0.display())]
pub struct UnsupportedFormat(pub PathBuf);

/// Catalog file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `[[projects]]` array of tables
    Toml,
    /// `{"projects": [...]}` or a bare array
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFormat> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn decode(&self, content: &str) -> anyhow::Result<Vec<ProjectDraft>> {
        match self {
            CatalogFormat::Toml => {
                let doc: CatalogDocument =
                    toml::from_str(content).context("Failed to parse catalog as TOML")?;
                Ok(doc.projects)
            }
            CatalogFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(content).context("Failed to parse catalog as JSON")?;
                if value.is_array() {
                    serde_json::from_value(value).context("Malformed project list")
                } else {
                    let doc: CatalogDocument =
                        serde_json::from_value(value).context("Malformed catalog document")?;
                    Ok(doc.projects)
                }
            }
        }
    }
}
