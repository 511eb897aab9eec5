use anyhow::{Context, Result};
use async_trait::async_trait;
use pf_core::{ports::CatalogSourcePort, ProjectDraft};

use super::CatalogFormat;

const BUILTIN_CATALOG: &str = include_str!("../../resources/catalog.toml");

/// Catalog compiled into the binary; used when no catalog file is configured.
#[derive(Debug, Default)]
pub struct EmbeddedCatalogSource;

impl EmbeddedCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogSourcePort for EmbeddedCatalogSource {
    async fn load_drafts(&self) -> Result<Vec<ProjectDraft>> {
        CatalogFormat::Toml
            .decode(BUILTIN_CATALOG)
            .context("decode embedded catalog failed")
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}
