//! Loads and validates the project catalog.

use pf_core::{ports::CatalogSourcePort, Catalog, CatalogError};
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum LoadCatalogError {
    #[error("failed to load catalog from {origin}: {message}")]
    Source { origin: String, message: String },

    #[error("catalog from {origin} is invalid: {source}")]
    Invalid {
        origin: String,
        #[source]
        source: CatalogError,
    },
}

/// Use case for building the catalog from a catalog source.
pub struct LoadCatalog {
    source: Arc<dyn CatalogSourcePort>,
}

impl LoadCatalog {
    pub fn new(source: Arc<dyn CatalogSourcePort>) -> Self {
        Self { source }
    }

    /// Reads every draft from the source and validates them into a catalog.
    ///
    /// # Errors
    ///
    /// - [`LoadCatalogError::Source`] when the source cannot be read or decoded.
    /// - [`LoadCatalogError::Invalid`] when a record is malformed or a title repeats.
    pub async fn execute(&self) -> Result<Catalog, LoadCatalogError> {
        let origin = self.source.describe();
        let span = info_span!("usecase.load_catalog.execute", origin = %origin);

        async {
            let drafts = self.source.load_drafts().await.map_err(|e| {
                warn!(error = %format!("{e:#}"), "catalog source failed");
                LoadCatalogError::Source {
                    origin: origin.clone(),
                    message: format!("{e:#}"),
                }
            })?;

            let catalog = Catalog::from_drafts(drafts).map_err(|source| {
                warn!(error = %source, "catalog rejected");
                LoadCatalogError::Invalid {
                    origin: origin.clone(),
                    source,
                }
            })?;

            info!(projects = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        .instrument(span)
        .await
    }
}
