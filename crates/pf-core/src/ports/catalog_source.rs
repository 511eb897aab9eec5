use async_trait::async_trait;

use crate::project::ProjectDraft;

/// Supplies the raw project records a catalog is built from.
///
/// Implementations only read and decode; validation happens when the
/// drafts are turned into a [`Catalog`](crate::Catalog).
#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    async fn load_drafts(&self) -> anyhow::Result<Vec<ProjectDraft>>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}
