use pf_core::{Catalog, Vocabularies};
use std::sync::Arc;

/// Use case for the values offered by the three filter controls.
pub struct GetFilterOptions {
    catalog: Arc<Catalog>,
}

impl GetFilterOptions {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self) -> Vocabularies {
        self.catalog.vocabularies()
    }
}
