use pf_core::{Catalog, Project};
use std::sync::Arc;

/// Use case for the featured projects shown outside the projects grid.
///
/// Independent of the current filter selection.
pub struct ListFeaturedProjects {
    catalog: Arc<Catalog>,
}

impl ListFeaturedProjects {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self) -> Vec<Project> {
        self.catalog.featured().into_iter().cloned().collect()
    }
}
