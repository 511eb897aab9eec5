use pf_core::{Catalog, FilterSelection, Project};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info_span};

/// Result of one filter pass, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListing {
    pub projects: Vec<Project>,
    pub shown: usize,
    pub total: usize,
}

impl ProjectListing {
    pub fn from_hits(hits: Vec<&Project>, total: usize) -> Self {
        let projects: Vec<Project> = hits.into_iter().cloned().collect();
        Self {
            shown: projects.len(),
            projects,
            total,
        }
    }

    /// Line shown above the project grid, e.g. `Showing 2 of 5 projects`.
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "project" } else { "projects" };
        format!("Showing {} of {} {}", self.shown, self.total, noun)
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Use case for listing the projects that pass the current filters.
pub struct ListProjects {
    catalog: Arc<Catalog>,
}

impl ListProjects {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Runs the filter engine for `selection` and `search`.
    ///
    /// Never fails: an unknown axis value or a search that matches nothing
    /// produces an empty listing.
    pub fn execute(&self, selection: &FilterSelection, search: &str) -> ProjectListing {
        let _span = info_span!(
            "usecase.list_projects.execute",
            category = %selection.category,
            project_type = %selection.project_type,
            complexity = %selection.complexity,
        )
        .entered();

        let hits = self.catalog.filter(selection, search);
        debug!(shown = hits.len(), total = self.catalog.len(), "projects filtered");

        ProjectListing::from_hits(hits, self.catalog.len())
    }
}
