//! The project catalog: a fixed, validated, ordered list of projects.

use std::collections::HashSet;

use crate::filter::{derive_vocabularies, filter_projects, FilterSelection, Vocabularies};
use crate::project::{Project, ProjectDraft, ProjectError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("project #{index} is invalid: {source}")]
    InvalidProject {
        index: usize,
        #[source]
        source: ProjectError,
    },

    #[error("duplicate project title: {0}")]
    DuplicateTitle(String),
}

/// Immutable catalog of portfolio projects.
///
/// Titles are unique and act as the identity key. Every query keeps the
/// order the projects were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate titles.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.title()) {
                return Err(CatalogError::DuplicateTitle(project.title().to_string()));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(projects = projects.len(), "catalog built");

        Ok(Self { projects })
    }

    /// Validates raw drafts and builds a catalog from them.
    ///
    /// Fails on the first invalid draft, reporting its position.
    pub fn from_drafts(drafts: Vec<ProjectDraft>) -> Result<Self, CatalogError> {
        let projects = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                Project::try_from(draft)
                    .map_err(|source| CatalogError::InvalidProject { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(projects)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// Looks a project up by its title.
    pub fn get(&self, title: &str) -> Option<&Project> {
        self.iter().find(|p| p.title() == title)
    }

    pub fn featured(&self) -> Vec<&Project> {
        self.iter().filter(|p| p.is_featured()).collect()
    }

    pub fn previewable(&self) -> Vec<&Project> {
        self.iter().filter(|p| p.is_previewable()).collect()
    }

    pub fn vocabularies(&self) -> Vocabularies {
        derive_vocabularies(self)
    }

    pub fn filter(&self, selection: &FilterSelection, search: &str) -> Vec<&Project> {
        filter_projects(self, selection, search)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
