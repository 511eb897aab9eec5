use serde::Serialize;

use super::{ProjectDraft, ProjectError};
use crate::filter::{FilterAxis, ALL};

/// A portfolio project record.
///
/// Fields are private: a `Project` only exists once its draft passed
/// validation, and it is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    title: String,
    description: String,
    tags: Vec<String>,
    category: String,
    #[serde(rename = "type")]
    project_type: String,
    complexity: String,
    technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    live_url: Option<String>,
    github_url: String,
    featured: bool,
    previewable: bool,
}

impl Project {
    /// Builds a project from its required fields, validating them.
    ///
    /// Optional parts are attached with the `with_*` methods.
    ///
    /// # Errors
    ///
    /// Same rules as [`Project::try_from`] on a [`ProjectDraft`].
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        project_type: impl Into<String>,
        complexity: impl Into<String>,
        github_url: impl Into<String>,
    ) -> Result<Self, ProjectError> {
        Self::try_from(ProjectDraft {
            title: Some(title.into()),
            description: Some(description.into()),
            category: Some(category.into()),
            project_type: Some(project_type.into()),
            complexity: Some(complexity.into()),
            github_url: Some(github_url.into()),
            ..ProjectDraft::default()
        })
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_live_url(mut self, live_url: impl Into<String>) -> Self {
        self.live_url = Some(live_url.into());
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_previewable(mut self, previewable: bool) -> Self {
        self.previewable = previewable;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn project_type(&self) -> &str {
        &self.project_type
    }

    pub fn complexity(&self) -> &str {
        &self.complexity
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn live_url(&self) -> Option<&str> {
        self.live_url.as_deref()
    }

    pub fn github_url(&self) -> &str {
        &self.github_url
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn is_previewable(&self) -> bool {
        self.previewable
    }

    /// Value this project carries on one filterable axis.
    pub fn axis_value(&self, axis: FilterAxis) -> &str {
        match axis {
            FilterAxis::Category => &self.category,
            FilterAxis::Type => &self.project_type,
            FilterAxis::Complexity => &self.complexity,
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ProjectError> {
    value.ok_or(ProjectError::MissingField { field })
}

fn non_blank(value: Option<String>, field: &'static str) -> Result<String, ProjectError> {
    let value = required(value, field)?;
    if value.trim().is_empty() {
        return Err(ProjectError::BlankField { field });
    }
    Ok(value)
}

/// Axis values share the selection vocabulary, so the sentinel is off limits.
fn axis_value(value: Option<String>, field: &'static str) -> Result<String, ProjectError> {
    let value = non_blank(value, field)?;
    if value == ALL {
        return Err(ProjectError::ReservedValue { field });
    }
    Ok(value)
}

impl TryFrom<ProjectDraft> for Project {
    type Error = ProjectError;

    /// Validates a draft into a project.
    ///
    /// # Errors
    ///
    /// - [`ProjectError::MissingField`] when `title`, `description`, `category`,
    ///   `type`, `complexity` or `githubUrl` is absent.
    /// - [`ProjectError::BlankField`] when `title`, `githubUrl` or an axis value
    ///   is whitespace only. An empty description is accepted.
    /// - [`ProjectError::ReservedValue`] when an axis value is `"All"`.
    fn try_from(draft: ProjectDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            title: non_blank(draft.title, "title")?,
            description: required(draft.description, "description")?,
            tags: draft.tags,
            category: axis_value(draft.category, "category")?,
            project_type: axis_value(draft.project_type, "type")?,
            complexity: axis_value(draft.complexity, "complexity")?,
            technologies: draft.technologies,
            live_url: draft.live_url,
            github_url: non_blank(draft.github_url, "githubUrl")?,
            featured: draft.featured,
            previewable: draft.previewable,
        })
    }
}
