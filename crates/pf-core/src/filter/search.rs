use crate::project::Project;

/// Normalized free-text search term.
///
/// The raw input is trimmed and lowercased once, so a whitespace-only input
/// becomes the empty term and imposes no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against title, description, tags
    /// and technologies. The empty term matches every project.
    pub fn matches(&self, project: &Project) -> bool {
        if self.is_empty() {
            return true;
        }

        let needle = self.0.as_str();
        let hit = |haystack: &str| haystack.to_lowercase().contains(needle);

        hit(project.title())
            || hit(project.description())
            || project.tags().iter().any(|tag| hit(tag))
            || project.technologies().iter().any(|tech| hit(tech))
    }
}
