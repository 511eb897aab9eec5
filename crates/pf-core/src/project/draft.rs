use serde::{Deserialize, Serialize};

/// Unvalidated project record, as written in a catalog file.
///
/// Required strings are `Option` so that a missing key survives
/// deserialization and can be reported by [`Project::try_from`](super::Project).
/// Keys follow the catalog file convention (`type`, `liveUrl`, `githubUrl`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub complexity: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub previewable: bool,
}
