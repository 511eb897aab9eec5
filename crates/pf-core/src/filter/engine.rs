use super::{FilterAxis, FilterSelection, SearchTerm};
use crate::project::Project;

/// Computes the displayable subset of `projects`.
///
/// A project is kept when every axis of `selection` admits it and the
/// normalized `search` term matches it. The output keeps the input order.
///
/// # Examples
///
/// ```
/// use pf_core::{filter_projects, FilterSelection, Project};
///
/// let catalog = vec![
///     Project::new("Cool Air Repairs", "", "Business", "Frontend", "Intermediate", "https://g/1")
///         .unwrap()
///         .with_technologies(["React"]),
///     Project::new("Notes", "", "Personal", "Frontend", "Beginner", "https://g/2").unwrap(),
/// ];
///
/// let hits = filter_projects(&catalog, &FilterSelection::all(), "react");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title(), "Cool Air Repairs");
/// ```
pub fn filter_projects<'a, I>(
    projects: I,
    selection: &FilterSelection,
    search: &str,
) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let term = SearchTerm::new(search);

    projects
        .into_iter()
        .filter(|project| {
            FilterAxis::ALL_AXES
                .iter()
                .all(|axis| selection.get(*axis).admits(project.axis_value(*axis)))
        })
        .filter(|project| term.matches(project))
        .collect()
}
