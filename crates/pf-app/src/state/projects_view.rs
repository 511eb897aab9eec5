use pf_core::{
    AxisFilter, Catalog, FilterAxis, FilterSelection, Project, SearchTerm, Vocabularies,
};
use std::sync::Arc;
use tracing::trace;

use crate::usecases::ProjectListing;

/// State of the projects section: current selection and search text.
///
/// The view owns its inputs and hands them to the filter engine on every
/// query. Results are recomputed each time, never cached.
#[derive(Debug, Clone)]
pub struct ProjectsView {
    catalog: Arc<Catalog>,
    selection: FilterSelection,
    search: String,
}

impl ProjectsView {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selection: FilterSelection::all(),
            search: String::new(),
        }
    }

    pub fn with_selection(mut self, selection: FilterSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Raw search text as typed, untrimmed.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn select(&mut self, axis: FilterAxis, value: impl Into<AxisFilter>) {
        let value = value.into();
        trace!(%axis, value = %value, "filter selected");
        self.selection = std::mem::take(&mut self.selection).with(axis, value);
    }

    pub fn set_search(&mut self, raw: impl Into<String>) {
        self.search = raw.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Back to "All" on every axis with an empty search.
    pub fn reset(&mut self) {
        self.selection = FilterSelection::all();
        self.search.clear();
    }

    pub fn options(&self) -> Vocabularies {
        self.catalog.vocabularies()
    }

    pub fn visible(&self) -> Vec<&Project> {
        self.catalog.filter(&self.selection, &self.search)
    }

    pub fn listing(&self) -> ProjectListing {
        ProjectListing::from_hits(self.visible(), self.catalog.len())
    }

    /// Constrained axes plus one for a non-blank search.
    pub fn active_filter_count(&self) -> usize {
        let search = usize::from(!SearchTerm::new(&self.search).is_empty());
        self.selection.active_count() + search
    }

    pub fn is_filtered(&self) -> bool {
        !self.selection.is_unconstrained() || !SearchTerm::new(&self.search).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ProjectsView {
        let project = |title: &str, category: &str, project_type: &str, techs: &[&str]| {
            Project::new(
                title,
                "",
                category,
                project_type,
                "Intermediate",
                "https://github.com/example/x",
            )
            .unwrap()
            .with_technologies(techs.iter().copied())
        };

        ProjectsView::new(Arc::new(
            Catalog::new(vec![
                project("Cool Air Repairs", "Business", "Frontend", &["React"]),
                project("E-Commerce Platform", "E-Commerce", "Full Stack", &["React", "Node.js"]),
                project("Dental Clinic", "Business", "Frontend", &["HTML"]),
            ])
            .unwrap(),
        ))
    }

    fn titles(view: &ProjectsView) -> Vec<&str> {
        view.visible().into_iter().map(Project::title).collect()
    }

    #[test]
    fn test_new_view_shows_everything() {
        let view = view();

        assert_eq!(titles(&view).len(), 3);
        assert!(!view.is_filtered());
    }

    #[test]
    fn test_select_and_search_narrow_results() {
        let mut view = view();

        view.select(FilterAxis::Category, "Business");
        assert_eq!(titles(&view), vec!["Cool Air Repairs", "Dental Clinic"]);

        view.set_search("react");
        assert_eq!(titles(&view), vec!["Cool Air Repairs"]);
        assert_eq!(view.active_filter_count(), 2);
    }

    #[test]
    fn test_selecting_all_clears_axis() {
        let mut view = view();

        view.select(FilterAxis::Type, "Full Stack");
        view.select(FilterAxis::Type, "All");

        assert!(view.selection().project_type.is_all());
        assert_eq!(titles(&view).len(), 3);
    }

    #[test]
    fn test_blank_search_does_not_count_as_filter() {
        let mut view = view();

        view.set_search("   ");

        assert_eq!(view.search(), "   ");
        assert!(!view.is_filtered());
        assert_eq!(titles(&view).len(), 3);
    }

    #[test]
    fn test_configured_selection_counts_as_filtered() {
        let view = view().with_selection(FilterSelection::from_values("All", "All", "Advanced"));

        assert!(view.is_filtered());
        assert_eq!(view.active_filter_count(), 1);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut view = view();
        view.select(FilterAxis::Complexity, "Advanced");
        view.set_search("node");

        view.reset();

        assert_eq!(view.selection(), &FilterSelection::all());
        assert_eq!(view.search(), "");
        assert_eq!(view.listing().summary(), "Showing 3 of 3 projects");
    }

    #[test]
    fn test_clear_search_keeps_selection() {
        let mut view =
            view().with_selection(FilterSelection::from_values("Business", "All", "All"));
        view.set_search("html");

        view.clear_search();

        assert_eq!(titles(&view), vec!["Cool Air Repairs", "Dental Clinic"]);
    }

    #[test]
    fn test_options_follow_catalog() {
        let options = view().options();

        assert_eq!(options.categories, vec!["All", "Business", "E-Commerce"]);
    }
}
