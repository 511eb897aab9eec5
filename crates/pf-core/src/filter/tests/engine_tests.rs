//! Tests for [`filter_projects`].

use super::fixtures::*;
use crate::filter::*;

#[test]
fn test_search_react_returns_both_in_catalog_order() {
    let catalog = two_project_catalog();

    let result = filter_projects(&catalog, &FilterSelection::all(), "react");

    assert_eq!(titles(&result), vec!["Cool Air Repairs", "E-Commerce Platform"]);
}

#[test]
fn test_category_business_returns_only_cool_air() {
    let catalog = two_project_catalog();
    let selection = FilterSelection::from_values("Business", "All", "All");

    let result = filter_projects(&catalog, &selection, "");

    assert_eq!(titles(&result), vec!["Cool Air Repairs"]);
}

#[test]
fn test_nonexistent_search_returns_empty() {
    let catalog = two_project_catalog();

    let result = filter_projects(&catalog, &FilterSelection::all(), "xyz-nonexistent");

    assert!(result.is_empty());
}

#[test]
fn test_unconstrained_returns_whole_catalog() {
    let catalog = mixed_catalog();

    let result = filter_projects(&catalog, &FilterSelection::all(), "");

    assert_eq!(result.len(), catalog.len());
    assert!(result.iter().zip(catalog.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
}

#[test]
fn test_empty_catalog_yields_empty_result() {
    let catalog = Vec::new();

    let result = filter_projects(&catalog, &FilterSelection::all(), "react");

    assert!(result.is_empty());
}

#[test]
fn test_axes_combine_with_and() {
    let catalog = mixed_catalog();
    let selection = FilterSelection::from_values("Personal", "Frontend", "All");

    let result = filter_projects(&catalog, &selection, "");

    assert_eq!(titles(&result), vec!["Weather Now"]);
}

#[test]
fn test_complexity_axis_alone() {
    let catalog = mixed_catalog();
    let selection = FilterSelection::all().with(FilterAxis::Complexity, "Advanced");

    let result = filter_projects(&catalog, &selection, "");

    assert_eq!(titles(&result), vec!["Task Board", "Shop API"]);
}

#[test]
fn test_axis_and_search_combine() {
    let catalog = mixed_catalog();
    let selection = FilterSelection::all().with(FilterAxis::Category, "Business");

    let result = filter_projects(&catalog, &selection, "css");

    assert_eq!(titles(&result), vec!["Dental Clinic"]);
}

#[test]
fn test_unknown_axis_value_yields_empty_not_error() {
    let catalog = mixed_catalog();
    let selection = FilterSelection::all().with(FilterAxis::Type, "Mobile");

    assert!(filter_projects(&catalog, &selection, "").is_empty());
}

#[test]
fn test_axis_match_is_case_sensitive() {
    let catalog = mixed_catalog();
    let selection = FilterSelection::all().with(FilterAxis::Category, "business");

    assert!(filter_projects(&catalog, &selection, "").is_empty());
}

#[test]
fn test_search_matches_tags() {
    let catalog = mixed_catalog();

    let result = filter_projects(&catalog, &FilterSelection::all(), "kanban");

    assert_eq!(titles(&result), vec!["Task Board"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = mixed_catalog();
    let selection = FilterSelection::all();

    let lower = filter_projects(&catalog, &selection, "react");
    let title = filter_projects(&catalog, &selection, "React");
    let upper = filter_projects(&catalog, &selection, "REACT");

    assert_eq!(lower, title);
    assert_eq!(title, upper);
    assert_eq!(titles(&lower), vec!["Cool Air Repairs"]);
}

#[test]
fn test_whitespace_search_is_treated_as_empty() {
    let catalog = mixed_catalog();

    let result = filter_projects(&catalog, &FilterSelection::all(), "    ");

    assert_eq!(result.len(), catalog.len());
}

#[test]
fn test_search_term_is_trimmed_before_matching() {
    let catalog = mixed_catalog();

    let result = filter_projects(&catalog, &FilterSelection::all(), "  mongodb  ");

    assert_eq!(titles(&result), vec!["Shop API"]);
}

#[test]
fn test_filtering_output_again_is_idempotent() {
    let catalog = mixed_catalog();
    let selection = FilterSelection::all().with(FilterAxis::Type, "Frontend");

    let once = filter_projects(&catalog, &selection, "a");
    let twice = filter_projects(once.iter().copied(), &selection, "a");

    assert_eq!(once, twice);
}

#[test]
fn test_filter_does_not_touch_inputs() {
    let catalog = mixed_catalog();
    let before = catalog.clone();
    let selection = FilterSelection::from_values("Business", "All", "All");
    let selection_before = selection.clone();

    let _ = filter_projects(&catalog, &selection, "react");

    assert_eq!(catalog, before);
    assert_eq!(selection, selection_before);
}
