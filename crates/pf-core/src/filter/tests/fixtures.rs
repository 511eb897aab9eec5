//! Test fixtures and helper functions for filter tests.

use crate::project::Project;

/// Creates a project with the given axes and technologies; other fields are filler.
pub fn create_project(
    title: &str,
    category: &str,
    project_type: &str,
    complexity: &str,
    technologies: &[&str],
) -> Project {
    Project::new(
        title,
        format!("{title} description"),
        category,
        project_type,
        complexity,
        format!("https://github.com/example/{}", title.to_lowercase().replace(' ', "-")),
    )
    .unwrap()
    .with_technologies(technologies.iter().copied())
}

/// The two-entry catalog used throughout the filtering scenarios.
pub fn two_project_catalog() -> Vec<Project> {
    vec![
        create_project(
            "Cool Air Repairs",
            "Business",
            "Frontend",
            "Intermediate",
            &["React", "JavaScript"],
        ),
        create_project(
            "E-Commerce Platform",
            "E-Commerce",
            "Full Stack",
            "Advanced",
            &["React", "Node.js"],
        ),
    ]
}

/// A wider catalog with repeated axis values and tags.
pub fn mixed_catalog() -> Vec<Project> {
    vec![
        create_project("Cool Air Repairs", "Business", "Frontend", "Intermediate", &["React"])
            .with_tags(["HVAC", "Landing Page"]),
        create_project("Weather Now", "Personal", "Frontend", "Beginner", &["JavaScript", "CSS"])
            .with_tags(["API"]),
        create_project("Task Board", "Personal", "Full Stack", "Advanced", &["Vue", "Express"])
            .with_tags(["Kanban"]),
        create_project("Dental Clinic", "Business", "Frontend", "Beginner", &["HTML", "CSS"]),
        create_project("Shop API", "E-Commerce", "Backend", "Advanced", &["Node.js", "MongoDB"])
            .with_tags(["REST"]),
    ]
}

pub fn titles(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.title().to_string()).collect()
}
