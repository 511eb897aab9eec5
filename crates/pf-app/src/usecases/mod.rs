pub mod get_filter_options;
pub mod list_featured_projects;
pub mod list_projects;
pub mod load_catalog;

pub use get_filter_options::GetFilterOptions;
pub use list_featured_projects::ListFeaturedProjects;
pub use list_projects::{ListProjects, ProjectListing};
pub use load_catalog::{LoadCatalog, LoadCatalogError};
