//! Portfolio application layer
//!
//! Use cases over the project catalog and the presentation state that
//! feeds the filter engine.

pub mod state;
pub mod usecases;

pub use state::{debounce_channel, ProjectsView, SearchDebouncer, SearchInput};
pub use usecases::{
    GetFilterOptions, ListFeaturedProjects, ListProjects, LoadCatalog, LoadCatalogError,
    ProjectListing,
};
