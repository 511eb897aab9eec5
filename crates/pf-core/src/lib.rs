//! # pf-core
//!
//! Core domain models and filtering logic for the portfolio project catalog.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod filter;
pub mod ports;
pub mod project;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, CatalogError};
pub use config::AppConfig;
pub use filter::{
    derive_vocabularies, filter_projects, AxisFilter, FilterAxis, FilterSelection, SearchTerm,
    Vocabularies, ALL,
};
pub use project::{Project, ProjectDraft, ProjectError};
