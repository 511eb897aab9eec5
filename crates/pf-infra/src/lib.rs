//! Infrastructure adapters for the portfolio catalog.
//!
//! Implements the ports declared in `pf-core`.

pub mod catalog;

pub use catalog::{CatalogFormat, EmbeddedCatalogSource, FileCatalogRepository};
