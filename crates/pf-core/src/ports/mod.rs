//! Ports implemented by the infrastructure layer.
pub mod catalog_source;

pub use catalog_source::CatalogSourcePort;
