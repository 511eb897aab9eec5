mod embedded;
mod file_repo;
mod format;

pub use embedded::EmbeddedCatalogSource;
pub use file_repo::FileCatalogRepository;
pub use format::{CatalogFormat, UnsupportedFormat};
