//! Project domain models.
mod draft;
mod error;
mod model;

pub use draft::ProjectDraft;
pub use error::ProjectError;
pub use model::Project;
