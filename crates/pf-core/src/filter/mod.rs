//! Project filtering: selection model, search normalization, vocabulary
//! derivation and the filter engine itself.
//!
//! Everything here is a pure function of its inputs. The presentation layer
//! owns the selection and the search string and re-runs the engine on every
//! change; nothing is cached.
mod engine;
mod search;
mod selection;
mod vocabulary;

pub use engine::filter_projects;
pub use search::SearchTerm;
pub use selection::{AxisFilter, FilterAxis, FilterSelection, ALL};
pub use vocabulary::{derive_vocabularies, Vocabularies};

#[cfg(test)]
mod tests;
