//! Presentation state that drives the filter engine.
mod debounce;
mod projects_view;

pub use debounce::{debounce_channel, SearchDebouncer, SearchInput};
pub use projects_view::ProjectsView;
