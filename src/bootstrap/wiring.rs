//! Turns configuration facts into concrete adapters and initial state.

use pf_app::{debounce_channel, SearchDebouncer, SearchInput};
use pf_core::{config::AppConfig, ports::CatalogSourcePort, AxisFilter, FilterSelection};
use pf_infra::{EmbeddedCatalogSource, FileCatalogRepository};
use std::sync::Arc;
use std::time::Duration;

/// File-backed source for a configured path, the embedded catalog otherwise.
pub fn catalog_source(config: &AppConfig) -> Arc<dyn CatalogSourcePort> {
    if config.catalog_path.as_os_str().is_empty() {
        Arc::new(EmbeddedCatalogSource::new())
    } else {
        Arc::new(FileCatalogRepository::new(config.catalog_path.clone()))
    }
}

fn axis(value: &str) -> AxisFilter {
    if value.trim().is_empty() {
        AxisFilter::All
    } else {
        AxisFilter::from(value)
    }
}

/// Selection configured under `[filters]`; unset axes mean "All".
pub fn initial_selection(config: &AppConfig) -> FilterSelection {
    FilterSelection {
        category: axis(&config.initial_category),
        project_type: axis(&config.initial_type),
        complexity: axis(&config.initial_complexity),
    }
}

/// Search debouncer using the `[search] debounce_ms` delay; 0 passes every
/// term straight through.
pub fn search_debouncer(config: &AppConfig) -> (SearchInput, SearchDebouncer) {
    debounce_channel(Duration::from_millis(config.search_debounce_ms))
}
