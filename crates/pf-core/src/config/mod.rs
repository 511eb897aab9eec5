//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation beyond "missing is empty"
//!
//! How an empty value is interpreted (e.g. an empty catalog path meaning the
//! embedded catalog) is decided by the caller.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog file path (path info only, no existence check)
    pub catalog_path: PathBuf,

    /// Initial category filter, empty when unset
    pub initial_category: String,

    /// Initial type filter, empty when unset
    pub initial_type: String,

    /// Initial complexity filter, empty when unset
    pub initial_complexity: String,

    /// Search debounce delay in milliseconds, 0 disables debouncing
    pub search_debounce_ms: u64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            catalog_path: PathBuf::from(str_at("catalog", "path")),
            initial_category: str_at("filters", "category"),
            initial_type: str_at("filters", "type"),
            initial_complexity: str_at("filters", "complexity"),
            search_debounce_ms: toml_value
                .get("search")
                .and_then(|s| s.get("debounce_ms"))
                .and_then(|v| v.as_integer())
                .and_then(|i| u64::try_from(i).ok())
                .unwrap_or(0),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            catalog_path: PathBuf::new(),
            initial_category: String::new(),
            initial_type: String::new(),
            initial_complexity: String::new(),
            search_debounce_ms: 0,
        }
    }
}
