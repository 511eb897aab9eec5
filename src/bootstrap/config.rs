//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read TOML configuration files / 读取 TOML 配置文件
//! - Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! - No validation logic / 禁止验证逻辑
//! - No business rules / 禁止业务规则

use anyhow::Context;
use pf_core::config::AppConfig;
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings and missing sections are
/// accepted as facts.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Default config location, e.g. `~/.config/portfolio/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("portfolio").join("config.toml"))
}

/// Picks the configuration to run with.
///
/// An explicit path must exist. Without one, the default location is used
/// when present and [`AppConfig::empty`] otherwise.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "using default config file");
            load_config(&path)
        }
        _ => Ok(AppConfig::empty()),
    }
}
