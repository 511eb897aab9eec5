//! Tracing configuration
//!
//! Installs a `tracing-subscriber` fmt subscriber on stderr, so stdout
//! stays reserved for command output (text or JSON).
//!
//! `RUST_LOG` overrides the built-in directives when set.

use tracing_subscriber::EnvFilter;

/// Build the default filter directives for tracing
///
/// - **Verbose**: debug for the workspace crates
/// - **Default**: info for the workspace crates, warn for everything else
fn build_filter_directives(verbose: bool) -> Vec<String> {
    let level = if verbose { "debug" } else { "info" };
    vec![
        "warn".to_string(),
        format!("portfolio={level}"),
        format!("portfolio_lib={level}"),
        format!("pf_app={level}"),
        format!("pf_infra={level}"),
        format!("pf_core={level}"),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once, before any use case runs.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(verbose).join(",")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))
}
