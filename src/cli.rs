//! Command-line front-end: one filter pass over the catalog per invocation,
//! or a debounced search session fed from stdin.

use anyhow::Context;
use clap::Parser;
use pf_app::{
    GetFilterOptions, ListFeaturedProjects, ListProjects, LoadCatalog, ProjectListing,
    ProjectsView,
};
use pf_core::{AppConfig, Catalog, FilterAxis, FilterSelection, Project, Vocabularies};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::bootstrap;

/// Browse the portfolio project catalog
#[derive(Parser, Debug, Default)]
#[command(name = "portfolio", version, long_about = None)]
pub struct Args {
    /// Path to a config file (default: <config dir>/portfolio/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Catalog file (.toml or .json); overrides the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Category filter ("All" for no constraint)
    #[arg(long)]
    pub category: Option<String>,

    /// Project type filter ("All" for no constraint)
    #[arg(long = "type")]
    pub project_type: Option<String>,

    /// Complexity filter ("All" for no constraint)
    #[arg(long)]
    pub complexity: Option<String>,

    /// Case-insensitive search over title, description, tags and technologies
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// List featured projects instead of filtering
    #[arg(long, default_value_t = false)]
    pub featured: bool,

    /// Print the selectable values for each filter
    #[arg(long, default_value_t = false)]
    pub options: bool,

    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Read search terms from stdin, one per line, re-listing once typing settles
    #[arg(short, long, default_value_t = false, conflicts_with_all = ["featured", "options"])]
    pub interactive: bool,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Applies the command-line axis overrides on top of `base`.
    pub fn selection(&self, base: FilterSelection) -> FilterSelection {
        [
            (FilterAxis::Category, &self.category),
            (FilterAxis::Type, &self.project_type),
            (FilterAxis::Complexity, &self.complexity),
        ]
        .into_iter()
        .fold(base, |selection, (axis, value)| match value {
            Some(value) => selection.with(axis, value.as_str()),
            None => selection,
        })
    }
}

async fn load(args: &Args) -> anyhow::Result<(AppConfig, Arc<Catalog>)> {
    let mut config = bootstrap::resolve_config(args.config.as_deref())?;
    if let Some(catalog) = &args.catalog {
        config.catalog_path = catalog.clone();
    }

    let source = bootstrap::catalog_source(&config);
    let catalog = Arc::new(LoadCatalog::new(source).execute().await?);
    Ok((config, catalog))
}

/// Loads the catalog and renders the requested view.
pub async fn run(args: &Args) -> anyhow::Result<String> {
    let (config, catalog) = load(args).await?;

    if args.options {
        let options = GetFilterOptions::new(catalog).execute();
        return if args.json {
            serde_json::to_string_pretty(&options).context("Failed to encode options")
        } else {
            Ok(render_options(&options))
        };
    }

    if args.featured {
        let featured = ListFeaturedProjects::new(catalog).execute();
        return if args.json {
            serde_json::to_string_pretty(&featured).context("Failed to encode projects")
        } else {
            Ok(render_projects(&featured))
        };
    }

    let selection = args.selection(bootstrap::initial_selection(&config));
    let listing = ListProjects::new(catalog).execute(&selection, &args.search);

    if args.json {
        serde_json::to_string_pretty(&listing).context("Failed to encode listing")
    } else {
        Ok(render_listing(&listing))
    }
}

/// Debounced search session.
///
/// Each line from `reader` replaces the search term. The listing is written
/// once up front and again whenever input has been quiet for the configured
/// `[search] debounce_ms`. Ends when `reader` is exhausted.
pub async fn run_interactive<R, W>(args: &Args, reader: R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: std::io::Write,
{
    let (config, catalog) = load(args).await?;
    let selection = args.selection(bootstrap::initial_selection(&config));
    let mut view = ProjectsView::new(catalog).with_selection(selection);
    view.set_search(args.search.as_str());
    write_listing(out, &view.listing(), args.json)?;

    let (input, mut debouncer) = bootstrap::search_debouncer(&config);
    let typing = tokio::spawn(async move {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            input.push(line);
        }
        Ok::<_, std::io::Error>(())
    });

    while let Some(term) = debouncer.next_settled().await {
        debug!(term = %term, "search settled");
        view.set_search(term);
        write_listing(out, &view.listing(), args.json)?;
    }

    typing
        .await
        .context("Search input task failed")?
        .context("Failed to read search input")?;
    Ok(())
}

fn write_listing<W: std::io::Write>(
    out: &mut W,
    listing: &ProjectListing,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let line = serde_json::to_string(listing).context("Failed to encode listing")?;
        writeln!(out, "{line}")?;
    } else {
        out.write_all(render_listing(listing).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

pub fn render_options(options: &Vocabularies) -> String {
    let mut out = String::new();
    for axis in FilterAxis::ALL_AXES {
        let _ = writeln!(out, "{:<11} {}", format!("{axis}:"), options.for_axis(axis).join(", "));
    }
    out
}

pub fn render_listing(listing: &ProjectListing) -> String {
    let mut out = listing.summary();
    out.push('\n');
    if listing.is_empty() {
        out.push_str("No projects match the current filters.\n");
    } else {
        out.push_str(&render_projects(&listing.projects));
    }
    out
}

pub fn render_projects(projects: &[Project]) -> String {
    let mut out = String::new();
    for project in projects {
        let _ = writeln!(
            out,
            "- {} [{} / {} / {}]",
            project.title(),
            project.category(),
            project.project_type(),
            project.complexity()
        );
        if !project.technologies().is_empty() {
            let _ = writeln!(out, "    {}", project.technologies().join(", "));
        }
        if let Some(live) = project.live_url() {
            let _ = writeln!(out, "    live:   {live}");
        }
        let _ = writeln!(out, "    source: {}", project.github_url());
    }
    out
}
