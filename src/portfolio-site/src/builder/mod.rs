//! Orchestrates a site build: load config, fetch repositories, render, write.

mod config;
mod error;

pub use config::BuildConfig;
pub use error::BuildError;

use crate::config::{ConfigError, SiteConfig};
use crate::render::PageRenderer;
use crate::repositories::{build_client, fetch_repositories, RepositoryRecord};
use crate::summary::BuildSummary;
use octocrab::Octocrab;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the generated page.
pub const INDEX_FILE: &str = "index.html";

/// Name of the generated stylesheet.
pub const STYLESHEET_FILE: &str = "styles.css";

/// Name of the generated data file.
pub const DATA_FILE: &str = "repos.json";

/// Lines of the page shown in a dry-run preview.
const PREVIEW_LINES: usize = 20;

/// Builds the portfolio site.
pub struct Builder {
    config: BuildConfig,
    octocrab: Octocrab,
    renderer: PageRenderer,
}

impl Builder {
    /// Builds a site builder from the provided configuration.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let octocrab = build_client(config.api_base_url(), config.token())?;
        Ok(Self {
            config,
            octocrab,
            renderer: PageRenderer::new()?,
        })
    }

    /// Executes the full build.
    ///
    /// Nothing is written unless every repository lookup succeeds.
    pub async fn build(&self) -> Result<BuildSummary, BuildError> {
        info!(path = %self.config.config_path().display(), "Loading site config");
        let site = SiteConfig::load(self.config.config_path())?;

        if let Some(assets_dir) = &site.assets_dir {
            check_output_outside_assets(assets_dir, self.config.out_dir())?;
        }

        let mut summary = BuildSummary::new(&site.owner, self.config.dry_run());
        summary.projects_requested = site.projects.len();

        if site.projects.is_empty() {
            warn!("No projects configured");
        }

        let repositories =
            fetch_repositories(&self.octocrab, &site.owner, &site.projects).await?;
        summary.record_repositories(&repositories);

        let page = self.renderer.render_page(&site, &repositories)?;
        let data = self.renderer.render_data(&repositories)?;

        if self.config.dry_run() {
            print_dry_run_preview(&site, &repositories, &page);
            return Ok(summary);
        }

        let out_dir = self.config.out_dir();
        info!(path = %out_dir.display(), "Writing site");
        create_dir(out_dir)?;

        if let Some(assets_dir) = &site.assets_dir {
            copy_assets(assets_dir, out_dir, &mut summary)?;
        }

        write_file(&out_dir.join(INDEX_FILE), &page, &mut summary)?;
        write_file(
            &out_dir.join(STYLESHEET_FILE),
            self.renderer.stylesheet(),
            &mut summary,
        )?;
        write_file(&out_dir.join(DATA_FILE), &data, &mut summary)?;

        info!(files = summary.files_written.len(), "Site written");
        Ok(summary)
    }
}

fn output_error(path: &Path, source: std::io::Error) -> BuildError {
    BuildError::Output {
        path: path.display().to_string(),
        source,
    }
}

fn assets_error(path: &Path, source: std::io::Error) -> BuildError {
    BuildError::Assets {
        path: path.display().to_string(),
        source,
    }
}

/// Rejects an output directory that is, or lies inside, the assets directory.
///
/// Copying the assets would otherwise walk into its own output.
fn check_output_outside_assets(assets_dir: &Path, out_dir: &Path) -> Result<(), BuildError> {
    let assets = assets_dir
        .canonicalize()
        .map_err(|e| assets_error(assets_dir, e))?;
    let out = resolve_path(out_dir).map_err(|e| output_error(out_dir, e))?;

    if out.starts_with(&assets) {
        return Err(ConfigError::OutputInsideAssets {
            out_dir: out_dir.display().to_string(),
            assets_dir: assets_dir.display().to_string(),
        }
        .into());
    }

    Ok(())
}

/// Canonicalizes a path that may not exist yet.
///
/// The deepest existing ancestor is canonicalized and the missing components
/// are appended to it.
fn resolve_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();

    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing.canonicalize()?;
    for name in missing.into_iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path).map_err(|e| output_error(path, e))
}

fn write_file(path: &Path, contents: &str, summary: &mut BuildSummary) -> Result<(), BuildError> {
    std::fs::write(path, contents).map_err(|e| output_error(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    summary.record_file(path.to_path_buf());
    Ok(())
}

/// Recursively copies the assets directory into the output directory.
fn copy_assets(source: &Path, target: &Path, summary: &mut BuildSummary) -> Result<(), BuildError> {
    let entries = std::fs::read_dir(source).map_err(|e| assets_error(source, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| assets_error(source, e))?;
        let path = entry.path();
        let destination: PathBuf = target.join(entry.file_name());

        if path.is_dir() {
            create_dir(&destination)?;
            copy_assets(&path, &destination, summary)?;
        } else {
            std::fs::copy(&path, &destination).map_err(|e| output_error(&destination, e))?;
            debug!(from = %path.display(), to = %destination.display(), "Copied asset");
            summary.record_file(destination);
        }
    }

    Ok(())
}

fn print_dry_run_preview(site: &SiteConfig, repositories: &[RepositoryRecord], page: &str) {
    println!("\n[DRY RUN] Site for: {}", site.profile.name);
    println!("  Owner: {}", site.owner);
    println!("  Fetched {} repositories:\n", repositories.len());

    for (i, repo) in repositories.iter().enumerate() {
        println!(
            "  [{}/{}] {} ({} stars, {} forks)",
            i + 1,
            repositories.len(),
            repo.name,
            repo.stars,
            repo.forks
        );
        println!("    {}", repo.repository_url);
    }

    println!("\n  Page preview:");
    for line in page.lines().take(PREVIEW_LINES) {
        println!("    {line}");
    }
    if page.lines().count() > PREVIEW_LINES {
        println!("    ...");
    }

    println!();
}
