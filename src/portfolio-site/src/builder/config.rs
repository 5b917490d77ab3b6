//! Build configuration.

use std::path::{Path, PathBuf};

/// Configuration for a site build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Path to the site config file.
    config_path: PathBuf,
    /// Directory the generated site is written to.
    out_dir: PathBuf,
    /// Optional GitHub token used for API calls.
    token: Option<String>,
    /// Optional GitHub API base URL.
    api_base_url: Option<String>,
    /// Whether to preview the page without writing files.
    dry_run: bool,
}

impl BuildConfig {
    /// Creates a new configuration for a build.
    pub fn new(config_path: PathBuf, out_dir: PathBuf, dry_run: bool) -> Self {
        Self {
            config_path,
            out_dir,
            token: None,
            api_base_url: None,
            dry_run,
        }
    }

    /// Sets the GitHub token.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets a custom GitHub API base URL.
    pub fn with_api_base_url(mut self, api_base_url: String) -> Self {
        self.api_base_url = Some(api_base_url);
        self
    }

    /// Returns the site config path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the configured GitHub API base URL.
    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
