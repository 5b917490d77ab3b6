//! Build error types.

/// Errors that can abort a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Site config loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// A repository lookup failed.
    #[error(transparent)]
    Fetch(#[from] crate::repositories::FetchError),

    /// Page rendering errors.
    #[error(transparent)]
    Render(#[from] crate::render::RenderError),

    /// Failed to read from the assets directory.
    #[error("Failed to read asset '{path}': {source}")]
    Assets {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output.
    #[error("Failed to write '{path}': {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
