//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse site config '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in the site config.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// Site config file not found.
    #[error("Site config not found: {path}")]
    MissingFile { path: String },

    /// The configured assets directory is missing or not a directory.
    #[error("Assets directory '{path}' does not exist or is not a directory")]
    MissingAssetsDir { path: String },

    /// The output directory would be written inside the assets directory.
    #[error("Output directory '{out_dir}' is inside assets directory '{assets_dir}'")]
    OutputInsideAssets { out_dir: String, assets_dir: String },
}
