#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod builder;
pub mod config;
pub mod render;
pub mod repositories;
pub mod summary;

pub use builder::{BuildConfig, BuildError, Builder};
pub use config::{ConfigError, Profile, SiteConfig};
pub use render::{create_handlebars_registry, PageRenderer, RenderError};
pub use repositories::{
    build_client, fetch_repositories, FetchError, RepositoryRecord, UpstreamRepository,
};
pub use summary::BuildSummary;
