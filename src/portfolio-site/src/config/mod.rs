//! Site configuration loading.
//!
//! This module handles parsing the site TOML file: the repository owner, the
//! ordered list of projects to show, and the profile rendered at the top of
//! the page.

mod error;
mod profile;
mod site;

pub use error::ConfigError;
pub use profile::Profile;
pub use site::SiteConfig;
