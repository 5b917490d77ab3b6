//! Page renderer.

use crate::config::SiteConfig;
use crate::repositories::RepositoryRecord;
use handlebars::{handlebars_helper, Handlebars};
use serde_json::{json, Value};
use url::Url;

const INDEX_TEMPLATE: &str = include_str!("templates/index.hbs");
const CARD_PARTIAL: &str = include_str!("templates/card.hbs");
const STYLESHEET: &str = include_str!("templates/styles.css");

/// Creates a configured Handlebars registry with the page templates.
///
/// The registry is configured with:
/// - HTML escaping (the default)
/// - Strict mode (catches missing variables)
/// - `host` helper that shortens a URL to its host name
///
/// # Errors
///
/// Returns an error if an embedded template fails to parse.
pub fn create_handlebars_registry() -> Result<Handlebars<'static>, super::RenderError> {
    let mut hbs = Handlebars::new();

    hbs.set_strict_mode(true);
    hbs.register_helper("host", Box::new(host));

    hbs.register_template_string("index", INDEX_TEMPLATE)?;
    hbs.register_partial("card", CARD_PARTIAL)?;

    Ok(hbs)
}

// Usage: `{{host productionUrl}}`
handlebars_helper!(host: |link: str| host_label(link));

/// Returns the host of `link`, or `link` itself if it has none.
fn host_label(link: &str) -> String {
    Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(|name| name.trim_start_matches("www.").to_string()))
        .unwrap_or_else(|| link.to_string())
}

/// Renders the portfolio page and its data file.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Creates a new page renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to parse.
    pub fn new() -> Result<Self, super::RenderError> {
        Ok(Self {
            handlebars: create_handlebars_registry()?,
        })
    }

    /// Renders the page HTML.
    ///
    /// # Arguments
    ///
    /// * `config` - Site config supplying the profile and links
    /// * `repositories` - Records to show as cards, in display order
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_page(
        &self,
        config: &SiteConfig,
        repositories: &[RepositoryRecord],
    ) -> Result<String, super::RenderError> {
        let data = page_data(config, repositories);
        Ok(self.handlebars.render("index", &data)?)
    }

    /// Renders the records as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_data(
        &self,
        repositories: &[RepositoryRecord],
    ) -> Result<String, super::RenderError> {
        Ok(serde_json::to_string_pretty(repositories)?)
    }

    /// Returns the page stylesheet.
    #[must_use]
    pub fn stylesheet(&self) -> &'static str {
        STYLESHEET
    }
}

/// Builds the template context for the page.
fn page_data(config: &SiteConfig, repositories: &[RepositoryRecord]) -> Value {
    let profile = &config.profile;
    json!({
        "profile": {
            "name": profile.name,
            "title": profile.title(),
            "description": profile.description(),
            "icon": profile.icon,
            "headshot": profile.headshot,
            "headshotAlt": profile.headshot_alt(),
            "paragraphs": profile.paragraphs
        },
        "repositories": repositories,
        "moreUrl": config.more_url()
    })
}
