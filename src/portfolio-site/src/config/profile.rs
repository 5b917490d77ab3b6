//! Profile section of the site config.

use serde::Deserialize;

/// The `[profile]` table: who the page is about.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Profile {
    /// Display name, used as the page heading.
    pub name: String,

    /// Document title (defaults to "{name} | Homepage").
    #[serde(default)]
    pub title: Option<String>,

    /// Meta description (defaults to "Personal Website for {name}").
    #[serde(default)]
    pub description: Option<String>,

    /// Favicon href.
    #[serde(default)]
    pub icon: Option<String>,

    /// Headshot image src.
    #[serde(default)]
    pub headshot: Option<String>,

    /// Headshot alt text (defaults to "Headshot of {name}").
    #[serde(default)]
    pub headshot_alt: Option<String>,

    /// Bio paragraphs, rendered in order.
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl Profile {
    /// Returns the document title.
    #[must_use]
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} | Homepage", self.name))
    }

    /// Returns the meta description.
    #[must_use]
    pub fn description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("Personal Website for {}", self.name))
    }

    /// Returns the headshot alt text.
    #[must_use]
    pub fn headshot_alt(&self) -> String {
        self.headshot_alt
            .clone()
            .unwrap_or_else(|| format!("Headshot of {}", self.name))
    }
}
