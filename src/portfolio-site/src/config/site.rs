//! Site configuration loading and validation.

use crate::config::{ConfigError, Profile};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Parsed contents of the site config file.
///
/// Loaded once per build and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Account that owns every listed repository.
    pub owner: String,

    /// Repository identifiers to show, in display order.
    #[serde(default)]
    pub projects: Vec<String>,

    /// Target of the "See more..." link (defaults to the owner's GitHub profile).
    #[serde(default)]
    pub more_url: Option<String>,

    /// Directory whose contents are copied into the output as-is.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    /// Page profile information.
    pub profile: Profile,
}

impl SiteConfig {
    /// Loads and validates a site config file.
    ///
    /// A relative `assets-dir` is resolved against the directory holding the
    /// config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, not valid
    /// TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading site config");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut config = Self::parse(&content, path)?;
        if let Some(assets_dir) = &config.assets_dir {
            if assets_dir.is_relative() {
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                config.assets_dir = Some(base.join(assets_dir));
            }
        }

        if let Some(assets_dir) = &config.assets_dir {
            if !assets_dir.is_dir() {
                return Err(ConfigError::MissingAssetsDir {
                    path: assets_dir.display().to_string(),
                });
            }
        }

        Ok(config)
    }

    /// Parses and validates site config content.
    ///
    /// `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the content is not valid TOML or fails validation.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Returns the "See more..." link target.
    #[must_use]
    pub fn more_url(&self) -> String {
        self.more_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{}", self.owner))
    }

    /// Validates the config.
    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let fail = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if self.owner.trim().is_empty() {
            return Err(fail("owner must not be empty".to_string()));
        }

        validate_identifier(&self.owner)
            .map_err(|message| fail(format!("owner {message}: {}", self.owner)))?;

        if self.profile.name.trim().is_empty() {
            return Err(fail("profile.name must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            validate_identifier(project)
                .map_err(|message| fail(format!("project {message}: {project}")))?;
            if !seen.insert(project.as_str()) {
                return Err(fail(format!("duplicate project: {project}")));
            }
        }

        if let Some(more_url) = &self.more_url {
            if Url::parse(more_url).is_err() {
                return Err(fail(format!("more-url is not a valid URL: {more_url}")));
            }
        }

        Ok(())
    }
}

/// Checks that an owner or project name is a single GitHub path segment.
///
/// GitHub names use only ASCII letters, digits, `.`, `_` and `-`.
fn validate_identifier(identifier: &str) -> Result<(), &'static str> {
    if identifier.is_empty() {
        return Err("must not be empty");
    }
    if identifier == "." || identifier == ".." {
        return Err("must not be '.' or '..'");
    }
    if !identifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err("may only contain ASCII letters, digits, '.', '_' and '-'");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = r#"
owner = "octocat"
projects = ["proj-one", "proj-two"]

[profile]
name = "Mona Lisa"
paragraphs = ["Hello there."]
"#;

    fn parse(content: &str) -> Result<SiteConfig, ConfigError> {
        SiteConfig::parse(content, Path::new("site.toml"))
    }

    #[test]
    fn test_parse_valid_config() {
        let config = parse(VALID).unwrap();

        assert_eq!(config.owner, "octocat");
        assert_eq!(config.projects, vec!["proj-one", "proj-two"]);
        assert_eq!(config.more_url(), "https://github.com/octocat");
        assert_eq!(config.profile.title(), "Mona Lisa | Homepage");
        assert_eq!(config.profile.description(), "Personal Website for Mona Lisa");
        assert_eq!(config.profile.headshot_alt(), "Headshot of Mona Lisa");
    }

    #[test]
    fn test_projects_default_to_empty() {
        let config = parse(
            r#"
owner = "octocat"

[profile]
name = "Mona Lisa"
"#,
        )
        .unwrap();

        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_validation_duplicate_project() {
        let result = parse(
            r#"
owner = "octocat"
projects = ["same", "other", "same"]

[profile]
name = "Mona Lisa"
"#,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_validation_project_with_slash() {
        let result = parse(
            r#"
owner = "octocat"
projects = ["someone/else"]

[profile]
name = "Mona Lisa"
"#,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_validation_rejects_path_changing_projects() {
        for project in ["..", ".", "repo?page=2", "repo#readme", "has space", "caf\u{e9}"] {
            let result = parse(&format!(
                r#"
owner = "octocat"
projects = ["{project}"]

[profile]
name = "Mona Lisa"
"#
            ));
            assert!(
                matches!(result, Err(ConfigError::ValidationError { .. })),
                "{project} should be rejected"
            );
        }
    }

    #[test]
    fn test_validation_accepts_github_names() {
        let config = parse(
            r#"
owner = "octo-cat"
projects = ["Hello-World", "my_repo.rs", ".github"]

[profile]
name = "Mona Lisa"
"#,
        )
        .unwrap();

        assert_eq!(config.projects.len(), 3);
    }

    #[test]
    fn test_validation_invalid_more_url() {
        let result = parse(
            r#"
owner = "octocat"
more-url = "not-a-url"

[profile]
name = "Mona Lisa"
"#,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_validation_empty_owner() {
        let result = parse(
            r#"
owner = " "

[profile]
name = "Mona Lisa"
"#,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse("owner = ");
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();

        let result = SiteConfig::load(&temp.path().join("site.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn test_load_resolves_relative_assets_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::create_dir(temp.path().join("public")).unwrap();
        fs::write(&path, format!("assets-dir = \"public\"\n{VALID}")).unwrap();

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.assets_dir, Some(temp.path().join("public")));
    }

    #[test]
    fn test_load_missing_assets_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, format!("assets-dir = \"nope\"\n{VALID}")).unwrap();

        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::MissingAssetsDir { .. })));
    }

    #[test]
    fn test_load_assets_dir_is_a_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(temp.path().join("public"), "not a directory").unwrap();
        fs::write(&path, format!("assets-dir = \"public\"\n{VALID}")).unwrap();

        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::MissingAssetsDir { .. })));
    }
}
