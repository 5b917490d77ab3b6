//! Repository records shown on the page.

use serde::{Deserialize, Serialize};

/// The subset of a GitHub `GET /repos/{owner}/{repo}` response the page uses.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamRepository {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

/// A normalized repository record, passed to the page renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    /// Repository name.
    pub name: String,

    /// Short description, if the repository has one.
    pub description: Option<String>,

    /// Homepage link, if the repository has one.
    pub production_url: Option<String>,

    /// Link to the repository on GitHub.
    pub repository_url: String,

    /// Stargazer count at fetch time.
    pub stars: u64,

    /// Fork count at fetch time.
    pub forks: u64,
}

impl From<UpstreamRepository> for RepositoryRecord {
    fn from(upstream: UpstreamRepository) -> Self {
        Self {
            name: upstream.name,
            description: upstream.description,
            production_url: upstream.homepage,
            repository_url: upstream.html_url,
            stars: upstream.stargazers_count,
            forks: upstream.forks_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_mapping() {
        let upstream: UpstreamRepository = serde_json::from_value(json!({
            "name": "a",
            "description": "d",
            "homepage": "h",
            "html_url": "r",
            "stargazers_count": 3,
            "forks_count": 1
        }))
        .unwrap();

        let record = RepositoryRecord::from(upstream);

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "a",
                "description": "d",
                "productionUrl": "h",
                "repositoryUrl": "r",
                "stars": 3,
                "forks": 1
            })
        );
    }

    #[test]
    fn test_null_description_and_homepage() {
        let upstream: UpstreamRepository = serde_json::from_value(json!({
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "description": null,
            "homepage": null,
            "html_url": "https://github.com/octocat/Hello-World",
            "stargazers_count": 80,
            "forks_count": 9
        }))
        .unwrap();

        let record = RepositoryRecord::from(upstream);

        assert_eq!(record.description, None);
        assert_eq!(record.production_url, None);
        assert_eq!(record.stars, 80);
        assert_eq!(record.forks, 9);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = serde_json::from_value::<UpstreamRepository>(json!({
            "name": "a",
            "html_url": "r"
        }));

        assert!(result.is_err());
    }
}
