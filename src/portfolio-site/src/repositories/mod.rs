//! Repository metadata fetching from the GitHub REST API.
//!
//! Looks up a fixed, ordered list of repositories under one owner and
//! normalizes each response into a [`RepositoryRecord`].

mod error;
mod record;

pub use error::FetchError;
pub use record::{RepositoryRecord, UpstreamRepository};

use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, Instrument};

/// Builds the GitHub client used for repository lookups.
///
/// Retries are disabled: a failed lookup must surface immediately.
///
/// # Arguments
///
/// * `base_uri` - API base address, `None` for `https://api.github.com`
/// * `token` - Optional personal access token
///
/// # Errors
///
/// Returns an error if the client cannot be constructed (e.g. invalid base URI).
pub fn build_client(base_uri: Option<&str>, token: Option<&str>) -> octocrab::Result<Octocrab> {
    let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);
    if let Some(base_uri) = base_uri {
        builder = builder.base_uri(base_uri)?;
    }
    if let Some(token) = token {
        builder = builder.personal_token(token.to_string());
    }
    builder.build()
}

/// Fetches one record per project, in order.
///
/// Requests are issued one at a time; each lookup completes before the next
/// starts. An empty `projects` list makes no requests.
///
/// # Arguments
///
/// * `octocrab` - GitHub client
/// * `owner` - Account that owns every project
/// * `projects` - Repository identifiers, in display order
///
/// # Returns
///
/// One [`RepositoryRecord`] per identifier, in the same order.
///
/// # Errors
///
/// Returns [`FetchError`] for the first lookup that fails. No partial result
/// is returned.
pub async fn fetch_repositories(
    octocrab: &Octocrab,
    owner: &str,
    projects: &[String],
) -> Result<Vec<RepositoryRecord>, FetchError> {
    let span = info_span!("fetch", owner, count = projects.len());

    async {
        info!("Fetching repositories");

        let mut records = Vec::with_capacity(projects.len());
        for (index, project) in projects.iter().enumerate() {
            let record = fetch_repository(octocrab, owner, project)
                .instrument(info_span!("repository", name = %project, position = index + 1))
                .await?;
            records.push(record);
        }

        info!(count = records.len(), "Fetch complete");
        Ok(records)
    }
    .instrument(span)
    .await
}

/// Looks up a single repository.
async fn fetch_repository(
    octocrab: &Octocrab,
    owner: &str,
    name: &str,
) -> Result<RepositoryRecord, FetchError> {
    let route = repository_route(owner, name);
    debug!(route = %route, "Requesting repository");

    let upstream: UpstreamRepository =
        octocrab
            .get(&route, None::<&()>)
            .await
            .map_err(|source| FetchError {
                repository: name.to_string(),
                source,
            })?;

    debug!(
        stars = upstream.stargazers_count,
        forks = upstream.forks_count,
        "Fetched repository"
    );
    Ok(upstream.into())
}

/// Builds the repository lookup route.
///
/// Format: `/repos/{owner}/{name}`
fn repository_route(owner: &str, name: &str) -> String {
    format!("/repos/{}/{}", owner, name)
}
