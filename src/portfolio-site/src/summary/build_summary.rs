//! Build summary.

use crate::repositories::RepositoryRecord;
use std::path::PathBuf;

/// Summary of a completed build.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    /// Account that owns the listed repositories.
    pub owner: String,

    /// Number of projects listed in the site config.
    pub projects_requested: usize,

    /// Number of repositories fetched.
    pub repositories_fetched: usize,

    /// Sum of stargazer counts across fetched repositories.
    pub total_stars: u64,

    /// Sum of fork counts across fetched repositories.
    pub total_forks: u64,

    /// Files written to the output directory.
    pub files_written: Vec<PathBuf>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl BuildSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(owner: &str, dry_run: bool) -> Self {
        Self {
            owner: owner.to_string(),
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with the fetched records.
    pub fn record_repositories(&mut self, repositories: &[RepositoryRecord]) {
        self.repositories_fetched += repositories.len();
        self.total_stars += repositories.iter().map(|r| r.stars).sum::<u64>();
        self.total_forks += repositories.iter().map(|r| r.forks).sum::<u64>();
    }

    /// Records a file written to the output directory.
    pub fn record_file(&mut self, path: PathBuf) {
        self.files_written.push(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, stars: u64, forks: u64) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            description: None,
            production_url: None,
            repository_url: format!("https://github.com/octocat/{name}"),
            stars,
            forks,
        }
    }

    #[test]
    fn can_record_repositories() {
        let mut summary = BuildSummary::new("octocat", false);

        summary.record_repositories(&[record("one", 3, 1), record("two", 10, 4)]);

        assert_eq!(summary.repositories_fetched, 2);
        assert_eq!(summary.total_stars, 13);
        assert_eq!(summary.total_forks, 5);
        assert!(!summary.dry_run);
    }
}
