//! Remote project source: a public repository listing from the GitHub API.
//!
//! Forked repositories are dropped, the rest are mapped into the Project
//! shape, sorted by stars (pushed timestamp breaking ties) and truncated to
//! the display cap. Unauthenticated requests are rate-limited by GitHub,
//! which is fine for a portfolio page.

use crate::domain::model::Project;
use crate::utils::error::{Result, SiteError};
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub pushed_at: String,
}

impl From<GithubRepo> for Project {
    fn from(repo: GithubRepo) -> Self {
        let mut tags: Vec<String> = Vec::new();
        if let Some(lang) = repo.language {
            if !lang.is_empty() {
                tags.push(lang);
            }
        }
        tags.extend(repo.topics.into_iter().filter(|t| !t.is_empty()).take(6));

        Project {
            name: repo.name,
            description: repo
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "Repository on GitHub.".to_string()),
            tags,
            live_url: repo.homepage.unwrap_or_default(),
            repo_url: repo.html_url,
            stars: repo.stargazers_count,
            pushed_at: repo.pushed_at,
        }
    }
}

/// Descending by stars, ties broken by descending pushed timestamp. The
/// timestamps are fixed-width ISO-8601, so plain string ordering is enough.
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(|a, b| {
        b.stars
            .cmp(&a.stars)
            .then_with(|| b.pushed_at.cmp(&a.pushed_at))
    });
}

pub struct GithubSource {
    client: Client,
    api_base: String,
}

impl GithubSource {
    pub fn new(api_base: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("folio-gen/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, api_base })
    }

    pub async fn fetch_projects(&self, username: &str, cap: usize) -> Result<Vec<Project>> {
        let mut url = Url::parse(&self.api_base)?;
        url.path_segments_mut()
            .map_err(|_| SiteError::ConfigError {
                message: format!("API base cannot carry a path: {}", self.api_base),
            })?
            .extend(["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", "100")
            .append_pair("sort", "pushed");

        tracing::debug!("fetching repositories for '{}' from {}", username, url);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SiteError::RemoteApiError {
                status: response.status().as_u16(),
            });
        }

        let repos: Vec<GithubRepo> = response.json().await?;
        tracing::debug!("received {} repositories", repos.len());

        let mut projects: Vec<Project> = repos
            .into_iter()
            .filter(|r| !r.fork)
            .map(Project::from)
            .collect();
        sort_projects(&mut projects);
        projects.truncate(cap);
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(stars: u64, pushed: &str) -> Project {
        Project {
            name: format!("{}-{}", stars, pushed),
            stars,
            pushed_at: pushed.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_stars_desc_then_pushed_desc() {
        let mut projects = vec![
            repo(3, "2024-01-01T00:00:00Z"),
            repo(5, "2023-06-01T00:00:00Z"),
            repo(5, "2024-03-01T00:00:00Z"),
        ];
        sort_projects(&mut projects);
        let order: Vec<(u64, &str)> = projects
            .iter()
            .map(|p| (p.stars, p.pushed_at.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (5, "2024-03-01T00:00:00Z"),
                (5, "2023-06-01T00:00:00Z"),
                (3, "2024-01-01T00:00:00Z"),
            ]
        );
    }

    #[test]
    fn test_repo_mapping_builds_tags_from_language_and_topics() {
        let repo = GithubRepo {
            name: "demo".to_string(),
            description: None,
            topics: (1..=8).map(|i| format!("t{}", i)).collect(),
            language: Some("Rust".to_string()),
            homepage: Some("demo.example.com".to_string()),
            html_url: "https://github.com/a/demo".to_string(),
            fork: false,
            stargazers_count: 2,
            pushed_at: "2024-01-01T00:00:00Z".to_string(),
        };
        let project = Project::from(repo);
        assert_eq!(project.tags.len(), 7); // language + six topics
        assert_eq!(project.tags[0], "Rust");
        assert_eq!(project.description, "Repository on GitHub.");
        assert_eq!(project.live_url, "demo.example.com");
        assert_eq!(project.repo_url, "https://github.com/a/demo");
    }
}
