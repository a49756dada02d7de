use serde::{Deserialize, Serialize};

/// Profile from `/users/{handle}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub avatar_url: String,
}

impl UserSummary {
    pub fn display_label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.login)
    }
}

/// One entry from `/users/{handle}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    pub updated_at: String,
}

impl RepoSummary {
    /// Parsed `updated_at`, if the service sent a valid RFC 3339 timestamp
    pub fn updated_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.updated_at)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}

/// Profile and recent repositories, only ever constructed when both
/// requests succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubOverview {
    pub user: UserSummary,
    pub repos: Vec<RepoSummary>,
}

impl GitHubOverview {
    pub fn new(user: UserSummary, repos: Vec<RepoSummary>) -> Self {
        Self { user, repos }
    }

    pub fn visible_repos(&self) -> &[RepoSummary] {
        let end = self.repos.len().min(crate::constants::MAX_REPOSITORIES);
        &self.repos[..end]
    }
}
