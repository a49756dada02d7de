use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;

use super::{http_client, RepositorySource};
use crate::constants::REPOS_PER_PAGE;
use crate::error::FetchError;
use crate::models::{GitHubOverview, RepoSummary, UserSummary};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub REST client for public profile data
pub struct GitHubClient {
    base_url: String,
    client: reqwest::Client,
}

impl GitHubClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: http_client()?,
        })
    }

    fn user_url(&self, handle: &str) -> String {
        format!("{}/users/{}", self.base_url, handle)
    }

    fn repos_url(&self, handle: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, handle, REPOS_PER_PAGE
        )
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn fetch_overview(&self, handle: &str) -> Result<GitHubOverview, FetchError> {
        let user_url = self.user_url(handle);
        let repos_url = self.repos_url(handle);
        tracing::debug!(%user_url, %repos_url, "fetching GitHub overview");

        // Fire both, await both
        let (user_response, repos_response) = tokio::join!(
            self.client.get(&user_url).header(ACCEPT, GITHUB_ACCEPT).send(),
            self.client.get(&repos_url).header(ACCEPT, GITHUB_ACCEPT).send(),
        );
        let user_response = user_response.map_err(|e| FetchError::Network(e.to_string()))?;
        let repos_response = repos_response.map_err(|e| FetchError::Network(e.to_string()))?;

        let (user_status, repos_status) = (user_response.status(), repos_response.status());
        if !user_status.is_success() || !repos_status.is_success() {
            return Err(FetchError::Upstream(format!(
                "Failed to fetch GitHub data (profile: {}, repositories: {})",
                user_status, repos_status
            )));
        }

        let (user, repos) = tokio::join!(
            user_response.json::<UserSummary>(),
            repos_response.json::<Vec<RepoSummary>>(),
        );

        Ok(GitHubOverview::new(user?, repos?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server;

    #[test]
    fn test_urls() {
        let client = GitHubClient::new("https://api.github.com/").unwrap();
        assert_eq!(
            client.user_url("thirduserrr"),
            "https://api.github.com/users/thirduserrr"
        );
        assert_eq!(
            client.repos_url("thirduserrr"),
            "https://api.github.com/users/thirduserrr/repos?sort=updated&per_page=3"
        );
    }

    const USER_BODY: &str = r#"{"login":"thirduserrr","name":"Wan","followers":12,"following":2,"public_repos":9,"avatar_url":"https://avatars.githubusercontent.com/u/1"}"#;
    const REPOS_BODY: &str = r#"[
        {"id":1,"name":"biolink","description":"profile page","html_url":"https://github.com/thirduserrr/biolink","stargazers_count":3,"forks_count":1,"language":"Rust","updated_at":"2024-05-01T12:00:00Z"},
        {"id":2,"name":"dotfiles","description":null,"html_url":"https://github.com/thirduserrr/dotfiles","stargazers_count":0,"forks_count":0,"language":null,"updated_at":"2024-04-01T12:00:00Z"}
    ]"#;
    const USER_PATH: &str = "/users/thirduserrr";
    const REPOS_PATH: &str = "/users/thirduserrr/repos?sort=updated&per_page=3";

    #[tokio::test]
    async fn test_fetch_overview_success() {
        let base = test_server::serve(vec![
            (USER_PATH, 200, USER_BODY),
            (REPOS_PATH, 200, REPOS_BODY),
        ])
        .await;
        let client = GitHubClient::new(base).unwrap();

        let overview = client.fetch_overview("thirduserrr").await.unwrap();
        assert_eq!(overview.user.display_label(), "Wan");
        assert_eq!(overview.repos.len(), 2);
        assert_eq!(overview.repos[0].name, "biolink");
    }

    #[tokio::test]
    async fn test_either_failure_fails_whole_fetch() {
        let base = test_server::serve(vec![
            (USER_PATH, 200, USER_BODY),
            (REPOS_PATH, 403, r#"{"message":"API rate limit exceeded"}"#),
        ])
        .await;
        let client = GitHubClient::new(base).unwrap();
        let err = client.fetch_overview("thirduserrr").await.unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));

        let base = test_server::serve(vec![(REPOS_PATH, 200, REPOS_BODY)]).await;
        let client = GitHubClient::new(base).unwrap();
        let err = client.fetch_overview("thirduserrr").await.unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_upstream_failure() {
        let base = test_server::serve(vec![
            (USER_PATH, 200, USER_BODY),
            (REPOS_PATH, 200, r#"{"not":"a list"}"#),
        ])
        .await;
        let client = GitHubClient::new(base).unwrap();
        let err = client.fetch_overview("thirduserrr").await.unwrap_err();
        assert!(matches!(err, FetchError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_failure() {
        let client = GitHubClient::new(test_server::closed_port().await).unwrap();
        let err = client.fetch_overview("thirduserrr").await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_live_overview() {
        let client = GitHubClient::new(crate::constants::GITHUB_API_BASE).unwrap();
        let overview = client.fetch_overview("octocat").await.unwrap();
        assert_eq!(overview.user.login, "octocat");
        assert!(overview.repos.len() <= REPOS_PER_PAGE as usize);
    }
}
