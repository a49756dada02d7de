//! Read-only HTTP sources behind the widgets.
//!
//! Each source is a trait so pollers can be driven by the real reqwest
//! clients or by in-memory fakes.

pub mod github;
pub mod lanyard;

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::constants::USER_AGENT;
use crate::error::FetchError;
use crate::models::{GitHubOverview, PresenceSnapshot};

pub use github::GitHubClient;
pub use lanyard::LanyardClient;

/// Upper bound on a single request, so a stalled poll never outlives its window
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[async_trait]
pub trait PresenceSource: Send + Sync {
    async fn fetch_presence(&self, user_id: &str) -> Result<PresenceSnapshot, FetchError>;
}

#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Profile and recent repositories; fails unless both requests succeed
    async fn fetch_overview(&self, handle: &str) -> Result<GitHubOverview, FetchError>;
}

pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}
