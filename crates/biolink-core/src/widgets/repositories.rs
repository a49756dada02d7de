use std::sync::Arc;

use super::{Lifecycle, MountToken, PollHandle, WidgetEvent, WidgetEventSender, WidgetState};
use crate::api::RepositorySource;
use crate::error::FetchError;
use crate::models::GitHubOverview;

/// GitHub profile and recent repositories, fetched once per mount
pub struct RepositoryWidget {
    handle: String,
    lifecycle: Lifecycle,
    state: WidgetState<GitHubOverview>,
    fetch: Option<PollHandle>,
}

impl RepositoryWidget {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            lifecycle: Lifecycle::default(),
            state: WidgetState::Loading,
            fetch: None,
        }
    }

    pub fn mount(
        &mut self,
        source: Arc<dyn RepositorySource>,
        events: WidgetEventSender,
    ) -> MountToken {
        self.unmount();
        let token = self.lifecycle.mount();
        self.state = WidgetState::Loading;

        let handle = self.handle.clone();
        self.fetch = Some(PollHandle::new(tokio::spawn(async move {
            let result = source.fetch_overview(&handle).await;
            if let Err(err) = &result {
                tracing::warn!(%handle, error = %err, "GitHub fetch failed");
            }
            let _ = events.send(WidgetEvent::Repositories { token, result });
        })));
        tracing::debug!(handle = %self.handle, ?token, "repository widget mounted");
        token
    }

    pub fn unmount(&mut self) {
        self.fetch.take();
        self.lifecycle.unmount();
    }

    pub fn apply(&mut self, token: MountToken, result: Result<GitHubOverview, FetchError>) -> bool {
        if !self.lifecycle.accepts(token) {
            tracing::debug!(?token, "dropping stale GitHub result");
            return false;
        }
        self.state.apply(result);
        true
    }

    pub fn state(&self) -> &WidgetState<GitHubOverview> {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }
}

impl Drop for RepositoryWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RepoSummary, UserSummary};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::mpsc;

    struct FixedSource {
        calls: AtomicUsize,
        result: Result<GitHubOverview, FetchError>,
    }

    #[async_trait]
    impl RepositorySource for FixedSource {
        async fn fetch_overview(&self, _handle: &str) -> Result<GitHubOverview, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn overview() -> GitHubOverview {
        GitHubOverview::new(
            UserSummary {
                login: "thirduserrr".to_string(),
                name: None,
                followers: 10,
                following: 1,
                public_repos: 3,
                avatar_url: String::new(),
            },
            vec![RepoSummary {
                id: 1,
                name: "biolink".to_string(),
                description: Some("profile page".to_string()),
                html_url: "https://github.com/thirduserrr/biolink".to_string(),
                stargazers_count: 4,
                forks_count: 0,
                language: Some("Rust".to_string()),
                updated_at: "2024-05-01T12:00:00Z".to_string(),
            }],
        )
    }

    async fn mount_and_settle(
        result: Result<GitHubOverview, FetchError>,
    ) -> (RepositoryWidget, Arc<FixedSource>) {
        let source = Arc::new(FixedSource {
            calls: AtomicUsize::new(0),
            result,
        });
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut widget = RepositoryWidget::new("thirduserrr");
        widget.mount(source.clone(), tx);

        if let Some(WidgetEvent::Repositories { token, result }) = rx.recv().await {
            assert!(widget.apply(token, result));
        }
        (widget, source)
    }

    #[tokio::test]
    async fn test_success_renders_overview() {
        let (widget, source) = mount_and_settle(Ok(overview())).await;
        let ready = widget.state().ready().unwrap();
        assert_eq!(ready.user.followers, 10);
        assert_eq!(ready.repos.len(), 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_single_error_state() {
        let err = FetchError::Upstream("Failed to fetch GitHub data".to_string());
        let (widget, _) = mount_and_settle(Err(err.clone())).await;
        assert!(widget.state().ready().is_none());
        assert_eq!(widget.state().error(), Some(&err));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_once_per_mount() {
        let (widget, source) = mount_and_settle(Ok(overview())).await;
        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(widget.is_mounted());
    }

    #[tokio::test]
    async fn test_result_after_unmount_ignored() {
        let source = Arc::new(FixedSource {
            calls: AtomicUsize::new(0),
            result: Ok(overview()),
        });
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut widget = RepositoryWidget::new("thirduserrr");
        let token = widget.mount(source, tx);
        widget.unmount();

        assert!(!widget.apply(token, Ok(overview())));
        assert!(widget.state().is_loading());
    }
}
