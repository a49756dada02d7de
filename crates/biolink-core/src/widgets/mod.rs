//! Widget lifecycle plumbing shared by the presence and repository widgets.
//!
//! A widget owns its state and at most one background task. Mounting hands
//! out a fresh [`MountToken`]; every result the task produces is tagged with
//! it, and the widget drops results whose token is no longer current. The
//! task itself is aborted when its [`PollHandle`] is dropped.

pub mod presence;
pub mod repositories;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::error::FetchError;
use crate::models::{GitHubOverview, PresenceSnapshot};

pub use presence::PresenceWidget;
pub use repositories::RepositoryWidget;

/// What a widget currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState<T> {
    /// Nothing received yet
    Loading,
    Ready(T),
    /// Last request failed; the previous value is discarded
    Failed(FetchError),
}

impl<T> WidgetState<T> {
    /// Replace the state with a fetch outcome. Never merges.
    pub fn apply(&mut self, result: Result<T, FetchError>) {
        *self = match result {
            Ok(value) => WidgetState::Ready(value),
            Err(err) => WidgetState::Failed(err),
        };
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            WidgetState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            WidgetState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading)
    }
}

/// Identifies one mounted lifetime of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountToken(u64);

/// Generation counter deciding which results a widget still accepts
#[derive(Debug, Default)]
pub struct Lifecycle {
    generation: u64,
    mounted: bool,
}

impl Lifecycle {
    pub fn mount(&mut self) -> MountToken {
        self.generation = self.generation.wrapping_add(1);
        self.mounted = true;
        MountToken(self.generation)
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn accepts(&self, token: MountToken) -> bool {
        self.mounted && token.0 == self.generation
    }
}

/// Owns a background widget task; dropping it aborts the task
#[derive(Debug)]
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    pub(crate) fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Results flowing from widget tasks back to the owning UI loop
#[derive(Debug)]
pub enum WidgetEvent {
    Presence {
        token: MountToken,
        result: Result<PresenceSnapshot, FetchError>,
    },
    Repositories {
        token: MountToken,
        result: Result<GitHubOverview, FetchError>,
    },
}

pub type WidgetEventSender = UnboundedSender<WidgetEvent>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_tokens() {
        let mut lifecycle = Lifecycle::default();
        assert!(!lifecycle.is_mounted());

        let first = lifecycle.mount();
        assert!(lifecycle.accepts(first));

        lifecycle.unmount();
        assert!(!lifecycle.accepts(first));

        let second = lifecycle.mount();
        assert_ne!(first, second);
        assert!(!lifecycle.accepts(first));
        assert!(lifecycle.accepts(second));
    }

    #[test]
    fn test_widget_state_replaces() {
        let mut state: WidgetState<u32> = WidgetState::Loading;
        assert!(state.is_loading());

        state.apply(Ok(1));
        assert_eq!(state.ready(), Some(&1));

        state.apply(Err(FetchError::Network("offline".to_string())));
        assert!(state.ready().is_none());
        assert!(state.error().is_some_and(FetchError::is_network));

        state.apply(Ok(2));
        assert_eq!(state, WidgetState::Ready(2));
    }

    #[tokio::test]
    async fn test_poll_handle_aborts_on_drop() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = PollHandle::new(tokio::spawn(async move {
            let _tx = tx;
            std::future::pending::<()>().await;
        }));
        assert!(!handle.is_finished());
        drop(handle);
        // Aborting drops the task's future, and with it the sender
        assert!(rx.await.is_err());
    }
}
