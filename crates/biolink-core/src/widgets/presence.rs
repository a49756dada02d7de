use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use super::{Lifecycle, MountToken, PollHandle, WidgetEvent, WidgetEventSender, WidgetState};
use crate::api::PresenceSource;
use crate::error::FetchError;
use crate::models::PresenceSnapshot;

/// Live presence for one user, refreshed on a fixed interval while mounted
pub struct PresenceWidget {
    user_id: String,
    interval: Duration,
    lifecycle: Lifecycle,
    state: WidgetState<PresenceSnapshot>,
    poller: Option<PollHandle>,
}

impl PresenceWidget {
    pub fn new(user_id: impl Into<String>, interval: Duration) -> Self {
        Self {
            user_id: user_id.into(),
            interval,
            lifecycle: Lifecycle::default(),
            state: WidgetState::Loading,
            poller: None,
        }
    }

    /// Start polling. Mounting an already mounted widget restarts it.
    pub fn mount(
        &mut self,
        source: Arc<dyn PresenceSource>,
        events: WidgetEventSender,
    ) -> MountToken {
        self.unmount();
        let token = self.lifecycle.mount();
        self.state = WidgetState::Loading;
        self.poller = Some(spawn_poller(
            source,
            self.user_id.clone(),
            self.interval,
            token,
            events,
        ));
        tracing::debug!(user_id = %self.user_id, ?token, "presence widget mounted");
        token
    }

    /// Cancel the poll timer. Results still in flight are ignored.
    pub fn unmount(&mut self) {
        if self.poller.take().is_some() {
            tracing::debug!(user_id = %self.user_id, "presence widget unmounted");
        }
        self.lifecycle.unmount();
    }

    /// Apply a poll result. Returns false when the result belongs to a
    /// lifetime that has since ended.
    pub fn apply(&mut self, token: MountToken, result: Result<PresenceSnapshot, FetchError>) -> bool {
        if !self.lifecycle.accepts(token) {
            tracing::debug!(?token, "dropping stale presence result");
            return false;
        }
        self.state.apply(result);
        true
    }

    pub fn state(&self) -> &WidgetState<PresenceSnapshot> {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }
}

impl Drop for PresenceWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn spawn_poller(
    source: Arc<dyn PresenceSource>,
    user_id: String,
    interval: Duration,
    token: MountToken,
    events: WidgetEventSender,
) -> PollHandle {
    PollHandle::new(tokio::spawn(async move {
        // First tick fires immediately: fetch on mount, then once per interval
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let result = source.fetch_presence(&user_id).await;
            if let Err(err) = &result {
                tracing::warn!(%user_id, error = %err, "presence poll failed");
            }
            if events.send(WidgetEvent::Presence { token, result }).is_err() {
                // Receiver gone, nobody left to render
                break;
            }
        }
    }))
}
