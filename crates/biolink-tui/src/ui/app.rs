use std::sync::Arc;

use anyhow::Result;
use biolink_core::api::{GitHubClient, LanyardClient, PresenceSource, RepositorySource};
use biolink_core::{
    PresenceWidget, ProfileConfig, RepositoryWidget, ThemeMode, ThemeState, Typewriter,
    WidgetEvent, WidgetEventSender,
};
use tokio::time::Instant;

use crate::ui::music::MusicPlayer;
use crate::ui::notifications::Notification;
use crate::ui::services::{AnimationClock, NotificationManager};
use crate::ui::theme::{self, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Splash screen shown before the profile
    Entry,
    Profile,
}

/// Network sources handed to the widgets on every mount
#[derive(Clone)]
pub struct Sources {
    pub presence: Arc<dyn PresenceSource>,
    pub repositories: Arc<dyn RepositorySource>,
}

impl Sources {
    pub fn from_config(profile: &ProfileConfig) -> Result<Self> {
        Ok(Self {
            presence: Arc::new(LanyardClient::new(profile.presence_api_base.as_str())?),
            repositories: Arc::new(GitHubClient::new(profile.github_api_base.as_str())?),
        })
    }
}

pub struct App {
    pub running: bool,
    /// First Ctrl+C arms this; a second one quits
    pub pending_quit: bool,
    pub view: View,
    pub profile: ProfileConfig,

    pub presence: PresenceWidget,
    pub repositories: RepositoryWidget,
    pub typewriter: Typewriter,
    /// When the typewriter advances next; `None` while off screen
    typewriter_deadline: Option<Instant>,

    /// First visible row of the profile card
    pub scroll_offset: usize,
    /// Set by the profile view on every draw
    pub max_scroll_offset: usize,

    theme: ThemeState,
    music: MusicPlayer,
    animation_clock: AnimationClock,
    notification_manager: NotificationManager,

    sources: Sources,
    widget_tx: WidgetEventSender,
}

impl App {
    pub fn new(
        profile: ProfileConfig,
        theme: ThemeState,
        music: MusicPlayer,
        sources: Sources,
        widget_tx: WidgetEventSender,
    ) -> Self {
        let presence = PresenceWidget::new(profile.discord_user_id.clone(), profile.poll_interval());
        let repositories = RepositoryWidget::new(profile.github_handle.clone());
        let typewriter = Typewriter::new(profile.phrases.clone(), profile.typewriter);

        let mut notification_manager = NotificationManager::new();
        if let Some(reason) = music.failure() {
            notification_manager.notify(Notification::warning(format!(
                "Music unavailable: {}",
                reason
            )));
        }

        Self {
            running: true,
            pending_quit: false,
            view: View::Entry,
            profile,
            presence,
            repositories,
            typewriter,
            typewriter_deadline: None,
            scroll_offset: 0,
            max_scroll_offset: 0,
            theme,
            music,
            animation_clock: AnimationClock::new(),
            notification_manager,
            sources,
            widget_tx,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // ===== View transitions =====

    /// Leave the entry screen: mount both widgets, restart the typewriter,
    /// start the music
    pub fn enter(&mut self) {
        if self.view == View::Profile {
            return;
        }
        self.view = View::Profile;
        self.scroll_offset = 0;

        self.presence
            .mount(self.sources.presence.clone(), self.widget_tx.clone());
        self.repositories
            .mount(self.sources.repositories.clone(), self.widget_tx.clone());

        self.typewriter.reset();
        self.schedule_typewriter(Instant::now());

        self.music.play();
        tracing::info!("entered profile");
    }

    /// Back to the entry screen. Widget timers stop with the unmount.
    pub fn leave(&mut self) {
        if self.view == View::Entry {
            return;
        }
        self.view = View::Entry;

        self.presence.unmount();
        self.repositories.unmount();
        self.typewriter_deadline = None;
        self.music.pause();
        tracing::info!("returned to entry screen");
    }

    // ===== Scrolling =====

    /// Scroll up by the given amount, clamping to valid range
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self
            .scroll_offset
            .min(self.max_scroll_offset)
            .saturating_sub(amount);
    }

    /// Scroll down by the given amount, clamping to valid range
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(amount)
            .min(self.max_scroll_offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll_offset;
    }

    // ===== Widget results =====

    pub fn handle_widget_event(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Presence { token, result } => {
                self.presence.apply(token, result);
            }
            WidgetEvent::Repositories { token, result } => {
                self.repositories.apply(token, result);
            }
        }
    }

    // ===== Typewriter =====

    pub fn typewriter_deadline(&self) -> Option<Instant> {
        self.typewriter_deadline
    }

    /// Called when the deadline passes: one step, then the next delay
    pub fn advance_typewriter(&mut self) {
        if self.typewriter_deadline.is_none() {
            return;
        }
        self.typewriter.advance();
        self.schedule_typewriter(Instant::now());
    }

    fn schedule_typewriter(&mut self, from: Instant) {
        self.typewriter_deadline = self.typewriter.next_delay().map(|delay| from + delay);
    }

    // ===== Theme =====

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn palette(&self) -> &'static Palette {
        theme::palette(self.theme.mode())
    }

    pub fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(mode) => {
                let label = if mode.is_dark() { "Dark theme" } else { "Light theme" };
                self.notify(Notification::success(label));
            }
            Err(e) => {
                tracing::warn!(error = %e, "theme preference not saved");
                self.notify(Notification::warning(format!("Theme not saved: {}", e)));
            }
        }
    }

    // ===== Music =====

    pub fn music(&self) -> &MusicPlayer {
        &self.music
    }

    pub fn music_mut(&mut self) -> &mut MusicPlayer {
        &mut self.music
    }

    // ===== Animation / notifications =====

    pub fn tick(&mut self) {
        self.animation_clock.tick();
        self.notification_manager.tick();
    }

    pub fn animation(&self) -> &AnimationClock {
        &self.animation_clock
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification_manager.notify(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notification_manager.current()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification_manager.dismiss();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use biolink_core::models::{
        DiscordUser, GitHubOverview, PresenceSnapshot, PresenceStatus, RepoSummary, UserSummary,
    };
    use biolink_core::{FetchError, MemoryStore};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    pub struct FakeSource {
        pub presence: Result<PresenceSnapshot, FetchError>,
        pub overview: Result<GitHubOverview, FetchError>,
    }

    #[async_trait]
    impl PresenceSource for FakeSource {
        async fn fetch_presence(&self, _user_id: &str) -> Result<PresenceSnapshot, FetchError> {
            self.presence.clone()
        }
    }

    #[async_trait]
    impl RepositorySource for FakeSource {
        async fn fetch_overview(&self, _handle: &str) -> Result<GitHubOverview, FetchError> {
            self.overview.clone()
        }
    }

    pub fn snapshot() -> PresenceSnapshot {
        PresenceSnapshot {
            user: DiscordUser {
                id: "1190143245678805106".to_string(),
                username: "wan".to_string(),
                discriminator: "0".to_string(),
                avatar: None,
                global_name: Some("Wan".to_string()),
                display_name: None,
            },
            status: PresenceStatus::DoNotDisturb,
            activities: Vec::new(),
            listening_to_spotify: false,
            spotify: None,
            active_on_web: false,
            active_on_desktop: true,
            active_on_mobile: false,
        }
    }

    pub fn overview() -> GitHubOverview {
        GitHubOverview::new(
            UserSummary {
                login: "thirduserrr".to_string(),
                name: None,
                followers: 12,
                following: 3,
                public_repos: 7,
                avatar_url: String::new(),
            },
            vec![RepoSummary {
                id: 1,
                name: "fast-api-kit".to_string(),
                description: Some("Helpers for FastAPI services".to_string()),
                html_url: "https://github.com/thirduserrr/fast-api-kit".to_string(),
                stargazers_count: 5,
                forks_count: 2,
                language: Some("Python".to_string()),
                updated_at: "2024-05-01T12:00:00Z".to_string(),
            }],
        )
    }

    pub fn app_with(source: FakeSource) -> (App, UnboundedReceiver<WidgetEvent>) {
        app_with_music(source, MusicPlayer::silent())
    }

    pub fn app_with_music(
        source: FakeSource,
        music: MusicPlayer,
    ) -> (App, UnboundedReceiver<WidgetEvent>) {
        let source = Arc::new(source);
        let sources = Sources {
            presence: source.clone(),
            repositories: source,
        };
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(
            ProfileConfig::default(),
            ThemeState::load(Box::new(MemoryStore::new())),
            music,
            sources,
            tx,
        );
        (app, rx)
    }

    pub fn app() -> (App, UnboundedReceiver<WidgetEvent>) {
        app_with(FakeSource {
            presence: Ok(snapshot()),
            overview: Ok(overview()),
        })
    }

    /// Deliver the two results produced by one mount
    pub async fn settle(app: &mut App, rx: &mut UnboundedReceiver<WidgetEvent>) {
        for _ in 0..2 {
            if let Some(event) = rx.recv().await {
                app.handle_widget_event(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::ui::music::PlaybackState;
    use crate::ui::notifications::NotificationLevel;
    use biolink_core::models::PresenceStatus;
    use biolink_core::{FetchError, KeyValueStore, StorageError};
    use std::time::Duration;

    #[tokio::test]
    async fn test_enter_mounts_widgets_and_starts_effects() {
        let (mut app, mut rx) = app();
        assert_eq!(app.view, View::Entry);
        assert!(app.typewriter_deadline().is_none());

        app.enter();
        assert_eq!(app.view, View::Profile);
        assert!(app.presence.is_mounted());
        assert!(app.repositories.is_mounted());
        assert!(app.typewriter_deadline().is_some());
        assert_eq!(app.music().state(), PlaybackState::Playing);

        settle(&mut app, &mut rx).await;
        assert_eq!(
            app.presence.state().ready().unwrap().status,
            PresenceStatus::DoNotDisturb
        );
        assert_eq!(app.repositories.state().ready().unwrap().user.followers, 12);
    }

    #[tokio::test]
    async fn test_leave_unmounts_and_drops_late_results() {
        let (mut app, mut rx) = app();
        app.enter();
        app.leave();

        assert_eq!(app.view, View::Entry);
        assert!(!app.presence.is_mounted());
        assert!(!app.repositories.is_mounted());
        assert!(app.typewriter_deadline().is_none());
        assert_eq!(app.music().state(), PlaybackState::Paused);

        // Anything already queued from the old mount is ignored
        while let Ok(event) = rx.try_recv() {
            app.handle_widget_event(event);
        }
        assert!(app.presence.state().is_loading());
        assert!(app.repositories.state().is_loading());
    }

    #[tokio::test]
    async fn test_failed_sources_show_errors() {
        let (mut app, mut rx) = app_with(FakeSource {
            presence: Err(FetchError::Network("connection refused".to_string())),
            overview: Err(FetchError::Upstream("HTTP 404".to_string())),
        });
        app.enter();
        settle(&mut app, &mut rx).await;

        assert!(app.presence.state().error().is_some_and(FetchError::is_network));
        assert!(app.repositories.state().error().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typewriter_follows_deadlines() {
        let (mut app, _rx) = app();
        app.enter();

        let first = app.typewriter_deadline().unwrap();
        assert_eq!(first - Instant::now(), Duration::from_millis(120));

        tokio::time::sleep_until(first).await;
        app.advance_typewriter();
        assert_eq!(app.typewriter.text(), "y");

        // Re-entering restarts from the first phrase
        app.advance_typewriter();
        app.leave();
        app.advance_typewriter();
        assert_eq!(app.typewriter.text(), "yo");
        app.enter();
        assert_eq!(app.typewriter.text(), "");
    }

    #[tokio::test]
    async fn test_toggle_theme_notifies() {
        let (mut app, _rx) = app();
        assert_eq!(app.theme_mode(), ThemeMode::Dark);

        app.toggle_theme();
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        let notice = app.current_notification().unwrap();
        assert_eq!(notice.message, "Light theme");
        assert_eq!(notice.level, NotificationLevel::Success);
        assert_eq!(app.palette(), &theme::LIGHT);
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("read-only".to_string()))
        }
    }

    #[tokio::test]
    async fn test_theme_write_failure_is_not_fatal() {
        let (mut app, _rx) = app();
        app.theme = ThemeState::load(Box::new(ReadOnlyStore));

        app.toggle_theme();
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        assert!(app
            .current_notification()
            .unwrap()
            .message
            .starts_with("Theme not saved"));
    }

    #[tokio::test]
    async fn test_scroll_clamped_to_rendered_height() {
        let (mut app, _rx) = app();
        app.enter();

        // Nothing drawn yet, so there is nowhere to scroll
        app.scroll_down(5);
        assert_eq!(app.scroll_offset, 0);

        app.max_scroll_offset = 8;
        app.scroll_down(5);
        assert_eq!(app.scroll_offset, 5);
        app.scroll_down(5);
        assert_eq!(app.scroll_offset, 8);
        app.scroll_up(3);
        assert_eq!(app.scroll_offset, 5);

        // Content shrank since the last draw
        app.max_scroll_offset = 2;
        app.scroll_up(1);
        assert_eq!(app.scroll_offset, 1);

        app.scroll_to_bottom();
        assert_eq!(app.scroll_offset, 2);
        app.scroll_to_top();
        assert_eq!(app.scroll_offset, 0);
    }

    #[tokio::test]
    async fn test_reentering_resets_scroll() {
        let (mut app, _rx) = app();
        app.enter();
        app.max_scroll_offset = 10;
        app.scroll_to_bottom();
        app.leave();
        app.enter();
        assert_eq!(app.scroll_offset, 0);
    }

    #[tokio::test]
    async fn test_music_failure_is_announced() {
        let dir = tempfile::TempDir::new().unwrap();
        let music = MusicPlayer::open(&dir.path().join("missing.mp3"));
        let (app, _rx) = app_with_music(
            FakeSource {
                presence: Ok(snapshot()),
                overview: Ok(overview()),
            },
            music,
        );

        let notice = app.current_notification().unwrap();
        assert!(notice.message.starts_with("Music unavailable: Failed to open audio file"));
        assert!(!app.music().is_visible());
    }

    #[tokio::test]
    async fn test_disabled_music_is_silent() {
        let (app, _rx) = app_with_music(
            FakeSource {
                presence: Ok(snapshot()),
                overview: Ok(overview()),
            },
            MusicPlayer::disabled("no track configured"),
        );
        assert!(app.current_notification().is_none());
    }
}
