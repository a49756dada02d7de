use serde::{Deserialize, Serialize};

/// Full presence payload for one user. Each poll replaces the previous
/// snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceSnapshot {
    #[serde(rename = "discord_user")]
    pub user: DiscordUser,
    #[serde(rename = "discord_status")]
    pub status: PresenceStatus,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub listening_to_spotify: bool,
    #[serde(default)]
    pub spotify: Option<NowPlaying>,
    #[serde(default, rename = "active_on_discord_web")]
    pub active_on_web: bool,
    #[serde(default, rename = "active_on_discord_desktop")]
    pub active_on_desktop: bool,
    #[serde(default, rename = "active_on_discord_mobile")]
    pub active_on_mobile: bool,
}

impl PresenceSnapshot {
    /// Activities shown in the widget, most recent first as delivered
    pub fn visible_activities(&self) -> &[Activity] {
        let end = self.activities.len().min(crate::constants::MAX_ACTIVITIES);
        &self.activities[..end]
    }

    /// The now-playing panel needs both the flag and the payload
    pub fn now_playing(&self) -> Option<&NowPlaying> {
        if self.listening_to_spotify {
            self.spotify.as_ref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl DiscordUser {
    pub fn display_label(&self) -> &str {
        [&self.global_name, &self.display_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Online status as reported by the presence service.
/// Values the service may add later decode to `Unknown` and render as offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PresenceStatus {
    Online,
    Idle,
    DoNotDisturb,
    Offline,
    Unknown(String),
}

impl From<String> for PresenceStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "online" => PresenceStatus::Online,
            "idle" => PresenceStatus::Idle,
            "dnd" => PresenceStatus::DoNotDisturb,
            "offline" => PresenceStatus::Offline,
            _ => PresenceStatus::Unknown(raw),
        }
    }
}

impl From<PresenceStatus> for String {
    fn from(status: PresenceStatus) -> Self {
        match status {
            PresenceStatus::Online => "online".to_string(),
            PresenceStatus::Idle => "idle".to_string(),
            PresenceStatus::DoNotDisturb => "dnd".to_string(),
            PresenceStatus::Offline => "offline".to_string(),
            PresenceStatus::Unknown(raw) => raw,
        }
    }
}

impl PresenceStatus {
    /// Collapse unrecognised values onto `Offline`
    pub fn normalized(&self) -> PresenceStatus {
        match self {
            PresenceStatus::Unknown(_) => PresenceStatus::Offline,
            other => other.clone(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.normalized() {
            PresenceStatus::Online => "Online",
            PresenceStatus::Idle => "Away",
            PresenceStatus::DoNotDisturb => "Do Not Disturb",
            _ => "Offline",
        }
    }
}

/// Activity type, carried on the wire as an integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ActivityKind {
    Playing,
    Streaming,
    Listening,
    Watching,
    Custom,
    Competing,
    Other(u32),
}

impl From<u32> for ActivityKind {
    fn from(code: u32) -> Self {
        match code {
            0 => ActivityKind::Playing,
            1 => ActivityKind::Streaming,
            2 => ActivityKind::Listening,
            3 => ActivityKind::Watching,
            4 => ActivityKind::Custom,
            5 => ActivityKind::Competing,
            other => ActivityKind::Other(other),
        }
    }
}

impl From<ActivityKind> for u32 {
    fn from(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Playing => 0,
            ActivityKind::Streaming => 1,
            ActivityKind::Listening => 2,
            ActivityKind::Watching => 3,
            ActivityKind::Custom => 4,
            ActivityKind::Competing => 5,
            ActivityKind::Other(code) => code,
        }
    }
}

impl ActivityKind {
    /// Verb shown in front of the activity name. Custom statuses have none.
    pub fn verb(&self) -> &'static str {
        match self {
            ActivityKind::Playing => "Playing",
            ActivityKind::Streaming => "Streaming",
            ActivityKind::Listening => "Listening to",
            ActivityKind::Watching => "Watching",
            ActivityKind::Custom => "",
            ActivityKind::Competing => "Competing in",
            ActivityKind::Other(_) => "Activity",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTimestamps {
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default)]
    pub end: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAssets {
    #[serde(default)]
    pub large_image: Option<String>,
    #[serde(default)]
    pub large_text: Option<String>,
    #[serde(default)]
    pub small_image: Option<String>,
    #[serde(default)]
    pub small_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub timestamps: Option<ActivityTimestamps>,
    #[serde(default)]
    pub assets: Option<ActivityAssets>,
    #[serde(default)]
    pub application_id: Option<String>,
}

impl Activity {
    /// "Playing Minecraft", or just the name for custom statuses
    pub fn headline(&self) -> String {
        let verb = self.kind.verb();
        if verb.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", verb, self.name)
        }
    }

    /// The state line is hidden for custom statuses
    pub fn state_line(&self) -> Option<&str> {
        match self.kind {
            ActivityKind::Custom => None,
            _ => self.state.as_deref(),
        }
    }

    /// Time since the activity started, e.g. "1h 5m" or "12m"
    pub fn elapsed_label(&self, now_ms: u64) -> Option<String> {
        let start = self.timestamps.as_ref()?.start?;
        Some(format_elapsed(now_ms.saturating_sub(start)))
    }
}

fn format_elapsed(diff_ms: u64) -> String {
    let minutes = diff_ms / 60_000;
    let hours = minutes / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTimestamps {
    pub start: u64,
    pub end: u64,
}

/// Track currently playing on the user's music client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    #[serde(default)]
    pub track_id: Option<String>,
    pub song: String,
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub album_art_url: Option<String>,
    pub timestamps: TrackTimestamps,
}

impl NowPlaying {
    /// Playback position as a ratio in [0, 1]
    pub fn progress(&self, now_ms: u64) -> f64 {
        let TrackTimestamps { start, end } = self.timestamps;
        if end <= start {
            return 0.0;
        }
        let played = now_ms.saturating_sub(start) as f64;
        (played / (end - start) as f64).clamp(0.0, 1.0)
    }
}
