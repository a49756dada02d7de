//! Application-wide constants
//!
//! Centralized location for endpoints, timings and display limits
//! that are used across multiple modules.

use std::time::Duration;

/// Presence aggregator (Lanyard) REST base
pub const PRESENCE_API_BASE: &str = "https://api.lanyard.rest/v1";

/// GitHub REST base
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// User-Agent sent with every outbound request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("biolink/", env!("CARGO_PKG_VERSION"));

/// Presence refresh period while the presence widget is mounted
pub const PRESENCE_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Page size requested from the repositories endpoint
pub const REPOS_PER_PAGE: u32 = 3;

// Display caps
pub const MAX_ACTIVITIES: usize = 2;
pub const MAX_REPOSITORIES: usize = 4;
pub const DESCRIPTION_MAX_LINES: usize = 2;

// Typewriter defaults (milliseconds)
pub const TYPEWRITER_SPEED_MS: u64 = 100;
pub const TYPEWRITER_DELETE_SPEED_MS: u64 = 50;
pub const TYPEWRITER_PAUSE_MS: u64 = 2000;

/// Background music starts at this volume
pub const DEFAULT_VOLUME: f32 = 0.3;
pub const VOLUME_STEP: f32 = 0.1;

/// Key-value storage
pub mod storage {
    /// File holding persisted preferences, relative to the data dir
    pub const PREFERENCES_FILE: &str = "preferences.json";
    /// Key for the persisted theme value
    pub const THEME_KEY: &str = "theme";
}

/// Discord CDN locations
pub mod cdn {
    pub const AVATARS: &str = "https://cdn.discordapp.com/avatars";
    pub const DEFAULT_AVATARS: &str = "https://cdn.discordapp.com/embed/avatars";
    pub const APP_ASSETS: &str = "https://cdn.discordapp.com/app-assets";
    pub const MEDIA_PROXY: &str = "https://media.discordapp.net";
    /// Prefix marking an activity image served through the media proxy
    pub const MEDIA_PROXY_PREFIX: &str = "mp:";
    /// Snowflake ids shift off their timestamp bits by this much
    pub const SNOWFLAKE_TIMESTAMP_SHIFT: u32 = 22;
    pub const DEFAULT_AVATAR_COUNT: u64 = 6;
    pub const LEGACY_DEFAULT_AVATAR_COUNT: u64 = 5;
}
