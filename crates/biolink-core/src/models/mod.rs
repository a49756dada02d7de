pub mod github;
pub mod presence;

pub use github::{GitHubOverview, RepoSummary, UserSummary};
pub use presence::{
    Activity, ActivityAssets, ActivityKind, ActivityTimestamps, DiscordUser, NowPlaying,
    PresenceSnapshot, PresenceStatus, TrackTimestamps,
};
