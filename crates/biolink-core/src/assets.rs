//! Image references for presence data, each with a static fallback.
//!
//! A terminal cannot display the images, but the references are still
//! resolved so views can show whether a real asset or a fallback applies
//! and link to it.

use reqwest::Url;

use crate::constants::cdn;
use crate::error::AssetError;
use crate::models::{Activity, DiscordUser, NowPlaying};

/// Static assets bundled with the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackAsset {
    ActivityIcon,
    GameController,
    MusicNote,
    AlbumPlaceholder,
}

impl FallbackAsset {
    pub fn glyph(&self) -> &'static str {
        match self {
            FallbackAsset::ActivityIcon => "\u{25c6}",    // ◆
            FallbackAsset::GameController => "\u{2318}",  // ⌘
            FallbackAsset::MusicNote => "\u{266a}",       // ♪
            FallbackAsset::AlbumPlaceholder => "\u{25a1}", // □
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Remote(String),
    Static(FallbackAsset),
}

/// A preferred image plus what to show when it cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub preferred: AssetSource,
    pub on_error: AssetSource,
}

impl AssetRef {
    fn remote(url: String, on_error: AssetSource) -> Self {
        Self {
            preferred: AssetSource::Remote(url),
            on_error,
        }
    }

    fn fixed(asset: FallbackAsset, on_error: AssetSource) -> Self {
        Self {
            preferred: AssetSource::Static(asset),
            on_error,
        }
    }

    /// Pick the source to display. A remote reference that does not parse
    /// is an asset failure and yields the error fallback.
    ///
    /// Nothing is downloaded, so URL validation is the only load failure
    /// this can detect.
    pub fn resolve(&self) -> &AssetSource {
        match &self.preferred {
            AssetSource::Remote(url) => match validate_url(url) {
                Ok(()) => &self.preferred,
                Err(e) => {
                    tracing::debug!(error = %e, "asset failed, using fallback");
                    &self.on_error
                }
            },
            AssetSource::Static(_) => &self.preferred,
        }
    }
}

fn validate_url(url: &str) -> Result<(), AssetError> {
    if url.trim().is_empty() {
        return Err(AssetError::Empty);
    }
    Url::parse(url)
        .map(|_| ())
        .map_err(|e| AssetError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

/// Index into the default avatar set.
///
/// Accounts with a legacy numeric discriminator use `discriminator % 5`.
/// Accounts on unique usernames report discriminator "0"; for them the
/// index comes from the snowflake id, `(id >> 22) % 6`.
pub fn default_avatar_index(user: &DiscordUser) -> u64 {
    match user.discriminator.parse::<u64>() {
        Ok(discriminator) if discriminator != 0 => {
            discriminator % cdn::LEGACY_DEFAULT_AVATAR_COUNT
        }
        _ => user
            .id
            .parse::<u64>()
            .map(|id| (id >> cdn::SNOWFLAKE_TIMESTAMP_SHIFT) % cdn::DEFAULT_AVATAR_COUNT)
            .unwrap_or(0),
    }
}

pub fn default_avatar_url(user: &DiscordUser) -> String {
    format!("{}/{}.png", cdn::DEFAULT_AVATARS, default_avatar_index(user))
}

pub fn avatar(user: &DiscordUser) -> AssetRef {
    let fallback = AssetSource::Remote(default_avatar_url(user));
    match user.avatar.as_deref().filter(|hash| !hash.is_empty()) {
        Some(hash) => AssetRef::remote(
            format!("{}/{}/{}.png?size=48", cdn::AVATARS, user.id, hash),
            fallback,
        ),
        None => AssetRef {
            preferred: fallback.clone(),
            on_error: fallback,
        },
    }
}

/// Large image of an activity, or `None` when the activity has no image
pub fn activity_image(activity: &Activity) -> Option<AssetRef> {
    let image = activity
        .assets
        .as_ref()?
        .large_image
        .as_deref()
        .filter(|image| !image.is_empty())?;
    let on_error = AssetSource::Static(FallbackAsset::GameController);

    let asset = if let Some(proxied) = image.strip_prefix(cdn::MEDIA_PROXY_PREFIX) {
        AssetRef::remote(format!("{}/{}", cdn::MEDIA_PROXY, proxied), on_error)
    } else if let Some(app_id) = activity.application_id.as_deref() {
        AssetRef::remote(
            format!("{}/{}/{}.png", cdn::APP_ASSETS, app_id, image),
            on_error,
        )
    } else {
        AssetRef::fixed(FallbackAsset::ActivityIcon, on_error)
    };
    Some(asset)
}

pub fn album_art(track: &NowPlaying) -> AssetRef {
    let on_error = AssetSource::Static(FallbackAsset::MusicNote);
    match track.album_art_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => AssetRef::remote(url.to_string(), on_error),
        None => AssetRef::fixed(FallbackAsset::AlbumPlaceholder, on_error),
    }
}
