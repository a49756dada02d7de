//! Background music for the profile card
//!
//! Uses rodio for cross-platform audio playback. One track is decoded,
//! looped forever, and controlled with play/pause, mute and volume.
//! A disabled player (no track configured, `--no-music`) and a failed one
//! (no output device, unreadable file) are both hidden and ignore controls.
//! Only the failed one carries a reason worth showing.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use biolink_core::constants::{DEFAULT_VOLUME, VOLUME_STEP};
use rodio::{Decoder, OutputStream, Sink, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Loaded, never started
    Stopped,
    Playing,
    Paused,
}

pub struct MusicPlayer {
    /// Output stream (must be kept alive for playback)
    _stream: Option<OutputStream>,
    sink: Option<Sink>,
    track_name: Option<String>,
    state: PlaybackState,
    volume: f32,
    muted: bool,
    /// Off by choice: no track configured or `--no-music`
    disabled: bool,
    /// Why loading the configured track failed
    failure: Option<String>,
}

impl MusicPlayer {
    /// Player that never shows, e.g. with `--no-music`
    pub fn disabled(reason: &str) -> Self {
        tracing::debug!(reason, "music disabled");
        let mut player = Self::idle();
        player.disabled = true;
        player
    }

    fn idle() -> Self {
        Self {
            _stream: None,
            sink: None,
            track_name: None,
            state: PlaybackState::Stopped,
            volume: DEFAULT_VOLUME,
            muted: false,
            disabled: false,
            failure: None,
        }
    }

    /// Decode `path` into a paused, looping sink. Failures are logged and
    /// leave the player hidden.
    pub fn open(path: &Path) -> Self {
        match Self::try_open(path) {
            Ok(player) => player,
            Err(e) => {
                tracing::warn!(path = %path.display(), "music unavailable: {:#}", e);
                let mut player = Self::idle();
                player.failure = Some(format!("{:#}", e));
                player
            }
        }
    }

    fn try_open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open audio file: {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file)).context("Failed to decode audio file")?;
        let (stream, handle) =
            OutputStream::try_default().context("Failed to initialize audio output")?;
        let sink = Sink::try_new(&handle).context("Failed to create audio sink")?;

        sink.set_volume(DEFAULT_VOLUME);
        sink.append(source.repeat_infinite());
        sink.pause();

        let mut player = Self::idle();
        player._stream = Some(stream);
        player.sink = Some(sink);
        player.track_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string);
        tracing::info!(path = %path.display(), "music loaded");
        Ok(player)
    }

    /// Hidden players render nothing and ignore every control
    pub fn is_visible(&self) -> bool {
        !self.disabled && self.failure.is_none()
    }

    /// Load error for a configured track; `None` when disabled on purpose
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn play(&mut self) {
        if !self.is_visible() {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.play();
        }
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if !self.is_visible() || self.state != PlaybackState::Playing {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.pause();
        }
        self.state = PlaybackState::Paused;
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn toggle_mute(&mut self) {
        if !self.is_visible() {
            return;
        }
        self.muted = !self.muted;
        self.apply_volume();
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume + VOLUME_STEP);
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume - VOLUME_STEP);
    }

    /// Clamped to [0, 1] and snapped to the volume step
    pub fn set_volume(&mut self, volume: f32) {
        if !self.is_visible() {
            return;
        }
        let steps = (volume.clamp(0.0, 1.0) / VOLUME_STEP).round();
        self.volume = (steps * VOLUME_STEP).clamp(0.0, 1.0);
        self.apply_volume();
    }

    fn apply_volume(&self) {
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    /// Volume actually sent to the output
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn track_name(&self) -> Option<&str> {
        self.track_name.as_deref()
    }
}

#[cfg(test)]
impl MusicPlayer {
    /// Visible player with no audio device behind it
    pub(crate) fn silent() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_stopped_at_default_volume() {
        let player = MusicPlayer::silent();
        assert!(player.is_visible());
        assert_eq!(player.state(), PlaybackState::Stopped);
        assert_eq!(player.volume(), 0.3);
    }

    #[test]
    fn test_toggle_play() {
        let mut player = MusicPlayer::silent();
        player.toggle_play();
        assert_eq!(player.state(), PlaybackState::Playing);
        player.toggle_play();
        assert_eq!(player.state(), PlaybackState::Paused);
        // Pausing something that is not playing changes nothing
        player.pause();
        assert_eq!(player.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_volume_steps_and_bounds() {
        let mut player = MusicPlayer::silent();
        player.volume_up();
        assert!((player.volume() - 0.4).abs() < f32::EPSILON);

        for _ in 0..20 {
            player.volume_up();
        }
        assert_eq!(player.volume(), 1.0);

        for _ in 0..20 {
            player.volume_down();
        }
        assert_eq!(player.volume(), 0.0);
    }

    #[test]
    fn test_mute_keeps_volume() {
        let mut player = MusicPlayer::silent();
        player.toggle_mute();
        assert!(player.is_muted());
        assert_eq!(player.effective_volume(), 0.0);
        assert_eq!(player.volume(), 0.3);

        player.toggle_mute();
        assert_eq!(player.effective_volume(), 0.3);
    }

    #[test]
    fn test_disabled_player_is_hidden_and_inert() {
        let mut player = MusicPlayer::disabled("no track configured");
        assert!(!player.is_visible());
        assert_eq!(player.failure(), None);

        player.play();
        player.toggle_mute();
        player.volume_up();
        assert_eq!(player.state(), PlaybackState::Stopped);
        assert!(!player.is_muted());
        assert_eq!(player.volume(), 0.3);
    }

    #[test]
    fn test_missing_file_fails_without_panicking() {
        let dir = tempfile::TempDir::new().unwrap();
        let player = MusicPlayer::open(&dir.path().join("missing.mp3"));
        assert!(!player.is_visible());
        assert!(player.failure().is_some());
    }
}
