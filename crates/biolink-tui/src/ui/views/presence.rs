use biolink_core::assets::{self, AssetSource, FallbackAsset};
use biolink_core::models::{Activity, NowPlaying, PresenceSnapshot};
use biolink_core::WidgetState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::card::{
    INDENT, META_SEPARATOR, PROGRESS_EMPTY, PROGRESS_FILLED, REMOTE_IMAGE_GLYPH, STATUS_DOT,
};
use crate::ui::format::{format_track_time, truncate_with_ellipsis};
use crate::ui::theme::{status_color, Palette};

/// Glyph standing in for an image in the terminal
pub fn asset_glyph(source: &AssetSource) -> &'static str {
    match source {
        AssetSource::Remote(_) => REMOTE_IMAGE_GLYPH,
        AssetSource::Static(asset) => asset.glyph(),
    }
}

/// Presence widget body: a placeholder, the error alone, or the snapshot
pub fn presence_lines(
    state: &WidgetState<PresenceSnapshot>,
    palette: &Palette,
    spinner: char,
    now_ms: u64,
    width: usize,
) -> Vec<Line<'static>> {
    match state {
        WidgetState::Loading => vec![Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(palette.accent_primary)),
            Span::styled("Loading Discord status...", palette.text_muted()),
        ])],
        WidgetState::Failed(err) => {
            let message = if err.is_network() {
                "Error connecting to Discord"
            } else {
                "Failed to fetch Discord data"
            };
            vec![Line::styled(message, palette.error())]
        }
        WidgetState::Ready(snapshot) => snapshot_lines(snapshot, palette, now_ms, width),
    }
}

fn snapshot_lines(
    snapshot: &PresenceSnapshot,
    palette: &Palette,
    now_ms: u64,
    width: usize,
) -> Vec<Line<'static>> {
    let color = status_color(&snapshot.status);
    let avatar = assets::avatar(&snapshot.user);

    let mut lines = vec![Line::from(vec![
        Span::styled(STATUS_DOT, Style::default().fg(color)),
        Span::styled(
            snapshot.status.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(META_SEPARATOR, palette.text_dim()),
        Span::styled(format!("{} ", asset_glyph(avatar.resolve())), palette.text_muted()),
        Span::styled(snapshot.user.display_label().to_string(), palette.text_primary()),
        Span::styled(format!(" @{}", snapshot.user.username), palette.text_dim()),
    ])];

    let platforms: Vec<&str> = [
        (snapshot.active_on_desktop, "desktop"),
        (snapshot.active_on_web, "web"),
        (snapshot.active_on_mobile, "mobile"),
    ]
    .into_iter()
    .filter_map(|(active, name)| active.then_some(name))
    .collect();
    if !platforms.is_empty() {
        lines.push(Line::styled(
            format!("{}on {}", INDENT, platforms.join(", ")),
            palette.text_dim(),
        ));
    }

    for activity in snapshot.visible_activities() {
        lines.extend(activity_lines(activity, palette, now_ms, width));
    }

    if let Some(track) = snapshot.now_playing() {
        lines.extend(now_playing_lines(track, palette, now_ms, width));
    }
    lines
}

fn activity_lines(
    activity: &Activity,
    palette: &Palette,
    now_ms: u64,
    width: usize,
) -> Vec<Line<'static>> {
    let glyph = match assets::activity_image(activity) {
        Some(image) => asset_glyph(image.resolve()),
        None => FallbackAsset::ActivityIcon.glyph(),
    };
    let text_width = width.saturating_sub(INDENT.len());

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", glyph), Style::default().fg(palette.accent_special)),
        Span::styled(
            truncate_with_ellipsis(&activity.headline(), text_width),
            palette.title(),
        ),
    ])];

    let detail_lines = [activity.details.as_deref(), activity.state_line()];
    for text in detail_lines.into_iter().flatten().filter(|t| !t.is_empty()) {
        lines.push(Line::styled(
            format!("{}{}", INDENT, truncate_with_ellipsis(text, text_width)),
            palette.text_muted(),
        ));
    }

    if let Some(elapsed) = activity.elapsed_label(now_ms) {
        lines.push(Line::styled(
            format!("{}{} elapsed", INDENT, elapsed),
            palette.text_dim(),
        ));
    }
    lines
}

fn now_playing_lines(
    track: &NowPlaying,
    palette: &Palette,
    now_ms: u64,
    width: usize,
) -> Vec<Line<'static>> {
    let art = assets::album_art(track);
    let text_width = width.saturating_sub(INDENT.len());

    let elapsed = now_ms.saturating_sub(track.timestamps.start);
    let total = track.timestamps.end.saturating_sub(track.timestamps.start);
    let times = format!(
        " {} / {}",
        format_track_time(elapsed.min(total)),
        format_track_time(total)
    );
    let bar_width = text_width.saturating_sub(times.len());
    let filled = (track.progress(now_ms) * bar_width as f64).round() as usize;

    vec![
        Line::from(vec![
            Span::styled(format!("{} ", asset_glyph(art.resolve())), palette.text_muted()),
            Span::styled(
                "Listening to Spotify",
                Style::default().fg(palette.accent_success),
            ),
        ]),
        Line::styled(
            format!("{}{}", INDENT, truncate_with_ellipsis(&track.song, text_width)),
            palette.title(),
        ),
        Line::styled(
            format!(
                "{}{}",
                INDENT,
                truncate_with_ellipsis(&format!("by {}", track.artist), text_width)
            ),
            palette.text_muted(),
        ),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                PROGRESS_FILLED.repeat(filled),
                Style::default().fg(palette.accent_success),
            ),
            Span::styled(
                PROGRESS_EMPTY.repeat(bar_width - filled.min(bar_width)),
                Style::default().fg(palette.progress_empty),
            ),
            Span::styled(times, palette.text_dim()),
        ]),
    ]
}
