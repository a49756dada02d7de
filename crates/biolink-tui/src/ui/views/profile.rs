use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::card::{
    CURSOR_GLYPH, LINK_GLYPH, LOCATION_GLYPH, MUTED_GLYPH, OUTER_HALF_BLOCK_BORDER, PAUSE_GLYPH,
    PLAY_GLYPH, PROGRESS_EMPTY, PROGRESS_FILLED, SECTION_RULE, SPACER, VOLUME_GLYPH,
};
use crate::ui::format::truncate_with_ellipsis;
use crate::ui::layout::{centered_column, with_content_padding, CARD_MAX_WIDTH};
use crate::ui::music::MusicPlayer;
use crate::ui::theme::Palette;
use crate::ui::views::{presence_lines, repository_lines};
use crate::ui::App;

const PROFILE_HELP: &str = "\u{2191}\u{2193} scroll  esc back  t theme  p play  m mute  +/- vol  q quit";

pub fn render_profile(f: &mut Frame, app: &mut App, area: Rect, now: DateTime<Utc>) {
    let palette = app.palette();
    let column = centered_column(area, CARD_MAX_WIDTH);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(OUTER_HALF_BLOCK_BORDER)
        .border_style(palette.border())
        .style(palette.card());
    let inner = block.inner(column);
    f.render_widget(block, column);

    let content = with_content_padding(inner);
    let lines = profile_lines(app, palette, content.width as usize, now);

    // Lines never wrap, so one line is one row
    let max_scroll = lines.len().saturating_sub(content.height as usize);
    app.max_scroll_offset = max_scroll;
    let scroll = app.scroll_offset.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .style(palette.card())
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(paragraph, content);
}

fn profile_lines(
    app: &App,
    palette: &Palette,
    width: usize,
    now: DateTime<Utc>,
) -> Vec<Line<'static>> {
    let profile = &app.profile;
    let spinner = app.animation().spinner_char();
    let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);

    let mut lines = vec![
        Line::styled(profile.name.clone(), palette.title()),
        typewriter_line(app, palette),
        Line::styled(profile.headline.clone(), palette.text_muted()),
        Line::default(),
        Line::styled(profile.bio.clone(), palette.text_primary()),
        Line::styled(format!("{}{}", LOCATION_GLYPH, profile.location), palette.text_dim()),
    ];

    if !profile.tech_stack.is_empty() {
        let mut badges = Vec::new();
        for tech in &profile.tech_stack {
            if !badges.is_empty() {
                badges.push(Span::raw(" "));
            }
            badges.push(Span::styled(format!(" {} ", tech), palette.badge()));
        }
        lines.push(Line::default());
        lines.push(Line::from(badges));
    }

    if !profile.links.is_empty() {
        lines.push(Line::default());
        for link in &profile.links {
            lines.push(Line::from(vec![
                Span::styled(LINK_GLYPH, palette.text_dim()),
                Span::styled(link.label.clone(), palette.link()),
                Span::raw(SPACER),
                Span::styled(
                    truncate_with_ellipsis(&link.url, width.saturating_sub(link.label.len() + 4)),
                    palette.text_dim(),
                ),
            ]));
        }
    }

    lines.push(Line::default());
    lines.push(section_title("Discord", palette, width));
    lines.extend(presence_lines(
        app.presence.state(),
        palette,
        spinner,
        now_ms,
        width,
    ));

    lines.push(Line::default());
    lines.push(section_title("GitHub", palette, width));
    lines.extend(repository_lines(
        app.repositories.state(),
        palette,
        spinner,
        now,
        width,
    ));

    if let Some(line) = music_line(app.music(), palette) {
        lines.push(Line::default());
        lines.push(line);
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        truncate_with_ellipsis(PROFILE_HELP, width),
        palette.text_dim(),
    ));
    lines
}

fn typewriter_line(app: &App, palette: &Palette) -> Line<'static> {
    let style = Style::default().fg(palette.accent_special);
    let mut spans = vec![Span::styled(app.typewriter.text().to_string(), style)];
    if app.animation().cursor_visible() {
        spans.push(Span::styled(CURSOR_GLYPH, style));
    }
    Line::from(spans)
}

/// "Label ─────" across the width
fn section_title(label: &'static str, palette: &Palette, width: usize) -> Line<'static> {
    let rule = SECTION_RULE.repeat(width.saturating_sub(label.len() + 1));
    Line::from(vec![
        Span::styled(label, palette.title()),
        Span::raw(" "),
        Span::styled(rule, palette.border()),
    ])
}

/// Controls for the background track; `None` once the player has failed
pub(crate) fn music_line(music: &MusicPlayer, palette: &Palette) -> Option<Line<'static>> {
    if !music.is_visible() {
        return None;
    }

    const VOLUME_CELLS: usize = 10;
    let filled = (music.volume() * VOLUME_CELLS as f32).round() as usize;
    let play_glyph = if music.is_playing() { PAUSE_GLYPH } else { PLAY_GLYPH };
    let volume_glyph = if music.is_muted() { MUTED_GLYPH } else { VOLUME_GLYPH };
    let bar_color = if music.is_muted() {
        palette.progress_empty
    } else {
        palette.accent_primary
    };

    Some(Line::from(vec![
        Span::styled(format!("{} ", play_glyph), palette.text_primary()),
        Span::styled(
            music.track_name().unwrap_or("music").to_string(),
            palette.text_muted(),
        ),
        Span::raw(SPACER),
        Span::styled(format!("{} ", volume_glyph), palette.text_primary()),
        Span::styled(
            PROGRESS_FILLED.repeat(filled.min(VOLUME_CELLS)),
            Style::default().fg(bar_color),
        ),
        Span::styled(
            PROGRESS_EMPTY.repeat(VOLUME_CELLS - filled.min(VOLUME_CELLS)),
            Style::default().fg(palette.progress_empty),
        ),
        Span::styled(
            format!(" {}%", (music.volume() * 100.0).round() as u32),
            palette.text_dim(),
        ),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_music_line_hidden_on_failure() {
        let player = MusicPlayer::disabled("no output device");
        assert!(music_line(&player, &DARK).is_none());
    }

    #[test]
    fn test_music_line_shows_volume() {
        let mut player = MusicPlayer::silent();
        let line = music_line(&player, &DARK).unwrap();
        assert!(text(&line).starts_with(PLAY_GLYPH));
        assert!(text(&line).ends_with(" 30%"));

        player.play();
        player.volume_up();
        let line = music_line(&player, &DARK).unwrap();
        assert!(text(&line).starts_with(PAUSE_GLYPH));
        assert!(text(&line).ends_with(" 40%"));
    }

    #[test]
    fn test_section_title_spans_width() {
        let line = section_title("GitHub", &DARK, 20);
        assert_eq!(line.width(), 20);
    }
}
