// Global status bar at the very bottom of the app
// Notification on the left, theme or quit warning on the right

use biolink_core::ThemeMode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::notifications::{Notification, NotificationLevel};
use crate::ui::theme::Palette;

const QUIT_WARNING: &str = "Press Ctrl+C again to quit ";

fn theme_label(mode: ThemeMode) -> String {
    format!("\u{25d0} {} ", mode.as_str()) // ◐
}

pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    notification: Option<&Notification>,
    pending_quit: bool,
    mode: ThemeMode,
    palette: &Palette,
) {
    let (right_text, right_color) = if pending_quit {
        (QUIT_WARNING.to_string(), palette.accent_error)
    } else {
        (theme_label(mode), palette.text_dim)
    };
    let right_width = (right_text.width() + 1) as u16;

    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).split(area);
    let background = Style::default().bg(palette.bg_secondary);

    let left = match notification {
        Some(notification) => {
            let color = match notification.level {
                NotificationLevel::Info => palette.accent_primary,
                NotificationLevel::Success => palette.accent_success,
                NotificationLevel::Warning => palette.accent_warning,
            };
            let icon = notification.level.icon();
            let available = (chunks[0].width as usize).saturating_sub(icon.width() + 2);
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color)),
                Span::styled(
                    truncate_with_ellipsis(&notification.message, available),
                    Style::default().fg(color),
                ),
            ]))
        }
        None => Paragraph::new(""),
    };
    f.render_widget(left.style(background), chunks[0]);

    let padding = (chunks[1].width as usize).saturating_sub(right_text.width());
    let right = Paragraph::new(format!("{}{}", " ".repeat(padding), right_text))
        .style(background.fg(right_color));
    f.render_widget(right, chunks[1]);
}
