use chrono::Utc;
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui;
use crate::ui::components::render_statusbar;
use crate::ui::layout;
use crate::ui::{App, View};

pub fn render(f: &mut Frame, app: &mut App) {
    let palette = app.palette();

    // Fill entire frame with the palette background
    let bg_block = Block::default().style(Style::default().bg(palette.bg_app));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    match app.view {
        View::Entry => ui::views::render_entry(f, app, chunks[0]),
        View::Profile => ui::views::render_profile(f, app, chunks[0], Utc::now()),
    }

    render_statusbar(
        f,
        chunks[1],
        app.current_notification(),
        app.pending_quit,
        app.theme_mode(),
        palette,
    );
}
