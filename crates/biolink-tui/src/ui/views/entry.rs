use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::centered_rows;
use crate::ui::App;

const ENTRY_HINT: &str = "click or press enter";

pub fn render_entry(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let block = centered_rows(area, 3);
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(block);

    let title = Paragraph::new(Line::from(app.profile.entry_title.clone()))
        .style(
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    if app.animation().hint_visible() {
        let hint = Paragraph::new(ENTRY_HINT)
            .style(palette.text_dim())
            .alignment(Alignment::Center);
        f.render_widget(hint, chunks[2]);
    }
}
