// Layout constants and helpers shared by the entry screen and the profile card

use ratatui::layout::Rect;

/// Horizontal padding inside the profile card (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// The profile card never grows wider than this
pub const CARD_MAX_WIDTH: u16 = 72;

/// Status bar height (single line at very bottom of app)
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

/// Apply content padding to a Rect (uses CONTENT_PADDING_H)
#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

/// Horizontally centered column of at most `max_width`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Rect of `height` rows centered vertically in `area`
pub fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = area.height.min(height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}
