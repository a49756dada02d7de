// Two terminal palettes, one per display mode.
// All colors and styles are defined here - edit this file to change the look

use biolink_core::models::PresenceStatus;
use biolink_core::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// App background
    pub bg_app: Color,
    /// Card background, a subtle lift from the app background
    pub bg_card: Color,
    /// Status bar and badge background
    pub bg_secondary: Color,

    pub text_primary: Color,
    pub text_muted: Color,
    /// Hints, placeholders
    pub text_dim: Color,

    pub accent_primary: Color,
    pub accent_success: Color,
    pub accent_warning: Color,
    pub accent_error: Color,
    pub accent_special: Color,

    pub border: Color,
    pub progress_empty: Color,
}

pub const DARK: Palette = Palette {
    bg_app: Color::Rgb(0, 0, 0),
    bg_card: Color::Rgb(18, 18, 18),
    bg_secondary: Color::Rgb(12, 12, 12),
    text_primary: Color::Rgb(220, 220, 220),
    text_muted: Color::Rgb(128, 128, 128),
    text_dim: Color::Rgb(90, 90, 90),
    accent_primary: Color::Rgb(86, 156, 214),
    accent_success: Color::Rgb(106, 153, 85),
    accent_warning: Color::Rgb(206, 145, 120),
    accent_error: Color::Rgb(244, 112, 112),
    accent_special: Color::Rgb(169, 154, 203),
    border: Color::Rgb(60, 60, 60),
    progress_empty: Color::Rgb(60, 60, 60),
};

pub const LIGHT: Palette = Palette {
    bg_app: Color::Rgb(245, 245, 245),
    bg_card: Color::Rgb(255, 255, 255),
    bg_secondary: Color::Rgb(230, 230, 230),
    text_primary: Color::Rgb(30, 30, 30),
    text_muted: Color::Rgb(100, 100, 100),
    text_dim: Color::Rgb(150, 150, 150),
    accent_primary: Color::Rgb(37, 99, 235),
    accent_success: Color::Rgb(22, 130, 60),
    accent_warning: Color::Rgb(180, 100, 30),
    accent_error: Color::Rgb(200, 40, 40),
    accent_special: Color::Rgb(120, 80, 190),
    border: Color::Rgb(200, 200, 200),
    progress_empty: Color::Rgb(210, 210, 210),
};

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

// -----------------------------------------------------------------------------
// Presence status colors, shared by both palettes
// -----------------------------------------------------------------------------

pub const STATUS_ONLINE: Color = Color::Rgb(67, 181, 129);
pub const STATUS_IDLE: Color = Color::Rgb(250, 166, 26);
pub const STATUS_DND: Color = Color::Rgb(240, 71, 71);
pub const STATUS_OFFLINE: Color = Color::Rgb(116, 127, 141);

/// Unknown statuses use the offline color
pub fn status_color(status: &PresenceStatus) -> Color {
    match status.normalized() {
        PresenceStatus::Online => STATUS_ONLINE,
        PresenceStatus::Idle => STATUS_IDLE,
        PresenceStatus::DoNotDisturb => STATUS_DND,
        _ => STATUS_OFFLINE,
    }
}

// -----------------------------------------------------------------------------
// Language badge colors
// -----------------------------------------------------------------------------

pub fn language_color(language: &str) -> Color {
    match language {
        "Rust" => Color::Rgb(222, 165, 132),
        "Python" => Color::Rgb(53, 114, 165),
        "C++" => Color::Rgb(243, 75, 125),
        "C" => Color::Rgb(85, 85, 85),
        "TypeScript" => Color::Rgb(49, 120, 198),
        "JavaScript" => Color::Rgb(241, 224, 90),
        "Go" => Color::Rgb(0, 173, 216),
        _ => Color::Rgb(140, 140, 170),
    }
}

// =============================================================================
// STYLE FUNCTIONS
// =============================================================================

impl Palette {
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.accent_error)
    }

    pub fn card(&self) -> Style {
        Style::default().bg(self.bg_card)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn badge(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg_secondary)
    }
}
