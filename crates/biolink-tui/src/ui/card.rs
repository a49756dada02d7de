pub const SPACER: &str = "  ";
pub const INDENT: &str = "   ";
pub const STATUS_DOT: &str = "\u{25cf} "; // ●
pub const META_SEPARATOR: &str = " \u{2022} ";
pub const SECTION_RULE: &str = "\u{2500}";
pub const LOCATION_GLYPH: &str = "\u{2302} "; // ⌂
pub const LINK_GLYPH: &str = "\u{2197} "; // ↗
pub const STAR_GLYPH: &str = "\u{2605} "; // ★
pub const FORK_GLYPH: &str = "\u{2442} "; // ⑂
pub const REMOTE_IMAGE_GLYPH: &str = "\u{25a3}"; // ▣
pub const CURSOR_GLYPH: &str = "\u{258c}"; // ▌
pub const PLAY_GLYPH: &str = "\u{25b6}"; // ▶
pub const PAUSE_GLYPH: &str = "\u{23f8}"; // ⏸
pub const VOLUME_GLYPH: &str = "\u{266b}"; // ♫
pub const MUTED_GLYPH: &str = "\u{2715}"; // ✕
pub const PROGRESS_FILLED: &str = "\u{2501}"; // ━
pub const PROGRESS_EMPTY: &str = "\u{2500}"; // ─

// Half-block border characters (like lipgloss OuterHalfBlockBorder)
use ratatui::symbols::border::Set;

pub const OUTER_HALF_BLOCK_BORDER: Set = Set {
    top_left: "\u{259B}",          // ▛
    top_right: "\u{259C}",         // ▜
    bottom_left: "\u{2599}",       // ▙
    bottom_right: "\u{259F}",      // ▟
    vertical_left: "\u{258C}",     // ▌
    vertical_right: "\u{2590}",    // ▐
    horizontal_top: "\u{2580}",    // ▀
    horizontal_bottom: "\u{2584}", // ▄
};
