use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::{App, View};

/// Rows moved by PgUp/PgDn
const PAGE_SCROLL: usize = 10;
/// Rows moved per mouse wheel notch
pub(crate) const WHEEL_SCROLL: usize = 3;

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    let code = key.code;

    // Keys that work on every screen
    match code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return;
        }
        _ => {}
    }

    match app.view {
        View::Entry => handle_entry_key(app, code),
        View::Profile => handle_profile_key(app, code),
    }
}

fn handle_entry_key(app: &mut App, code: KeyCode) {
    if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
        app.enter();
    }
}

fn handle_profile_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            if app.current_notification().is_some() {
                app.dismiss_notification();
            } else {
                app.leave();
            }
        }
        KeyCode::Char('p') => app.music_mut().toggle_play(),
        KeyCode::Char('m') => app.music_mut().toggle_mute(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.music_mut().volume_up(),
        KeyCode::Char('-') => app.music_mut().volume_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        _ => {}
    }
}

pub(crate) fn handle_wheel(app: &mut App, down: bool) {
    if app.view != View::Profile {
        return;
    }
    if down {
        app.scroll_down(WHEEL_SCROLL);
    } else {
        app.scroll_up(WHEEL_SCROLL);
    }
}

/// Left click anywhere; only the entry screen reacts
pub(crate) fn handle_click(app: &mut App) {
    if app.view == View::Entry {
        app.enter();
    }
}
