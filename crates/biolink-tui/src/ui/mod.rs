pub mod app;
pub mod card;
pub mod components;
pub mod format;
pub mod layout;
pub mod music;
pub mod notifications;
pub mod services;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, Sources, View};
pub use music::{MusicPlayer, PlaybackState};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
