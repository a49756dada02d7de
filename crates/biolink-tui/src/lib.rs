mod input;
mod render;
mod runtime;
pub mod ui;

pub use runtime::run_app;
pub use ui::{App, MusicPlayer, Sources, View};
