pub mod api;
pub mod assets;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod theme;
pub mod tracing_setup;
pub mod typewriter;
pub mod widgets;

pub use config::{CoreConfig, ProfileConfig, ProfileLink};
pub use error::{AssetError, FetchError, StorageError};
pub use theme::{JsonFileStore, KeyValueStore, MemoryStore, ThemeMode, ThemeState};
pub use tracing_setup::init_tracing;
pub use typewriter::{Phase, Typewriter, TypewriterTiming};
pub use widgets::{
    MountToken, PresenceWidget, RepositoryWidget, WidgetEvent, WidgetEventSender, WidgetState,
};
