use std::path::PathBuf;

use anyhow::Result;
use biolink_core::{init_tracing, CoreConfig, JsonFileStore, ProfileConfig, ThemeState};
use biolink_tui::ui::{self, MusicPlayer};
use biolink_tui::{run_app, App, Sources};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "biolink", version, about = "Profile card for the terminal")]
struct Args {
    /// Profile JSON; built-in profile when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the theme preference is stored
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Write logs to this file (also BIOLINK_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start on the profile instead of the entry screen
    #[arg(long)]
    skip_entry: bool,

    #[arg(long)]
    no_music: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    if let Some(path) = init_tracing(args.log_file.as_deref())? {
        tracing::info!(path = %path.display(), "logging enabled");
    }

    let profile = ProfileConfig::load_or_default(args.config.as_deref())?;
    let core_config = args
        .data_dir
        .map(CoreConfig::new)
        .unwrap_or_default();
    tracing::info!(data_dir = %core_config.data_dir.display(), "starting");

    let theme = ThemeState::load(Box::new(JsonFileStore::in_data_dir(&core_config.data_dir)));

    let music = match (&profile.music_path, args.no_music) {
        (_, true) => MusicPlayer::disabled("disabled on the command line"),
        (None, false) => MusicPlayer::disabled("no track configured"),
        (Some(path), false) => MusicPlayer::open(path),
    };

    let sources = Sources::from_config(&profile)?;
    let (widget_tx, widget_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(profile, theme, music, sources, widget_tx);
    if args.skip_entry {
        app.enter();
    }

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, widget_rx).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        tracing::error!("exited with error: {:#}", err);
        eprintln!("Error: {err:#}");
    }

    Ok(())
}
