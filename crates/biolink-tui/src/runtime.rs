use anyhow::Result;
use biolink_core::WidgetEvent;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep_until, Instant};

use crate::input::{handle_click, handle_key, handle_wheel};
use crate::render::render;
use crate::ui::{App, Tui};

pub async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    mut widget_rx: UnboundedReceiver<WidgetEvent>,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Animation frames and notification expiry
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    let mut terminal_events: u64 = 0;
    let mut widget_events: u64 = 0;

    while app.running {
        terminal.draw(|f| render(f, app))?;

        let typewriter_deadline = app.typewriter_deadline();

        tokio::select! {
            maybe_event = event_stream.next() => {
                terminal_events += 1;
                match maybe_event {
                    Some(Ok(event)) => handle_terminal_event(app, event),
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                    None => app.quit(),
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(event) = widget_rx.recv() => {
                widget_events += 1;
                app.handle_widget_event(event);
            }

            _ = sleep_until(typewriter_deadline.unwrap_or_else(Instant::now)), if typewriter_deadline.is_some() => {
                app.advance_typewriter();
            }
        }
    }

    tracing::info!(terminal_events, widget_events, "event loop finished");
    Ok(())
}

fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                if app.pending_quit {
                    // Second Ctrl+C
                    app.quit();
                } else {
                    // First Ctrl+C, the status bar shows the warning
                    app.pending_quit = true;
                }
            } else {
                app.pending_quit = false;
                handle_key(app, key);
            }
        }
        Event::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => handle_click(app),
                MouseEventKind::ScrollDown => handle_wheel(app, true),
                MouseEventKind::ScrollUp => handle_wheel(app, false),
                _ => {}
            }
        }
        _ => {}
    }
}
