//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (raw mode, alternate screen, bracketed paste).
//! - Forward crossterm events from a dedicated input task over a channel.
//! - Route keys to `MainView`, run returned `Effect`s, and collect finished
//!   background tasks from a `FuturesUnordered`.
//! - Tick fast (100 ms) while a request is in flight or an alert is counting
//!   down; tick slowly otherwise.
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use ratatui::{Terminal, prelude::*};
use storedesk_api::CollectionService;
use storedesk_types::{Effect, Msg};
use storedesk_util::StoredeskConfig;
use tokio::task::{JoinError, JoinHandle};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::app::App;
use crate::cmd;
use crate::ui::main_component::MainView;

/// Spawn a dedicated input task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        let poll_interval = Duration::from_millis(16);
        loop {
            match event::poll(poll_interval) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                }
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Err(e) = sender.blocking_send(event) {
                            warn!("Failed to send event: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read event: {}", e);
                        break;
                    }
                },
                Err(e) => {
                    warn!("Failed to poll events: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => main_view.handle_key_events(app, key_event),
        Event::Paste(text) => main_view.handle_paste(app, &text),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::Key(_) | Event::Mouse(_) | Event::FocusGained | Event::FocusLost => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop until the user quits, and restores the terminal.
pub async fn run_app(config: StoredeskConfig, service: Arc<dyn CollectionService>, route_slug: String) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();
    let mut app = App::new(config, service, route_slug);
    let mut terminal = setup_terminal()?;
    info!(route_slug = %app.route_slug, "edit-collection page opened");

    let mut pending_execs: FuturesUnordered<JoinHandle<Msg>> = FuturesUnordered::new();
    let initial = app.initial_effects();
    process_effects(&mut app, initial, &mut pending_execs);

    // Ticking strategy: fast while animating, very slow when idle.
    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let result = async {
        render(&mut terminal, &mut app, &mut main_view)?;
        loop {
            let needs_animation = app.needs_animation();
            let target_interval = if needs_animation { fast_interval } else { idle_interval };
            if target_interval != current_interval {
                current_interval = target_interval;
                ticker = time::interval(current_interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            }

            let mut effects: Vec<Effect> = Vec::new();
            let needs_render = tokio::select! {
                maybe_event = input_receiver.recv() => {
                    let Some(event) = maybe_event else {
                        // Input channel closed; shut down cleanly.
                        break;
                    };
                    if let Event::Key(key_event) = event
                        && key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    effects.extend(handle_input_event(&mut app, &mut main_view, event));
                    true
                }

                _ = ticker.tick() => {
                    let alert_was_visible = app.is_alert_visible();
                    effects.extend(main_view.handle_message(&mut app, Msg::Tick));
                    needs_animation || alert_was_visible != app.is_alert_visible()
                }

                Some(joined) = pending_execs.next(), if !pending_execs.is_empty() => {
                    let msg = joined.unwrap_or_else(|error| failed_task_message(&app, &error));
                    effects.extend(main_view.handle_message(&mut app, msg));
                    app.executing = !pending_execs.is_empty();
                    if !app.executing {
                        app.throbber_idx = 0;
                    }
                    true
                }

                _ = signal::ctrl_c() => { break; }
            };

            process_effects(&mut app, effects, &mut pending_execs);
            if app.should_quit {
                break;
            }
            if needs_render {
                render(&mut terminal, &mut app, &mut main_view)?;
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    cleanup_terminal(&mut terminal)?;
    info!("edit-collection page closed");
    result
}

fn process_effects(app: &mut App, effects: Vec<Effect>, pending_execs: &mut FuturesUnordered<JoinHandle<Msg>>) {
    if effects.is_empty() {
        return;
    }
    let spawned = cmd::run_from_effects(app, effects);
    if !spawned.is_empty() {
        if !app.executing {
            app.throbber_idx = 0;
        }
        pending_execs.extend(spawned);
        app.executing = true;
    }
}

/// Message standing in for a task that panicked or was cancelled, so the
/// page never stays in a loading or submitting state.
fn failed_task_message(app: &App, error: &JoinError) -> Msg {
    let cause = format!("Background task failed: {error}");
    if app.is_submitting() {
        Msg::AddProductFinished(Err(cause))
    } else {
        Msg::CollectionLoadFailed(cause)
    }
}
