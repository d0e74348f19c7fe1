//! revu — interactive code review TUI.
//!
//! Entry point for the `revu` binary. Wires together the terminal lifecycle
//! (`tui`), unified event bus (`event`), rendering (`ui`), theme system
//! (`theme`), and the review session engine (`revu-core`).
//!
//! # Startup sequence (order matters)
//!
//! 1. Load config and initialise file logging — read-only / file-only, safe
//!    before terminal init.
//! 2. `install_panic_hook()` — installed first so it is the innermost hook.
//!    Restores the terminal before the panic message prints.
//! 3. `register_sigterm()` — returns `Arc<AtomicBool>` polled in the event loop.
//! 4. `init_tui()` — enters alternate screen and enables raw mode.
//! 5. Create event channel, `spawn_event_task()`, and the review dispatcher.
//!
//! # Safety
//!
//! `restore_tui()` is called after the event loop exits (normal quit, SIGTERM,
//! or channel close). The `?` operator is only used before `init_tui()` or
//! inside the Render arm — draw errors propagate out of the loop and reach
//! `restore_tui()` after `break`. The panic hook covers unexpected panics.

mod app;
mod buffer;
mod config;
mod event;
mod highlight;
mod logging;
mod markdown;
mod review;
mod theme;
mod tui;
mod ui;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use revu_core::ReviewClient;

use ui::keybindings::{handle_key, handle_mouse, KeyAction};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Step 0: config and file logging — both safe before terminal init.
    let config = config::Config::load();
    logging::init()?;
    tracing::info!(service_url = %config.service_url, "starting revu");

    let theme = theme::Theme::from_name(&config.theme);
    let mut state = app::AppState::new(&config.language);
    state.refresh_review_lines(&theme);

    let client = ReviewClient::new(&config.service_url, config.timeout())
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    // Step 1: panic hook installed first — innermost hook restores terminal.
    tui::install_panic_hook();

    // Step 2: SIGTERM flag — polled in the 50ms heartbeat arm below.
    let term_flag = tui::register_sigterm();

    // Step 3: enter alternate screen and raw mode.
    let mut terminal = tui::init_tui()?;

    // Step 4: event channel, background event task, review dispatcher.
    let handler = event::EventHandler::new();
    event::spawn_event_task(handler.tx.clone());
    let dispatcher = review::ReviewDispatcher::new(Arc::new(client), handler.tx.clone());
    let mut rx = handler.rx;

    // Event loop — exits only via `break`, never via `?` (except the Render
    // arm, whose error still reaches `restore_tui()` through the loop exit).
    'event_loop: loop {
        tokio::select! {
            // Heartbeat: guarantees SIGTERM is checked at least every 50ms,
            // even when no crossterm/tick/render events arrive.
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(event::AppEvent::Render) => {
                        // Exactly one draw() call per Render event — never elsewhere.
                        terminal.draw(|frame| ui::render(frame, &mut state, &theme))?;
                    }
                    Some(event::AppEvent::Key(key)) => {
                        match handle_key(key, &mut state) {
                            KeyAction::Quit => break 'event_loop,
                            KeyAction::Submit => {
                                // Snapshot the buffer now; later edits do not
                                // affect the outstanding request.
                                let code = state.buffer.text();
                                if dispatcher.submit(&mut state.session, &code) {
                                    state.review_scroll = 0;
                                    state.refresh_review_lines(&theme);
                                }
                            }
                            KeyAction::Continue => {}
                        }
                    }
                    Some(event::AppEvent::Mouse(mouse)) => {
                        if handle_mouse(mouse, &mut state) == KeyAction::Quit {
                            break 'event_loop;
                        }
                    }
                    Some(event::AppEvent::Tick) => {
                        state.tick();
                    }
                    Some(event::AppEvent::ReviewResult(outcome)) => {
                        state.apply_review_outcome(*outcome, &theme);
                    }
                    Some(event::AppEvent::Resize(_, _)) => {
                        // Relayout happens automatically on the next Render:
                        // frame.area() returns the new terminal size.
                    }
                    None => break 'event_loop,
                }
                // Check SIGTERM after every event too, not just on the heartbeat,
                // so quit latency is at most one event cycle rather than 50ms.
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
        }
    }

    // Restore the terminal at the single exit point of the loop.
    // Covers normal quit, SIGTERM, and channel close; the panic hook handles
    // the panic path separately.
    tui::restore_tui()?;
    tracing::info!("revu shut down cleanly");
    Ok(())
}
