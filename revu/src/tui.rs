//! Terminal lifecycle management for revu.
//!
//! The TUI renders to stdout through a `BufWriter`, batching escape sequences
//! into fewer write(2) syscalls to reduce flicker on high-frequency draws
//! (30 FPS render interval).

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use signal_hook::consts::SIGTERM;
use signal_hook::flag::register;
use std::io::{stdout, BufWriter, Stdout};
use std::panic;
use std::sync::{atomic::AtomicBool, Arc};

/// The terminal type used by revu — CrosstermBackend over buffered stdout.
pub type Tui = Terminal<CrosstermBackend<BufWriter<Stdout>>>;

/// Initialise the terminal for TUI rendering.
///
/// Creates a `CrosstermBackend` backed by a `BufWriter<Stdout>`, enables raw
/// mode, and enters the alternate screen. Call [`restore_tui`] at every exit
/// path.
///
/// # Errors
///
/// Returns `Err` if `enable_raw_mode`, `execute!`, or `Terminal::new` fails.
pub fn init_tui() -> std::io::Result<Tui> {
    let mut out = BufWriter::new(stdout());
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(out))
}

/// Restore the terminal to its pre-TUI state.
///
/// Disables raw mode and leaves the alternate screen. This function is
/// idempotent and must be called at every exit path — including the panic
/// hook — because ratatui 0.30 does NOT auto-restore the terminal on `Drop`
/// (see GitHub #2087).
///
/// # Errors
///
/// Returns `Err` if `disable_raw_mode` or `execute!` fails. Callers in the
/// panic hook should use `let _ = restore_tui();` and ignore the error
/// (best-effort only).
pub fn restore_tui() -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic
/// message.
///
/// Must be called **before** [`init_tui`]. Chains onto any previously
/// installed hook so that the default (or test framework's) panic printer
/// still runs after the terminal is restored. Without this hook, a panic
/// leaves the terminal in raw mode with the alternate screen active, making
/// the panic message invisible and the shell unusable until the user types
/// `reset`.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal first so the panic message is readable.
        let _ = restore_tui();
        original_hook(panic_info);
    }));
}

/// Register a SIGTERM handler that sets an `AtomicBool` flag.
///
/// Returns an `Arc<AtomicBool>` that transitions from `false` to `true` when
/// the process receives SIGTERM. The main event loop polls this flag on its
/// heartbeat and shuts down cleanly when it is set.
///
/// # Panics
///
/// Panics if the OS refuses to register the signal handler (extremely rare —
/// treated as a fatal initialisation error rather than a recoverable
/// condition).
pub fn register_sigterm() -> Arc<AtomicBool> {
    let term = Arc::new(AtomicBool::new(false));
    // Safety: signal_hook::flag::register is safe for AtomicBool targets —
    // the handler only calls atomic_store, which is async-signal-safe.
    register(SIGTERM, Arc::clone(&term)).expect("Failed to register SIGTERM handler");
    term
}
