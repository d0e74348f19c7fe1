//! Keybinding dispatcher for revu.
//!
//! Translates raw crossterm `KeyEvent`s into `AppState` mutations and returns
//! a `KeyAction` telling the event loop whether to continue, submit the
//! buffer for review, or quit. The dispatcher branches first on `state.mode`
//! so that HelpOverlay, ConfirmQuit, Insert, and Normal all have isolated
//! handler functions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use revu_core::ReviewStatus;

use crate::app::{AppState, Mode, PanelFocus};

/// Control-flow signal returned from the key dispatcher.
///
/// The event loop checks this after every keypress: `Quit` tears down the
/// terminal and exits; `Submit` asks the loop to snapshot the buffer and
/// dispatch a review request; `Continue` just requests another render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Continue the event loop normally — request another render.
    Continue,
    /// Snapshot the buffer and submit it for review.
    ///
    /// The dispatcher does not touch the session; the in-flight guard lives
    /// in the session itself, so issuing `Submit` while a request is
    /// outstanding is harmless (the submission is refused there).
    Submit,
    /// Exit cleanly.
    Quit,
}

/// Dispatches a key event to the handler matching the current mode.
///
/// Mutates `state` in place and returns a `KeyAction`. The event loop should
/// call this once per received key and then redraw regardless of the return
/// value (except on `Quit`).
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match state.mode {
        Mode::HelpOverlay => handle_help(key, state),
        Mode::ConfirmQuit => handle_confirm_quit(key, state),
        Mode::Normal => handle_normal(key, state),
        Mode::Insert => handle_insert(key, state),
    }
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

/// Handles a key event while in Normal mode.
///
/// Delegates scroll keys to `handle_scroll_key` and handles focus, panel
/// resize, submission, and mode transitions inline.
fn handle_normal(key: KeyEvent, state: &mut AppState) -> KeyAction {
    if let Some(action) = handle_scroll_key(key, state) {
        return action;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Enter Insert mode — editing implies editor focus.
        KeyCode::Char('i') => {
            state.focus = PanelFocus::Editor;
            state.mode = Mode::Insert;
            KeyAction::Continue
        }

        // Submit the buffer for review.
        KeyCode::Char('r') => KeyAction::Submit,

        // Panel focus
        KeyCode::Char('H') | KeyCode::Char('L') | KeyCode::Tab => {
            state.focus = state.focus.toggle();
            KeyAction::Continue
        }

        // Editor panel resize
        KeyCode::Char('<') => {
            state.shrink_editor_panel();
            KeyAction::Continue
        }
        KeyCode::Char('>') => {
            state.grow_editor_panel();
            KeyAction::Continue
        }

        // Help overlay
        KeyCode::Char('?') => {
            state.help_scroll = 0;
            state.mode = Mode::HelpOverlay;
            KeyAction::Continue
        }

        // Quit / confirm-quit. An in-flight request prompts for confirmation
        // so the user knows the pending result will be abandoned.
        KeyCode::Char('q') | KeyCode::Esc => {
            if state.session.status() == ReviewStatus::InFlight {
                state.mode = Mode::ConfirmQuit;
                KeyAction::Continue
            } else {
                KeyAction::Quit
            }
        }
        KeyCode::Char('c') if ctrl => KeyAction::Quit,

        _ => KeyAction::Continue,
    }
}

/// Handles scroll-related keys in Normal mode: j / k / g / G and Ctrl combos.
///
/// Returns `Some(KeyAction)` when the key was consumed, `None` when the key
/// should fall through to the rest of the Normal handler.
fn handle_scroll_key(key: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Ctrl-r submits; plain r is handled by handle_normal. Checked here
        // because Ctrl-d/u/f/b scrolling also lives in this match.
        KeyCode::Char('r') if ctrl => Some(KeyAction::Submit),

        KeyCode::Char('j') | KeyCode::Down => {
            state.scroll_down(1);
            Some(KeyAction::Continue)
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.scroll_up(1);
            Some(KeyAction::Continue)
        }
        KeyCode::Char('g') => {
            state.scroll_top();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('G') => {
            state.scroll_bottom();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('d') if ctrl => {
            state.half_page_down();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('u') if ctrl => {
            state.half_page_up();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('f') if ctrl => {
            state.full_page_down();
            Some(KeyAction::Continue)
        }
        KeyCode::Char('b') if ctrl => {
            state.full_page_up();
            Some(KeyAction::Continue)
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Insert mode
// ---------------------------------------------------------------------------

/// Handles a key event while in Insert mode (buffer editing).
///
/// `Esc` returns to Normal mode; `Ctrl-r` submits without leaving Insert
/// mode. Everything else edits the buffer or moves the cursor.
fn handle_insert(key: KeyEvent, state: &mut AppState) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            state.mode = Mode::Normal;
            KeyAction::Continue
        }
        KeyCode::Char('r') if ctrl => KeyAction::Submit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,

        KeyCode::Char(c) => {
            state.buffer.insert_char(c);
            KeyAction::Continue
        }
        KeyCode::Enter => {
            state.buffer.insert_newline();
            KeyAction::Continue
        }
        KeyCode::Backspace => {
            state.buffer.backspace();
            KeyAction::Continue
        }

        KeyCode::Left => {
            state.buffer.move_left();
            KeyAction::Continue
        }
        KeyCode::Right => {
            state.buffer.move_right();
            KeyAction::Continue
        }
        KeyCode::Up => {
            state.buffer.move_up();
            KeyAction::Continue
        }
        KeyCode::Down => {
            state.buffer.move_down();
            KeyAction::Continue
        }
        KeyCode::Home => {
            state.buffer.move_line_start();
            KeyAction::Continue
        }
        KeyCode::End => {
            state.buffer.move_line_end();
            KeyAction::Continue
        }

        _ => KeyAction::Continue,
    }
}

// ---------------------------------------------------------------------------
// HelpOverlay mode
// ---------------------------------------------------------------------------

/// Handles a key event while the help overlay is visible.
///
/// Any of `?`, `Esc`, or `q` dismisses the overlay and returns to Normal
/// mode. j/k/g/G scroll the overlay; all other keys are silently ignored.
fn handle_help(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('j') => {
            state.help_scroll = state.help_scroll.saturating_add(1);
            KeyAction::Continue
        }
        KeyCode::Char('k') => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
            KeyAction::Continue
        }
        KeyCode::Char('g') => {
            state.help_scroll = 0;
            KeyAction::Continue
        }
        KeyCode::Char('G') => {
            state.help_scroll = u16::MAX;
            KeyAction::Continue
        }
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            state.mode = Mode::Normal;
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

// ---------------------------------------------------------------------------
// ConfirmQuit mode
// ---------------------------------------------------------------------------

/// Handles a key event while the quit-confirmation dialog is active.
///
/// `y` / `Y` confirms the quit and returns `Quit`. `n` / `N` / `Esc` cancels
/// and returns to Normal mode. All other keys are ignored.
fn handle_confirm_quit(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => KeyAction::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.mode = Mode::Normal;
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

// ---------------------------------------------------------------------------
// Mouse events
// ---------------------------------------------------------------------------

/// Handles a mouse event: click-to-focus and scroll-wheel.
///
/// Left click on a panel sets focus to that panel. Scroll wheel up/down
/// scrolls the focused panel by 3 lines (matching typical terminal scroll
/// speed). Mouse events in HelpOverlay mode scroll the help overlay.
pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) -> KeyAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_mouse_click(mouse.column, mouse.row, state)
        }
        MouseEventKind::ScrollUp => {
            if state.mode == Mode::HelpOverlay {
                state.help_scroll = state.help_scroll.saturating_sub(3);
            } else {
                state.scroll_up(3);
            }
            KeyAction::Continue
        }
        MouseEventKind::ScrollDown => {
            if state.mode == Mode::HelpOverlay {
                state.help_scroll = state.help_scroll.saturating_add(3);
            } else {
                state.scroll_down(3);
            }
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

/// Sets panel focus based on the clicked screen position.
///
/// Checks each cached panel rect in `state.panel_rects`. Panels with zero
/// width are skipped so a collapsed review panel cannot receive focus.
fn handle_mouse_click(col: u16, row: u16, state: &mut AppState) -> KeyAction {
    let pos = Position { x: col, y: row };
    let [editor, review] = state.panel_rects;

    if editor.contains(pos) {
        state.focus = PanelFocus::Editor;
    } else if review.width > 0 && review.contains(pos) {
        state.focus = PanelFocus::Review;
    }

    KeyAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state() -> AppState {
        AppState::new("js")
    }

    #[test]
    fn i_enters_insert_mode_and_focuses_editor() {
        let mut state = state();
        state.focus = PanelFocus::Review;
        assert_eq!(handle_key(key(KeyCode::Char('i')), &mut state), KeyAction::Continue);
        assert_eq!(state.mode, Mode::Insert);
        assert_eq!(state.focus, PanelFocus::Editor);
    }

    #[test]
    fn typing_in_insert_mode_edits_the_buffer() {
        let mut state = state();
        state.buffer.set_text("");
        state.mode = Mode::Insert;
        handle_key(key(KeyCode::Char('h')), &mut state);
        handle_key(key(KeyCode::Char('i')), &mut state);
        handle_key(key(KeyCode::Enter), &mut state);
        assert_eq!(state.buffer.text(), "hi\n");
        handle_key(key(KeyCode::Backspace), &mut state);
        assert_eq!(state.buffer.text(), "hi");
    }

    #[test]
    fn esc_leaves_insert_mode_without_editing() {
        let mut state = state();
        state.mode = Mode::Insert;
        let before = state.buffer.text();
        handle_key(key(KeyCode::Esc), &mut state);
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.buffer.text(), before);
    }

    #[test]
    fn r_and_ctrl_r_request_submission() {
        let mut state = state();
        assert_eq!(handle_key(key(KeyCode::Char('r')), &mut state), KeyAction::Submit);
        assert_eq!(handle_key(ctrl_key('r'), &mut state), KeyAction::Submit);
        state.mode = Mode::Insert;
        assert_eq!(handle_key(ctrl_key('r'), &mut state), KeyAction::Submit);
        // Plain r in Insert mode is just a character.
        state.buffer.set_text("");
        assert_eq!(handle_key(key(KeyCode::Char('r')), &mut state), KeyAction::Continue);
        assert_eq!(state.buffer.text(), "r");
    }

    #[test]
    fn quit_is_immediate_when_idle() {
        let mut state = state();
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), KeyAction::Quit);
    }

    #[test]
    fn quit_asks_for_confirmation_while_in_flight() {
        let mut state = state();
        state.session.begin_submit("code").unwrap();
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), KeyAction::Continue);
        assert_eq!(state.mode, Mode::ConfirmQuit);

        // n cancels, y confirms.
        assert_eq!(handle_key(key(KeyCode::Char('n')), &mut state), KeyAction::Continue);
        assert_eq!(state.mode, Mode::Normal);
        handle_key(key(KeyCode::Char('q')), &mut state);
        assert_eq!(handle_key(key(KeyCode::Char('y')), &mut state), KeyAction::Quit);
    }

    #[test]
    fn tab_toggles_focus() {
        let mut state = state();
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, PanelFocus::Review);
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, PanelFocus::Editor);
    }

    #[test]
    fn help_overlay_opens_and_dismisses() {
        let mut state = state();
        handle_key(key(KeyCode::Char('?')), &mut state);
        assert_eq!(state.mode, Mode::HelpOverlay);
        handle_key(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.help_scroll, 1);
        handle_key(key(KeyCode::Esc), &mut state);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn scroll_keys_move_the_focused_panel() {
        let mut state = state();
        state.buffer.set_text("a\nb\nc\nd");
        handle_key(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.editor_scroll, 1);
        handle_key(key(KeyCode::Char('k')), &mut state);
        assert_eq!(state.editor_scroll, 0);
        handle_key(key(KeyCode::Char('G')), &mut state);
        assert_eq!(state.editor_scroll, 3);
        handle_key(key(KeyCode::Char('g')), &mut state);
        assert_eq!(state.editor_scroll, 0);
    }
}
