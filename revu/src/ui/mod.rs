//! UI rendering module for revu.
//!
//! This is the module root for `ui/`. It re-exports `render()` as the single
//! entry point called by the event loop's `terminal.draw()` closure.
//!
//! All layout arithmetic lives in `layout.rs`. Editor panel rendering lives
//! in `editor_view.rs` and review panel rendering in `review_view.rs`.

mod layout;
pub mod editor_view;
pub mod help;
pub mod keybindings;
pub mod review_view;

use ratatui::{
    Frame,
    layout::Constraint,
    style::Style,
    text::Line,
    widgets::{Block, Clear, Paragraph},
};

use crate::app::{AppState, Mode};
use crate::theme::Theme;
use layout::{compute_layout, inner_rect, render_status_bar};

/// Renders one complete frame: 2-panel layout, status bar, and any overlay.
///
/// Called exactly once per `AppEvent::Render` inside `terminal.draw()`. This
/// is the only location where `terminal.draw()` is called in the application
/// — never call it from anywhere else.
///
/// After computing the layout, viewport heights and panel rects are written
/// back into `state` so that scroll operations and mouse hit testing
/// triggered by the *next* input can use them. The one-frame lag is
/// imperceptible in practice.
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let [editor, review, status_bar] = compute_layout(frame, state);

    // Cache geometry BEFORE rendering panels so it is available for the next
    // input cycle. inner_rect() strips the 1-cell border on each side.
    state.editor_viewport_height = inner_rect(editor).height;
    state.review_viewport_height = inner_rect(review).height;
    state.panel_rects = [editor, review];

    // Keep the cursor row inside the editor viewport after edits.
    state.follow_cursor();

    editor_view::render_editor(frame, editor, state, theme);

    // Review panel collapses to zero width on narrow terminals.
    if review.width > 0 {
        review_view::render_review_panel(frame, review, state, theme);
    }

    render_status_bar(frame, status_bar, state, theme);

    // Overlays render after the panels so they sit on top. Clear erases the
    // background inside each overlay renderer.
    if state.mode == Mode::HelpOverlay {
        help::render_help_overlay(frame, theme, state.help_scroll);
    }
    if state.mode == Mode::ConfirmQuit {
        render_confirm_quit(frame, theme);
    }
}

/// Renders the quit-confirmation dialog shown while a request is in flight.
fn render_confirm_quit(frame: &mut Frame, theme: &Theme) {
    if frame.area().width < 40 {
        return;
    }
    let area = frame
        .area()
        .centered(Constraint::Length(44), Constraint::Length(4));

    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title(" Quit? ")
        .border_style(Style::default().fg(theme.border_active));
    let body = vec![
        Line::from("A review request is still in flight."),
        Line::from("Quit anyway?  y / n"),
    ];
    frame.render_widget(Paragraph::new(body).block(block), area);
}
