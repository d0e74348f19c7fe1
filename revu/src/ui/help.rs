//! Help overlay renderer for revu.
//!
//! Provides `render_help_overlay()` which draws a centred modal box over the
//! 2-panel layout using ratatui's `Clear` widget to erase the background
//! first. The overlay is rendered inside the same `terminal.draw()` closure
//! as all other panels — calling `frame.render_widget(Clear, area)` before
//! the bordered `Paragraph` achieves the modal effect without a second draw
//! call.

use ratatui::{
    Frame,
    layout::Constraint,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Renders the help overlay as a centred modal on top of the panel layout.
///
/// Erases the overlay area with `Clear`, then draws a bordered `Block` and a
/// `Paragraph` containing all keybinding descriptions. The paragraph scrolls
/// vertically by `help_scroll` rows, enabling navigation of the help text on
/// short terminals.
///
/// If the terminal is narrower than 60 columns the overlay is skipped to
/// avoid a zero-height `Rect` panic.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, help_scroll: u16) {
    if frame.area().width < 60 {
        return;
    }

    let overlay_area = frame
        .area()
        .centered(Constraint::Percentage(80), Constraint::Percentage(80));

    // Erase the background behind the modal before drawing content.
    frame.render_widget(Clear, overlay_area);

    let block = Block::bordered()
        .title(" Help  — j/k scroll, ? or Esc to dismiss ")
        .border_style(ratatui::style::Style::default().fg(theme.border_active));

    frame.render_widget(
        Paragraph::new(build_help_text())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((help_scroll, 0)),
        overlay_area,
    );
}

/// Builds the help text as a multi-line `Text` value.
///
/// Returns all keybinding descriptions grouped by section. No color styling
/// is applied to the body text.
fn build_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from("Review"),
        Line::from("  r / Ctrl-r    Send the buffer for review"),
        Line::from("                (ignored while a request is in flight)"),
        Line::from(""),
        Line::from("Editing"),
        Line::from("  i             Enter insert mode (edit the buffer)"),
        Line::from("  Esc           Return to normal mode"),
        Line::from("  Arrows        Move the cursor (insert mode)"),
        Line::from("  Home / End    Jump to line start / end (insert mode)"),
        Line::from(""),
        Line::from("Navigation"),
        Line::from("  j / k         Scroll down / up one line"),
        Line::from("  g / G         Jump to top / bottom"),
        Line::from("  Ctrl-d / u    Scroll half page down / up"),
        Line::from("  Ctrl-f / b    Scroll full page down / up"),
        Line::from("  Tab, H / L    Switch focus between editor and review"),
        Line::from("  < / >         Shrink / grow the editor panel by 5%"),
        Line::from(""),
        Line::from("General"),
        Line::from("  j / k         Scroll this help overlay"),
        Line::from("  ?             Open / close this help overlay"),
        Line::from("  q / Esc       Quit (confirms if a review is in flight)"),
    ])
}
